use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BOUNDARY_BIBTEX: &str = "\
@article{More:1979,
  author  = {Mor{\\'e}, Jorge J. and Cosnard, Michel Y.},
  title   = {Numerical Solution of Nonlinear Equations},
  journal = {ACM Trans. Math. Softw.},
  year    = {1979},
  volume  = {5},
  number  = {1},
  pages   = {64--85},
  doi     = {10.1145/355815.355820},
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  year    = {1981},
  volume  = {7},
  number  = {1},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

const INTEGRAL_BIBTEX: &str = "\
@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  year    = {1981},
  volume  = {7},
  number  = {1},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

/// Starting point \\(t_k (t_k - 1)\\) on the grid \\(t_k = (k+1)/(n+1)\\).
fn grid_initial(x: &mut[f64])
{
    let n = x.len() as f64;
    for (k, v) in x.iter_mut().enumerate() {
        let k = k as f64;
        *v = (k + 1.) * (k - n) / ((n + 1.) * (n + 1.));
    }
}

/// Discrete boundary value function, the finite difference form of
/// \\(u'' = \frac12 (u + t + 1)^3,\ u(0) = u(1) = 0\\).
pub struct DiscreteBoundaryValueFunction
{
    base: ProbBase,
    h: f64,
}

impl DiscreteBoundaryValueFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        DiscreteBoundaryValueFunction {
            base: ProbBase::new("Discrete boundary value function", BOUNDARY_BIBTEX, n),
            h: 1. / (n + 1) as f64,
        }
    }
}

impl NonlinearSystem<f64> for DiscreteBoundaryValueFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let h = self.h;
        let mut f = 2. * x[k] + 0.5 * h * h * (x[k] + 1. + (k + 1) as f64 * h).powi(3);
        if k > 0 {
            f -= x[k - 1];
        }
        if k + 1 < self.base.n() {
            f -= x[k + 1];
        }
        f
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * self.base.n() - 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for k in 0.. n {
            p.push(k, k);
        }
        for k in 1.. n {
            p.push(k, k - 1);
            p.push(k - 1, k);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let h = self.h;
        let (diag, off) = jac.split_at_mut(self.base.n());
        for (k, d) in diag.iter_mut().enumerate() {
            *d = 2. + 1.5 * h * h * (x[k] + h * (k + 1) as f64 + 1.).powi(2);
        }
        off.fill(-1.);
    }

    fn num_exact_solutions(&self) -> usize
    {
        match self.base.n() {
            2 | 5 => 1,
            _ => 0,
        }
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        match self.base.n() {
            2 => x.copy_from_slice(&[-0.128246763033732, -0.159267567244641]),
            _ => x.copy_from_slice(&[
                -0.0750221292923205,
                -0.131976210352191,
                -0.164848771909337,
                -0.164664680215801,
                -0.117417651684194,
            ]),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        grid_initial(x);
    }
}

//

/// Discrete integral equation function, the trapezoidal form of
/// \\(u(t) + \frac12 \int_0^1 G(s,t) (u(s) + s + 1)^3 ds = 0\\).
pub struct DiscreteIntegralEquationFunction
{
    base: ProbBase,
}

impl DiscreteIntegralEquationFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        DiscreteIntegralEquationFunction {
            base: ProbBase::new("Discrete integral equation function", INTEGRAL_BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for DiscreteIntegralEquationFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let h = 1. / (self.base.n() + 1) as f64;
        let tk = (k + 1) as f64 * h;
        let (sum1, sum2) = x.iter().enumerate().fold((0., 0.), |(s1, s2), (j, &xj)| {
            let tj = (j + 1) as f64 * h;
            let c = (xj + tj + 1.).powi(3);
            if j < k {(s1 + tj * c, s2)} else {(s1, s2 + (1. - tj) * c)}
        });
        x[k] + h * ((1. - tk) * sum1 + tk * sum2) / 2.
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        n * n
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let h = 1. / (n + 1) as f64;
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            let tk = (k + 1) as f64 * h;
            for (j, &xj) in x.iter().enumerate() {
                let tj = (j + 1) as f64 * h;
                let d = 1.5 * (tk.min(tj) - tj * tk) * (xj + tj + 1.).powi(2) * h;
                v.push(if j == k {d + 1.} else {d});
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        match self.base.n() {
            2 | 5 => 1,
            _ => 0,
        }
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        match self.base.n() {
            2 => x.copy_from_slice(&[-0.12824676303373161, -0.15926756724464086]),
            _ => x.copy_from_slice(&[
                -0.07502212929232048,
                -0.13197621035219065,
                -0.1648487719093373,
                -0.16466468021580072,
                -0.11741765168419362,
            ]),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        grid_initial(x);
    }
}
