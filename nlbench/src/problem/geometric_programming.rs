use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations, check_domain};

const BIBTEX: &str = "\
@techreport{Raydan:2004,
  author = {William La Cruz and Jose Mario Martinez and Marcos Raydan},
  title  = {Spectral residual method without gradient
            information for solving large-scale nonlinear
            systems of equations: Theory and experiments},
  number = {Technical Report RT-04-08},
  year   = {2004}
}
";

/// \\(f_i = -1 + \sum_{t=1}^5 \partial_i \prod_k x_k^{t/5}\\), defined for \\(x > 0\\).
pub struct GeometricProgrammingFunction
{
    base: ProbBase,
}

impl GeometricProgrammingFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        GeometricProgrammingFunction {
            base: ProbBase::new("Geometric Programming Function", BIBTEX, n),
        }
    }

    fn exponents() -> impl Iterator<Item=f64>
    {
        (1..= 5).map(|t| 0.2 * t as f64)
    }
}

impl NonlinearSystem<f64> for GeometricProgrammingFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        Self::exponents().fold(-1., |f, e| {
            let term = x.iter().enumerate().fold(1., |p, (k, &xk)| {
                if k == i {p * e * xk.powf(e - 1.)} else {p * xk.powf(e)}
            });
            f + term
        })
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
        let mut v = ValueFill::new(jac);
        for i in 0.. n {
            for j in 0.. n {
                let d = Self::exponents().fold(0., |s, e| {
                    let term = x.iter().enumerate().fold(1., |p, (k, &xk)| {
                        if i == j && k == i {
                            p * e * (e - 1.) * xk.powf(e - 2.)
                        }
                        else if k == i || k == j {
                            p * e * xk.powf(e - 1.)
                        }
                        else {
                            p * xk.powf(e)
                        }
                    });
                    s + term
                });
                v.push(d);
            }
        }
    }

    no_exact_solution!();

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|&v| v > 0.), self.base.title(), "x must be > 0")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(0.);
        u.fill(f64::INFINITY);
    }
}
