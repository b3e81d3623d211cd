use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations, eval_fk_by_f};

const BIBTEX: &str = "\
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
";

/// Discretized integral equation on the grid \\(t_i = i/(n-1)\\):
/// \\(x_i + \frac{1-t_i}2 \sum_{j=1}^{i} u_j^3 + \frac{(1-t_i)t_i}2 \sum_{j=i+1}^{n-2} u_j^2\\)
/// with \\(u_j = x_j + t_j + 1\\), for interior `i`; boundary rows are \\(x_i\\).
pub struct NonlinearIntegralEquations
{
    base: ProbBase,
}

impl NonlinearIntegralEquations
{
    pub fn new() -> Self
    {
        Self::with_size(100)
    }

    /// * `n` shall be at least 3.
    pub fn with_size(n: usize) -> Self
    {
        check_min_equations(n, 3);

        NonlinearIntegralEquations {
            base: ProbBase::new("Nonlinear Integral Equations", BIBTEX, n),
        }
    }

    fn h(&self) -> f64
    {
        1. / (self.base.n() - 1) as f64
    }
}

impl NonlinearSystem<f64> for NonlinearIntegralEquations
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let n = self.base.n();
        let h = self.h();
        f.copy_from_slice(x);

        let mut s = 0.;
        for i in 1.. n - 1 {
            let t = h * i as f64;
            s += (x[i] + t + 1.).powi(3);
            f[i] += 0.5 * (1. - t) * s;
        }
        let mut s = 0.;
        for i in (1.. n - 1).rev() {
            let t = h * i as f64;
            f[i] += 0.5 * (1. - t) * t * s;
            s += (x[i] + t + 1.).powi(2);
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        2 + (n - 2) * (n - 2)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        p.push(0, 0);
        for r in 1.. n - 1 {
            p.push_row(r, 1.. n - 1);
        }
        p.push(n - 1, n - 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let h = self.h();
        let mut v = ValueFill::new(jac);
        v.push(1.);
        for r in 1.. n - 1 {
            let t = h * r as f64;
            for c in 1.. n - 1 {
                let u = x[c] + h * c as f64 + 1.;
                let d = if c <= r {1.5 * (1. - t) * u * u} else {(1. - t) * t * u};
                v.push(if c == r {d + 1.} else {d});
            }
        }
        v.push(1.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let h = self.h();
        for (i, xi) in x.iter_mut().enumerate() {
            let t = h * i as f64;
            *xi = t * (t - 1.);
        }
    }
}
