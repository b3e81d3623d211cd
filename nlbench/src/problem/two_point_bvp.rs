use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

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

/// Discretized \\(u'' = \frac12 (u + t + 1)^3\\) with the boundary values kept as unknowns.
pub struct TwoPointBoundaryValueProblem
{
    base: ProbBase,
    h: f64,
}

impl TwoPointBoundaryValueProblem
{
    /// * `n` shall be at least 3.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 3);

        TwoPointBoundaryValueProblem {
            base: ProbBase::new("Two-Point Boundary Value Problem", BIBTEX, n),
            h: 1. / (n - 1) as f64,
        }
    }
}

impl NonlinearSystem<f64> for TwoPointBoundaryValueProblem
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k == 0 || k == self.base.n() - 1 {
            return x[k];
        }
        let h = self.h;
        let t = h * k as f64;
        2. * x[k] - x[k - 1] - x[k + 1] + h * h / 2. * (x[k] + t + 1.).powi(3)
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * (self.base.n() - 2) + 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        p.push(0, 0);
        for k in 1.. n - 1 {
            p.push_row(k, [k - 1, k, k + 1]);
        }
        p.push(n - 1, n - 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let h = self.h;
        let mut v = ValueFill::new(jac);
        v.push(1.);
        for k in 1.. n - 1 {
            let t = h * k as f64;
            v.push(-1.);
            v.push(2. + 1.5 * h * h * (x[k] + t + 1.).powi(2));
            v.push(-1.);
        }
        v.push(1.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        for (k, v) in x.iter_mut().enumerate() {
            let t = self.h * k as f64;
            *v = t * (t - 1.);
        }
    }
}
