use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@misc{bodon:2001,
  author = {Bodon, E. and Del Popolo, A. and Luksan, L. and Spedicato, E.},
  title  = {Numerical Performance of ABS Codes for Nonlinear Systems of Equations},
  year   = {2001},
  note   = {arXiv:math/0106029}
}
";

/// Tridiagonal \\((3 - x_k) x_k + 1 - x_{k-1} - 2x_{k+1}\\) with zero boundary values.
pub struct SchubertBroydenFunction
{
    base: ProbBase,
}

impl SchubertBroydenFunction
{
    /// * `n` shall be at least 2.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        SchubertBroydenFunction {
            base: ProbBase::new("Schubert Broyden function", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for SchubertBroydenFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let xm = if k > 0 {x[k - 1]} else {0.};
        let xp = x.get(k + 1).copied().unwrap_or(0.);
        (3. - x[k]) * x[k] + 1. - xm - 2. * xp
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
            p.push_row(k, k.saturating_sub(1)..= (k + 1).min(n - 1));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            if k > 0 {
                v.push(-1.);
            }
            v.push(3. - 2. * x[k]);
            if k + 1 < n {
                v.push(-2.);
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
        x.fill(-1.);
    }
}
