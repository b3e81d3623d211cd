use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain, check_min_equations};

const BIBTEX: &str = "\
@article{Scheffel:2009,
  author  = {Jan Scheffel and Cristian H{\\aa}kansson},
  title   = {Solution of systems of nonlinear equations
             -- a semi-implicit approach},
  journal = {Applied Numerical Mathematics},
  volume  = {59},
  number  = {10},
  pages   = {2430--2443},
  year    = {2009},
  doi     = {10.1016/j.apnum.2009.05.002},
}
";

/// Cyclic \\(x_k - \cos x_{k+1}\\), the last equation closing with \\(x_{n-1} - 3\cos x_0\\).
pub struct SIRtest
{
    base: ProbBase,
}

impl SIRtest
{
    /// * `n` shall be at least 2.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        SIRtest {
            base: ProbBase::new("Semi-implicit approach Example 5", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for SIRtest
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k + 1 < n {
            x[k] - x[k + 1].cos()
        }
        else {
            x[k] - 3. * x[0].cos()
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for k in 0.. n {
            p.push_row(k, [k, (k + 1) % n]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n - 1 {
            v.push(1.);
            v.push(x[k + 1].sin());
        }
        v.push(1.);
        v.push(3. * x[0].sin());
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(if self.base.n() == 2 {-2.} else {3.});
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 5.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-5.);
        u.fill(5.);
    }
}
