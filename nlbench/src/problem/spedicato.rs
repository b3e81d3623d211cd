use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain, check_min_equations};

const BIBTEX: &str = "\
@Article{Spedicato1997,
  author  = {Spedicato, E. and Huang, Z.},
  title   = {Numerical experience with newton-like methods
             for nonlinear algebraic systems},
  journal = {Computing},
  year    = {1997},
  volume  = {58},
  number  = {1},
  pages   = {69--89},
  doi     = {10.1007/BF02684472},
}

@book{meresoo:1990,
  title     = {Test Examples of Systems of Nonlinear Equations: Version 3-90},
  author    = {Meresoo, T. and Roose, A. and Kulla,
               V. and Estonian Software and Computer Service Company},
  year      = 1990,
  publisher = {Estonian Software and Computer Service Company}
}
";

/// \\(x_{k-1} + x_k + x_{k+1} + (x_{k+1} - x_{k-1})^2 / 4\\) for interior `k`,
/// with \\(x_0 = 0\\) and \\(x_{n-1} = 20\\) as equations.
pub struct SpedicatoFunction17
{
    base: ProbBase,
}

impl SpedicatoFunction17
{
    /// * `n` shall be at least 3.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 3);

        SpedicatoFunction17 {
            base: ProbBase::new("Spedicato N.17", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for SpedicatoFunction17
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k == 0 {
            x[0]
        }
        else if k == n - 1 {
            x[k] - 20.
        }
        else {
            let d = x[k + 1] - x[k - 1];
            x[k + 1] + x[k] + x[k - 1] + 0.25 * d * d
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * self.base.n() - 4
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
        let mut v = ValueFill::new(jac);
        v.push(1.);
        for k in 1.. n - 1 {
            let h = 0.5 * (x[k + 1] - x[k - 1]);
            v.push(1. - h);
            v.push(1.);
            v.push(1. + h);
        }
        v.push(1.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(10.);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 10000.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-10000.);
        u.fill(10000.);
    }
}
