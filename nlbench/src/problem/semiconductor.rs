use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

const BIBTEX: &str = "\
@techreport{Nowak:1991,
  author = {U. Nowak and L. Weimann},
  title  = {A Family of Newton Codes for Systems of Highly Nonlinear Equations},
  number = {Technical Report TR-91-10 (December 1991)},
  year   = {1991}
}
";

/// Two-cell semiconductor device model with exponential carrier densities.
///
/// Cell `c` couples the potential \\(x_{3c}\\) with the quasi-Fermi levels \\(x_{3c+1}, x_{3c+2}\\).
pub struct Semiconductor2D
{
    base: ProbBase,
}

impl Semiconductor2D
{
    const ALPHA: f64 = 38.683;
    const NI: f64 = 1.22e10;
    const V: f64 = 100.;
    const D: f64 = 1e7;

    pub fn new() -> Self
    {
        Semiconductor2D {
            base: ProbBase::new("2D semiconductor", BIBTEX, 6),
        }
    }

    /// Returns \\(e^{\alpha(x_{p+2} - x_p)}\\) and \\(e^{\alpha(x_p - x_{p+1})}\\) of the cell at `p`.
    fn carriers(x: &[f64], p: usize) -> (f64, f64)
    {
        (
            (Self::ALPHA * (x[p + 2] - x[p])).exp(),
            (Self::ALPHA * (x[p] - x[p + 1])).exp(),
        )
    }
}

impl NonlinearSystem<f64> for Semiconductor2D
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let dn = Self::D / Self::NI;
        match k {
            0 => {
                let (e, h) = Self::carriers(x, 0);
                e - h - dn
            },
            3 => {
                let (e, h) = Self::carriers(x, 3);
                e - h + dn
            },
            1 | 2 => x[k],
            _ => x[k] - Self::V,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        10
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for c in [0, 3] {
            p.push_row(c, c..= c + 2);
            p.push(c + 1, c + 1);
            p.push(c + 2, c + 2);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let a = Self::ALPHA;
        let mut v = ValueFill::new(jac);
        for c in [0, 3] {
            let (e, h) = Self::carriers(x, c);
            v.push(-a * (e + h));
            v.push(a * h);
            v.push(a * e);
            v.push(1.);
            v.push(1.);
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
}
