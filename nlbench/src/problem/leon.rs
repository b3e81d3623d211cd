use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
}
";

/// Gradient of the cubic valley \\(100(y - x^3)^2 + (1 - x)^2\\).
pub struct Leon
{
    base: ProbBase,
}

impl Leon
{
    pub fn new() -> Self
    {
        Leon {
            base: ProbBase::new("Leon cubic valley function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for Leon
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let v = x[1] - x[0].powi(3);
        match k {
            0 => -600. * v * x[0] * x[0] - 2. * (1. - x[0]),
            _ => 200. * v,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        4
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(2);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let x0 = x[0];
        let off = -600. * x0 * x0;
        jac.copy_from_slice(&[-1200. * x0 * x[1] + 3000. * x0.powi(4) + 2., off, off, 200.]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-1.2, -1.]);
    }
}
