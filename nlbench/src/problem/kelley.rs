use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@book{Dennis:1996,
  author    = {Dennis, J. and Schnabel, R.},
  title     = {Numerical Methods for Unconstrained
               Optimization and Nonlinear Equations},
  publisher = {Society for Industrial and Applied Mathematics},
  year      = {1996},
  doi       = {10.1137/1.9781611971200},
}
";

/// \\(x^2 + y^2 = 2,\ e^{x-1} + y^2 = 2\\).
pub struct KelleyFunction
{
    base: ProbBase,
}

impl KelleyFunction
{
    pub fn new() -> Self
    {
        KelleyFunction {
            base: ProbBase::new("Kelley Function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for KelleyFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x, y) = (x[0], x[1]);
        match k {
            0 => x * x + y * y - 2.,
            _ => (x - 1.).exp() + y * y - 2.,
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
        let (x, y) = (x[0], x[1]);
        jac.copy_from_slice(&[2. * x, 2. * y, (x - 1.).exp(), 2. * y]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 1.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[2., 1e-6]);
    }
}
