use std::f64::consts::FRAC_PI_2;
use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Boggs:1971,
  author = {Boggs, P.},
  title  = {The Solution of Nonlinear Systems of Equations
            by A-Stable Integration Techniques},
  journal = {SIAM Journal on Numerical Analysis},
  volume  = {8},
  number  = {4},
  pages   = {767--785},
  year    = {1971},
  doi     = {10.1137/0708071},
}
";

/// \\(x_0^2 - x_1 + 1 = 0,\ x_0 - \cos(\pi x_1 / 2) = 0\\).
pub struct BoggsFunction
{
    base: ProbBase,
}

impl BoggsFunction
{
    pub fn new() -> Self
    {
        BoggsFunction {
            base: ProbBase::new("Boggs function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for BoggsFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0] * x[0] - x[1] + 1.,
            _ => x[0] - (FRAC_PI_2 * x[1]).cos(),
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
        jac.copy_from_slice(&[2. * x[0], -1., 1., FRAC_PI_2 * (FRAC_PI_2 * x[1]).sin()]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., 1.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 0.]);
    }
}
