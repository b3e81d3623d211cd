use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Han:2005,
  author  = {Qiaoming Han and Wenyu Sun and Jiye Han and Raimudo J. B. Sampaio},
  title   = {An adaptive conic trust-region method for unconstrained optimization},
  journal = {Optimization Methods and Software},
  year    = {2005},
  volume  = {20},
  number  = {6},
  pages   = {665--677},
  doi     = {10.1080/10556780410001697677}
}
";

/// Gradient of \\(x_0^8 + x_0^2 + x_0^2 x_1^2 + e^{x_1^2}\\).
pub struct HanSunHan
{
    base: ProbBase,
}

impl HanSunHan
{
    pub fn new() -> Self
    {
        HanSunHan {
            base: ProbBase::new("Han-Sun-Han-SAMPAJO 2005 function test", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for HanSunHan
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x0, x1) = (x[0], x[1]);
        match k {
            0 => 8. * x0.powi(7) + 2. * x0 + 2. * x0 * x1 * x1,
            _ => 2. * x0 * x0 * x1 + 2. * x1 * (x1 * x1).exp(),
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
        let (x0, x1) = (x[0], x[1]);
        let e = (x1 * x1).exp();
        let off = 4. * x0 * x1;
        jac.copy_from_slice(&[
            56. * x0.powi(6) + 2. + 2. * x1 * x1, off,
            off, 2. * x0 * x0 + 2. * e + 4. * x1 * x1 * e,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[5., 3.]);
    }
}
