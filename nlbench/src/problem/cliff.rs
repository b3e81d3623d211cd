use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Grippo:1991,
  author  = {Grippo, L. and Lampariello, F. and Lucidi, S.},
  title   = {A Class of Nonmonotone Stabilization Methods
             in Unconstrained Optimization},
  journal = {Numer. Math.},
  year    = {1991},
  volume  = {59},
  number  = {1},
  pages   = {779--805},
  doi     = {10.1007/BF01385810},
}
";

/// Cliff function, an exponential wall along \\(x_0 = x_1\\).
pub struct CliffFunction
{
    base: ProbBase,
}

impl CliffFunction
{
    pub fn new() -> Self
    {
        CliffFunction {
            base: ProbBase::new("Cliff Function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for CliffFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let t = 1. - 20. * (20. * (x[0] - x[1])).exp();
        match k {
            0 => x[0] / 5000. - 3. / 5000. - t,
            _ => t,
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
        let t = 400. * (20. * (x[0] - x[1])).exp();
        jac.copy_from_slice(&[1. / 5000. + t, -t, -t, t]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[3., 3. + 20_f64.ln() / 20.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., -1.]);
    }
}
