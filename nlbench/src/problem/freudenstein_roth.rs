use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Freudenstein:1963,
  author  = {Freudenstein, Ferdinand and Roth, Bernhard},
  title   = {Numerical Solution of Systems of Nonlinear Equations},
  journal = {J. ACM},
  year    = {1963},
  volume  = {10},
  number  = {4},
  pages   = {550--556},
  doi     = {10.1145/321186.321200}
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  year    = {1981},
  volume  = {7},
  number  = {1},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

pub struct FreudensteinRothFunction
{
    base: ProbBase,
}

impl FreudensteinRothFunction
{
    pub fn new() -> Self
    {
        FreudensteinRothFunction {
            base: ProbBase::new("Freudenstein-Roth function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for FreudensteinRothFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let y = x[1];
        match k {
            0 => x[0] + ((5. - y) * y - 2.) * y - 13.,
            _ => x[0] + ((y + 1.) * y - 14.) * y - 29.,
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
        let y = x[1];
        jac.copy_from_slice(&[1., (10. - 3. * y) * y - 2., 1., (3. * y + 2.) * y - 14.]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[5., 4.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.5, -2.]);
    }
}
