use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Darvishi:2007,
  author  = {Darvishi, M.T. and Barati, A.},
  title   = {Super cubic iterative methods to solve systems
             of nonlinear equations},
  journal = {Applied Mathematics and Computation},
  volume  = {188},
  number  = {2},
  pages   = {1678--1685},
  year    = {2007},
  doi     = {10.1016/j.amc.2006.11.022}
}
";

/// \\(e^{x_1+x_2} + x_1 \cos x_2 = 0,\ x_1 + x_2 = 1\\).
pub struct DarvishiBarati
{
    base: ProbBase,
}

impl DarvishiBarati
{
    pub fn new() -> Self
    {
        DarvishiBarati {
            base: ProbBase::new("DarvishiBarati", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for DarvishiBarati
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2) = (x[0], x[1]);
        match k {
            0 => (x1 + x2).exp() + x1 * x2.cos(),
            _ => x1 + x2 - 1.,
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
        let (x1, x2) = (x[0], x[1]);
        let e = (x1 + x2).exp();
        jac.copy_from_slice(&[e + x2.cos(), e - x1 * x2.sin(), 1., 1.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-4., 5.]);
    }
}
