use nlbench_core::system::NonlinearSystem;
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
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

const PATTERN: [&[usize]; 4] = [
    &[0, 1],
    &[1, 2],
    &[2, 3],
    &[3],
];

/// Cragg and Levy problem, a chain of four coupled residuals.
pub struct CraggAndLevyProblem
{
    base: ProbBase,
}

impl CraggAndLevyProblem
{
    pub fn new() -> Self
    {
        CraggAndLevyProblem {
            base: ProbBase::new("Cragg and Levy Problem", BIBTEX, 4),
        }
    }
}

impl NonlinearSystem<f64> for CraggAndLevyProblem
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => (x[0].exp() - x[1]).powi(2),
            1 => 10. * (x[1] - x[2]).powi(3),
            2 => (x[2] - x[3]).tan().powi(2),
            _ => x[3] - 1.,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&PATTERN)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &PATTERN, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let e0 = x[0].exp();
        let d1 = 30. * (x[1] - x[2]).powi(2);
        let d2 = x[2] - x[3];
        let t2 = 2. * d2.sin() / d2.cos().powi(3);
        jac.copy_from_slice(&[
            2. * (e0 - x[1]) * e0, 2. * (x[1] - e0),
            d1, -d1,
            t2, -t2,
            1.,
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[4., 2., 2., 2.]);
    }
}
