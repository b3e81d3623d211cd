use std::f64::consts::PI;
use nlbench_core::system::NonlinearSystem;
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
@article{Fletcher:1963,
  author  = {Fletcher, R. and Powell, M. J. D.},
  title   = {A Rapidly Convergent Descent Method for Minimization},
  journal = {The Computer Journal},
  year    = {1963},
  volume  = {6},
  number  = {2},
  pages   = {163--168},
  doi     = {10.1093/comjnl/6.2.163},
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

const ROWS: &[&[usize]] = &[
    &[0, 1, 2],
    &[0, 1],
    &[2],
];

pub struct HelicalValleyFunction
{
    base: ProbBase,
}

impl HelicalValleyFunction
{
    pub fn new() -> Self
    {
        HelicalValleyFunction {
            base: ProbBase::new("Helical valley function", BIBTEX, 3),
        }
    }
}

impl NonlinearSystem<f64> for HelicalValleyFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => 10. * (x[2] - 10. * x[1].atan2(x[0]) / (2. * PI)),
            1 => 10. * (x[0].hypot(x[1]) - 1.),
            _ => x[2],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(ROWS)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, ROWS, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let q2 = x[0] * x[0] + x[1] * x[1];
        let q = q2.sqrt();
        let c = 50. / PI;
        jac.copy_from_slice(&[
            c * x[1] / q2, -c * x[0] / q2, 10.,
            10. * x[0] / q, 10. * x[1] / q,
            1.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 0., 0.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-1., 0., 0.]);
    }
}
