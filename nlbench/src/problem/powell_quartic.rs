use nlbench_core::system::NonlinearSystem;
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
@article{Colville:1970,
  author    = {Colville, A. R.},
  title     = {A comparative study of nonlinear programming codes},
  booktitle = {Proceedings of the {P}rinceton {S}ymposium on
               {M}athematical {P}rogramming (1967)},
  pages     = {487--501},
  publisher = {Princeton Univ. Press, Princeton, N.J.},
  year      = {1970},
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
    &[0, 1, 3],
    &[0, 1, 2],
    &[1, 2, 3],
    &[0, 2, 3],
];

/// Gradient of Powell's quartic
/// \\((x + 10y)^2 + 5(z - w)^2 + (y - 2z)^4 + 10(x - w)^4\\) in the
/// \\((x, y, z, w)\\) ordering of Colville.
pub struct PowellQuarticFunction
{
    base: ProbBase,
}

impl PowellQuarticFunction
{
    pub fn new() -> Self
    {
        PowellQuarticFunction {
            base: ProbBase::new("Powell's quartic function", BIBTEX, 4),
        }
    }
}

impl NonlinearSystem<f64> for PowellQuarticFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x, y, z, w) = (x[0], x[1], x[2], x[3]);
        let a = (x - 2. * y).powi(3);
        let b = 40. * (w - z).powi(3);
        match k {
            0 => 20. * w + 200. * x + 4. * a,
            1 => 10. * y - 10. * z - 8. * a,
            2 => -10. * y + 10. * z - b,
            _ => 2. * w + 20. * x + b,
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
        let a = (x[0] - 2. * x[1]).powi(2);
        let b = 120. * (x[3] - x[2]).powi(2);
        jac.copy_from_slice(&[
            200. + 12. * a, -24. * a, 20.,
            -24. * a, 10. + 48. * a, -10.,
            -10., 10. + b, -b,
            20., -b, 2. + b,
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
        x.copy_from_slice(&[3., -1., 0., 1.]);
    }
}
