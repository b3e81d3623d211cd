use nlbench_core::system::NonlinearSystem;
use super::{ProbBase, fill_rows, rows_nnz};

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

const PATTERN: [&[usize]; 4] = [
    &[0, 1],
    &[0, 1, 3],
    &[2, 3],
    &[1, 2, 3],
];

/// Gradient of the Colville polynomial.
pub struct Colville
{
    base: ProbBase,
}

impl Colville
{
    pub fn new() -> Self
    {
        Colville {
            base: ProbBase::new("Colville Polynomial", BIBTEX, 4),
        }
    }
}

impl NonlinearSystem<f64> for Colville
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
        match k {
            0 => 400. * x1 * x1 * x1 - 400. * x2 * x1 + 2. * x1 - 2.,
            1 => -200. * x1 * x1 + 220.2 * x2 + 19.8 * x4 - 40.,
            2 => -360. * x3 * x4 + 360. * x3 * x3 * x3 + 2. * x3 - 2.,
            _ => 180. * x4 - 180. * x3 * x3 + 20.2 * x4 + 19.8 * x2 - 40.,
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
        let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
        jac.copy_from_slice(&[
            1200. * x1 * x1 - 400. * x2 + 2., -400. * x1,
            -400. * x1, 220.2, 19.8,
            -360. * x4 + 1080. * x3 * x3 + 2., -360. * x3,
            19.8, -360. * x3, 200.2,
        ]);
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
        x.copy_from_slice(&[0.5, 1., -0.5, -1.]);
    }
}
