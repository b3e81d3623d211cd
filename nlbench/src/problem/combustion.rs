use nlbench_core::system::NonlinearSystem;
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
@article{Grosan:2012,
  title   = {SOLVING POLYNOMIAL SYSTEMS USING A MODIFIED LINE SEARCH APPROACH},
  author  = {Crina Grosan and Ajith Abraham and Vaclav Snasel},
  journal = {International Journal of Innovative Computing, Information and Control},
  volume  = {8},
  number  = {1},
  year    = {2012}
}

@book{Morgan:2009,
  author = {Morgan, A.},
  title  = {Solving Polynomial Systems Using Continuation for
            Engineering and Scientific Problems},
  publisher = {Society for Industrial and Applied Mathematics},
  year = {2009},
  doi = {10.1137/1.9780898719031},
}

@article{Hentenryck:1997,
  author  = {Van Hentenryck, P. and McAllester, D. and Kapur, D.},
  title   = {Solving Polynomial Systems Using a Branch and Prune Approach},
  journal = {SIAM Journal on Numerical Analysis},
  year    = {1997},
  volume  = {34},
  number  = {2},
  pages   = {797-827},
  doi     = {10.1137/S0036142995281504}
}
";

const PATTERN: [&[usize]; 10] = [
    &[1, 5, 8, 9],
    &[2, 7],
    &[0, 2, 4, 7, 8, 9],
    &[3, 6],
    &[4, 0],
    &[5, 1],
    &[6, 3],
    &[7, 0, 2],
    &[8, 0, 1],
    &[9, 0, 1],
];

/// Combustion of a hydrocarbon in air, four linear balances and six equilibria.
pub struct CombustionApplication
{
    base: ProbBase,
}

impl CombustionApplication
{
    pub fn new() -> Self
    {
        CombustionApplication {
            base: ProbBase::new("Combustion Application", BIBTEX, 10),
        }
    }
}

impl NonlinearSystem<f64> for CombustionApplication
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[1] + 2. * x[5] + x[8] + 2. * x[9] - 1e-5,
            1 => x[2] + x[7] - 3e-5,
            2 => x[0] + x[2] + 2. * x[4] + 2. * x[7] + x[8] + x[9] - 5e-5,
            3 => x[3] + 2. * x[6] - 1e-5,
            4 => 0.5140437e-7 * x[4] - x[0] * x[0],
            5 => 0.1006932e-6 * x[5] - 2. * x[1] * x[1],
            6 => 0.7816278e-15 * x[6] - x[3] * x[3],
            7 => 0.1496236e-6 * x[7] - x[0] * x[2],
            8 => 0.6194411e-7 * x[8] - x[0] * x[1],
            _ => 0.2089296e-14 * x[9] - x[0] * x[1],
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
        jac.copy_from_slice(&[
            1., 2., 1., 2.,
            1., 1.,
            1., 1., 2., 2., 1., 1.,
            1., 2.,
            0.5140437e-7, -2. * x[0],
            0.1006932e-6, -4. * x[1],
            0.7816278e-15, -2. * x[3],
            0.1496236e-6, -x[2], -x[0],
            0.6194411e-7, -x[1], -x[0],
            0.2089296e-14, -x[1], -x[0],
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }
}
