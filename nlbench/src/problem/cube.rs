use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@inbook{Leon:1966,
  title     = {Recent advances in optimization techniques: proceedings},
  chapter   = {A comparison Among Eight Known Optimizing Procedures},
  author    = {Leon, A.},
  editor    = { Lavi, A. and Vogl, T.P.},
  year      = {1966},
  pages     = {28--46},
  publisher = {Wiley}
}

@article{doi:10.1137/0723046,
  author  = {Grippo, L. and Lampariello, F. and Lucidi, S.},
  title   = {A Nonmonotone Line Search Technique for Newton’s Method},
  journal = {SIAM Journal on Numerical Analysis},
  year    = {1986},
  volume  = {23},
  number  = {4},
  pages   = {707--716},
  doi     = {10.1137/0723046},
}
";

/// Gradient of the cube function \\(100(y - x^3)^2 + (1 - x)^2\\).
pub struct CubeFunction
{
    base: ProbBase,
}

impl CubeFunction
{
    pub fn new() -> Self
    {
        CubeFunction {
            base: ProbBase::new("Cube Function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for CubeFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x, y) = (x[0], x[1]);
        let x3 = x * x * x;
        match k {
            0 => (600. * (x3 - y) * x + 2.) * x - 2.,
            _ => 200. * (y - x3),
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
        let (x, y) = (x[0], x[1]);
        let x2 = x * x;
        let x3 = x2 * x;
        jac.copy_from_slice(&[(3000. * x3 - 1200. * y) * x + 2., -600. * x2, -600. * x2, 200.]);
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
        x.copy_from_slice(&[-1.2, -1.]);
    }
}
