use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

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

/// Gradient \\(2 H x\\) of \\(x^T H x\\) with the Hilbert matrix \\(H_{ij} = 1/(i+j+1)\\).
pub struct Hilbert
{
    base: ProbBase,
}

impl Hilbert
{
    pub fn new(n: usize) -> Self
    {
        Hilbert {
            base: ProbBase::new("Hilbert Matrix Function F = x'Ax", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for Hilbert
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        x.iter().enumerate().map(|(j, xj)| 2. * xj / (k + j + 1) as f64).sum()
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        n * n
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, _x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for i in 0.. n {
            for j in 0.. n {
                v.push(2. / (i + j + 1) as f64);
            }
        }
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
        x.fill(1.);
    }
}
