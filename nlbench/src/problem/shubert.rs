use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, eval_fk_by_f};

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

/// Gradient of the Shubert function \\(g(x_0) g(x_1)\\), \\(g(t) = \sum_{i=1}^5 i \cos((i + 1) t + i)\\).
pub struct Shubert
{
    base: ProbBase,
}

impl Shubert
{
    pub fn new() -> Self
    {
        Shubert {
            base: ProbBase::new("Shubert Function", BIBTEX, 2),
        }
    }

    /// Returns \\((g, g', g'')\\) at `t`.
    fn g(t: f64) -> (f64, f64, f64)
    {
        let mut r = (0., 0., 0.);
        for i in 1..= 5 {
            let y = i as f64;
            let (s, c) = ((y + 1.) * t + y).sin_cos();
            r.0 += y * c;
            r.1 -= y * (y + 1.) * s;
            r.2 -= y * (y + 1.).powi(2) * c;
        }
        r
    }
}

impl NonlinearSystem<f64> for Shubert
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let (g0, d0, _) = Self::g(x[0]);
        let (g1, d1, _) = Self::g(x[1]);
        f[0] = d0 * g1;
        f[1] = g0 * d1;
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
        let (g0, d0, dd0) = Self::g(x[0]);
        let (g1, d1, dd1) = Self::g(x[1]);
        jac.copy_from_slice(&[dd0 * g1, d0 * d1, d0 * d1, g0 * dd1]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        // stationary point of g nearest to the origin
        x.fill(-0.1953857500608314);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.5, 1.]);
    }
}
