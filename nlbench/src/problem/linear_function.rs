use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

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

/// \\(x_k - \frac2n \sum_i x_i + 1\\), the classic full rank function in \\(-x\\) so that the root is all ones.
pub struct LinearFunctionFullRank
{
    base: ProbBase,
}

impl LinearFunctionFullRank
{
    pub fn new() -> Self
    {
        Self::with_size(10)
    }

    pub fn with_size(n: usize) -> Self
    {
        check_min_equations(n, 1);

        LinearFunctionFullRank {
            base: ProbBase::new("Linear function - full rank", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for LinearFunctionFullRank
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n() as f64;
        let sum: f64 = x.iter().sum();
        x[k] - 2. * sum / n + 1.
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let n = self.base.n() as f64;
        let t = 2. * x.iter().sum::<f64>() / n - 1.;
        for (fk, xk) in f.iter_mut().zip(x) {
            *fk = xk - t;
        }
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
        let bf = 2. / n as f64;
        let mut v = ValueFill::new(jac);
        for r in 0.. n {
            for c in 0.. n {
                v.push(if r == c {1. - bf} else {-bf});
            }
        }
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
        x.fill(-1.);
    }
}

//

/// \\((k+1) \sum_i (i+1) x_i - 1\\).
///
/// The Jacobian has rank one, so the system is inconsistent for `n > 1`.
pub struct LinearFunctionRank1
{
    base: ProbBase,
}

impl LinearFunctionRank1
{
    pub fn new() -> Self
    {
        Self::with_size(10)
    }

    pub fn with_size(n: usize) -> Self
    {
        check_min_equations(n, 1);

        LinearFunctionRank1 {
            base: ProbBase::new("Linear function - rank 1 with zero columns and rows", BIBTEX, n),
        }
    }

    fn weighted_sum(x: &[f64]) -> f64
    {
        x.iter().enumerate().map(|(i, xi)| (i + 1) as f64 * xi).sum()
    }
}

impl NonlinearSystem<f64> for LinearFunctionRank1
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        (k + 1) as f64 * Self::weighted_sum(x) - 1.
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let s = Self::weighted_sum(x);
        for (k, fk) in f.iter_mut().enumerate() {
            *fk = (k + 1) as f64 * s - 1.;
        }
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
        for r in 0.. n {
            for c in 0.. n {
                v.push(((r + 1) * (c + 1)) as f64);
            }
        }
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
