use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations, eval_fk_by_f};

const BIBTEX: &str = "\
@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
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

/// \\(x_k - 1 + (k+1)\, s (1 + 2s^2)\\) with \\(s = \sum_j (j+1)(x_j - 1)\\).
pub struct VariablyDimensionedFunction
{
    base: ProbBase,
}

impl VariablyDimensionedFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        VariablyDimensionedFunction {
            base: ProbBase::new("Variably dimensioned function", BIBTEX, n),
        }
    }

    fn weighted_sum(x: &[f64]) -> f64
    {
        x.iter().enumerate().map(|(j, v)| (j + 1) as f64 * (v - 1.)).sum()
    }
}

impl NonlinearSystem<f64> for VariablyDimensionedFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let s = Self::weighted_sum(x);
        let g = s * (1. + 2. * s * s);
        for (k, fk) in f.iter_mut().enumerate() {
            *fk = x[k] - 1. + (k + 1) as f64 * g;
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

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let s = Self::weighted_sum(x);
        let dg = 1. + 6. * s * s;
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            for j in 0.. n {
                let d = ((k + 1) * (j + 1)) as f64 * dg;
                v.push(if j == k {d + 1.} else {d});
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
        let n = self.base.n() as f64;
        for (k, v) in x.iter_mut().enumerate() {
            *v = 1. - (k + 1) as f64 / n;
        }
    }
}
