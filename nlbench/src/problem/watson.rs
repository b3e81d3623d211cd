use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
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

@book{kowalik1968methods,
  author = {Kowalik, J.S. and Osborne, M.R.},
  title  = {Methods for unconstrained optimization problems},
  series = {Mathematical Linguistics and Automatic Language Processing},
  year   = {1968},
  publisher={American Elsevier Pub. Co.}
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

const N: usize = 31;
const M: usize = 29;

/// Watson residuals on 29 nodes \\(t_i = (i+1)/29\\), closed by
/// \\(x_0\\) and \\(x_1 - x_0^2 - 1\\).
pub struct WatsonFunction
{
    base: ProbBase,
    /// `pow[i][j]` is \\(t_i^j\\).
    pow: Vec<[f64; N]>,
}

impl WatsonFunction
{
    pub fn new() -> Self
    {
        let pow = (0.. M).map(|i| {
            let ti = (i + 1) as f64 / M as f64;
            let mut row = [1.; N];
            for j in 1.. N {
                row[j] = row[j - 1] * ti;
            }
            row
        }).collect();

        WatsonFunction {
            base: ProbBase::new("Watson function", BIBTEX, N),
            pow,
        }
    }

    fn poly(x: &[f64], ti: &[f64; N]) -> f64
    {
        x.iter().zip(ti).map(|(a, b)| a * b).sum()
    }
}

impl NonlinearSystem<f64> for WatsonFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        for (fi, ti) in f.iter_mut().zip(&self.pow) {
            let d: f64 = (1.. N).map(|j| j as f64 * x[j] * ti[j - 1]).sum();
            let p = Self::poly(x, ti);
            *fi = d - p * p - 1.;
        }
        f[M] = x[0];
        f[M + 1] = x[1] - x[0] * x[0] - 1.;
    }

    fn jacobian_nnz(&self) -> usize
    {
        M * N + 3
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for r in 0.. M {
            p.push_row(r, 0.. N);
        }
        p.push(M, 0);
        p.push_row(M + 1, [0, 1]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for ti in &self.pow {
            let p = Self::poly(x, ti);
            v.push(-2. * p);
            for j in 1.. N {
                v.push(j as f64 * ti[j - 1] - 2. * p * ti[j]);
            }
        }
        v.push(1.);
        v.push(-2. * x[0]);
        v.push(1.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }
}
