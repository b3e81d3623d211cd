use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BANDED_BIBTEX: &str = "\
@article{Broyden:1971,
  author  = {Broyden, C. G.},
  title   = {The convergence of an algorithm for solving sparse nonlinear systems},
  journal = {Mathematics of Computation},
  volume  = {25},
  year    = {1971},
  pages   = {285--294},
  doi     = {10.2307/2004922},
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  volume  = {7},
  number  = {1},
  year    = {1981},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

const TRIDIAGONAL_BIBTEX: &str = "\
@article{Broyden:1965,
  author  = {Broyden, C. G.},
  title   = {A class of methods for solving nonlinear simultaneous equations},
  journal = {Mathematics of Computation},
  volume  = {19},
  year    = {1965},
  pages   = {577--593},
  doi     = {10.2307/2003941}
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  volume  = {7},
  number  = {1},
  year    = {1981},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

/// Broyden banded function
/// 
/// \\(F_k = x_k(2 + 5x_k^2) + 1 - \sum_{j \in J_k} x_j(1 + x_j)\\)
/// where \\(J_k = \lbrace j \ne k : k - m_l \le j \le k + m_u \rbrace\\), \\(m_l = 5\\), \\(m_u = 1\\).
pub struct BroydenBandedFunction
{
    base: ProbBase,
    ml: usize,
    mu: usize,
}

impl BroydenBandedFunction
{
    pub fn new() -> Self
    {
        BroydenBandedFunction {
            base: ProbBase::new("Broyden Banded Function", BANDED_BIBTEX, 10),
            ml: 5,
            mu: 1,
        }
    }

    fn band(&self, k: usize) -> impl Iterator<Item=usize>
    {
        let lo = k.saturating_sub(self.ml);
        let hi = (k + self.mu + 1).min(self.base.n());
        (lo.. hi).filter(move |&j| j != k)
    }
}

impl NonlinearSystem<f64> for BroydenBandedFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let s: f64 = self.band(k).map(|j| x[j] * (1. + x[j])).sum();
        x[k] * (2. + 5. * x[k] * x[k]) + 1. - s
    }

    fn jacobian_nnz(&self) -> usize
    {
        (0.. self.base.n()).map(|k| self.band(k).count() + 1).sum()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in 0.. self.base.n() {
            p.push_row(k, self.band(k));
            p.push(k, k);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for k in 0.. self.base.n() {
            for j in self.band(k) {
                v.push(-(1. + 2. * x[j]));
            }
            v.push(2. + 15. * x[k] * x[k]);
        }
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

/// Broyden tridiagonal function
/// 
/// \\(F_k = (3 - \alpha x_k) x_k - x_{k-1} - 2 x_{k+1} + \beta\\),
/// with \\(x_{-1} = x_n = 0\\).
/// 
/// The title carries \\(\alpha\\) to tell instances of the same size apart.
pub struct BroydenTridiagonalFunction
{
    base: ProbBase,
    alpha: f64,
    beta: f64,
}

impl BroydenTridiagonalFunction
{
    /// * `alpha` is \\(\alpha\\).
    /// * `beta` is \\(\beta\\).
    /// * `n` is a number of equations, at least 1.
    pub fn new(alpha: f64, beta: f64, n: usize) -> Self
    {
        check_min_equations(n, 1);

        BroydenTridiagonalFunction {
            base: ProbBase::new(&format!("Broyden tridiagonal function alpha = {}", alpha), TRIDIAGONAL_BIBTEX, n),
            alpha, beta,
        }
    }
}

impl NonlinearSystem<f64> for BroydenTridiagonalFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        let mut f = (3. - self.alpha * x[k]) * x[k] + self.beta;
        if k > 0 {
            f -= x[k - 1];
        }
        if k + 1 < n {
            f -= 2. * x[k + 1];
        }
        f
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * self.base.n() - 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for k in 0.. n {
            p.push(k, k);
        }
        for k in 1.. n {
            p.push(k, k - 1);
        }
        for k in 0.. n - 1 {
            p.push(k, k + 1);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let (diag, off) = jac.split_at_mut(n);
        for (d, xk) in diag.iter_mut().zip(x) {
            *d = 3. - 2. * self.alpha * xk;
        }
        let (lower, upper) = off.split_at_mut(n - 1);
        lower.fill(-1.);
        upper.fill(-2.);
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
