use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@book{Kelley:1995,
  author    = {Kelley, C.},
  title     = {Iterative Methods for Linear and Nonlinear Equations},
  publisher = {Society for Industrial and Applied Mathematics},
  year      = {1995},
  doi       = {10.1137/1.9781611970944},
}

@book{chandrasekhar1960,
  author    = {Chandrasekhar, S.},
  title     = {Radiative Transfer},
  year      = {1960},
  series    = {Dover Books on Intermediate and Advanced Mathematics},
  publisher = {Dover Publications},
  isbn      = {9780486605906}
}
";

/// Discretized Chandrasekhar H-equation
/// 
/// \\(F_i = x_i - \left(1 - w \sum_j \frac{\mu_j x_j}{\mu_i + \mu_j}\right)^{-1}\\)
/// with \\(\mu_i = i + 1/2\\) and \\(w = c / 2n\\).
pub struct Chandrasekhar
{
    base: ProbBase,
    mu: Vec<f64>,
    w: f64,
}

impl Chandrasekhar
{
    /// * `c` is the albedo \\(c\\), which also appears in the title.
    /// * `n` is a number of equations.
    pub fn new(c: f64, n: usize) -> Self
    {
        check_min_equations(n, 1);

        Chandrasekhar {
            base: ProbBase::new(&format!("Chandrasekhar function c = {}", c), BIBTEX, n),
            mu: (0.. n).map(|i| i as f64 + 0.5).collect(),
            w: c / (2 * n) as f64,
        }
    }

    fn sum(&self, x: &[f64], i: usize) -> f64
    {
        self.mu.iter().zip(x).map(|(mj, xj)| mj * xj / (self.mu[i] + mj)).sum()
    }
}

impl NonlinearSystem<f64> for Chandrasekhar
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        x[k] - 1. / (1. - self.w * self.sum(x, k))
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
        let mut v = ValueFill::new(jac);
        for i in 0.. n {
            let t = -self.w / (1. - self.w * self.sum(x, i)).powi(2);
            for j in 0.. n {
                let d = if i == j {1.} else {0.};
                v.push(t * self.mu[j] / (self.mu[i] + self.mu[j]) + d);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(10.);
    }
}
