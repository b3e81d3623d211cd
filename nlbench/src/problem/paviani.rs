use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain};

const BIBTEX: &str = "\
@book{himmelblau:1972,
  author    = {Himmelblau, D.M.},
  title     = {Applied nonlinear programming},
  year      = {1972},
  publisher = {McGraw-Hill}
}
";

const N: usize = 10;

/// Gradient of \\(\sum_i [\log^2(x_i - 2) + \log^2(10 - x_i)] - \prod_i x_i^2\\),
/// defined on \\((2, 10)^{10}\\).
pub struct PavianiFunction
{
    base: ProbBase,
}

impl PavianiFunction
{
    pub fn new() -> Self
    {
        PavianiFunction {
            base: ProbBase::new("Paviani function", BIBTEX, N),
        }
    }

    fn inside(v: f64) -> bool
    {
        v > 2. && v < 10.
    }

    fn loglog_d(v: f64) -> f64
    {
        let (a, b) = (10. - v, v - 2.);
        2. * (b.ln() / b - a.ln() / a)
    }

    fn loglog_dd(v: f64) -> f64
    {
        let (a, b) = (10. - v, v - 2.);
        2. * ((1. - a.ln()) / (a * a) + (1. - b.ln()) / (b * b))
    }

    /// \\(\prod_{m \notin \\{i, j\\}} x_m^2\\).
    fn prod_sq_except(x: &[f64], i: usize, j: usize) -> f64
    {
        x.iter().enumerate()
            .filter(|&(m, _)| m != i && m != j)
            .map(|(_, v)| v * v)
            .product()
    }
}

impl NonlinearSystem<f64> for PavianiFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if Self::inside(x[k]) {
            Self::loglog_d(x[k]) - 2. * x[k] * Self::prod_sq_except(x, k, k)
        }
        else {
            f64::NAN
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        N * N
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(N);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for r in 0.. N {
            for c in 0.. N {
                let p = Self::prod_sq_except(x, r, c);
                v.push(if r == c {
                    Self::loglog_dd(x[r]) - 2. * p
                }
                else {
                    -4. * x[r] * x[c] * p
                });
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        for (i, xi) in x.iter_mut().enumerate() {
            *xi = if i % 2 == 0 {2.1} else {9.9};
        }
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|&v| Self::inside(v)), self.base.title(), "x must be in (2,10)")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(2.);
        u.fill(10.);
    }
}
