use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@inproceedings{Varadhan2009,
  author={R. Varadhan and Paul D. Gilbert},
  title={{BB:} An {R} Package for Solving a Large System of
         Nonlinear Equations and for Optimizing a High-Dimensional
         Nonlinear Objective Function},
  year={2009}
}
";

const RHO: f64 = 10.;

/// Finite differences of \\(u'' = \rho \sinh(\rho u)\\), \\(u(0) = 0\\), \\(u(1) = 1\\).
pub struct TroeschFunction
{
    base: ProbBase,
    h: f64,
}

impl TroeschFunction
{
    /// * `n` shall be at least 2.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        TroeschFunction {
            base: ProbBase::new("Troesch Function", BIBTEX, n),
            h: 1. / (n + 1) as f64,
        }
    }
}

impl NonlinearSystem<f64> for TroeschFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        let left = if k == 0 {0.} else {x[k - 1]};
        let right = if k == n - 1 {1.} else {x[k + 1]};
        2. * x[k] + RHO * self.h * self.h * (RHO * x[k]).sinh() - left - right
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
            p.push_row(k, k.saturating_sub(1)..= (k + 1).min(n - 1));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let bf = RHO * RHO * self.h * self.h;
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            if k > 0 {
                v.push(-1.);
            }
            v.push(2. + bf * (RHO * x[k]).cosh());
            if k + 1 < n {
                v.push(-1.);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        for (k, v) in x.iter_mut().enumerate() {
            *v = ((123 * k) % 1001) as f64 / 1000.;
        }
    }
}
