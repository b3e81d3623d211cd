use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, eval_fk_by_f};

const BIBTEX: &str = "\
@article{Grippo:1991,
  author  = {Grippo, L. and Lampariello, F. and Lucidi, S.},
  title   = {A Class of Nonmonotone Stabilization Methods
             in Unconstrained Optimization},
  journal = {Numer. Math.},
  year    = {1991},
  volume  = {59},
  number  = {1},
  pages   = {779--805},
  doi     = {10.1007/BF01385810},
}
";

/// Gradient of \\(\tau\, t(x)^2 - (1-x_0)^2 - (1-x_1)^2\\)
/// with \\(t = 10^4 (x_1 - x_0^2)^2 + (1-x_0)^2 - 0.02\\).
pub struct MexicanHatFunction
{
    base: ProbBase,
    tau: f64,
}

impl MexicanHatFunction
{
    pub fn new(tau: f64) -> Self
    {
        MexicanHatFunction {
            base: ProbBase::new(&format!("Mexican Hat Function, tau = {}", tau), BIBTEX, 2),
            tau,
        }
    }

    /// Returns \\(t\\) and its gradient.
    fn inner(x: &[f64]) -> (f64, [f64; 2])
    {
        let d = x[1] - x[0] * x[0];
        let t = 10000. * d * d + (1. - x[0]).powi(2) - 0.02;
        (t, [2. * ((1. - 20000. * d) * x[0] - 1.), 20000. * d])
    }
}

impl NonlinearSystem<f64> for MexicanHatFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let (t, g) = Self::inner(x);
        f[0] = 2. * (1. - x[0]) + 2. * self.tau * t * g[0];
        f[1] = 2. * (1. - x[1]) + 2. * self.tau * t * g[1];
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
        let (t, g) = Self::inner(x);
        let h00 = 120000. * x[0] * x[0] - 40000. * x[1] + 2.;
        let h01 = -40000. * x[0];
        let h11 = 20000.;
        let tau2 = 2. * self.tau;
        let off = tau2 * (g[0] * g[1] + t * h01);
        jac.copy_from_slice(&[
            -2. + tau2 * (g[0] * g[0] + t * h00), off,
            off, -2. + tau2 * (g[1] * g[1] + t * h11),
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        3
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.copy_from_slice(&[0.86, 0.72]),
            1 => x.copy_from_slice(&[0.85858, 0.7371534]),
            _ => x.copy_from_slice(&[1.1414204, 1.3028457]),
        }
    }
}
