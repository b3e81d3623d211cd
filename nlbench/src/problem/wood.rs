use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, eval_fk_by_f};

const BIBTEX: &str = "\
@book{Colville:1968,
  author = {Colville, A.R.},
  title  = {A Comparative Study on Nonlinear Programming Codes},
  year   = {1968},
  notes  = {Rep. 320-2949, New York Scientific Center}
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

/// Gradient of \\(\frac12 \sum_i t_i(x)^2\\) over the six Wood residuals.
pub struct WoodFunction
{
    base: ProbBase,
}

impl WoodFunction
{
    pub fn new() -> Self
    {
        WoodFunction {
            base: ProbBase::new("Wood function", BIBTEX, 4),
        }
    }

    /// Residuals \\(t_i\\) with their gradients.
    fn terms(x: &[f64]) -> [(f64, [f64; 4]); 6]
    {
        let s10 = 10f64.sqrt();
        let s01 = 0.1f64.sqrt();
        [
            (10. * (x[1] - x[0] * x[0]), [-20. * x[0], 10., 0., 0.]),
            (1. - x[0], [-1., 0., 0., 0.]),
            (3. * s10 * (x[3] - x[2] * x[2]), [0., 0., -6. * s10 * x[2], 3. * s10]),
            (1. - x[2], [0., 0., -1., 0.]),
            (s10 * (x[1] + x[3] - 2.), [0., s10, 0., s10]),
            (s01 * (x[1] - x[3]), [0., s01, 0., -s01]),
        ]
    }
}

impl NonlinearSystem<f64> for WoodFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        f.fill(0.);
        for (t, g) in Self::terms(x) {
            for (fi, gi) in f.iter_mut().zip(g) {
                *fi += t * gi;
            }
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        16
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(4);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.fill(0.);
        let terms = Self::terms(x);
        for (_, g) in &terms {
            for i in 0.. 4 {
                for j in 0.. 4 {
                    jac[4 * i + j] += g[i] * g[j];
                }
            }
        }
        // only the two quadratic residuals have curvature
        jac[0] += terms[0].0 * -20.;
        jac[10] += terms[2].0 * -6. * 10f64.sqrt();
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
        x.copy_from_slice(&[-3., -1., -3., -1.]);
    }
}
