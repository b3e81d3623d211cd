use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, check_domain, eval_fk_by_f};

const BIBTEX: &str = "\
@Article{Shan70,
  Title   = {Conditioning of quasi-{N}ewton methods for function minimization},
  Author  = {David F. Shanno},
  Journal = {Mathematics of Computation},
  Year    = {1970},
  Number  = {111},
  Pages   = {647--656},
  Volume  = {24}
}
";

const NPT: usize = 99;

/// Gradient of the least squares fit of \\(e^{-(y_k - x_2)^{x_1} / x_0}\\) to \\(z_k\\).
pub struct Weibull
{
    base: ProbBase,
    z: [f64; NPT],
    y: [f64; NPT],
}

/// Residual of one sample with its gradient and Hessian.
struct Sample
{
    r: f64,
    g: [f64; 3],
    h: [[f64; 3]; 3],
}

impl Weibull
{
    pub fn new() -> Self
    {
        let mut z = [0.; NPT];
        let mut y = [0.; NPT];
        for k in 0.. NPT {
            z[k] = (k + 1) as f64 * 0.01;
            y[k] = 25. + (50. * (1. / z[k]).ln()).powf(2. / 3.);
        }

        Weibull {
            base: ProbBase::new("Weibull function", BIBTEX, 3),
            z, y,
        }
    }

    fn sample(&self, x: &[f64], k: usize) -> Sample
    {
        let y2 = self.y[k] - x[2];
        let g = y2.powf(x[1]) / x[0];
        let e = (-g).exp();
        let fg = g * e;
        let fg_1 = (1. - g) * e;
        let lg = y2.ln();

        let g_x0 = -g / x[0];
        let g_x1 = g * lg;
        let g_x2 = -g * x[1] / y2;

        let h00 = (fg_1 * g_x0 - fg / x[0]) / x[0];
        let h01 = fg_1 * g_x1 / x[0];
        let h02 = fg_1 * g_x2 / x[0];
        let h11 = -fg_1 * g_x1 * lg;
        let h12 = fg / y2 - fg_1 * g_x2 * lg;
        let h22 = (fg_1 * g_x2 + fg / y2) * x[1] / y2;

        Sample {
            r: e - self.z[k],
            g: [fg / x[0], -fg * lg, fg * x[1] / y2],
            h: [
                [h00, h01, h02],
                [h01, h11, h12],
                [h02, h12, h22],
            ],
        }
    }
}

impl NonlinearSystem<f64> for Weibull
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        f.fill(0.);
        for k in 0.. NPT {
            let s = self.sample(x, k);
            for (fi, gi) in f.iter_mut().zip(&s.g) {
                *fi += s.r * gi;
            }
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        9
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(3);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.fill(0.);
        for k in 0.. NPT {
            let s = self.sample(x, k);
            for i in 0.. 3 {
                for j in 0.. 3 {
                    jac[3 * i + j] += s.r * s.h[i][j] + s.g[i] * s.g[j];
                }
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[50., 1.5, 25.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[250., 0.3, 5.]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[0] > 0., self.base.title(), "x[0] > 0")?;
        let y_min = self.y.iter().cloned().fold(f64::INFINITY, f64::min);
        check_domain(x[2] < y_min, self.base.title(), "x[2] below every sample")
    }
}
