use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

const BIBTEX: &str = "\
@Article{Gheri1971,
  author  = {Gheri, G. and Mancino, O. G.},
  title   = {A significant example to test methods for
             solving systems of nonlinear equations},
  journal = {CALCOLO},
  year    = {1971},
  volume  = {8},
  number  = {1},
  pages   = {107--113},
  doi     = {10.1007/BF02575578}
}
";

const ALPHA: i32 = 7;
const BETA: f64 = 17.;
const GAMMA: i32 = 4;

/// \\(f_i = \beta n x_i + (i + 1 - n/2)^\gamma
/// + \sum_{j \ne i} z_{ij} (\sin^\alpha \log z_{ij} + \cos^\alpha \log z_{ij})\\),
/// \\(z_{ij} = \sqrt{x_j^2 + (i+1)/(j+1)}\\).
pub struct GheriMancino
{
    base: ProbBase,
}

impl GheriMancino
{
    pub fn new(n: usize) -> Self
    {
        GheriMancino {
            base: ProbBase::new("Gheri-Mancino function", BIBTEX, n),
        }
    }

    fn z(i: usize, j: usize, xj: f64) -> f64
    {
        (xj * xj + (i + 1) as f64 / (j + 1) as f64).sqrt()
    }

    /// \\(z (\sin^\alpha \log z + \cos^\alpha \log z)\\)
    fn zterm(z: f64) -> f64
    {
        let (s, c) = z.ln().sin_cos();
        z * (s.powi(ALPHA) + c.powi(ALPHA))
    }
}

impl NonlinearSystem<f64> for GheriMancino
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        let n = self.base.n();
        let f = BETA * n as f64 * x[i] + ((i + 1) as f64 - 0.5 * n as f64).powi(GAMMA);
        x.iter().enumerate()
            .filter(|&(j, _)| j != i)
            .fold(f, |f, (j, &xj)| f + Self::zterm(Self::z(i, j, xj)))
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
            for (j, &xj) in x.iter().enumerate() {
                if i == j {
                    v.push(BETA * n as f64);
                }
                else {
                    let z = Self::z(i, j, xj);
                    let (s, c) = z.ln().sin_cos();
                    let a = ALPHA as f64;
                    let dz = xj / z;
                    v.push(dz * (s.powi(ALPHA) + c.powi(ALPHA))
                         + a * (s.powi(ALPHA - 1) * c - c.powi(ALPHA - 1) * s) * dz);
                }
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n();
        let nf = n as f64;
        let a = (ALPHA + 1) as f64;
        let c = BETA * nf - a * (nf - 1.);
        let k = BETA * nf + a * (nf - 1.);
        for (i, xi) in x.iter_mut().enumerate() {
            let s = (0.. n).filter(|&j| j != i)
                .fold((i as f64 + 0.5 * nf) * GAMMA as f64, |s, j| s + Self::zterm(Self::z(i, j, 0.)));
            *xi = -s * (c + k) / (2. * k);
        }
    }
}
