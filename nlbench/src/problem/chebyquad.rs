use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

const BIBTEX: &str = "\
@article {Fletcher:1965,
  author  = {Fletcher, R.},
  title   = {Function minimization without evaluating derivatives -- {A} review},
  journal = {The Computer Journal},
  year    = {1965},
  volume  = {8},
  pages   = {33--41},
  doi     = {10.1093/comjnl/8.1.33},
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

const MAX_N: usize = 9;

/// Chebyquad function
/// 
/// \\(F_k = \frac1n \sum_j T_{k+1}(x_j) + c_k\\) with the shifted Chebyshev polynomials
/// \\(T_m\\) on \\([0, 1]\\), where \\(c_k = 1 / ((k+1)^2 - 1)\\) for odd \\(k\\) and zero otherwise.
pub struct ChebyquadFunction
{
    base: ProbBase,
}

impl ChebyquadFunction
{
    /// * `n` is a number of equations from 1 to 9.
    pub fn new(n: usize) -> Self
    {
        assert!(n > 0 && n <= MAX_N, "ChebyquadFunction: dimension {} must be in 1..=9", n);

        ChebyquadFunction {
            base: ProbBase::new("Chebyquad function", BIBTEX, n),
        }
    }

    /// Fills `t[0..=n]` with the shifted Chebyshev polynomial values at `x`,
    /// and `dt` with their derivatives.
    fn chebyshev(&self, x: f64, t: &mut[f64; MAX_N + 1], dt: &mut[f64; MAX_N + 1])
    {
        t[0] = 1.;
        t[1] = 2. * x - 1.;
        dt[0] = 0.;
        dt[1] = 2.;
        for j in 1.. self.base.n() {
            t[j + 1] = 2. * t[1] * t[j] - t[j - 1];
            dt[j + 1] = 2. * t[1] * dt[j] - dt[j - 1] + 2. * dt[1] * t[j];
        }
    }
}

impl NonlinearSystem<f64> for ChebyquadFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        let mut t = [0.; MAX_N + 1];
        let mut dt = [0.; MAX_N + 1];
        let mut f = 0.;
        for &xj in x.iter() {
            self.chebyshev(xj, &mut t, &mut dt);
            f += t[k + 1];
        }
        f /= n as f64;
        if k % 2 == 1 {
            f += 1. / (((k + 1) * (k + 1)) as f64 - 1.);
        }
        f
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        n * n
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for c in 0.. n {
            for r in 0.. n {
                p.push(r, c);
            }
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut t = [0.; MAX_N + 1];
        let mut dt = [0.; MAX_N + 1];
        let mut v = ValueFill::new(jac);
        for &xj in x.iter() {
            self.chebyshev(xj, &mut t, &mut dt);
            for i in 0.. n {
                v.push(dt[i + 1] / n as f64);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        if self.base.n() == 8 {0} else {1}
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        let sol: &[f64] = match self.base.n() {
            1 => &[0.5],
            2 => &[0.2113248654051871, 0.7886751345948129],
            3 => &[0.1464466094067262, 0.5, 0.8535533905932737],
            4 => &[0.1026727638541169, 0.40620376295746, 0.5937962370425399, 0.8973272361458831],
            5 => &[0.08375125649950906, 0.3127292952232095, 0.5, 0.6872707047767905, 0.9162487435004909],
            6 => &[
                0.06687659094608972, 0.3666822992416476, 0.2887406731194442,
                0.7112593268805557, 0.6333177007583524, 0.9331234090539103,
            ],
            7 => &[
                0.0580691496209755, 0.2351716123574216, 0.3380440947400462, 0.5,
                0.6619559052599538, 0.7648283876425784, 0.9419308503790246,
            ],
            9 => &[
                0.04420534613578277, 0.199490672309881, 0.23561910847106,
                0.4160469078925981, 0.4999999999999999, 0.5839530921074021,
                0.76438089152894, 0.8005093276901191, 0.9557946538642172,
            ],
            _ => return,
        };
        x.copy_from_slice(sol);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n();
        for (i, e) in x.iter_mut().enumerate() {
            *e = (i + 1) as f64 / (n + 1) as f64;
        }
    }
}
