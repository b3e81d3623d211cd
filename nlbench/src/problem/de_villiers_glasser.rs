use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, check_domain};

const BIBTEX: &str = "\
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

const NPT: usize = 24;

/// Gradient \\(\sum_k r_k \nabla r_k\\) and its Jacobian \\(\sum_k r_k \nabla^2 r_k + \nabla r_k \nabla r_k^T\\)
/// of a least squares with `N` parameters, given each residual with its derivatives.
fn least_squares_gradient<const N: usize, M>(model: M, k: usize) -> f64
where M: Fn(usize, &mut[f64; N], &mut[[f64; N]; N]) -> f64
{
    let mut g = [0.; N];
    let mut h = [[0.; N]; N];
    (0.. NPT).fold(0., |s, p| s + model(p, &mut g, &mut h) * g[k])
}

fn least_squares_jacobian<const N: usize, M>(model: M, jac: &mut[f64])
where M: Fn(usize, &mut[f64; N], &mut[[f64; N]; N]) -> f64
{
    let mut g = [0.; N];
    let mut h = [[0.; N]; N];
    jac.fill(0.);
    for p in 0.. NPT {
        let r = model(p, &mut g, &mut h);
        for a in 0.. N {
            for b in 0.. N {
                jac[a * N + b] += r * h[a][b] + g[a] * g[b];
            }
        }
    }
}

fn check_box(x: &[f64], title: &str) -> Result<(), ProblemError>
{
    check_domain(x[1] > 0., title, "x[1] <= 0")?;
    check_domain(x.iter().all(|v| v.abs() <= 500.), title, "x out of [-500,500]")
}

fn fill_box(l: &mut[f64], u: &mut[f64])
{
    l.fill(-500.);
    l[1] = 0.;
    u.fill(500.);
}

/// De Villiers and Glasser problem #1, the least squares fit of
/// \\(x_0 x_1^t \sin(x_2 t + x_3)\\) solved through its gradient.
pub struct DeVilliersGlasser01
{
    base: ProbBase,
    t: [f64; NPT],
    y: [f64; NPT],
}

impl DeVilliersGlasser01
{
    pub fn new() -> Self
    {
        let mut t = [0.; NPT];
        let mut y = [0.; NPT];
        for i in 0.. NPT {
            t[i] = i as f64 / 10.;
            y[i] = 60.137 * 1.371_f64.powf(t[i]) * (3.112 * t[i] + 1.761).sin();
        }

        DeVilliersGlasser01 {
            base: ProbBase::new("De Villiers Glasser Problem #1", BIBTEX, 4),
            t, y,
        }
    }

    fn model(&self, x: &[f64], k: usize, g: &mut[f64; 4], h: &mut[[f64; 4]; 4]) -> f64
    {
        let t = self.t[k];
        let s = (x[2] * t + x[3]).sin();
        let c = (x[2] * t + x[3]).cos();
        let pw = x[1].powf(t);
        let pw1 = x[1].powf(t - 1.) * t;
        let pw2 = x[1].powf(t - 2.) * t * (t - 1.);

        *g = [s * pw, s * x[0] * pw1, c * t * x[0] * pw, c * x[0] * pw];
        *h = [
            [0., s * pw1, c * pw * t, c * pw],
            [s * pw1, s * x[0] * pw2, c * x[0] * pw1 * t, c * x[0] * pw1],
            [c * pw * t, c * x[0] * pw1 * t, -s * t * t * x[0] * pw, -s * t * x[0] * pw],
            [c * pw, c * x[0] * pw1, -s * t * x[0] * pw, -s * x[0] * pw],
        ];

        x[0] * pw * s - self.y[k]
    }
}

impl NonlinearSystem<f64> for DeVilliersGlasser01
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if x[1] <= 0. {
            return f64::NAN;
        }
        least_squares_gradient::<4, _>(|p, g, h| self.model(x, p, g, h), k)
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
        least_squares_jacobian::<4, _>(|p, g, h| self.model(x, p, g, h), jac);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 8., 4., 4.412]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_box(x, self.base.title())
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        fill_box(l, u);
    }
}

//

/// De Villiers and Glasser problem #2, the least squares fit of
/// \\(x_0 x_1^t \tanh(x_2 t + \sin x_3 t) \cos(e^{x_4} t)\\) solved through its gradient.
pub struct DeVilliersGlasser02
{
    base: ProbBase,
    t: [f64; NPT],
    y: [f64; NPT],
}

impl DeVilliersGlasser02
{
    pub fn new() -> Self
    {
        let mut t = [0.; NPT];
        let mut y = [0.; NPT];
        for i in 0.. NPT {
            t[i] = i as f64 / 10.;
            y[i] = 53.81 * 1.27_f64.powf(t[i])
                 * (3.012 * t[i] + (2.13 * t[i]).sin()).tanh()
                 * (0.507_f64.exp() * t[i]).cos();
        }

        DeVilliersGlasser02 {
            base: ProbBase::new("De Villiers Glasser Problem #2", BIBTEX, 5),
            t, y,
        }
    }

    /// The residual is a product of the factors \\(x_0\\), \\(P(x_1)\\), \\(T(x_2, x_3)\\) and \\(C(x_4)\\).
    fn model(&self, x: &[f64], k: usize, g: &mut[f64; 5], h: &mut[[f64; 5]; 5]) -> f64
    {
        let t = self.t[k];
        let a = x[0];

        let p = x[1].powf(t);
        let p1 = t * x[1].powf(t - 1.);
        let p11 = t * (t - 1.) * x[1].powf(t - 2.);

        let arg = x[2] * t + (x[3] * t).sin();
        let th = arg.tanh();
        let sech2 = 1. / arg.cosh().powi(2);
        let c3 = (x[3] * t).cos();
        let t2 = t * sech2;
        let t3 = t * c3 * sech2;
        let t22 = -2. * t * t * sech2 * th;
        let t23 = t22 * c3;
        let t33 = -t * t * (x[3] * t).sin() * sech2 + t22 * c3 * c3;

        let e4 = x[4].exp();
        let cc = (e4 * t).cos();
        let sc = (e4 * t).sin();
        let c4 = -t * e4 * sc;
        let c44 = -t * e4 * (sc + t * e4 * cc);

        *g = [p * th * cc, a * p1 * th * cc, a * p * t2 * cc, a * p * t3 * cc, a * p * th * c4];
        *h = [
            [0., p1 * th * cc, p * t2 * cc, p * t3 * cc, p * th * c4],
            [p1 * th * cc, a * p11 * th * cc, a * p1 * t2 * cc, a * p1 * t3 * cc, a * p1 * th * c4],
            [p * t2 * cc, a * p1 * t2 * cc, a * p * t22 * cc, a * p * t23 * cc, a * p * t2 * c4],
            [p * t3 * cc, a * p1 * t3 * cc, a * p * t23 * cc, a * p * t33 * cc, a * p * t3 * c4],
            [p * th * c4, a * p1 * th * c4, a * p * t2 * c4, a * p * t3 * c4, a * p * th * c44],
        ];

        a * p * th * cc - self.y[k]
    }
}

impl NonlinearSystem<f64> for DeVilliersGlasser02
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if x[1] <= 0. {
            return f64::NAN;
        }
        least_squares_gradient::<5, _>(|p, g, h| self.model(x, p, g, h), k)
    }

    fn jacobian_nnz(&self) -> usize
    {
        25
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(5);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        least_squares_jacobian::<5, _>(|p, g, h| self.model(x, p, g, h), jac);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[45., 2., 2.5, 1.5, 0.9]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_box(x, self.base.title())
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        fill_box(l, u);
    }
}
