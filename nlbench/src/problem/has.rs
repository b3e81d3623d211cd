//! Penalized Hock-Schittkowski problems
//!
//! Each system is the gradient of an objective plus a quadratic penalty
//! \\(\tau \sum_m c_m(x)^2\\) on constraints made into equalities with squared slack variables.
//! Hessians are assembled from the gradients and Hessians of the constraint terms.

use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::ValueFill;
use super::{ProbBase, check_domain, eval_fk_by_f, fill_rows, rows_nnz};

const HAS_BIBTEX: &str = "\
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

const HAS111_BIBTEX: &str = "\
@article{Shacham:1990,
  author  = {Shacham, Orit and Schacham, Mordechai},
  title   = {Finding Boundaries of the Domain of Definition
             for Functions Along a One-dimensional Ray},
  journal = {ACM Trans. Math. Softw.},
  year    = {1990},
  volume  = {16},
  number  = {3},
  pages   = {258--268},
  doi     = {10.1145/79505.79511},
}

@book{himmelblau:1972,
  author    = {Himmelblau, D.M.},
  title     = {Applied nonlinear programming},
  year      = {1972},
  publisher = {McGraw-Hill}
}
";

/// Adds \\(s (\nabla c \nabla c^T + c \nabla^2 c)\\) restricted to nonzero gradient entries.
fn add_gauss_newton<const N: usize>(h: &mut[[f64; N]; N], s: f64, c: f64, g: &[f64; N], hc: &[[f64; N]; N])
{
    for r in 0.. N {
        for k in 0.. N {
            h[r][k] += s * (g[r] * g[k] + c * hc[r][k]);
        }
    }
}

/// Writes values of a dense Hessian `h` at the positions of a row-wise pattern.
fn emit<const N: usize>(rows: &[&[usize]], h: &[[f64; N]; N], jac: &mut[f64])
{
    let mut v = ValueFill::new(jac);
    for (r, cols) in rows.iter().enumerate() {
        for &c in cols.iter() {
            v.push(h[r][c]);
        }
    }
}

const HAS64_ROWS: &[&[usize]] = &[
    &[0, 1, 2, 3, 4],
    &[0, 1, 2, 3, 5],
    &[0, 1, 2, 3, 6],
    &[0, 1, 2, 3],
    &[0, 4],
    &[1, 5],
    &[2, 6],
];

// slack variables are zero; for larger tau a double does not resolve the root
const HAS64_SOLUTIONS: [(f64, [f64; 3]); 4] = [
    (1e2, [6.681814179997022, 9.074510495626875, 12.995355396076109]),
    (1e4, [3.9001579154194763, 7.7092485438427305, 11.962907630149328]),
    (1e6, [3.8478310754103253, 7.694733977443615, 11.954518493019105]),
    (1e8, [3.8473008470633383, 7.69458911093649, 11.954435422989896]),
];

/// Hock-Schittkowski problem 64 with penalty weight \\(\tau\\).
///
/// Defined for \\(x_0, x_1, x_2 > 0\\), every component is `NaN` otherwise.
pub struct HAS64
{
    base: ProbBase,
    tau: f64,
}

impl HAS64
{
    pub fn new(tau: f64) -> Self
    {
        HAS64 {
            base: ProbBase::new(&format!("HAS 64, tau = {}", tau), HAS_BIBTEX, 7),
            tau,
        }
    }

    fn terms(&self, x: &[f64]) -> ([f64; 7], [[f64; 7]; 7])
    {
        let mut g = [0.; 7];
        let mut h = [[0.; 7]; 7];
        let tau = self.tau;

        for (i, (a, b)) in [(5., 50000.), (20., 72000.), (10., 144000.)].into_iter().enumerate() {
            g[i] = a - b / (x[i] * x[i]);
            h[i][i] = 2. * b / (x[i] * x[i] * x[i]);
        }

        for i in 0.. 3 {
            let s = x[i + 4];
            let d = x[i] - s * s - 1e-5;
            let mut gd = [0.; 7];
            let mut hd = [[0.; 7]; 7];
            gd[i] = 1.;
            gd[i + 4] = -2. * s;
            hd[i + 4][i + 4] = -2.;
            for k in 0.. 7 {
                g[k] += 2. * tau * d * gd[k];
            }
            add_gauss_newton(&mut h, 2. * tau, d, &gd, &hd);
        }

        let c = 1. - 4. / x[0] - 32. / x[1] - 120. / x[2] - x[3] * x[3];
        let mut gc = [0.; 7];
        let mut hc = [[0.; 7]; 7];
        for (i, a) in [4., 32., 120.].into_iter().enumerate() {
            gc[i] = a / (x[i] * x[i]);
            hc[i][i] = -2. * a / (x[i] * x[i] * x[i]);
        }
        gc[3] = -2. * x[3];
        hc[3][3] = -2.;
        for k in 0.. 7 {
            g[k] += 2. * tau * c * gc[k];
        }
        add_gauss_newton(&mut h, 2. * tau, c, &gc, &hc);

        (g, h)
    }
}

impl NonlinearSystem<f64> for HAS64
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        if x[.. 3].iter().any(|&v| v <= 0.) {
            f.fill(f64::NAN);
        }
        else {
            f.copy_from_slice(&self.terms(x).0);
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(HAS64_ROWS)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, HAS64_ROWS, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        emit(HAS64_ROWS, &self.terms(x).1, jac);
    }

    fn num_exact_solutions(&self) -> usize
    {
        if HAS64_SOLUTIONS.iter().any(|s| s.0 == self.tau) {1} else {0}
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        if let Some((_, sol)) = HAS64_SOLUTIONS.iter().find(|s| s.0 == self.tau) {
            x.fill(0.);
            x[.. 3].copy_from_slice(sol);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 1., 1., -10., -10., -10., -10.]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        let title = self.base.title();
        check_domain(x[0] > 0., title, "x[0] must be > 0")?;
        check_domain(x[1] > 0., title, "x[1] must be > 0")?;
        check_domain(x[2] > 0., title, "x[2] must be > 0")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-f64::MAX);
        l[.. 3].fill(0.);
        u.fill(f64::MAX);
    }
}

//

const HAS93_ROWS: &[&[usize]] = &[
    &[0, 1, 2, 3, 4, 5, 6, 7, 8],
    &[0, 1, 2, 3, 4, 5, 6, 7, 9],
    &[0, 1, 2, 3, 4, 5, 6, 7, 10],
    &[0, 1, 2, 3, 4, 5, 6, 7, 11],
    &[0, 1, 2, 3, 4, 5, 6, 7, 12],
    &[0, 1, 2, 3, 4, 5, 6, 7, 13],
    &[0, 1, 2, 3, 4, 5, 6],
    &[0, 1, 2, 3, 4, 5, 7],
    &[0, 8],
    &[1, 9],
    &[2, 10],
    &[3, 11],
    &[4, 12],
    &[5, 13],
];

/// Value, gradient and Hessian of
/// \\(A (a_0 + a_2 x_4^2) + B (b_0 + b_2 x_5^2)\\),
/// \\(A = x_0 x_3 (x_0 + x_1 + x_2)\\), \\(B = x_1 x_2 (x_0 + 1.57 x_1 + x_3)\\),
/// embedded in 14 unknowns.
fn transformer(x: &[f64], a0: f64, a2: f64, b0: f64, b2: f64) -> (f64, [f64; 14], [[f64; 14]; 14])
{
    let (x0, x1, x2, x3, x4, x5) = (x[0], x[1], x[2], x[3], x[4], x[5]);
    let s = x0 + x1 + x2;
    let u = x0 + 1.57 * x1 + x3;

    let a = x0 * x3 * s;
    let ga = [x3 * s + x0 * x3, x0 * x3, x0 * x3, x0 * s];
    let mut ha = [[0.; 4]; 4];
    ha[0][0] = 2. * x3;
    ha[0][1] = x3;
    ha[0][2] = x3;
    ha[0][3] = s + x0;
    ha[1][3] = x0;
    ha[2][3] = x0;

    let b = x1 * x2 * u;
    let gb = [x1 * x2, x2 * u + 1.57 * x1 * x2, x1 * u, x1 * x2];
    let mut hb = [[0.; 4]; 4];
    hb[1][1] = 2. * 1.57 * x2;
    hb[0][1] = x2;
    hb[0][2] = x1;
    hb[1][2] = u + 1.57 * x1;
    hb[1][3] = x2;
    hb[2][3] = x1;
    for r in 0.. 4 {
        for k in 0.. r {
            ha[r][k] = ha[k][r];
            hb[r][k] = hb[k][r];
        }
    }

    let p = a0 + a2 * x4 * x4;
    let q = b0 + b2 * x5 * x5;
    let (dp, dq) = (2. * a2 * x4, 2. * b2 * x5);

    let mut g = [0.; 14];
    let mut h = [[0.; 14]; 14];
    for r in 0.. 4 {
        g[r] = p * ga[r] + q * gb[r];
        for k in 0.. 4 {
            h[r][k] = p * ha[r][k] + q * hb[r][k];
        }
        h[r][4] = ga[r] * dp;
        h[4][r] = h[r][4];
        h[r][5] = gb[r] * dq;
        h[5][r] = h[r][5];
    }
    g[4] = a * dp;
    g[5] = b * dq;
    h[4][4] = 2. * a2 * a;
    h[5][5] = 2. * b2 * b;

    (a * p + b * q, g, h)
}

/// Hock-Schittkowski problem 93 (transformer design) with penalty weight \\(\tau\\).
pub struct HAS93
{
    base: ProbBase,
    tau: f64,
}

impl HAS93
{
    pub fn new(tau: f64) -> Self
    {
        HAS93 {
            base: ProbBase::new(&format!("HAS 93, tau = {}", tau), HAS_BIBTEX, 14),
            tau,
        }
    }

    fn terms(&self, x: &[f64]) -> ([f64; 14], [[f64; 14]; 14])
    {
        let tau = self.tau;
        let (_, mut g, mut h) = transformer(x, 0.0204, 0.0607, 0.0187, 0.0437);

        // volume constraint 0.001 x0 x1 x2 x3 x4 x5 - 2.07 - x6^2
        let prod = |skip: &[usize]| {
            (0.. 6).filter(|k| !skip.contains(k)).fold(1., |p, k| p * x[k])
        };
        let c1 = 0.001 * prod(&[]) - 2.07 - x[6] * x[6];
        let mut g1 = [0.; 14];
        let mut h1 = [[0.; 14]; 14];
        for r in 0.. 6 {
            g1[r] = 0.001 * prod(&[r]);
            for k in 0.. 6 {
                if k != r {
                    h1[r][k] = 0.001 * prod(&[r, k]);
                }
            }
        }
        g1[6] = -2. * x[6];
        h1[6][6] = -2.;

        // 1 - 0.00062 A x4^2 - 0.00058 B x5^2 - x7^2
        let (t, mut g2, mut h2) = transformer(x, 0., 0.00062, 0., 0.00058);
        let c2 = 1. - t - x[7] * x[7];
        for r in 0.. 14 {
            g2[r] = -g2[r];
            for k in 0.. 14 {
                h2[r][k] = -h2[r][k];
            }
        }
        g2[7] = -2. * x[7];
        h2[7][7] = -2.;

        for (c, gc, hc) in [(c1, &g1, &h1), (c2, &g2, &h2)] {
            for k in 0.. 14 {
                g[k] += 2. * tau * c * gc[k];
            }
            add_gauss_newton(&mut h, 2. * tau, c, gc, hc);
        }

        for i in 0.. 6 {
            let d = x[i] - x[i + 8];
            g[i] += 2. * tau * d;
            g[i + 8] -= 2. * tau * d;
            h[i][i] += 2. * tau;
            h[i + 8][i + 8] += 2. * tau;
            h[i][i + 8] -= 2. * tau;
            h[i + 8][i] -= 2. * tau;
        }

        (g, h)
    }
}

impl NonlinearSystem<f64> for HAS93
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        f.copy_from_slice(&self.terms(x).0);
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(HAS93_ROWS)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, HAS93_ROWS, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        emit(HAS93_ROWS, &self.terms(x).1, jac);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
        x[.. 6].copy_from_slice(&[5.54, 4.4, 12.02, 11.82, 0.702, 0.852]);
    }
}

//

const HAS111_C: [f64; 10] = [
    -6.089, -17.164, -34.054, -5.914, -24.721,
    -14.986, -24.100, -10.708, -26.662, -22.179,
];

/// Coefficients \\(a_{mj}\\) and right hand sides \\(b_m\\) of the constraints
/// \\(\sum_j a_{mj} e^{x_j} = b_m\\).
const HAS111_A: [([f64; 10], f64); 3] = [
    ([1., 2., 2., 0., 0., 1., 0., 0., 0., 1.], 2.),
    ([0., 0., 0., 1., 2., 1., 1., 0., 0., 0.], 1.),
    ([0., 0., 1., 0., 0., 0., 1., 1., 2., 1.], 1.),
];

/// Hock-Schittkowski problem 111 (chemical equilibrium) in logarithmic unknowns,
/// with penalty weight \\(10^4\\).
pub struct HAS111
{
    base: ProbBase,
    fact: f64,
}

impl HAS111
{
    pub fn new() -> Self
    {
        HAS111 {
            base: ProbBase::new("HAS111 function", HAS111_BIBTEX, 10),
            fact: 1e4,
        }
    }

    fn terms(&self, x: &[f64]) -> ([f64; 10], [[f64; 10]; 10])
    {
        let e: [f64; 10] = std::array::from_fn(|j| x[j].exp());
        let ss: f64 = e.iter().sum();
        let logss = ss.ln();

        let mut g = [0.; 10];
        let mut h = [[0.; 10]; 10];
        for i in 0.. 10 {
            let t = HAS111_C[i] + x[i] - logss;
            g[i] = e[i] * t;
            for k in 0.. 10 {
                h[i][k] = -e[i] * e[k] / ss;
            }
            h[i][i] += e[i] * (t + 1.);
        }

        for (a, b) in HAS111_A.iter() {
            let c = a.iter().zip(e.iter()).map(|(a, e)| a * e).sum::<f64>() - b;
            let gc: [f64; 10] = std::array::from_fn(|j| a[j] * e[j]);
            let mut hc = [[0.; 10]; 10];
            for j in 0.. 10 {
                hc[j][j] = gc[j];
                g[j] += 2. * self.fact * c * gc[j];
            }
            add_gauss_newton(&mut h, 2. * self.fact, c, &gc, &hc);
        }

        (g, h)
    }
}

impl NonlinearSystem<f64> for HAS111
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        f.copy_from_slice(&self.terms(x).0);
    }

    fn jacobian_nnz(&self) -> usize
    {
        100
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        nlbench_core::PatternFill::new(i, j).push_dense(10);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let h = self.terms(x).1;
        for (row, hr) in jac.chunks_exact_mut(10).zip(h.iter()) {
            row.copy_from_slice(hr);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        2
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x.fill(if idx == 0 {-2.} else {-0.5});
    }
}
