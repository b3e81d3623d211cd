//! Problems coupling every unknown, or a wide band of them, into each equation.

use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use crate::problem::{ProbBase, check_domain, check_min_equations, eval_fk_by_f};
use super::{BIBTEX, band, tabulated, tables};

fn dense_nnz(n: usize) -> usize
{
    n * n
}

fn band_nnz(n: usize, below: usize, above: usize) -> usize
{
    (0.. n).map(|k| band(n, k, below, above).count()).sum()
}

fn band_pattern(n: usize, below: usize, above: usize, i: &mut[usize], j: &mut[usize])
{
    let mut p = PatternFill::new(i, j);
    for k in 0.. n {
        p.push_row(k, band(n, k, below, above));
    }
}

fn sum_cubes(x: &[f64]) -> f64
{
    x.iter().map(|v| v.powi(3)).sum()
}

//

/// Brown almost-linear function:
/// \\(x_k - (n + 1) + \sum_i x_i\\) for all but the last equation, and \\(\prod_i x_i - 1\\).
pub struct RooseKullaLombMeressoo203
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo203
{
    /// * `n` shall be at least 2.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        RooseKullaLombMeressoo203 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.203", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo203
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k + 1 < n {
            x[k] - (n + 1) as f64 + x.iter().sum::<f64>()
        }
        else {
            x.iter().product::<f64>() - 1.
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        dense_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n - 1 {
            for c in 0.. n {
                v.push(if c == k {2.} else {1.});
            }
        }
        for c in 0.. n {
            let p: f64 = x.iter().enumerate()
                .filter(|(i, _)| *i != c)
                .map(|(_, xi)| xi)
                .product();
            v.push(p);
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        tabulated(tables::N203, self.base.n()).len().max(1)
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        match tabulated(tables::N203, self.base.n()).get(idx) {
            Some(s) => x.copy_from_slice(s),
            None => x.fill(1.),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.5);
    }
}

//

/// \\(x_k - (\sum_i x_i^3 + k + 1) / 2n\\).
pub struct RooseKullaLombMeressoo205
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo205
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo205 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.205", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo205
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n() as f64;
        x[k] - (sum_cubes(x) + (k + 1) as f64) / (2. * n)
    }

    fn jacobian_nnz(&self) -> usize
    {
        dense_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            for (c, xc) in x.iter().enumerate() {
                let d = -1.5 * xc * xc / n as f64;
                v.push(if c == k {1. + d} else {d});
            }
        }
    }

    tabulated_solutions!(tables::N205);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.5);
    }
}

//

/// \\((1 + x_k^2) x_k + 1 - \sum x_i (1 + x_i)\\), summing over \\(0 < |i - k| \le 3\\).
pub struct RooseKullaLombMeressoo208
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo208
{
    const R: usize = 3;

    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo208 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.208", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo208
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let s: f64 = band(self.base.n(), k, Self::R, Self::R)
            .filter(|&i| i != k)
            .map(|i| x[i] * (1. + x[i]))
            .sum();

        (1. + x[k] * x[k]) * x[k] + 1. - s
    }

    fn jacobian_nnz(&self) -> usize
    {
        band_nnz(self.base.n(), Self::R, Self::R)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        band_pattern(self.base.n(), Self::R, Self::R, i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            for c in band(n, k, Self::R, Self::R) {
                v.push(if c == k {1. + 3. * x[c] * x[c]} else {-1. - 2. * x[c]});
            }
        }
    }

    tabulated_solutions!(tables::N208);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(-1.);
    }
}

//

/// \\(e^{\cos((k + 1) \sum_i x_i)} - 1\\), which has no root.
pub struct RooseKullaLombMeressoo210
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo210
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo210 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.210", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo210
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let a = (k + 1) as f64 * x.iter().sum::<f64>();
        a.cos().exp() - 1.
    }

    fn jacobian_nnz(&self) -> usize
    {
        dense_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let s: f64 = x.iter().sum();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            let m = (k + 1) as f64;
            let d = -m * (m * s).sin() * (m * s).cos().exp();
            for _ in 0.. n {
                v.push(d);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }
}

//

/// \\((\sum_i x_i^3 + k + 1) / 2n\\), which has no root.
pub struct RooseKullaLombMeressoo211
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo211
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo211 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.211", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo211
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n() as f64;
        (sum_cubes(x) + (k + 1) as f64) / (2. * n)
    }

    fn jacobian_nnz(&self) -> usize
    {
        dense_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for _ in 0.. n {
            for xc in x {
                v.push(1.5 * xc * xc / n as f64);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }
}

//

/// \\(x_k (2 + 5x_k^2) + 1 - \sum (x_i + x_i^2)\\), summing over \\(k - 5 \le i \le k + 1,\ i \ne k\\).
pub struct RooseKullaLombMeressoo214
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo214
{
    const BELOW: usize = 5;
    const ABOVE: usize = 1;

    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo214 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.214", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo214
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let s: f64 = band(self.base.n(), k, Self::BELOW, Self::ABOVE)
            .filter(|&i| i != k)
            .map(|i| x[i] * (1. + x[i]))
            .sum();

        x[k] * (2. + 5. * x[k] * x[k]) + 1. - s
    }

    fn jacobian_nnz(&self) -> usize
    {
        band_nnz(self.base.n(), Self::BELOW, Self::ABOVE)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        band_pattern(self.base.n(), Self::BELOW, Self::ABOVE, i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            for c in band(n, k, Self::BELOW, Self::ABOVE) {
                v.push(if c == k {2. + 15. * x[c] * x[c]} else {-1. - 2. * x[c]});
            }
        }
    }

    tabulated_solutions!(tables::N214);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(-1.);
    }
}

//

/// Gradient of the Watson least-squares function.
///
/// Residuals are \\(r_k = \sum_{i \ge 1} i x_i g_k^{i-1} - (\sum_i x_i g_k^i)^2 - 1\\)
/// with \\(g_k = (k + 1) / 29\\) for \\(k < 29\\), plus \\(x_0\\) and \\(x_1 - x_0^2 - 1\\).
pub struct RooseKullaLombMeressoo215
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo215
{
    const M: usize = 29;

    /// * `n` shall be at least 2.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        RooseKullaLombMeressoo215 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.215", BIBTEX, n),
        }
    }

    /// Returns the powers \\(g^i\\), the residual and its gradient at node `k`.
    fn residual(x: &[f64], k: usize) -> (Vec<f64>, f64, Vec<f64>)
    {
        let g = (k + 1) as f64 / Self::M as f64;

        let mut pow = vec![1.; x.len()];
        for i in 1.. x.len() {
            pow[i] = pow[i - 1] * g;
        }

        let s: f64 = x.iter().zip(&pow).map(|(xi, gi)| xi * gi).sum();
        let ds: f64 = (1.. x.len()).map(|i| i as f64 * x[i] * pow[i - 1]).sum();
        let r = ds - s * s - 1.;

        let a = (0.. x.len())
            .map(|i| if i == 0 {-2. * s} else {i as f64 * pow[i - 1] - 2. * s * pow[i]})
            .collect();

        (pow, r, a)
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo215
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        f.fill(0.);
        for k in 0.. Self::M {
            let (_, r, a) = Self::residual(x, k);
            for (fi, ai) in f.iter_mut().zip(&a) {
                *fi += r * ai;
            }
        }

        let r = x[1] - x[0] * x[0] - 1.;
        f[0] += x[0] - 2. * x[0] * r;
        f[1] += r;
    }

    fn jacobian_nnz(&self) -> usize
    {
        dense_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        jac.fill(0.);
        for k in 0.. Self::M {
            let (pow, r, a) = Self::residual(x, k);
            for i in 0.. n {
                for j in 0.. n {
                    jac[i * n + j] += a[i] * a[j] - 2. * r * pow[i] * pow[j];
                }
            }
        }

        let r = x[1] - x[0] * x[0] - 1.;
        jac[0] += 1. + 4. * x[0] * x[0] - 2. * r;
        jac[1] -= 2. * x[0];
        jac[n] -= 2. * x[0];
        jac[n + 1] += 1.;
    }

    tabulated_solutions!(tables::N215);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }
}

//

/// Chebyquad: shifted Chebyshev moments of the points \\(x_j\\) matched with the integrals over \\([0, 1]\\).
///
/// Roots exist for \\(n \le 7\\) and \\(n = 9\\) only.
pub struct RooseKullaLombMeressoo216
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo216
{
    /// * `n` shall be at most 7, or 9.
    pub fn new(n: usize) -> Self
    {
        assert!((1..= 7).contains(&n) || n == 9, "number of equations {} has no root", n);

        RooseKullaLombMeressoo216 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.216", BIBTEX, n),
        }
    }

    /// Returns \\(T_m(2x - 1)\\) and its derivative in \\(x\\) for \\(m = 1, \ldots, n\\).
    fn chebyshev(x: f64, n: usize) -> (Vec<f64>, Vec<f64>)
    {
        let y = 2. * x - 1.;
        let mut t = vec![y; n];
        let mut d = vec![2.; n];
        // T_0 = 1, T_0' = 0
        let (mut t_prev, mut d_prev) = (1., 0.);
        for m in 1.. n {
            let tm = 2. * y * t[m - 1] - t_prev;
            let dm = 4. * t[m - 1] + 2. * y * d[m - 1] - d_prev;
            t_prev = t[m - 1];
            d_prev = d[m - 1];
            t[m] = tm;
            d[m] = dm;
        }
        (t, d)
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo216
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let n = self.base.n();
        f.fill(0.);
        for &xj in x {
            let (t, _) = Self::chebyshev(xj, n);
            for (fk, tk) in f.iter_mut().zip(&t) {
                *fk += tk / n as f64;
            }
        }
        for (k, fk) in f.iter_mut().enumerate() {
            if k % 2 == 1 {
                let m = (k + 1) as f64;
                *fk += 1. / (m * m - 1.);
            }
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        dense_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        for (j, &xj) in x.iter().enumerate() {
            let (_, d) = Self::chebyshev(xj, n);
            for (k, dk) in d.iter().enumerate() {
                jac[k * n + j] = dk / n as f64;
            }
        }
    }

    tabulated_solutions!(tables::N216);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n();
        for (k, xk) in x.iter_mut().enumerate() {
            *xk = (k + 1) as f64 / (n + 1) as f64;
        }
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|&v| v > 0.), self.base.title(), "x must be positive")
    }
}
