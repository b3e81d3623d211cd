//! Discretized two-point boundary value problems.

use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use crate::problem::{ProbBase, check_min_equations};
use super::{BIBTEX, band, neighbours, tables};

fn tridiagonal_nnz(n: usize) -> usize
{
    3 * n - 2
}

fn tridiagonal_pattern(n: usize, i: &mut[usize], j: &mut[usize])
{
    let mut p = PatternFill::new(i, j);
    for k in 0.. n {
        p.push_row(k, band(n, k, 1, 1));
    }
}

/// Pushes row `k` of a tridiagonal Jacobian, skipping entries beyond either end.
fn push_tridiagonal(v: &mut ValueFill<f64>, n: usize, k: usize, dm: f64, dc: f64, dp: f64)
{
    if k > 0 {
        v.push(dm);
    }
    v.push(dc);
    if k + 1 < n {
        v.push(dp);
    }
}

/// Mesh width and point `k` of `n` interior points on \\([0, 1]\\).
fn mesh(n: usize, k: usize) -> (f64, f64)
{
    let h = 1. / (n + 1) as f64;
    (h, (k + 1) as f64 * h)
}

//

/// Bratu problem \\(x_{k+1} - 2x_k + x_{k-1} - h^2 e^{x_k}\\) with zero boundary values.
pub struct RooseKullaLombMeressoo206
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo206
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo206 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.206", BIBTEX, n),
        }
    }

    fn h2(&self) -> f64
    {
        mesh(self.base.n(), 0).0.powi(2)
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo206
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (xm, xp) = neighbours(x, k, 0., 0.);
        xp - 2. * x[k] + xm - self.h2() * x[k].exp()
    }

    fn jacobian_nnz(&self) -> usize
    {
        tridiagonal_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        tridiagonal_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let h2 = self.h2();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            push_tridiagonal(&mut v, n, k, 1., -2. - h2 * x[k].exp(), 1.);
        }
    }

    tabulated_solutions!(tables::N206);

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

/// \\((3 - 0.1 x_k) x_k + 1 - x_{k-1} - 2x_{k+1}\\) with zero boundary values.
///
/// Has two roots, one with every component negative.
pub struct RooseKullaLombMeressoo207
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo207
{
    const GAMMA: f64 = 0.1;

    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo207 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.207", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo207
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (xm, xp) = neighbours(x, k, 0., 0.);
        (3. - Self::GAMMA * x[k]) * x[k] + 1. - xm - 2. * xp
    }

    fn jacobian_nnz(&self) -> usize
    {
        tridiagonal_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        tridiagonal_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            push_tridiagonal(&mut v, n, k, -1., 3. - 2. * Self::GAMMA * x[k], -2.);
        }
    }

    tabulated_solutions!(tables::N207);

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

/// \\(2x_k - x_{k-1} - x_{k+1} + h^2 (x_k + \sin x_k)\\) with boundary values 0 and 1.
pub struct RooseKullaLombMeressoo213
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo213
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo213 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.213", BIBTEX, n),
        }
    }

    fn h2(&self) -> f64
    {
        mesh(self.base.n(), 0).0.powi(2)
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo213
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (xm, xp) = neighbours(x, k, 0., 1.);
        2. * x[k] - xm - xp + self.h2() * (x[k] + x[k].sin())
    }

    fn jacobian_nnz(&self) -> usize
    {
        tridiagonal_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        tridiagonal_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let h2 = self.h2();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            push_tridiagonal(&mut v, n, k, -1., 2. + h2 * (1. + x[k].cos()), -1.);
        }
    }

    tabulated_solutions!(tables::N213);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }
}

//

/// \\(3x_k (x_{k-1} + x_{k+1} - 2x_k) + (x_{k+1} - x_{k-1})^2 / 4\\) with boundary values 0 and 20.
pub struct RooseKullaLombMeressoo217
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo217
{
    const LEFT: f64 = 0.;
    const RIGHT: f64 = 20.;

    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo217 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.217", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo217
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (xm, xp) = neighbours(x, k, Self::LEFT, Self::RIGHT);
        let d = xp - xm;
        3. * x[k] * (xm + xp - 2. * x[k]) + 0.25 * d * d
    }

    fn jacobian_nnz(&self) -> usize
    {
        tridiagonal_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        tridiagonal_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            let (xm, xp) = neighbours(x, k, Self::LEFT, Self::RIGHT);
            let d = 0.5 * (xp - xm);
            push_tridiagonal(&mut v, n, k,
                3. * x[k] - d,
                3. * (xm + xp) - 12. * x[k],
                3. * x[k] + d,
            );
        }
    }

    tabulated_solutions!(tables::N217);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(10.);
    }
}

//

/// Discrete boundary value function
/// \\(2x_k - x_{k-1} - x_{k+1} + h^2 (x_k + t_k + 1)^3 / 2\\) with zero boundary values.
pub struct RooseKullaLombMeressoo218
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo218
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo218 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.218", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo218
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (xm, xp) = neighbours(x, k, 0., 0.);
        let (h, t) = mesh(self.base.n(), k);
        2. * x[k] - xm - xp + 0.5 * h * h * (x[k] + t + 1.).powi(3)
    }

    fn jacobian_nnz(&self) -> usize
    {
        tridiagonal_nnz(self.base.n())
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        tridiagonal_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            let (h, t) = mesh(n, k);
            push_tridiagonal(&mut v, n, k, -1., 2. + 1.5 * h * h * (x[k] + t + 1.).powi(2), -1.);
        }
    }

    tabulated_solutions!(tables::N218);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n();
        for (k, xk) in x.iter_mut().enumerate() {
            let t = mesh(n, k).1;
            *xk = t * (t - 1.);
        }
    }
}

//

/// Discrete integral equation function, the dense counterpart of
/// [`RooseKullaLombMeressoo218`].
pub struct RooseKullaLombMeressoo219
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo219
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo219 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.219", BIBTEX, n),
        }
    }

    fn cube(x: f64, t: f64) -> f64
    {
        (x + t + 1.).powi(3)
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo219
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        let (h, tk) = mesh(n, k);

        let mut lower = 0.;
        let mut upper = 0.;
        for (j, &xj) in x.iter().enumerate() {
            let tj = mesh(n, j).1;
            if j <= k {
                lower += tj * Self::cube(xj, tj);
            }
            else {
                upper += (1. - tj) * Self::cube(xj, tj);
            }
        }

        x[k] + 0.5 * h * ((1. - tk) * lower + tk * upper)
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
        for k in 0.. n {
            let (h, tk) = mesh(n, k);
            for (j, &xj) in x.iter().enumerate() {
                let tj = mesh(n, j).1;
                let w = if j <= k {(1. - tk) * tj} else {tk * (1. - tj)};
                let d = 1.5 * h * w * (xj + tj + 1.).powi(2);
                v.push(if j == k {1. + d} else {d});
            }
        }
    }

    tabulated_solutions!(tables::N219);

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n();
        for (k, xk) in x.iter_mut().enumerate() {
            let t = mesh(n, k).1;
            *xk = t * (t - 1.);
        }
    }
}
