use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, eval_fk_by_f};

const BIBTEX: &str = "\
@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
}
";

/// Gradient of a radial function \\(\phi(r)\\), \\(r = \|x\|\\), given \\(\phi'(r)\\).
fn radial_gradient(x: &[f64], f: &mut[f64], d1: impl Fn(f64) -> f64)
{
    let r = x[0].hypot(x[1]);
    if r == 0. {
        f.fill(0.);
        return;
    }
    let g = d1(r) / r;
    f[0] = g * x[0];
    f[1] = g * x[1];
}

/// Hessian of a radial function given \\((\phi'(r), \phi''(r))\\), dense row-major.
fn radial_hessian(x: &[f64], jac: &mut[f64], d12: impl Fn(f64) -> (f64, f64))
{
    let r = x[0].hypot(x[1]);
    if r == 0. {
        jac.fill(0.);
        return;
    }
    let (d1, d2) = d12(r);
    let (u0, u1) = (x[0] / r, x[1] / r);
    let s = d1 / r;
    let t = d2 - s;
    jac.copy_from_slice(&[
        t * u0 * u0 + s, t * u0 * u1,
        t * u1 * u0, t * u1 * u1 + s,
    ]);
}

//

/// Gradient of Schaffer F6, \\(\phi(r) = (\sin^2 r - 1/2) / (1 + 10^{-3} r^2)^2\\).
pub struct SchafferF6
{
    base: ProbBase,
}

impl SchafferF6
{
    pub fn new() -> Self
    {
        SchafferF6 {
            base: ProbBase::new("Schaffer Function F6", BIBTEX, 2),
        }
    }

    /// Returns \\((A, A', A'')\\) of \\(A = (1 + 10^{-3} r^2)^{-2}\\).
    fn a(r: f64) -> (f64, f64, f64)
    {
        let q = 1. + 0.001 * r * r;
        (
            q.powi(-2),
            -0.004 * r / q.powi(3),
            -0.004 / q.powi(3) + 0.000024 * r * r / q.powi(4),
        )
    }

    /// Returns \\((B, B', B'')\\) of \\(B = \sin^2 r - 1/2\\).
    fn b(r: f64) -> (f64, f64, f64)
    {
        (r.sin().powi(2) - 0.5, (2. * r).sin(), 2. * (2. * r).cos())
    }
}

impl NonlinearSystem<f64> for SchafferF6
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        radial_gradient(x, f, |r| {
            let (a, ar, _) = Self::a(r);
            let (b, br, _) = Self::b(r);
            ar * b + a * br
        });
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
        radial_hessian(x, jac, |r| {
            let (a, ar, arr) = Self::a(r);
            let (b, br, brr) = Self::b(r);
            (ar * b + a * br, arr * b + 2. * ar * br + a * brr)
        });
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-5., 10.]);
    }
}

//

/// Gradient of Schaffer F7, \\(\phi(r) = \sqrt{r} (1 + \sin^2(50 r^{0.2}))\\).
pub struct SchafferF7
{
    base: ProbBase,
}

impl SchafferF7
{
    pub fn new() -> Self
    {
        SchafferF7 {
            base: ProbBase::new("Schaffer Function F7", BIBTEX, 2),
        }
    }

    fn a(r: f64) -> (f64, f64, f64)
    {
        let s = r.sqrt();
        (s, 0.5 / s, -0.25 / (s * r))
    }

    fn b(r: f64) -> (f64, f64, f64)
    {
        let p = r.powf(0.2);
        let (s, c) = (100. * p).sin_cos();
        (
            1. + (50. * p).sin().powi(2),
            10. * s * r.powf(-0.8),
            200. * c * r.powf(-1.6) - 8. * s * r.powf(-1.8),
        )
    }
}

impl NonlinearSystem<f64> for SchafferF7
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        radial_gradient(x, f, |r| {
            let (a, ar, _) = Self::a(r);
            let (b, br, _) = Self::b(r);
            ar * b + a * br
        });
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
        radial_hessian(x, jac, |r| {
            let (a, ar, arr) = Self::a(r);
            let (b, br, brr) = Self::b(r);
            (ar * b + a * br, arr * b + 2. * ar * br + a * brr)
        });
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-5., 10.]);
    }
}

//

#[test]
fn test_schaffer_f6_hessian1()
{
    use float_eq::assert_float_eq;

    let p = SchafferF6::new();
    let x = [0.7, -1.3];
    let mut jac = [0.; 4];
    p.jacobian(&x, &mut jac);

    let h = 1e-6;
    for c in 0.. 2 {
        let mut xp = x;
        let mut xm = x;
        xp[c] += h;
        xm[c] -= h;
        let (mut fp, mut fm) = ([0.; 2], [0.; 2]);
        p.eval_f(&xp, &mut fp);
        p.eval_f(&xm, &mut fm);
        for r in 0.. 2 {
            assert_float_eq!(jac[r * 2 + c], (fp[r] - fm[r]) / (2. * h), abs <= 1e-6);
        }
    }
}
