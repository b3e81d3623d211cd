use std::f64::consts::PI;
use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

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

/// Gradient of the Easom function \\(-\cos x_0 \cos x_1 e^{-(x_0-\pi)^2-(x_1-\pi)^2}\\).
pub struct Easom
{
    base: ProbBase,
}

impl Easom
{
    pub fn new() -> Self
    {
        Easom {
            base: ProbBase::new("Easom Function", BIBTEX, 2),
        }
    }
}

/// \\(\sin a + 2(a-\pi)\cos a\\) and its derivative.
fn easom_factor(a: f64) -> (f64, f64)
{
    let (s, c) = a.sin_cos();
    (s + 2. * c * (a - PI), 3. * c - 2. * s * (a - PI))
}

impl NonlinearSystem<f64> for Easom
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let e = (-(x[0] - PI).powi(2) - (x[1] - PI).powi(2)).exp();
        let (a, b) = if k == 0 {(x[0], x[1])} else {(x[1], x[0])};
        b.cos() * easom_factor(a).0 * e
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
        let e = (-(x[0] - PI).powi(2) - (x[1] - PI).powi(2)).exp();
        let darg = [-2. * (x[0] - PI), -2. * (x[1] - PI)];
        for k in 0.. 2 {
            let (a, b) = (x[k], x[1 - k]);
            let (g, g1) = easom_factor(a);
            let f = b.cos() * g;
            // own variable, then the other one
            let da = b.cos() * g1 + f * darg[k];
            let db = -b.sin() * g + f * darg[1 - k];
            jac[2 * k + k] = da * e;
            jac[2 * k + 1 - k] = db * e;
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(PI);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.5, 1.]);
    }
}
