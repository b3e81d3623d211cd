use std::f64::consts::PI;
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

/// Negated gradient of
/// \\(\frac1{1 + (x-y)^2} + \sin(\pi y z / 2) + e^{-v^2}\\), \\(v = (x+z)/y - 2\\),
/// maximized at \\((1,1,1)\\).
///
/// The exponential term is dropped on the plane \\(y = 0\\), where it vanishes in the limit.
pub struct Powell3D
{
    base: ProbBase,
}

impl Powell3D
{
    pub fn new() -> Self
    {
        Powell3D {
            base: ProbBase::new("Powell 3D Function", BIBTEX, 3),
        }
    }
}

impl NonlinearSystem<f64> for Powell3D
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, xv: &[f64], f: &mut[f64])
    {
        let (x, y, z) = (xv[0], xv[1], xv[2]);
        let t = x - y;
        let g = 2. * t / (1. + t * t).powi(2);
        let c = PI * (PI * y * z / 2.).cos() / 2.;
        f[0] = g;
        f[1] = -g - z * c;
        f[2] = -y * c;
        if y != 0. {
            let s = x + z;
            let v = s / y - 2.;
            let q = 2. * v * (-v * v).exp();
            f[0] += q / y;
            f[1] -= q * s / (y * y);
            f[2] += q / y;
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

    fn jacobian(&self, xv: &[f64], jac: &mut[f64])
    {
        let (x, y, z) = (xv[0], xv[1], xv[2]);
        let t = x - y;
        let r = 1. + t * t;
        let dg = (2. - 6. * t * t) / r.powi(3);
        let a = PI * y * z / 2.;
        let (sn, cs) = a.sin_cos();
        let yz = PI * (PI * y * z * sn - 2. * cs) / 4.;

        jac.copy_from_slice(&[
            dg, -dg, 0.,
            -dg, dg + PI * PI * z * z * sn / 4., yz,
            0., yz, PI * PI * y * y * sn / 4.,
        ]);

        if y != 0. {
            let s = x + z;
            let v = s / y - 2.;
            let w = (-v * v).exp();
            let q = 2. * v * w;
            let dq = 2. * w * (1. - 2. * v * v);
            let y2 = y * y;
            let xx = dq / y2;
            let xy = -dq * s / (y2 * y) - q / y2;
            let yy = dq * s * s / (y2 * y2) + 2. * q * s / (y2 * y);
            let add = [
                xx, xy, xx,
                xy, yy, xy,
                xx, xy, xx,
            ];
            for (j, a) in jac.iter_mut().zip(add) {
                *j += a;
            }
        }
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
        x.copy_from_slice(&[0., 1., 2.]);
    }
}
