use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, eval_fk_by_f};

const BIBTEX: &str = "\
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

/// Gradient of
/// \\((e^{x_0} - x_1)^4 + 100(x_1 - x_2)^6 + \tan^4(x_2 - x_3) + x_0^8\\).
///
/// Each term couples neighbours only, so the Jacobian is tridiagonal.
pub struct MieleAndCantrellFunction
{
    base: ProbBase,
}

impl MieleAndCantrellFunction
{
    pub fn new() -> Self
    {
        MieleAndCantrellFunction {
            base: ProbBase::new("Miele and Cantrell function", BIBTEX, 4),
        }
    }

    /// Gradient and Hessian, dense 4x4.
    fn derivatives(x: &[f64]) -> ([f64; 4], [[f64; 4]; 4])
    {
        let mut g = [0.; 4];
        let mut h = [[0.; 4]; 4];

        g[0] = 8. * x[0].powi(7);
        h[0][0] = 56. * x[0].powi(6);

        let e = x[0].exp();
        let t = e - x[1];
        let tmp = 4. * t.powi(3);
        g[0] += tmp * e;
        g[1] -= tmp;
        let tte = t * t * e;
        h[0][0] += 4. * tte * (4. * e - x[1]);
        h[0][1] -= 12. * tte;
        h[1][0] -= 12. * tte;
        h[1][1] += 12. * t * t;

        let d = x[1] - x[2];
        let tmp = 600. * d.powi(5);
        g[1] += tmp;
        g[2] -= tmp;
        let tmp = 3000. * d.powi(4);
        h[1][1] += tmp;
        h[1][2] -= tmp;
        h[2][1] -= tmp;
        h[2][2] += tmp;

        let t = (x[2] - x[3]).tan();
        let t2 = t * t;
        let tmp = 4. * t2 * t * (1. + t2);
        g[2] += tmp;
        g[3] -= tmp;
        let tmp = ((20. * t2 + 32.) * t2 + 12.) * t2;
        h[2][2] += tmp;
        h[2][3] -= tmp;
        h[3][2] -= tmp;
        h[3][3] += tmp;

        (g, h)
    }
}

impl NonlinearSystem<f64> for MieleAndCantrellFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let (g, _) = Self::derivatives(x);
        f.copy_from_slice(&g);
    }

    fn jacobian_nnz(&self) -> usize
    {
        10
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for r in 0.. 4 {
            p.push_row(r, r.saturating_sub(1)..= (r + 1).min(3));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (_, h) = Self::derivatives(x);
        let mut v = ValueFill::new(jac);
        for r in 0_usize.. 4 {
            for c in r.saturating_sub(1)..= (r + 1).min(3) {
                v.push(h[r][c]);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., 1., 1., 1.]);
    }

    fn num_initial_points(&self) -> usize
    {
        2
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.copy_from_slice(&[10., -10., -10., -10.]),
            _ => x.copy_from_slice(&[1., 2., 2., 2.]),
        }
    }
}
