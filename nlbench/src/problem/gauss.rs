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

const Y: [f64; 15] = [
    0.0009, 0.0044, 0.0175, 0.0540, 0.1295, 0.2420, 0.3521, 0.3989,
    0.3521, 0.2420, 0.1295, 0.0540, 0.0175, 0.0044, 0.0009,
];

/// Gradient of the Gaussian least squares \\(\sum_k (x_0 e^{-x_1 d_k^2 / 2} - y_k)^2\\),
/// \\(d_k = 3.5 - k/2 - x_2\\).
pub struct Gauss
{
    base: ProbBase,
}

impl Gauss
{
    pub fn new() -> Self
    {
        Gauss {
            base: ProbBase::new("Gaussian function", BIBTEX, 3),
        }
    }
}

impl NonlinearSystem<f64> for Gauss
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let (x1, x2, x3) = (x[0], x[1], x[2]);
        f.fill(0.);
        for (k, y) in Y.iter().enumerate() {
            let d = 3.5 - 0.5 * k as f64 - x3;
            let r = (-0.5 * x2 * d * d).exp();
            let t = x1 * r - y;
            f[0] += 2. * r * t;
            f[1] -= x1 * r * t * d * d;
            f[2] += 2. * x1 * x2 * r * t * d;
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

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (x1, x2, x3) = (x[0], x[1], x[2]);
        let (mut j11, mut j22, mut j33) = (0., 0., 0.);
        let (mut j21, mut j31, mut j32) = (0., 0., 0.);
        for (k, y) in Y.iter().enumerate() {
            let d = 3.5 - 0.5 * k as f64 - x3;
            let d2 = d * d;
            let arg = 0.5 * x2 * d2;
            let r = (-arg).exp();
            let t = x1 * r - y;
            let t1 = 2. * x1 * r - y;
            j11 += r * r;
            j22 += r * t1 * d2 * d2;
            j33 += r * (x2 * t1 * d2 - t);
            j21 -= r * t1 * d2;
            j31 += d * r * t1;
            j32 += d * r * (t - arg * t1);
        }
        j11 *= 2.;
        j22 *= 0.5 * x1;
        j33 *= 2. * x1 * x2;
        j31 *= 2. * x2;
        j32 *= 2. * x1;
        jac.copy_from_slice(&[
            j11, j21, j31,
            j21, j22, j32,
            j31, j32, j33,
        ]);
    }

    // stationary point, symmetric in x2
    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.39895613783875666, 1.0000190844878056, 0.]);
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
