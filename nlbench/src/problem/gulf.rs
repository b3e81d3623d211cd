use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, check_domain, eval_fk_by_f};

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

const NPT: usize = 99;

/// Gradient of the Gulf research and development least squares
/// \\(\sum_i (e^{-(r_i - x_1)^{x_2} / x_0} - i/100)^2\\),
/// \\(r_i = 25 + (-50 \log(i/100))^{2/3}\\).
///
/// Residuals are `NaN` where \\(r_i \le x_1\\).
pub struct Gulf
{
    base: ProbBase,
    rr: [f64; NPT],
}

impl Gulf
{
    pub fn new() -> Self
    {
        let rr = std::array::from_fn(|i| {
            let arg = (i + 1) as f64 / 100.;
            (-50. * arg.ln()).powf(2. / 3.) + 25.
        });

        Gulf {
            base: ProbBase::new("Gulf R&D Function", BIBTEX, 3),
            rr,
        }
    }

    /// Residual at the `i`-th point with its gradient and Hessian.
    fn residual(&self, x: &[f64], i: usize) -> (f64, [f64; 3], [[f64; 3]; 3])
    {
        let r = self.rr[i] - x[1];
        if r <= 0. {
            return (f64::NAN, [f64::NAN; 3], [[f64::NAN; 3]; 3]);
        }

        let arg = (i + 1) as f64 / 100.;
        let (x0, x2) = (x[0], x[2]);
        let p = r.powf(x2);
        let e = (-p / x0).exp();
        let lr = r.ln();
        let x0sq = x0 * x0;
        let dp = p - x0;

        let g = [
            e * p / x0sq,
            e * x2 * p / (x0 * r),
            -e * lr * p / x0,
        ];

        let h01 = dp * e * x2 * p / (r * x0sq * x0);
        let h02 = -dp * e * lr * p / (x0sq * x0);
        let h12 = -(x2 * lr * dp - x0) * e * p / (x0sq * r);
        let h = [
            [(p - 2. * x0) * e * p / (x0sq * x0sq), h01, h02],
            [h01, (x2 * dp + x0) * e * x2 * p / (x0sq * r * r), h12],
            [h02, h12, dp * e * lr * lr * p / x0sq],
        ];

        (e - arg, g, h)
    }
}

impl NonlinearSystem<f64> for Gulf
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        f.fill(0.);
        for i in 0.. NPT {
            let (t, g, _) = self.residual(x, i);
            for (fk, gk) in f.iter_mut().zip(g) {
                *fk += t * gk;
            }
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
        jac.fill(0.);
        for i in 0.. NPT {
            let (t, g, h) = self.residual(x, i);
            for r in 0.. 3 {
                for c in 0.. 3 {
                    jac[r * 3 + c] += t * h[r][c] + g[r] * g[c];
                }
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[50., 25., 1.5]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[40., 20., 1.2]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        let title = self.base.title();
        check_domain(x[0] > 0., title, "x[0] must be > 0")?;
        check_domain(x[1] > 0., title, "x[1] must be > 0")?;
        check_domain(self.rr.iter().all(|&r| r >= x[1]), title, "r - x[1] must be >= 0")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.copy_from_slice(&[0., 0., -f64::MAX]);
        u.fill(f64::MAX);
    }
}
