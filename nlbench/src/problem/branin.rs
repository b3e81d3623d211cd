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

/// Gradient of the Branin RCOS function
/// \\(a(x_2 - b x_1^2 + c x_1 - d)^2 + e(1 - f)\cos x_1 + e\\).
pub struct BraninRCOS
{
    base: ProbBase,
    a: f64,
    d: f64,
    e: f64,
    b: f64,
    c: f64,
    ff: f64,
}

impl BraninRCOS
{
    pub fn new() -> Self
    {
        BraninRCOS {
            base: ProbBase::new("BraninRCOS", BIBTEX, 2),
            a: 1.,
            d: 6.,
            e: 10.,
            b: 5.1 / (4. * PI * PI),
            c: 5. / PI,
            ff: 1. / (8. * PI),
        }
    }
}

impl NonlinearSystem<f64> for BraninRCOS
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2) = (x[0], x[1]);
        let r = 2. * self.a * (x2 - self.b * x1 * x1 + self.c * x1 - self.d);
        match k {
            0 => r * (self.c - 2. * self.b * x1) - self.e * (1. - self.ff) * x1.sin(),
            _ => r,
        }
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
        let (x1, x2) = (x[0], x[1]);
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let t = c - 2. * b * x1;
        let j11 = 2. * a * t * t
                - 4. * a * b * (x2 - b * x1 * x1 + c * x1 - d)
                - self.e * (1. - self.ff) * x1.cos();
        jac.copy_from_slice(&[j11, 2. * a * t, 2. * a * t, 2. * a]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        3
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.copy_from_slice(&[-PI, 12.275]),
            1 => x.copy_from_slice(&[PI, 2.275]),
            _ => x.copy_from_slice(&[3. * PI, 2.475]),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-1., 1.]);
    }
}
