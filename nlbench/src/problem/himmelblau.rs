use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@book{himmelblau:1972,
  author    = {Himmelblau, D.M.},
  title     = {Applied nonlinear programming},
  year      = {1972},
  publisher = {McGraw-Hill}
}

@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
}
";

/// Gradient of \\((x_0^2 + x_1 - 11)^2 + (x_0 + x_1^2 - 7)^2\\).
pub struct Himmelblau
{
    base: ProbBase,
}

impl Himmelblau
{
    pub fn new() -> Self
    {
        Himmelblau {
            base: ProbBase::new("Himmelblau function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for Himmelblau
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let a = x[0] * x[0] + x[1] - 11.;
        let b = x[0] + x[1] * x[1] - 7.;
        match k {
            0 => 4. * a * x[0] + 2. * b,
            _ => 2. * a + 4. * b * x[1],
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
        let a = x[0] * x[0] + x[1] - 11.;
        let b = x[0] + x[1] * x[1] - 7.;
        let off = 4. * (x[0] + x[1]);
        jac.copy_from_slice(&[
            8. * x[0] * x[0] + 4. * a + 2., off,
            off, 2. + 8. * x[1] * x[1] + 4. * b,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[3., 2.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-1.3, 2.7]);
    }
}
