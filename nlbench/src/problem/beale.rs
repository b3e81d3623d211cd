use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@book{beale1958,
  title    = {On an Iterative Method for Finding a Local Minimum
              of a Function of More Than One Variable},
  author    = {Beale, E.M.L.},
  series    = {Technical report
               (Princeton University. Statistical Techniques Research Group)},
  year      = {1958},
  publisher = {Statistical Techniques Research Group,
               Section of Mathematical Statistics,
               Department of Mathematics, Princeton University}
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

/// Gradient of the Beale function
/// \\((1.5 - x_1(1-x_2))^2 + (2.25 - x_1(1-x_2^2))^2 + (2.625 - x_1(1-x_2^3))^2\\).
pub struct Beale
{
    base: ProbBase,
}

impl Beale
{
    pub fn new() -> Self
    {
        Beale {
            base: ProbBase::new("Beale", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for Beale
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2) = (x[0], x[1]);
        let f1 = 1.5 - x1 * (1. - x2);
        let f2 = 2.25 - x1 * (1. - x2 * x2);
        let f3 = 2.625 - x1 * (1. - x2 * x2 * x2);
        match k {
            0 => 2. * (f1 * (x2 - 1.) + f2 * (x2 * x2 - 1.) + f3 * (x2 * x2 * x2 - 1.)),
            _ => 2. * (f1 * x1 + f2 * 2. * x1 * x2 + f3 * 3. * x1 * x2 * x2),
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
        let f1 = 1.5 - x1 * (1. - x2);
        let f2 = 2.25 - x1 * (1. - x2 * x2);
        let f3 = 2.625 - x1 * (1. - x2 * x2 * x2);
        let df1dx1 = x2 - 1.;
        let df1dx2 = x1;
        let df2dx1 = x2 * x2 - 1.;
        let df2dx2 = 2. * x1 * x2;
        let df3dx1 = x2 * x2 * x2 - 1.;
        let df3dx2 = 3. * x1 * x2 * x2;

        let j11 = 2. * (df1dx1 * df1dx1 + df2dx1 * df2dx1 + df3dx1 * df3dx1);
        let j12 = 2. * (df1dx2 * df1dx1 + f1
                      + df2dx2 * df2dx1 + f2 * 2. * x2
                      + df3dx2 * df3dx1 + f3 * 3. * x2 * x2);
        let j22 = 2. * (df1dx2 * df1dx2
                      + df2dx2 * df2dx2 + f2 * 2. * x1
                      + df3dx2 * df3dx2 + f3 * 6. * x1 * x2);
        jac.copy_from_slice(&[j11, j12, j12, j22]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[3., 0.5]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 1.]);
    }
}
