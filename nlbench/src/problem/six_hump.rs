use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
Molga M. and Smutnicki C. (2005).
Test functions for optimization needs,
http://www.zsd.ict.pwr.wroc.pl/files/docs/functions
";

/// Gradient of the six-hump camel back function, scaled by two.
pub struct SixHumpCamelBackFunction
{
    base: ProbBase,
}

impl SixHumpCamelBackFunction
{
    pub fn new() -> Self
    {
        SixHumpCamelBackFunction {
            base: ProbBase::new("Six Hump Camel Back function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for SixHumpCamelBackFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (a, b) = (x[0], x[1]);
        match k {
            0 => 8. * a - 8.4 * a.powi(3) + 2. * a.powi(5) + b,
            _ => a - 8. * b + 16. * b.powi(3),
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
        let a2 = x[0] * x[0];
        jac.copy_from_slice(&[
            8. - 25.2 * a2 + 10. * a2 * a2, 1.,
            1., -8. + 48. * x[1] * x[1],
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-0.08984201310031807, 0.7126564030207396]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-5., 5.]);
    }
}
