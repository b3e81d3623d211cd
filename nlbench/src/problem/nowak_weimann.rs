use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@techreport{Nowak1991,
  author = {U. Nowak and L. Weimann},
  title  = {A Family of Newton Codes for Systems of Highly Nonlinear Equations},
  number = {Technical Report TR-91-10},
  year   = {1991}
}
";

/// Artificial test of Nowak and Weimann.
pub struct ArtificialTestOfNowakAndWeimann
{
    base: ProbBase,
}

impl ArtificialTestOfNowakAndWeimann
{
    pub fn new() -> Self
    {
        ArtificialTestOfNowakAndWeimann {
            base: ProbBase::new("Artificial Test of Nowak and Weimann", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for ArtificialTestOfNowakAndWeimann
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => (x[0] * x[0] + x[1] * x[1]).exp() - 3.,
            _ => x[0] + x[1] - (3. * (x[0] + x[1])).sin(),
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
        let t1 = 2. * (x[0] * x[0] + x[1] * x[1]).exp();
        let t2 = 1. - 3. * (3. * (x[0] + x[1])).cos();
        jac.copy_from_slice(&[x[0] * t1, x[1] * t1, t2, t2]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.81, 0.82]);
    }
}
