use std::f64::consts::PI;
use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@book{burden2005,
  author    = {Burden, R. and Faires, J.},
  title     = {Numerical Analysis},
  year      = {2005},
  pages     = {597--640},
  publisher = {Thomson Brooks/Cole}
}
";

/// Burden and Faires example 1.
pub struct BurdenAndFaires
{
    base: ProbBase,
}

impl BurdenAndFaires
{
    pub fn new() -> Self
    {
        BurdenAndFaires {
            base: ProbBase::new("Burden and Faires example 1", BIBTEX, 3),
        }
    }
}

impl NonlinearSystem<f64> for BurdenAndFaires
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => 3. * x[0] - (x[1] * x[2]).cos() - 0.5,
            1 => x[0] * x[0] - 81. * (x[1] + 0.1).powi(2) + x[2].sin() + 1.06,
            _ => (-x[0] * x[1]).exp() + 20. * x[2] + (10. * PI - 3.) / 3.,
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
        let s = (x[1] * x[2]).sin();
        let e = (-x[0] * x[1]).exp();
        jac.copy_from_slice(&[
            3., s * x[2], s * x[1],
            2. * x[0], -162. * (x[1] + 0.1), x[2].cos(),
            -e * x[1], -e * x[0], 20.,
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.1, 0.1, -0.1]);
    }
}
