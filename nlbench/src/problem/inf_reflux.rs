use nlbench_core::system::{NonlinearSystem, ProblemError};
use super::{ProbBase, check_domain};

const BIBTEX: &str = "\
@article{Paterson:1986,
  author  = {W.R. Paterson},
  title   = {A new method for solving a class of nonlinear equations},
  journal = {Chemical Engineering Science},
  year    = {1986},
  volume  = {41},
  number  = {7},
  pages   = {1935--1937},
  doi     = {10.1016/0009-2509(86)87077-4}
}
";

/// Minimum reflux of a distillation column,
/// \\(\frac{1}{63} \log x + \frac{64}{63} \log \frac{1}{1-x} + \log(0.95 - x) - \log 0.9 = 0\\)
/// on \\(0 < x < 0.95\\).
pub struct InfRefluxFunction
{
    base: ProbBase,
}

impl InfRefluxFunction
{
    pub fn new() -> Self
    {
        InfRefluxFunction {
            base: ProbBase::new("InfReflux function", BIBTEX, 1),
        }
    }

    fn inside(x: f64) -> bool
    {
        x > 0. && x < 0.95
    }
}

impl NonlinearSystem<f64> for InfRefluxFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], _k: usize) -> f64
    {
        let x = x[0];
        if Self::inside(x) {
            x.ln() / 63. - 64. / 63. * (1. - x).ln() + (0.95 - x).ln() - 0.9_f64.ln()
        }
        else {
            f64::NAN
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        1
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        i[0] = 0;
        j[0] = 0;
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let x = x[0];
        jac[0] = if Self::inside(x) {
            1. / (63. * x) + 64. / (63. * (1. - x)) - 1. / (0.95 - x)
        }
        else {
            f64::NAN
        };
    }

    fn num_initial_points(&self) -> usize
    {
        4
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        // the first two start next to the zero derivative at 0.229
        x[0] = [0.23, 0.228, 0.6, 0.01][idx];
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(Self::inside(x[0]), self.base.title(), "x must be in (0, 0.95)")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l[0] = 0.;
        u[0] = 0.95;
    }
}
