use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@inbook{Powell:1970,
  title     = {Numerical methods for nonlinear algebraic equations},
  booktitle = {Proceedings of a {C}onference, {U}niversity of {E}ssex,
              {C}olchester, 6--7 {J}anuary 1969},
  chapter   = {An hybrid method for non linear equations},
  editor    = {Rabinowitz, Philip},
  publisher = {Gordon and Breach Science Publishers, London-New York-Paris},
  year      = {1970},
  pages     = {87--114},
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  year    = {1981},
  volume  = {7},
  number  = {1},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

/// \\(10^4 (x y - x_e y_e),\ (e^{-y} - e^{-y_e}) + (e^{-x} - e^{-x_e})\\),
/// shifted so that \\((x_e, y_e)\\) is an exact root.
pub struct PowellBadlyScaledFunction
{
    base: ProbBase,
    x0e: f64,
    x1e: f64,
    scale: f64,
}

impl PowellBadlyScaledFunction
{
    pub fn new() -> Self
    {
        PowellBadlyScaledFunction {
            base: ProbBase::new("Powell badly scaled function", BIBTEX, 2),
            x0e: 0.109815932969981745568376164563e-4,
            x1e: 9.10614673986652401094671049032,
            scale: 10000.,
        }
    }
}

impl NonlinearSystem<f64> for PowellBadlyScaledFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => self.scale * (x[0] * x[1] - self.x0e * self.x1e),
            _ => ((-x[1]).exp() - (-self.x1e).exp()) + ((-x[0]).exp() - (-self.x0e).exp()),
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
        jac.copy_from_slice(&[
            self.scale * x[1], self.scale * x[0],
            -(-x[0]).exp(), -(-x[1]).exp(),
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[self.x0e, self.x1e]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., 100.]);
    }
}
