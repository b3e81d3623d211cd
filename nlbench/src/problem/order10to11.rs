use nlbench_core::system::NonlinearSystem;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Shacham:1972,
  author  = {Mordechai Shacham and Ephraim Kehat},
  title   = {An iteration method with memory for
             the solution of a non-linear equation},
  journal = {Chemical Engineering Science},
  volume  = {27},
  number  = {11},
  pages   = {2099--2101},
  year    = {1972},
  doi     = {10.1016/0009-2509(72)87067-2}
}
";

/// \\(10^{-10} (e^{21000/T} / T^2 - 1.11 \cdot 10^{11})\\),
/// whose terms differ by ten to eleven orders of magnitude.
pub struct Order10to11function
{
    base: ProbBase,
    scale: f64,
}

impl Order10to11function
{
    pub fn new() -> Self
    {
        Order10to11function {
            base: ProbBase::new("Order10to11 function", BIBTEX, 1),
            scale: 1e-10,
        }
    }
}

impl NonlinearSystem<f64> for Order10to11function
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], _k: usize) -> f64
    {
        let t = x[0];
        self.scale * ((21000. / t).exp() / (t * t) - 1.11e11)
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
        let t = x[0];
        let a = 21000. / t;
        jac[0] = -self.scale * (a.exp() / t.powi(3)) * (2. + a);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x[0] = 555.;
    }
}
