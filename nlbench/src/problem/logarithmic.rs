use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, check_domain, check_min_equations};

const BIBTEX: &str = "\
@article{LaCruz:2003,
  author    = {William {La Cruz}  and  Marcos Raydan},
  title     = {Nonmonotone Spectral Methods for Large-Scale Nonlinear Systems},
  journal   = {Optimization Methods and Software},
  year      = {2003},
  volume    = {18},
  number    = {5},
  pages     = {583--599},
  publisher = {Taylor \\& Francis},
  doi       = {10.1080/10556780310001610493},
}
";

/// \\(\log(x_k + 1) - x_k / n\\), `NaN` for \\(x_k \le -1\\).
pub struct LogarithmicFunction
{
    base: ProbBase,
}

impl LogarithmicFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        LogarithmicFunction {
            base: ProbBase::new("Logarithmic Function", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for LogarithmicFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if x[k] > -1. {
            x[k].ln_1p() - x[k] / self.base.n() as f64
        }
        else {
            f64::NAN
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_diag(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let rn = 1. / self.base.n() as f64;
        for (d, xk) in jac.iter_mut().zip(x) {
            *d = 1. / (xk + 1.) - rn;
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill((self.base.n() + 1) as f64);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|&v| v > -1.), self.base.title(), "log argument x + 1 <= 0")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-1.);
        u.fill(f64::INFINITY);
    }
}
