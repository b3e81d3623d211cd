use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@article{Raydan:1997,
  author  = {Raydan, M.},
  title   = {The Barzilai and Borwein Gradient Method for
             the Large Scale Unconstrained Minimization Problem},
  journal = {SIAM Journal on Optimization},
  volume  = {7},
  number  = {1},
  pages   = {26-33},
  year    = {1997},
  doi     = {10.1137/S1052623494266365},
}

@article{LaCruz:2003,
  author    = {William {La Cruz}  and  Marcos Raydan},
  title     = {Nonmonotone Spectral Methods for Large-Scale Nonlinear Systems},
  journal   = {Optimization Methods and Software},
  year      = {2003},
  volume    = {18},
  number    = {5},
  pages     = {583--599},
  publisher = {Taylor & Francis},
  doi       = {10.1080/10556780310001610493},
}
";

/// Gradient of \\(\sum_i (e^{x_i} - x_i)\\), i.e. \\(e^{x_i} - 1\\).
pub struct StrictlyConvexFunction1
{
    base: ProbBase,
}

impl StrictlyConvexFunction1
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        StrictlyConvexFunction1 {
            base: ProbBase::new("Strictly Convex Function 1", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for StrictlyConvexFunction1
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        x[k].exp() - 1.
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
        for (d, v) in jac.iter_mut().zip(x) {
            *d = v.exp();
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
        let n = self.base.n() as f64;
        for (k, v) in x.iter_mut().enumerate() {
            *v = (k + 1) as f64 / n;
        }
    }
}

//

/// \\(\frac{i+1}{10} (e^{x_i} - 1)\\).
pub struct StrictlyConvexFunction2
{
    base: ProbBase,
}

impl StrictlyConvexFunction2
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        StrictlyConvexFunction2 {
            base: ProbBase::new("Strictly Convex Function 2", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for StrictlyConvexFunction2
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        (k + 1) as f64 / 10. * (x[k].exp() - 1.)
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
        let mut v = ValueFill::new(jac);
        for (k, xk) in x.iter().enumerate() {
            v.push((k + 1) as f64 / 10. * xk.exp());
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
        x.fill(1.);
    }
}
