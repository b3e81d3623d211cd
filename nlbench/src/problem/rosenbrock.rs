use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_even};

const BIBTEX: &str = "\
@article{Rosenbrock:1960,
  author  = {Rosenbrock, H. H.},
  title   = {An Automatic Method for Finding the Greatest
             or Least Value of a Function},
  journal = {The Computer Journal},
  year    = {1960},
  volume  = {3},
  number  = {3},
  pages   = {175--184},
  doi     = {10.1093/comjnl/3.3.175},
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

/// Gradient of \\(\sum_{i<n-1} c (x_{i+1} - x_i^2)^2 + (x_i - 1)^2\\) with \\(c = 100\\).
pub struct GeneralizedRosenbrock
{
    base: ProbBase,
    c: f64,
}

impl GeneralizedRosenbrock
{
    /// * `n` shall be even.
    pub fn new(n: usize) -> Self
    {
        check_even(n, 2);

        GeneralizedRosenbrock {
            base: ProbBase::new("Generalized Rosenbrock function", BIBTEX, n),
            c: 100.,
        }
    }
}

impl NonlinearSystem<f64> for GeneralizedRosenbrock
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        let n = self.base.n();
        let c = self.c;
        let mut f = 0.;
        if i > 0 {
            f += 2. * c * (x[i] - x[i - 1] * x[i - 1]);
        }
        if i + 1 < n {
            f += -4. * c * (x[i + 1] - x[i] * x[i]) * x[i] + 2. * x[i] - 2.;
        }
        f
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * self.base.n() - 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for r in 0.. n {
            p.push_row(r, r.saturating_sub(1)..= (r + 1).min(n - 1));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let c = self.c;
        let mut v = ValueFill::new(jac);
        for r in 0.. n {
            let mut d = 0.;
            if r > 0 {
                v.push(-4. * c * x[r - 1]);
                d += 2. * c;
            }
            if r + 1 < n {
                d += (12. * x[r] * x[r] - 4. * x[r + 1]) * c + 2.;
                v.push(d);
                v.push(-4. * c * x[r]);
            }
            else {
                v.push(d);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        for p in x.chunks_exact_mut(2) {
            p.copy_from_slice(&[-1.2, 1.]);
        }
    }
}
