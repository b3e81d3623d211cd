use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
}
";

/// Linear tridiagonal system \\(x_0 - x_1 = 2,\ 2x_i - x_{i-1} - x_{i+1} = 0,\ 2x_{n-1} - x_{n-2} = 0\\).
pub struct GregoryAndKarney
{
    base: ProbBase,
}

impl GregoryAndKarney
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        GregoryAndKarney {
            base: ProbBase::new("Gregory and Karney Tridiagonal Matrix Function", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for GregoryAndKarney
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k == 0 {
            x[0] - x[1] - 2.
        }
        else if k == n - 1 {
            2. * x[k] - x[k - 1]
        }
        else {
            2. * x[k] - x[k - 1] - x[k + 1]
        }
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

    fn jacobian(&self, _x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        v.push(1.);
        v.push(-1.);
        for _ in 1.. n - 1 {
            v.push(-1.);
            v.push(2.);
            v.push(-1.);
        }
        v.push(-1.);
        v.push(2.);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n();
        for (i, e) in x.iter_mut().enumerate() {
            *e = 2. * (n - i) as f64;
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }
}
