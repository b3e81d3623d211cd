use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@Article{Dixon1988,
  author  = {Dixon, L. C. W. and Price, R. C.},
  title   = {Numerical experience with the truncated Newton
             method for unconstrained optimization},
  journal = {Journal of Optimization Theory and Applications},
  year    = {1988},
  volume  = {56},
  number  = {2},
  pages   = {245--255},
  doi     = {10.1007/BF00939410}
}
";

/// Gradient-like tridiagonal system of the Dixon and Price function.
pub struct DixonFunction
{
    base: ProbBase,
}

impl DixonFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        DixonFunction {
            base: ProbBase::new("Dixon Function", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for DixonFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        let n = self.base.n();
        if i == 0 {
            2. * (x[0] - 1.)
        }
        else if i == n - 1 {
            8. * n as f64 * (2. * x[i] * x[i] - x[i - 1]) * x[i]
        }
        else {
            let fi = i as f64;
            8. * (fi + 1.) * (2. * x[i] * x[i] - x[i - 1]) - 2. * (fi + 2.) * (2. * x[i + 1] * x[i + 1] - x[i])
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * self.base.n() - 3
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        p.push(0, 0);
        for r in 1.. n - 1 {
            p.push_row(r, [r - 1, r, r + 1]);
        }
        p.push_row(n - 1, [n - 2, n - 1]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        v.push(2.);
        for r in 1.. n - 1 {
            let fr = r as f64;
            v.push(-8. * (fr + 1.));
            v.push(32. * (fr + 1.) * x[r] + 2. * (fr + 2.));
            v.push(-8. * (fr + 2.) * x[r + 1]);
        }
        let fnn = n as f64;
        let xl = x[n - 1];
        v.push(-8. * fnn * xl);
        v.push(32. * fnn * xl * xl + 8. * fnn * (2. * xl * xl - x[n - 2]));
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
