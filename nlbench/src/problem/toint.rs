use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@Article{Spedicato1997,
  author  = {Spedicato, E. and Huang, Z.},
  title   = {Numerical experience with newton-like methods
             for nonlinear algebraic systems},
  journal = {Computing},
  year    = {1997},
  volume  = {58},
  number  = {1},
  pages   = {69--89},
  doi     = {10.1007/BF02684472},
}
";

/// Chain of coupled pairs \\(\phi_1(x_k, x_{k+1}) + \phi_2(x_{k-1}, x_k)\\).
pub struct Toint225
{
    base: ProbBase,
}

impl Toint225
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        Toint225 {
            base: ProbBase::new("Toint N.225", BIBTEX, n),
        }
    }

    fn phi1(s: f64, t: f64) -> f64
    {
        3. * s * s + 2. * t - 5. + (s - t).sin() * (s + t).sin()
    }

    /// \\((\partial_s \phi_1, \partial_t \phi_1)\\)
    fn phi1_d(s: f64, t: f64) -> (f64, f64)
    {
        (6. * s + (2. * s).sin(), 2. - (2. * t).sin())
    }

    fn phi2(s: f64, t: f64) -> f64
    {
        4. * t - 3. + s * (s - t).exp()
    }

    fn phi2_d(s: f64, t: f64) -> (f64, f64)
    {
        let e = (s - t).exp();
        ((1. + s) * e, 4. - s * e)
    }
}

impl NonlinearSystem<f64> for Toint225
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k == 0 {
            Self::phi1(x[0], x[1])
        }
        else if k == n - 1 {
            Self::phi2(x[k - 1], x[k])
        }
        else {
            Self::phi1(x[k], x[k + 1]) + Self::phi2(x[k - 1], x[k])
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
        p.push_row(0, [0, 1]);
        for k in 1.. n - 1 {
            p.push_row(k, [k - 1, k, k + 1]);
        }
        p.push_row(n - 1, [n - 2, n - 1]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);

        let (a, b) = Self::phi1_d(x[0], x[1]);
        v.push(a);
        v.push(b);
        for k in 1.. n - 1 {
            let (a1, b1) = Self::phi1_d(x[k], x[k + 1]);
            let (a2, b2) = Self::phi2_d(x[k - 1], x[k]);
            v.push(a2);
            v.push(a1 + b2);
            v.push(b1);
        }
        let (a, b) = Self::phi2_d(x[n - 2], x[n - 1]);
        v.push(a);
        v.push(b);
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
