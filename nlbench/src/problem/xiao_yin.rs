//! Cyclic two-variable systems of Xiao and Yin.
//!
//! Equation \\(i\\) couples \\(x_i\\) and \\(x_{(i+1) \bmod n}\\) only,
//! so every problem here shares one pattern and has constant roots.

use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain};

const BIBTEX: &str = "\
@article{XiaoYin:2015,
  author    = {Xiaoyong Xiao and Hongwei Yin},
  title     = {A new class of methods with higher order of convergence for solving systems of nonlinear equations},
  Journal   = {Applied Mathematics and Computation},
  Number    = {264},
  Pages     = {300--309},
  Publisher = {Elsevier},
  Year      = {2015},
  Doi       = {10.1016/j.amc.2015.04.094},
}
";

fn cyclic_pattern(n: usize, i: &mut[usize], j: &mut[usize])
{
    let mut p = PatternFill::new(i, j);
    for k in 0.. n {
        p.push_row(k, [k, (k + 1) % n]);
    }
}

/// Fills the Jacobian from `d(a, b)` giving both partials at \\((x_i, x_{i+1})\\).
fn cyclic_jacobian<D>(x: &[f64], jac: &mut[f64], d: D)
where D: Fn(f64, f64) -> (f64, f64)
{
    let n = x.len();
    let mut v = ValueFill::new(jac);
    for k in 0.. n {
        let (da, db) = d(x[k], x[(k + 1) % n]);
        v.push(da);
        v.push(db);
    }
}

//

/// \\(x_i \ln(1 + x_{i+1}) - 1\\), 8 equations.
pub struct XiaoYin1
{
    base: ProbBase,
}

impl XiaoYin1
{
    pub fn new() -> Self
    {
        XiaoYin1 {
            base: ProbBase::new("XiaoYin example 3", BIBTEX, 8),
        }
    }
}

impl NonlinearSystem<f64> for XiaoYin1
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        x[k] * (1. + x[(k + 1) % self.base.n()]).ln() - 1.
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        cyclic_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        cyclic_jacobian(x, jac, |a, b| ((1. + b).ln(), a / (1. + b)));
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        // c ln(1 + c) = 1
        x.fill(1.2399778876565501);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.5);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| *v > -1.), self.base.title(), "x > -1")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-1.);
        u.fill(f64::INFINITY);
    }
}

//

/// \\(x_i \sin x_{i+1} - 1\\), 16 equations.
pub struct XiaoYin2
{
    base: ProbBase,
}

impl XiaoYin2
{
    pub fn new() -> Self
    {
        XiaoYin2 {
            base: ProbBase::new("XiaoYin example 4", BIBTEX, 16),
        }
    }
}

impl NonlinearSystem<f64> for XiaoYin2
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        x[k] * x[(k + 1) % self.base.n()].sin() - 1.
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        cyclic_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        cyclic_jacobian(x, jac, |a, b| (b.sin(), a * b.cos()));
    }

    fn num_exact_solutions(&self) -> usize
    {
        2
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        // c sin c = 1, even in c
        const C: f64 = 1.1141571408719302;
        x.fill(if idx == 0 {-C} else {C});
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(-0.85);
    }
}

//

/// \\(x_i x_{i+1} - e^{-x_i} - e^{-x_{i+1}}\\), 35 equations.
pub struct XiaoYin3
{
    base: ProbBase,
}

impl XiaoYin3
{
    pub fn new() -> Self
    {
        XiaoYin3 {
            base: ProbBase::new("XiaoYin example 5", BIBTEX, 35),
        }
    }
}

impl NonlinearSystem<f64> for XiaoYin3
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (a, b) = (x[k], x[(k + 1) % self.base.n()]);
        a * b - (-a).exp() - (-b).exp()
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        cyclic_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        cyclic_jacobian(x, jac, |a, b| (b + (-a).exp(), a + (-b).exp()));
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        // c^2 = 2 e^{-c}
        x.fill(0.9012010317296661);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.2);
    }
}
