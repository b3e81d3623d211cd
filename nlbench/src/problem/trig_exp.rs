//! Trigonometric exponential systems.

use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain, check_even, check_min_equations, check_odd, eval_fk_by_f};

const BIBTEX: &str = "\
Spedicato, E.
Computational experience with quasi-newton algoritms.
for minimization problems of moderately large size.
Rep. CISE-N-175, Segrate (Milano), 1975.

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

const RUGGIERO_BIBTEX: &str = "\
@article{Ruggiero:1992,
  author  = {Gomes-Ruggiero, M. and Mart{\\'i}nez, J. and Moretti, A.},
  title   = {Comparing Algorithms for Solving Sparse Nonlinear
             Systems of Equations},
  journal = {SIAM Journal on Scientific and Statistical Computing},
  volume  = {13},
  number  = {2},
  pages   = {459-483},
  year    = {1992},
  doi     = {10.1137/0913025},
}
";

/// \\(\sin(a - b) \sin(a + b) = \sin^2 a - \sin^2 b\\)
fn sin_pair(a: f64, b: f64) -> f64
{
    (a - b).sin() * (a + b).sin()
}

//

/// Decoupled pairs of a cubic trigonometric and an exponential equation.
pub struct TrigonometricExponentialSystem1
{
    base: ProbBase,
}

impl TrigonometricExponentialSystem1
{
    /// * `n` shall be even.
    pub fn new(n: usize) -> Self
    {
        check_even(n, 2);

        TrigonometricExponentialSystem1 {
            base: ProbBase::new("Trigonometric Exponential System prob 1", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for TrigonometricExponentialSystem1
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k % 2 == 0 {
            3. * x[k].powi(3) + 2. * x[k + 1] - 5. + sin_pair(x[k], x[k + 1])
        }
        else {
            -x[k - 1] * (x[k - 1] - x[k]).exp() + 4. * x[k] - 3.
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in (0.. self.base.n()).step_by(2) {
            p.push_row(k, [k, k + 1]);
            p.push_row(k + 1, [k, k + 1]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for k in (0.. self.base.n()).step_by(2) {
            let (a, b) = (x[k], x[k + 1]);
            let e = (a - b).exp();
            v.push(9. * a * a + (2. * a).sin());
            v.push(2. - (2. * b).sin());
            v.push(-(a + 1.) * e);
            v.push(a * e + 4.);
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
        x.fill(0.);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 100.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-100.);
        u.fill(100.);
    }
}

//

/// Coupled variant whose even equations reach two neighbours on each side.
pub struct TrigonometricExponentialSystem2
{
    base: ProbBase,
}

impl TrigonometricExponentialSystem2
{
    /// * `n` shall be odd and at least 7.
    pub fn new(n: usize) -> Self
    {
        check_odd(n, 6);

        TrigonometricExponentialSystem2 {
            base: ProbBase::new("Trigonometric Exponential System prob 2", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for TrigonometricExponentialSystem2
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let n = self.base.n();

        f[0] = 3. * (x[0] - x[2]).powi(3) + 2. * x[1] - 5.
             + (x[0] - x[1] - x[2]).sin() * (x[0] + x[1] - x[2]).sin();
        for i in (1.. n - 1).step_by(2) {
            f[i] = (x[i + 1] - x[i - 1]) * (x[i - 1] - x[i] - x[i + 1]).exp() + 4. * x[i] - 3.;
        }
        for i in (2.. n - 1).step_by(2) {
            f[i] = 3. * (x[i] - x[i + 2]).powi(3) + 6. * (x[i] - x[i - 2]).powi(3)
                 + 2. * x[i + 1] - 4. * x[i - 1] + 5.
                 - 2. * (x[i - 2] - x[i - 1] - x[i]).sin() * (x[i - 2] + x[i - 1] - x[i]).sin()
                 + (x[i] - x[i + 1] - x[i + 2]).sin() * (x[i] + x[i + 1] - x[i + 2]).sin();
        }
        f[n - 1] = -6. * (x[n - 1] - x[n - 3]).powi(3) - 4. * x[n - 2] + 10.
                 - 2. * (x[n - 3] - x[n - 2] - x[n - 1]).sin() * (x[n - 3] + x[n - 2] - x[n - 1]).sin();
    }

    fn jacobian_nnz(&self) -> usize
    {
        // odd rows 3 entries, even interior rows 5, first and last 3
        let n = self.base.n();
        6 + 3 * (n / 2) + 5 * ((n - 3) / 2)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        p.push_row(0, [0, 1, 2]);
        for k in (1.. n - 1).step_by(2) {
            p.push_row(k, [k - 1, k, k + 1]);
        }
        for k in (2.. n - 1).step_by(2) {
            p.push_row(k, [k - 2, k - 1, k, k + 1, k + 2]);
        }
        p.push_row(n - 1, [n - 3, n - 2, n - 1]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);

        let d = x[0] - x[2];
        v.push(9. * d * d + (2. * d).sin());
        v.push(2. - (2. * x[1]).sin());
        v.push(-9. * d * d - (2. * d).sin());

        for i in (1.. n - 1).step_by(2) {
            let ex = (x[i - 1] - x[i] - x[i + 1]).exp();
            let tp = x[i + 1] - x[i - 1] - 1.;
            v.push(tp * ex);
            v.push(4. + (x[i - 1] - x[i + 1]) * ex);
            v.push(-tp * ex);
        }

        for i in (2.. n - 1).step_by(2) {
            let dm = x[i] - x[i - 2];
            let dp = x[i] - x[i + 2];
            v.push(2. * (2. * dm).sin() - 18. * dm * dm);
            v.push(-4. + 2. * (2. * x[i - 1]).sin());
            v.push((2. * dp).sin() - 2. * (2. * dm).sin() + 9. * dp * dp + 18. * dm * dm);
            v.push(2. - (2. * x[i + 1]).sin());
            v.push(-9. * dp * dp - (2. * dp).sin());
        }

        let d = x[n - 3] - x[n - 1];
        v.push(-2. * (2. * d).sin() + 18. * d * d);
        v.push(2. * (2. * x[n - 2]).sin() - 4.);
        v.push(2. * (2. * d).sin() - 18. * d * d);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 100.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-100.);
        u.fill(100.);
    }
}

//

/// Tridiagonal mix of cubic, exponential and trigonometric terms, root at all ones.
pub struct TrigExp
{
    base: ProbBase,
}

impl TrigExp
{
    /// * `n` shall be at least 3.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 3);

        TrigExp {
            base: ProbBase::new("TrigExp", RUGGIERO_BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for TrigExp
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k == 0 {
            3. * x[0] * x[0] + 2. * x[1] - 5. + sin_pair(x[0], x[1])
        }
        else if k == n - 1 {
            -x[k - 1] * (x[k - 1] - x[k]).exp() + 4. * x[k] - 3.
        }
        else {
            -x[k - 1] * (x[k - 1] - x[k]).exp()
                + x[k] * (4. + 3. * x[k] * x[k]) + 2. * x[k + 1]
                + sin_pair(x[k], x[k + 1]) - 8.
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

        v.push(6. * x[0] + (2. * x[0]).sin());
        v.push(2. - (2. * x[1]).sin());
        for k in 1.. n - 1 {
            let e = (x[k - 1] - x[k]).exp();
            v.push(-(1. + x[k - 1]) * e);
            v.push(x[k - 1] * e + 9. * x[k] * x[k] + 4. + (2. * x[k]).sin());
            v.push(2. - (2. * x[k + 1]).sin());
        }
        let e = (x[n - 2] - x[n - 1]).exp();
        v.push(-(1. + x[n - 2]) * e);
        v.push(x[n - 2] * e + 4.);
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
        3
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.fill(1. / self.base.n() as f64),
            1 => x.fill(0.),
            _ => x.fill(0.3),
        }
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 1000.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-1000.);
        u.fill(1000.);
    }
}
