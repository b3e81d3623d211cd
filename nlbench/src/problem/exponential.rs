use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@article{LaCruz:2003,
  author    = { William {La Cruz}  and  Marcos Raydan},
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

const NOWAK_BIBTEX: &str = "\
@techreport{Nowak1991,
  author = {U. Nowak and L. Weimann},
  title  = {A Family of Newton Codes for Systems of Highly Nonlinear Equations},
  number = {Technical Report TR-91-10},
  year   = {1991}
}
";

fn diagonal_pattern(i: &mut[usize], j: &mut[usize])
{
    let n = i.len();
    let mut p = PatternFill::new(i, j);
    for k in 0.. n {
        p.push(k, k);
    }
}

/// Exponential function N.1, a diagonal system
/// \\(e^{x_0-1} - 1,\ (i+1)(e^{x_i-1} - x_i)\\).
pub struct ExponentialFunction1
{
    base: ProbBase,
}

impl ExponentialFunction1
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        ExponentialFunction1 {
            base: ProbBase::new("Exponential Function N.1", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for ExponentialFunction1
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        if i == 0 {
            (x[0] - 1.).exp() - 1.
        }
        else {
            (i + 1) as f64 * ((x[i] - 1.).exp() - x[i])
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        diagonal_pattern(i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        for (i, (d, &xi)) in jac.iter_mut().zip(x).enumerate() {
            *d = if i == 0 {(xi - 1.).exp()} else {(i + 1) as f64 * ((xi - 1.).exp() - 1.)};
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n() as f64;
        x.fill(n / (n - 1.));
    }
}

//

/// Exponential function N.2, lower bidiagonal
/// \\(e^{x_0} - 1,\ \frac{i+1}{10}(e^{x_i} + x_{i-1} - 1)\\).
pub struct ExponentialFunction2
{
    base: ProbBase,
}

impl ExponentialFunction2
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        ExponentialFunction2 {
            base: ProbBase::new("Exponential Function N.2", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for ExponentialFunction2
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        if i == 0 {
            x[0].exp() - 1.
        }
        else {
            (i + 1) as f64 / 10. * (x[i].exp() + x[i - 1] - 1.)
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n() - 1
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        p.push(0, 0);
        for k in 1.. self.base.n() {
            p.push_row(k, [k, k - 1]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        v.push(x[0].exp());
        for (i, &xi) in x.iter().enumerate().skip(1) {
            let c = (i + 1) as f64 / 10.;
            v.push(c * xi.exp());
            v.push(c);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n() as f64;
        x.fill(1. / (n * n));
    }
}

//

/// Exponential function N.3, a diagonal system
/// \\(\frac{i+1}{10}(1 - x_i^2 - e^{-x_i^2})\\) closed by \\(\frac{n}{10}(1 - e^{-x_{n-1}^2})\\).
pub struct ExponentialFunction3
{
    base: ProbBase,
}

impl ExponentialFunction3
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        ExponentialFunction3 {
            base: ProbBase::new("Exponential Function N.3", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for ExponentialFunction3
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        let c = 0.1 * (i + 1) as f64;
        let e = (-x[i] * x[i]).exp();
        if i + 1 == self.base.n() {
            c * (1. - e)
        }
        else {
            c * (1. - x[i] * x[i] - e)
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        diagonal_pattern(i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        for (i, (d, &xi)) in jac.iter_mut().zip(x).enumerate() {
            let c = 0.2 * (i + 1) as f64 * xi;
            let e = (-xi * xi).exp();
            *d = if i + 1 == n {c * e} else {c * (e - 1.)};
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        let n = self.base.n() as f64;
        let bf = 1. / (4. * n * n);
        for (i, v) in x.iter_mut().enumerate() {
            *v = (i + 1) as f64 * bf;
        }
    }
}

//

/// \\(e^{x_0^2+x_1^2} - 3 = 0,\ x_0 + x_1 - \sin 2(x_0+x_1) = 0\\).
pub struct ExponentialSine
{
    base: ProbBase,
}

impl ExponentialSine
{
    pub fn new() -> Self
    {
        ExponentialSine {
            base: ProbBase::new("Exponential sine", NOWAK_BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for ExponentialSine
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let s = x[0] + x[1];
        match k {
            0 => (x[0] * x[0] + x[1] * x[1]).exp() - 3.,
            _ => s - (2. * s).sin(),
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
        let e = (x[0] * x[0] + x[1] * x[1]).exp();
        let d = 1. - 2. * (2. * (x[0] + x[1])).cos();
        jac.copy_from_slice(&[2. * x[0] * e, 2. * x[1] * e, d, d]);
    }

    fn num_initial_points(&self) -> usize
    {
        5
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        let p = match idx {
            0 => [0.81, 0.82],
            1 => [2.99714682530400, -2.95330710241260],
            2 => [2.44169014107600, -2.51379895001340],
            3 => [2.51913768310200, -2.85296012826840],
            _ => [-2.26027327648, -2.41295786268],
        };
        x.copy_from_slice(&p);
    }
}
