use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use crate::problem::{ProbBase, check_domain, check_even, check_min_equations, fill_rows, rows_nnz};
use super::BIBTEX;

const ROWS_129: &[&[usize]] = &[
    &[0, 1],
    &[0, 1, 2],
    &[1, 2],
];

/// \\(x_0 + x_1 = 2,\ x_0 - \log x_1 + x_2 = 2,\ x_1^2 - 2x_2 + 1 = 0\\).
///
/// The Jacobian is singular at the root \\((1,1,1)\\).
pub struct RooseKullaLombMeressoo129
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo129
{
    pub fn new() -> Self
    {
        RooseKullaLombMeressoo129 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.129", BIBTEX, 3),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo129
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0] + x[1] - 2.,
            1 => if x[1] > 0. {x[0] - x[1].ln() + x[2] - 2.} else {f64::NAN},
            _ => x[1] * x[1] - 2. * x[2] + 1.,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(ROWS_129)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, ROWS_129, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.copy_from_slice(&[
            1., 1.,
            1., -1. / x[1], 1.,
            2. * x[1], -2.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        2
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.fill(1.),
            _ => x.copy_from_slice(&[-0.285888702509893511, 2.28588870250989329, 3.11264358013118247]),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.5);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[1] > 0., self.base.title(), "x[1] must be positive")
    }
}

//

/// \\(1 - x_0,\ 10k(x_k - x_{k-1})^2\\).
///
/// The Jacobian is singular at the root.
pub struct RooseKullaLombMeressoo201
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo201
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo201 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.201", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo201
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k == 0 {
            1. - x[0]
        }
        else {
            10. * k as f64 * (x[k] - x[k - 1]).powi(2)
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
            p.push_row(k, [k - 1, k]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        v.push(-1.);
        for k in 1.. self.base.n() {
            let d = 20. * k as f64 * (x[k] - x[k - 1]);
            v.push(-d);
            v.push(d);
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
        x.fill(-1.2);
        if let Some(last) = x.last_mut() {
            *last = -1.;
        }
    }
}

//

/// Cyclic \\(x_k - 0.1 x_{k+1}^2\\), indices taken modulo `n`.
pub struct RooseKullaLombMeressoo202
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo202
{
    /// * `n` shall be at least 2.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        RooseKullaLombMeressoo202 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.202", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo202
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let next = x[(k + 1) % self.base.n()];
        x[k] - 0.1 * next * next
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for k in 0.. n {
            p.push_row(k, [k, (k + 1) % n]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            v.push(1.);
            v.push(-0.2 * x[(k + 1) % n]);
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        2
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        x.fill(if idx == 0 {0.} else {10.});
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(2.);
    }
}

//

/// Rosenbrock pairs \\(1 - x_{2i},\ 10(x_{2i+1} - x_{2i}^2)\\).
pub struct RooseKullaLombMeressoo204
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo204
{
    /// * `n` shall be even.
    pub fn new(n: usize) -> Self
    {
        check_even(n, 2);

        RooseKullaLombMeressoo204 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.204", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo204
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k % 2 == 0 {
            1. - x[k]
        }
        else {
            10. * (x[k] - x[k - 1] * x[k - 1])
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        n + n / 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in (0.. self.base.n()).step_by(2) {
            p.push(k, k);
            p.push_row(k + 1, [k, k + 1]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for k in (0.. self.base.n()).step_by(2) {
            v.push(-1.);
            v.push(-20. * x[k]);
            v.push(10.);
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
        for pair in x.chunks_exact_mut(2) {
            pair.copy_from_slice(&[-1.2, 1.]);
        }
    }
}

//

/// \\(x_0^2 - 1,\ x_{k-1}^2 - 1 + \log x_k\\), `NaN` where a logarithm argument is not positive.
pub struct RooseKullaLombMeressoo209
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo209
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo209 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.209", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo209
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k == 0 {
            x[0] * x[0] - 1.
        }
        else if x[k] > 0. {
            x[k - 1] * x[k - 1] - 1. + x[k].ln()
        }
        else {
            f64::NAN
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
            p.push_row(k, [k - 1, k]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        v.push(2. * x[0]);
        for k in 1.. self.base.n() {
            v.push(2. * x[k - 1]);
            v.push(1. / x[k]);
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
        x.fill(0.5);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 1000.), self.base.title(), "Bad range")?;
        check_domain(x[1..].iter().all(|&v| v > 0.), self.base.title(), "log argument must be positive")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(0.);
        l[0] = -1000.;
        u.fill(1000.);
    }
}

//

/// \\(x_0,\ \cos x_{k-1} + x_k - 1\\).
pub struct RooseKullaLombMeressoo212
{
    base: ProbBase,
}

impl RooseKullaLombMeressoo212
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        RooseKullaLombMeressoo212 {
            base: ProbBase::new("Roose Kulla Lomb Meressoo N.212", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for RooseKullaLombMeressoo212
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k == 0 {
            x[0]
        }
        else {
            x[k - 1].cos() + x[k] - 1.
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
            p.push_row(k, [k - 1, k]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        v.push(1.);
        for k in 1.. self.base.n() {
            v.push(-x[k - 1].sin());
            v.push(1.);
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
        x.fill(0.5);
    }
}
