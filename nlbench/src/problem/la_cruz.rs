use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations, check_multiple};

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

/// Tridiagonal system coupled through a common term in the last five unknowns,
/// \\(-2x_i^2 + 3x_i - x_{i-1} - 2x_{i+1} + b(x)\\)
/// with \\(b = 3x_{n-5} - x_{n-4} - x_{n-3} + x_{n-2}/2 - x_{n-1} + 1\\).
pub struct Function15
{
    base: ProbBase,
    rows: Vec<Vec<usize>>,
}

impl Function15
{
    /// * `n` shall be at least 5.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 5);

        let rows = (0.. n).map(|i| {
            let mut cols: Vec<usize> = (i.saturating_sub(1)..= (i + 1).min(n - 1))
                .chain(n - 5.. n)
                .collect();
            cols.sort_unstable();
            cols.dedup();
            cols
        }).collect();

        Function15 {
            base: ProbBase::new("Function 15", BIBTEX, n),
            rows,
        }
    }

    fn shared_coef(&self, c: usize) -> f64
    {
        let n = self.base.n();
        match n - c.min(n) {
            5 => 3.,
            4 | 3 | 1 => -1.,
            2 => 0.5,
            _ => 0.,
        }
    }
}

impl NonlinearSystem<f64> for Function15
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        let n = self.base.n();
        let bf = 3. * x[n - 5] - x[n - 4] - x[n - 3] + 0.5 * x[n - 2] - x[n - 1] + 1.;
        let mut f = -2. * x[i] * x[i] + 3. * x[i] + bf;
        if i > 0 {
            f -= x[i - 1];
        }
        if i + 1 < n {
            f -= 2. * x[i + 1];
        }
        f
    }

    fn jacobian_nnz(&self) -> usize
    {
        self.rows.iter().map(|r| r.len()).sum()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for (r, cols) in self.rows.iter().enumerate() {
            p.push_row(r, cols.iter().copied());
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for (r, cols) in self.rows.iter().enumerate() {
            for &c in cols {
                let local = if c == r {
                    3. - 4. * x[r]
                }
                else if c + 1 == r {
                    -1.
                }
                else if c == r + 1 {
                    -2.
                }
                else {
                    0.
                };
                v.push(local + self.shared_coef(c));
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(-1.);
    }
}

//

/// Pattern of independent blocks of three, without the identically zero entry \\((2, 2)\\).
fn block3_pattern(n: usize, i: &mut[usize], j: &mut[usize])
{
    let mut p = PatternFill::new(i, j);
    for k in (0.. n).step_by(3) {
        p.push_row(k, [k, k + 1, k + 2]);
        p.push_row(k + 1, [k, k + 1, k + 2]);
        p.push_row(k + 2, [k, k + 1]);
    }
}

/// Blocks of \\(xy - z^2 - 1,\ xyz - x^2 + y^2 - 2,\ e^{s x} - e^{s y}\\) with \\(s = \pm 1\\).
fn block3_fk(x: &[f64], k: usize, s: f64) -> f64
{
    let b = &x[k - k % 3..];
    let (x, y, z) = (b[0], b[1], b[2]);
    match k % 3 {
        0 => x * y - z * z - 1.,
        1 => x * y * z - x * x + y * y - 2.,
        _ => (s * x).exp() - (s * y).exp(),
    }
}

fn block3_jacobian(x: &[f64], jac: &mut[f64], s: f64)
{
    let mut v = ValueFill::new(jac);
    for b in x.chunks_exact(3) {
        let (x, y, z) = (b[0], b[1], b[2]);
        for e in [y, x, -2. * z, y * z - 2. * x, x * z + 2. * y, x * y, s * (s * x).exp(), -s * (s * y).exp()] {
            v.push(e);
        }
    }
}

fn block3_solution(x: &mut[f64])
{
    for b in x.chunks_exact_mut(3) {
        b.copy_from_slice(&[2_f64.sqrt(), 2_f64.sqrt(), 1.]);
    }
}

pub struct Function18
{
    base: ProbBase,
}

impl Function18
{
    /// * `n` shall be a multiple of 3.
    pub fn new(n: usize) -> Self
    {
        check_multiple(n, 3, 3);

        Function18 {
            base: ProbBase::new("Function 18", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for Function18
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        block3_fk(x, k, 1.)
    }

    fn jacobian_nnz(&self) -> usize
    {
        8 * self.base.n() / 3
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        block3_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        block3_jacobian(x, jac, 1.);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        block3_solution(x);
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

//

pub struct Function21
{
    base: ProbBase,
}

impl Function21
{
    /// * `n` shall be a multiple of 3.
    pub fn new(n: usize) -> Self
    {
        check_multiple(n, 3, 3);

        Function21 {
            base: ProbBase::new("Function 21", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for Function21
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        block3_fk(x, k, -1.)
    }

    fn jacobian_nnz(&self) -> usize
    {
        8 * self.base.n() / 3
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        block3_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        block3_jacobian(x, jac, -1.);
    }

    // same root as Function 18 since the third component vanishes on x = y
    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        block3_solution(x);
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

//

/// \\(f_0 = \sum_i x_i^2,\ f_i = -2 x_0 x_i\\).
pub struct Function27
{
    base: ProbBase,
}

impl Function27
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        Function27 {
            base: ProbBase::new("Function 27", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for Function27
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x.iter().map(|v| v * v).sum(),
            _ => -2. * x[0] * x[k],
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
        p.push_row(0, 0.. n);
        for k in 1.. n {
            p.push_row(k, [0, k]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for &xi in x {
            v.push(2. * xi);
        }
        for &xi in &x[1..] {
            v.push(-2. * xi);
            v.push(-2. * x[0]);
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
        x.fill(1. / (n * n));
        x[0] = 100.;
    }
}
