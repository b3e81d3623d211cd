use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
@article{Krzyworzcka:1996,
  author  = {Sonia Krzyworzcka},
  title   = {Extension of the Lanczos and {CGS}
             methods to systems of nonlinear equations},
  journal = {Journal of Computational and Applied Mathematics},
  volume  = {69},
  number  = {1},
  pages   = {181--190},
  year    = {1996},
  doi     = {10.1016/0377-0427(95)00032-1}
}
";

const ROWS_1: &[&[usize]] = &[
    &[0, 1, 3, 5],
    &[0, 1],
    &[2, 3, 5],
    &[2, 3],
    &[1, 4, 5],
    &[0, 5],
];

/// Six equations in fixed-point form \\(g_k(x) - x_k\\).
pub struct SoniaKrzyworzcka1
{
    base: ProbBase,
}

impl SoniaKrzyworzcka1
{
    pub fn new() -> Self
    {
        SoniaKrzyworzcka1 {
            base: ProbBase::new("Sonia Krzyworzcka example 2", BIBTEX, 6),
        }
    }
}

impl NonlinearSystem<f64> for SoniaKrzyworzcka1
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let g = match k {
            0 => -0.75 - 0.5 * x[1] * x[1] * x[3] * x[5],
            1 => -0.405 * (1. + x[0] * x[1]).exp() + 1.405,
            2 => 0.5 * x[3] * x[5] - 1.5,
            3 => 0.605 * (1. - x[2] * x[2]).exp() + 0.395,
            4 => 0.5 * x[1] * x[5] - 1.5,
            _ => x[0] * x[5],
        };
        g - x[k]
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(ROWS_1)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, ROWS_1, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let e1 = (1. + x[0] * x[1]).exp();
        let e3 = (1. - x[2] * x[2]).exp();
        jac.copy_from_slice(&[
            -1., -x[1] * x[3] * x[5], -0.5 * x[1] * x[1] * x[5], -0.5 * x[1] * x[1] * x[3],
            -0.405 * x[1] * e1, -0.405 * x[0] * e1 - 1.,
            -1., 0.5 * x[5], 0.5 * x[3],
            -1.21 * x[2] * e3, -1.,
            0.5 * x[5], -1., 0.5 * x[1],
            x[5], x[0] - 1.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-0.75, 0.8014823296770052, -1.5, 0.568335402100415, -1.5, 0.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.1);
    }
}

//

/// Tridiagonal \\((3 - 5x_k) x_k + 1 - x_{k-1} - 2x_{k+1}\\) with zero boundary values.
pub struct SoniaKrzyworzcka2
{
    base: ProbBase,
}

impl SoniaKrzyworzcka2
{
    pub fn new() -> Self
    {
        SoniaKrzyworzcka2 {
            base: ProbBase::new("Sonia Krzyworzcka example 3", BIBTEX, 10),
        }
    }
}

impl NonlinearSystem<f64> for SoniaKrzyworzcka2
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let xm = if k > 0 {x[k - 1]} else {0.};
        let xp = x.get(k + 1).copied().unwrap_or(0.);
        (3. - 5. * x[k]) * x[k] + 1. - xm - 2. * xp
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * self.base.n() - 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for k in 0.. n {
            p.push_row(k, k.saturating_sub(1)..= (k + 1).min(n - 1));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        for k in 0.. n {
            if k > 0 {
                v.push(-1.);
            }
            v.push(3. - 10. * x[k]);
            if k + 1 < n {
                v.push(-2.);
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
