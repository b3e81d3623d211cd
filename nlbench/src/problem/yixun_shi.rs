//! Test problems of Yixun Shi's globalization paper.

use std::f64::consts::PI;

use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, eval_fk_by_f};

const BIBTEX: &str = "\
@article{YixunShi,
  Author  = {Shi, Yixun},
  Title   = {A globalization procedure for solving nonlinear systems of equations},
  Journal = {Numerical Algorithms},
  Number  = {2},
  Pages   = {273--286},
  Volume  = {12},
  Year    = {1996},
  Doi     = {10.1007/BF02142807},
}
";

/// Size of the large problems.
const N: usize = 100;

/// Broyden tridiagonal part \\(x_k (3 - 2x_k) + 1 - x_{k-1} - 2x_{k+1}\\), missing neighbours dropped.
fn broyden(x: &[f64], k: usize) -> f64
{
    let mut r = x[k] * (3. - 2. * x[k]) + 1.;
    if k > 0 {
        r -= x[k - 1];
    }
    if k + 1 < x.len() {
        r -= 2. * x[k + 1];
    }
    r
}

/// Columns and partials of [`broyden`] in row `k`, ascending.
fn broyden_d(x: &[f64], k: usize) -> impl Iterator<Item=(usize, f64)>
{
    let n = x.len();
    let diag = 3. - 4. * x[k];
    [
        (k > 0).then(|| (k - 1, -1.)),
        Some((k, diag)),
        (k + 1 < n).then(|| (k + 1, -2.)),
    ].into_iter().flatten()
}

//

/// Three equations mixing a cosine, a quadratic and an exponential.
pub struct YixunShi1
{
    base: ProbBase,
}

impl YixunShi1
{
    pub fn new() -> Self
    {
        YixunShi1 {
            base: ProbBase::new("Shi, Yixun Problem N.3", BIBTEX, 3),
        }
    }
}

impl NonlinearSystem<f64> for YixunShi1
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => 3. * x[0] - (x[1] * x[2]).cos() - 0.5,
            1 => x[0] * x[0] - 625. * x[1] * x[1],
            _ => (-x[0] * x[1]).exp() + 20. * x[2] + (10. * PI - 3.) / 3.,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        8
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        p.push_row(0, [0, 1, 2]);
        p.push_row(1, [0, 1]);
        p.push_row(2, [0, 1, 2]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let s = (x[1] * x[2]).sin();
        let e = (-x[0] * x[1]).exp();
        jac.copy_from_slice(&[
            3., x[2] * s, x[1] * s,
            2. * x[0], -1250. * x[1],
            -x[1] * e, -x[0] * e, 20.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[
            0.4999816893677071161061094979125234746691,
            -0.1999926757470828464424437991650093898676e-1,
            -0.5241012469638837054562573412192983462072,
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        3
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.fill(1.),
            1 => x.copy_from_slice(&[0., 1e-6, 0.]),
            _ => x.fill(0.),
        }
    }
}

//

/// Broyden tridiagonal rows all shifted by \\(x_{49} / 2\\).
pub struct YixunShi2
{
    base: ProbBase,
}

impl YixunShi2
{
    const MID: usize = 49;

    pub fn new() -> Self
    {
        YixunShi2 {
            base: ProbBase::new("Shi, Yixun Problem N.4", BIBTEX, N),
        }
    }
}

impl NonlinearSystem<f64> for YixunShi2
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        broyden(x, k) + x[Self::MID] / 2.
    }

    fn jacobian_nnz(&self) -> usize
    {
        // tridiagonal plus column 49 outside rows 48..=50
        3 * N - 2 + N - 3
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in 0.. N {
            let lo = k.saturating_sub(1);
            let hi = (k + 1).min(N - 1);
            p.push_row(k, lo..= hi);
            if !(lo..= hi).contains(&Self::MID) {
                p.push(k, Self::MID);
            }
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for k in 0.. N {
            let mut coupled = false;
            for (c, d) in broyden_d(x, k) {
                if c == Self::MID {
                    coupled = true;
                    v.push(d + 0.5);
                }
                else {
                    v.push(d);
                }
            }
            if !coupled {
                v.push(0.5);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        4
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x.fill(match idx {
            0 => -1.,
            1 => 0.04,
            2 => 0.044285,
            _ => 1.,
        });
    }
}

//

/// Broyden tridiagonal rows all shifted by a fixed combination of the last five unknowns.
pub struct YixunShi3
{
    base: ProbBase,
}

impl YixunShi3
{
    /// First of the shared trailing columns.
    const TAIL: usize = N - 5;
    /// Coefficients of \\(x_{95}, \dots, x_{99}\\).
    const COEF: [f64; 5] = [3., -1., -1., 0.5, -1.];

    pub fn new() -> Self
    {
        YixunShi3 {
            base: ProbBase::new("Shi, Yixun Problem N.5", BIBTEX, N),
        }
    }
}

impl NonlinearSystem<f64> for YixunShi3
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let tail: f64 = Self::COEF.iter().zip(&x[Self::TAIL..]).map(|(c, v)| c * v).sum();
        for (k, fk) in f.iter_mut().enumerate() {
            *fk = broyden(x, k) + tail;
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        (0.. N).map(|k| 5 + broyden_cols(k).filter(|c| *c < Self::TAIL).count()).sum()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in 0.. N {
            p.push_row(k, Self::TAIL.. N);
            p.push_row(k, broyden_cols(k).filter(|c| *c < Self::TAIL));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for k in 0.. N {
            let mut tail = Self::COEF;
            for (c, d) in broyden_d(x, k) {
                if c >= Self::TAIL {
                    tail[c - Self::TAIL] += d;
                }
            }
            for d in tail {
                v.push(d);
            }
            for (c, d) in broyden_d(x, k) {
                if c < Self::TAIL {
                    v.push(d);
                }
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        4
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x.fill(match idx {
            0 => -1.,
            1 => 0.04,
            2 => 0.043283,
            _ => 1.,
        });
    }
}

/// Columns of [`broyden`] in row `k` of a size [`N`] system.
fn broyden_cols(k: usize) -> impl Iterator<Item=usize>
{
    k.saturating_sub(1)..= (k + 1).min(N - 1)
}

//

/// Squares of Broyden tridiagonal rows with \\(h = 1/2\\), singular at every root.
pub struct YixunShi4
{
    base: ProbBase,
}

impl YixunShi4
{
    const H: f64 = 0.5;

    pub fn new() -> Self
    {
        YixunShi4 {
            base: ProbBase::new("Shi, Yixun Problem N.6 (Singular Broyden)", BIBTEX, N),
        }
    }

    fn residual(x: &[f64], k: usize) -> f64
    {
        let mut r = (3. - Self::H * x[k]) * x[k] + 1.;
        if k > 0 {
            r -= x[k - 1];
        }
        if k + 1 < N {
            r -= 2. * x[k + 1];
        }
        r
    }
}

impl NonlinearSystem<f64> for YixunShi4
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        Self::residual(x, k).powi(2)
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * N - 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in 0.. N {
            p.push_row(k, broyden_cols(k));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for k in 0.. N {
            let r2 = 2. * Self::residual(x, k);
            if k > 0 {
                v.push(-r2);
            }
            v.push(r2 * (3. - 2. * Self::H * x[k]));
            if k + 1 < N {
                v.push(-2. * r2);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        6
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x.fill(match idx {
            0 => -1.,
            1 => -0.001,
            2 => 0.,
            3 => 0.1,
            4 => 0.17,
            _ => 1.,
        });
    }
}

#[test]
fn test_yixun_shi_nnz1()
{
    assert_eq!(YixunShi2::new().jacobian_nnz(), 395);
    assert_eq!(YixunShi3::new().jacobian_nnz(), 784);
}
