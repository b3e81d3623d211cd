//! Singular systems of Shen and Ypma.

use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Shen:2005,
  Author  = {Yun-Qiu Shen and Tjalling J. Ypma},
  Doi     = {10.1016/j.apnum.2004.09.029},
  Journal = {Applied Numerical Mathematics},
  Number  = {2},
  Pages   = {256 - 265},
  Title   = {Newton's method for singular nonlinear equations using approximate left and right nullspaces of the Jacobian},
  Volume  = {54},
  Year    = {2005},
}
";

/// \\(x_0^2 (1 - x_0 x_1) + x_1^2,\ x_0^2 + x_1^2 (3x_0 - 2)\\).
pub struct ShenYpma5
{
    base: ProbBase,
}

impl ShenYpma5
{
    pub fn new() -> Self
    {
        ShenYpma5 {
            base: ProbBase::new("Shen-Ypma Example N.5", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for ShenYpma5
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (a, b) = (x[0], x[1]);
        match k {
            0 => a * a * (1. - a * b) + b * b,
            _ => a * a + b * b * (3. * a - 2.),
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
        let (a, b) = (x[0], x[1]);
        jac.copy_from_slice(&[
            a * (2. - 3. * a * b), 2. * b - a * a * a,
            2. * a + 3. * b * b, b * (6. * a - 4.),
        ]);
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
        2
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.fill(0.02),
            _ => x.copy_from_slice(&[6.2989, 3.7048]),
        }
    }
}

//

/// \\(x_0^2 - x_1^2\\) stated twice, a whole line of roots.
pub struct ShenYpma7
{
    base: ProbBase,
}

impl ShenYpma7
{
    pub fn new() -> Self
    {
        ShenYpma7 {
            base: ProbBase::new("Shen-Ypma Example N.7", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for ShenYpma7
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let d = x[0] * x[0] - x[1] * x[1];
        if k == 0 {d} else {3. * d}
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
        let (a, b) = (2. * x[0], -2. * x[1]);
        jac.copy_from_slice(&[a, b, 3. * a, 3. * b]);
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
        2
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.copy_from_slice(&[0.05, 0.04]),
            _ => x.copy_from_slice(&[1., 2.]),
        }
    }
}

//

const SIGNS_8: [[f64; 3]; 5] = [
    [1., 1., 1.],
    [1., 1., 1.],
    [-1., 1., 1.],
    [1., -1., 1.],
    [1., 1., -1.],
];

/// Signed sums of squares \\(\pm x_2^2 \pm x_3^2 \pm x_4^2\\) plus a linear part in \\(x_0, x_1\\).
pub struct ShenYpma8
{
    base: ProbBase,
}

impl ShenYpma8
{
    pub fn new() -> Self
    {
        ShenYpma8 {
            base: ProbBase::new("Shen-Ypma Example N.8", BIBTEX, 5),
        }
    }

    fn linear(x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0] + x[1] - 2.,
            1 => x[0] - x[1],
            _ => 0.,
        }
    }
}

impl NonlinearSystem<f64> for ShenYpma8
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let quad: f64 = SIGNS_8[k].iter().zip(&x[2..]).map(|(s, xi)| s * xi * xi).sum();
        Self::linear(x, k) + quad
    }

    fn jacobian_nnz(&self) -> usize
    {
        25
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(5);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        for (k, row) in jac.chunks_exact_mut(5).enumerate() {
            let (lin, quad) = row.split_at_mut(2);
            lin.copy_from_slice(match k {
                0 => &[1., 1.],
                1 => &[1., -1.],
                _ => &[0., 0.],
            });
            for ((q, s), xi) in quad.iter_mut().zip(&SIGNS_8[k]).zip(&x[2..]) {
                *q = 2. * s * xi;
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 1., 0., 0., 0.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1.02, 1.02, 0.02, 0.02, 0.02]);
    }
}
