//! Systems whose Jacobian is singular at the root.

use std::f64::consts::PI;
use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations, eval_fk_by_f};

const BIBTEX_LA_CRUZ: &str = "\
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

const BIBTEX_WAZIRI: &str = "\
@article{Waziri:2011,
  author  = {Waziri Yusuf, Mohammed and June, Leong Wah and Hassan, Malik Abu},
  title   = {Jacobian-free diagonal {N}ewton's method for solving nonlinear
             systems with singular {J}acobian},
  journal = {Malaysian Journal of Mathematical Sciences},
  volume  = {5},
  year    = {2011},
  number  = {2},
  pages   = {241--255}
}
";

/// Bidiagonal \\(x_k^2 ((k + 1) x_k / 3 - 1/2) + x_{k+1}^2 / 2\\),
/// the first and last equations adjusted.
pub struct SingularFunction
{
    base: ProbBase,
}

impl SingularFunction
{
    /// * `n` shall be at least 2.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        SingularFunction {
            base: ProbBase::new("Singular Function", BIBTEX_LA_CRUZ, n),
        }
    }
}

impl NonlinearSystem<f64> for SingularFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        let xk = x[k];
        if k == 0 {
            xk.powi(3) / 3. + 0.5 * x[1] * x[1]
        }
        else if k == n - 1 {
            xk * xk * (n as f64 / 3. * xk - 0.5)
        }
        else {
            xk * xk * ((k + 1) as f64 / 3. * xk - 0.5) + 0.5 * x[k + 1] * x[k + 1]
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n() - 1
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for k in 0.. n - 1 {
            p.push_row(k, [k, k + 1]);
        }
        p.push(n - 1, n - 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let mut v = ValueFill::new(jac);
        v.push(x[0] * x[0]);
        v.push(x[1]);
        for k in 1.. n - 1 {
            v.push(((k + 1) as f64 * x[k] - 1.) * x[k]);
            v.push(x[k + 1]);
        }
        v.push((n as f64 * x[n - 1] - 1.) * x[n - 1]);
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
        x.fill(1.);
    }
}

//

/// Variants of [`SingularSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularCase
{
    A, B, C, D, E, F,
    P2, P3, P4, P5, P6, P7, P8, P9,
}

impl SingularCase
{
    fn title(self) -> &'static str
    {
        match self {
            SingularCase::A => "Singular System A",
            SingularCase::B => "Singular System B",
            SingularCase::C => "Singular System C",
            SingularCase::D => "Singular System D",
            SingularCase::E => "Singular System E",
            SingularCase::F => "Singular System F",
            SingularCase::P2 => "Singular System Problem 2 (Ishihara, K. 2001)",
            SingularCase::P3 => "Singular System Problem 3",
            SingularCase::P4 => "Singular System Problem 4",
            SingularCase::P5 => "Singular System Problem 5",
            SingularCase::P6 => "Singular System Problem 6",
            SingularCase::P7 => "Singular System Problem 7 (Ishihara, K. 2001)",
            SingularCase::P8 => "Singular System Problem 8",
            SingularCase::P9 => "Singular System Problem 9",
        }
    }

    fn size(self) -> usize
    {
        match self {
            SingularCase::B | SingularCase::E | SingularCase::F |
            SingularCase::P2 | SingularCase::P6 => 3,
            _ => 2,
        }
    }
}

/// Small systems of Waziri, June and Hassan, and of Ishihara.
pub struct SingularSystem
{
    base: ProbBase,
    case: SingularCase,
}

impl SingularSystem
{
    pub fn new(case: SingularCase) -> Self
    {
        SingularSystem {
            base: ProbBase::new(case.title(), BIBTEX_WAZIRI, case.size()),
            case,
        }
    }

    fn is_dense(&self) -> bool
    {
        !matches!(self.case, SingularCase::P4 | SingularCase::P6)
    }
}

impl NonlinearSystem<f64> for SingularSystem
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        use SingularCase::*;

        match self.case {
            A => f.copy_from_slice(&[
                (x[0] - 1.).powi(2) * (x[0] - x[1]),
                (x[1] - 2.).powi(5) * (2. * x[0] / x[1]).cos(),
            ]),
            B => f.copy_from_slice(&[
                (x[0] - 1.).powi(4) * x[1].exp(),
                (x[1] - 2.).powi(5) * (x[0] * x[1] - 1.),
                (x[2] + 4.).powi(6),
            ]),
            C => f.copy_from_slice(&[
                x[0].exp() - x[1] - 1.,
                x[0] - x[1],
            ]),
            D => f.copy_from_slice(&[
                (6. * x[0] - x[1]).powi(4),
                x[0].cos() - 1. + x[1],
            ]),
            E => f.copy_from_slice(&[
                3. * x[0] - (x[1] * x[2]).cos() - 0.5,
                x[0] * x[0] - 635. * x[1] * x[1] - 0.25,
                (-x[0] * x[1]).exp() + 20. * x[2] + (10. * PI - 3.) / 3.,
            ]),
            F => f.copy_from_slice(&[
                (x[0] * x[0]).exp() - 8. * x[0] * x[1].sin(),
                x[0] + x[1] - 1.,
                (x[2] - 1.).powi(3),
            ]),
            P2 => f.copy_from_slice(&[
                4. * x[0] - 2. * x[1] + x[0] * x[0] - 3.,
                -x[0] + 4. * x[1] - x[2] + x[1] * x[1] - 3.,
                -2. * x[1] + 4. * x[2] + x[2] * x[2] - 3.,
            ]),
            P3 => {
                let s = (x[1] - 1.).sin() - 1.;
                f.copy_from_slice(&[
                    2. / (1. + x[0] * x[0]) + s,
                    2. / (1. + x[1] * x[1]) + s,
                ]);
            },
            P4 => {
                for (fk, xk) in f.iter_mut().zip(x) {
                    *fk = 1. + (2. - 2. * xk.cos()).tan() - xk.sin().exp();
                }
            },
            P5 => f.copy_from_slice(&[
                x[0].exp() + x[1] - 1.,
                x[1].exp() + x[0] - 1.,
            ]),
            P6 => f.copy_from_slice(&[
                x[0].cos() - 9. + 3. * x[0] + 8. * x[1].exp(),
                x[1].cos() - 9. + 3. * x[1] + 8. * x[0].exp(),
                x[2].cos() - x[2] - 1.,
            ]),
            P7 => f.copy_from_slice(&[
                4. * x[0] - 2. * x[1] + x[0] * x[0] - 3.,
                -2. * x[0] + 4. * x[1] + x[0] * x[0] - 3.,
            ]),
            P8 => f.copy_from_slice(&[
                3_f64.sqrt() * x[0] * x[0] - x[1] * x[1],
                x[0].cos() - 1. / (1. + x[1] * x[1]),
            ]),
            P9 => {
                let d = x[0] * x[0] - x[1] * x[1];
                f.copy_from_slice(&[d, 3. * d]);
            },
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        match self.case {
            SingularCase::P4 => 2,
            SingularCase::P6 => 5,
            _ => self.base.n().pow(2),
        }
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        if self.is_dense() {
            p.push_dense(self.base.n());
        }
        else if self.case == SingularCase::P4 {
            p.push_diag(2);
        }
        else {
            p.push_dense(2);
            p.push(2, 2);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        use SingularCase::*;

        match self.case {
            A => {
                let t = 2. * x[0] / x[1];
                let (s, c) = t.sin_cos();
                let y2 = x[1] - 2.;
                jac.copy_from_slice(&[
                    (x[0] - 1.) * (3. * x[0] - 2. * x[1] - 1.),
                    -(x[0] - 1.).powi(2),
                    -2. * y2.powi(5) * s / x[1],
                    y2.powi(4) * (5. * c + 2. * y2 * x[0] * s / (x[1] * x[1])),
                ]);
            },
            B => {
                let e = x[1].exp();
                let y2 = x[1] - 2.;
                jac.copy_from_slice(&[
                    4. * (x[0] - 1.).powi(3) * e, (x[0] - 1.).powi(4) * e, 0.,
                    y2.powi(5) * x[1], y2.powi(4) * (6. * x[0] * x[1] - 2. * x[0] - 5.), 0.,
                    0., 0., 6. * (x[2] + 4.).powi(5),
                ]);
            },
            C => jac.copy_from_slice(&[x[0].exp(), -1., 1., -1.]),
            D => {
                let d3 = (6. * x[0] - x[1]).powi(3);
                jac.copy_from_slice(&[24. * d3, -4. * d3, -x[0].sin(), 1.]);
            },
            E => {
                let s = (x[1] * x[2]).sin();
                let e = (-x[0] * x[1]).exp();
                jac.copy_from_slice(&[
                    3., x[2] * s, x[1] * s,
                    2. * x[0], -1270. * x[1], 0.,
                    -x[1] * e, -x[0] * e, 20.,
                ]);
            },
            F => jac.copy_from_slice(&[
                2. * x[0] * (x[0] * x[0]).exp() - 8. * x[1].sin(), -8. * x[0] * x[1].cos(), 0.,
                1., 1., 0.,
                0., 0., 3. * (x[2] - 1.).powi(2),
            ]),
            P2 => jac.copy_from_slice(&[
                4. + 2. * x[0], -2., 0.,
                -1., 4. + 2. * x[1], -1.,
                0., -2., 4. + 2. * x[2],
            ]),
            P3 => {
                let c = (x[1] - 1.).cos();
                let d = |t: f64| -4. * t / (1. + t * t).powi(2);
                jac.copy_from_slice(&[d(x[0]), c, 0., c + d(x[1])]);
            },
            P4 => {
                for (jk, xk) in jac.iter_mut().zip(x) {
                    let (s, c) = xk.sin_cos();
                    *jk = 2. * s / (2. - 2. * c).cos().powi(2) - c * s.exp();
                }
            },
            P5 => jac.copy_from_slice(&[x[0].exp(), 1., 1., x[1].exp()]),
            P6 => jac.copy_from_slice(&[
                3. - x[0].sin(), 8. * x[1].exp(),
                8. * x[0].exp(), 3. - x[1].sin(),
                -x[2].sin() - 1.,
            ]),
            P7 => jac.copy_from_slice(&[4. + 2. * x[0], -2., -2. + 2. * x[0], 4.]),
            P8 => jac.copy_from_slice(&[
                2. * 3_f64.sqrt() * x[0], -2. * x[1],
                -x[0].sin(), 2. * x[1] / (1. + x[1] * x[1]).powi(2),
            ]),
            P9 => jac.copy_from_slice(&[
                2. * x[0], -2. * x[1],
                6. * x[0], -6. * x[1],
            ]),
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        use SingularCase::*;

        match self.case {
            A => x.copy_from_slice(&[1., 2.]),
            B => x.copy_from_slice(&[1., 2., -4.]),
            E => x.copy_from_slice(&[0.5, 0., -PI / 6.]),
            F => x.copy_from_slice(&[0.1755989241776592, 0.8244010758223408, 1.]),
            P2 | P3 | P7 => x.fill(1.),
            C | D | P4 | P5 | P6 | P8 | P9 => x.fill(0.),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        self.initial_points().len()
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x.copy_from_slice(self.initial_points()[idx]);
    }
}

impl SingularSystem
{
    fn initial_points(&self) -> &'static [&'static [f64]]
    {
        use SingularCase::*;

        match self.case {
            A => &[&[1.5, 2.5], &[2., 5.], &[0., 3.], &[0.5, 2.]],
            B => &[&[2., 1., -2.], &[4., 5., 6.]],
            C => &[&[0.7, 0.7], &[2., 1.]],
            D => &[&[-0.5, -0.5], &[4., 1.]],
            E => &[&[0.2, 0.2, -0.2], &[1., 2., 1.]],
            F => &[&[0., 1., 2.], &[1., 1., 3.]],
            P2 => &[&[-1.5, 0., -1.5], &[4., 0., 4.], &[-1., 5., -1.], &[4., 4., 4.], &[-10., 0., 10.]],
            P3 => &[&[0.5, 0.5], &[2., 2.], &[0.1, 0.1]],
            P4 => &[&[3., 0.], &[0., 0.5], &[-0.5, -0.5]],
            P5 => &[&[-0.5, -0.5]],
            P6 => &[&[-1., -1., -1.], &[3., 3., 3.], &[0.5, 0.5, 0.5], &[-3., -3., -3.]],
            P7 => &[&[3., 3.], &[0., -1.5], &[-2., 3.], &[0., 2.]],
            P8 => &[&[0.5, 1.]],
            P9 => &[&[0.5, 0.4], &[-0.5, -0.4], &[0.3, -0.5], &[0.4, 0.5]],
        }
    }
}

//

#[test]
fn test_singular_exact1()
{
    use float_eq::assert_float_eq;

    let cases = [
        SingularCase::A, SingularCase::B, SingularCase::C, SingularCase::D,
        SingularCase::E, SingularCase::F, SingularCase::P2, SingularCase::P3,
        SingularCase::P4, SingularCase::P5, SingularCase::P6, SingularCase::P7,
        SingularCase::P8, SingularCase::P9,
    ];
    for case in cases {
        let p = SingularSystem::new(case);
        let n = p.num_equations();
        let mut x = vec![0.; n];
        let mut f = vec![1.; n];
        p.exact_solution(&mut x, 0);
        p.eval_f(&x, &mut f);
        for v in f {
            assert_float_eq!(v, 0., abs <= 1e-12);
        }
    }
}
