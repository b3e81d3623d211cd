use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::ValueFill;
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
@article{Buzzi:1986,
  author  = {Guido Buzzi Ferraris and Enrico Tronconi},
  title   = {Bunlsi--{A} fortran program for solution of systems
             of nonlinear algebraic equations},
  journal = {Computers \\& Chemical Engineering},
  volume  = {10},
  number  = {2},
  pages   = {129--141},
  year    = {1986},
  doi     = {10.1016/0098-1354(86)85025-6},
}
";

const PATTERN5: [&[usize]; 8] = [
    &[1],
    &[1, 2],
    &[1, 2, 3],
    &[1, 2, 3, 4],
    &[1, 2, 3, 4, 5],
    &[1, 5, 6],
    &[1, 4, 5, 7],
    &[1, 3, 5, 6, 8],
];

/// BUNLSI example 5, an explicit chain \\(x_k = g_k(x_0, \ldots, x_{k-1})\\) of 8 unknowns.
pub struct BUNLSI5
{
    base: ProbBase,
}

impl BUNLSI5
{
    pub fn new() -> Self
    {
        BUNLSI5 {
            base: ProbBase::new("BUNLSI example 5", BIBTEX, 8),
        }
    }
}

impl NonlinearSystem<f64> for BUNLSI5
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2, x3, x4, x5, x6, x7, x8) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7]);
        match k {
            0 => x1 - 1.,
            1 => x2 - x1.sqrt() - x1.exp() - 15.,
            2 => x3 - x1 * x2 / 100. - x1.sin() - 1.,
            3 => x4 - (x2 + x1 + x3 / 2.).powi(2) + 150.,
            4 => x5 - (x4 - x2) / (x1 * x2 * x3),
            5 => x6 - x5 * x1.cbrt() - x5.exp(),
            6 => x7 - (x1 - x4.sqrt() - x5 * x5) * x5.exp(),
            _ => x8 - x1 - x5 - x6 - x3,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&PATTERN5)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &PATTERN5, 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (x1, x2, x3, x4, x5) = (x[0], x[1], x[2], x[3], x[4]);
        let s = x2 + x1 + x3 / 2.;
        let p = x1 * x2 * x3;
        let e5 = x5.exp();
        jac.copy_from_slice(&[
            1.,
            -0.5 / x1.sqrt() - x1.exp(), 1.,
            -x2 / 100. - x1.cos(), -x1 / 100., 1.,
            -2. * s, -2. * s, -s, 1.,
            (x4 - x2) / (x1 * p), x4 / (x2 * p), (x4 - x2) / (x3 * p), -1. / p, 1.,
            -x5 * x1.powf(-2. / 3.) / 3., -x1.cbrt() - e5, 1.,
            -e5, 0.5 * e5 / x4.sqrt(), (x5 * (x5 + 2.) + x4.sqrt() - x1) * e5, 1.,
            -1., -1., -1., -1., 1.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 18.718281828459045, 2.028653803092487, 279.8410647514915, 6.876553786347144, 976.1568043532772, -61079.62412297815, 986.0620119427168]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 20., 2.2, 100., 2., 8., -60., 15.]);
    }
}

//

const PATTERN6: [&[usize]; 30] = [
    &[1],
    &[1, 2],
    &[1, 2, 3],
    &[2, 3, 4],
    &[1, 2, 5],
    &[4, 5, 6],
    &[1, 4, 7],
    &[2, 5, 8],
    &[1, 7, 9],
    &[3, 9, 10],
    &[1, 2, 11],
    &[3, 11, 12],
    &[4, 5, 13],
    &[1, 6, 10, 14],
    &[2, 10, 15],
    &[3, 9, 10, 14, 16],
    &[1, 2, 5, 17],
    &[5, 6, 15, 18],
    &[10, 16, 19],
    &[1, 12, 20],
    &[11, 20, 21],
    &[5, 10, 13, 22],
    &[1, 2, 4, 10, 23],
    &[2, 5, 8, 24],
    &[11, 22, 24, 25],
    &[11, 12, 14, 26],
    &[1, 5, 27],
    &[6, 8, 22, 28],
    &[16, 19, 21, 29],
    &[22, 27, 28, 30],
];

/// Positive unknowns, 0-based.
const POSITIVE6: [usize; 8] = [0, 3, 4, 5, 7, 9, 21, 27];

/// BUNLSI example 6, a flowsheet-like chain of 30 unknowns.
pub struct BUNLSI6
{
    base: ProbBase,
}

impl BUNLSI6
{
    pub fn new() -> Self
    {
        BUNLSI6 {
            base: ProbBase::new("BUNLSI example 6", BIBTEX, 30),
        }
    }
}

impl NonlinearSystem<f64> for BUNLSI6
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        // 1-based aliases
        let v = |i: usize| x[i - 1];
        match k {
            0 => v(1) - 1.,
            1 => 6. * v(1) - v(2),
            2 => 5.4 * v(1) + v(2) - v(3),
            3 => v(2) + v(3) - v(4),
            4 => 100. * (v(1) + v(2) - v(5)),
            5 => v(5) + 100. * v(4) - v(6),
            6 => v(1) - 0.1 * v(4) - v(7),
            7 => v(5) + 90. * v(2) - v(8),
            8 => v(1) + v(7) - v(9),
            9 => v(9) + v(3) - v(10),
            10 => v(1) * v(2) - v(11),
            11 => v(11) / v(3) - v(12),
            12 => v(5).sqrt() + v(4) - v(13),
            13 => (v(1) * v(6)).ln() + v(10) - v(14),
            14 => -v(2).sin() + (v(2) + v(10)).ln() - v(15),
            15 => v(3) * v(9) * v(10) - v(14) - v(16),
            16 => 69.1 * v(1) - 0.01 * v(2) * v(5) - v(17),
            17 => v(6) / (v(5) * v(15)) - v(18),
            18 => (v(10) * v(16)).sqrt() - v(19),
            19 => v(1).powf(2.6) + v(12) * v(12) - v(20),
            20 => v(11) * v(20).exp() - v(21),
            21 => v(5) / v(10) + v(13) - v(22),
            22 => 0.1 * v(2) + v(1) * v(10) / v(4) - v(23),
            23 => (v(5) * v(8)).ln() + v(2) - v(24),
            24 => v(11) * v(24) - v(22) - v(25),
            25 => (v(11) * v(12) * v(14)).powi(2) - v(26) - 1500.,
            26 => v(1) * v(5) / 10000. - v(27),
            27 => (v(6) - v(8)).powi(2) / v(22) - v(28),
            28 => v(16) * v(19) / v(21) - v(29),
            _ => v(27) * v(28) + v(22) + v(28).sqrt() - v(30),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&PATTERN6)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &PATTERN6, 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let v = |i: usize| x[i - 1];
        let mut p = ValueFill::new(jac);
        let mut row = |vals: &[f64]| {
            for &e in vals {
                p.push(e);
            }
        };

        row(&[1.]);
        row(&[6., -1.]);
        row(&[5.4, 1., -1.]);
        row(&[1., 1., -1.]);
        row(&[100., 100., -100.]);
        row(&[100., 1., -1.]);
        row(&[1., -0.1, -1.]);
        row(&[90., 1., -1.]);
        row(&[1., 1., -1.]);
        row(&[1., 1., -1.]);
        row(&[v(2), v(1), -1.]);
        row(&[-v(11) / (v(3) * v(3)), 1. / v(3), -1.]);
        row(&[1., 0.5 / v(5).sqrt(), -1.]);
        row(&[1. / v(1), 1. / v(6), 1., -1.]);
        let t = 1. / (v(2) + v(10));
        row(&[t - v(2).cos(), t, -1.]);
        row(&[v(9) * v(10), v(3) * v(10), v(3) * v(9), -1., -1.]);
        row(&[69.1, -0.01 * v(5), -0.01 * v(2), -1.]);
        let d = v(5) * v(15);
        row(&[-v(6) / (v(5) * d), 1. / d, -v(6) / (d * v(15)), -1.]);
        let r = (v(10) * v(16)).sqrt();
        row(&[0.5 * v(16) / r, 0.5 * v(10) / r, -1.]);
        row(&[2.6 * v(1).powf(1.6), 2. * v(12), -1.]);
        let e = v(20).exp();
        row(&[e, v(11) * e, -1.]);
        row(&[1. / v(10), -v(5) / (v(10) * v(10)), 1., -1.]);
        row(&[v(10) / v(4), 0.1, -v(1) * v(10) / (v(4) * v(4)), v(1) / v(4), -1.]);
        row(&[1., 1. / v(5), 1. / v(8), -1.]);
        row(&[v(24), -1., v(11), -1.]);
        let m = 2. * v(11) * v(12) * v(14);
        row(&[m * v(12) * v(14), m * v(11) * v(14), m * v(11) * v(12), -1.]);
        row(&[v(5) / 10000., v(1) / 10000., -1.]);
        let q = (v(6) - v(8)) / v(22);
        row(&[2. * q, -2. * q, -q * q, -1.]);
        row(&[v(19) / v(21), v(16) / v(21), -v(16) * v(19) / (v(21) * v(21)), -1.]);
        row(&[1., v(28), v(27) + 0.5 / v(28).sqrt(), -1.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[
            1.5, 1., 50., 50., 500., 5000., 0., 5000., 0., 5000.,
            0.5, 50., 5., 0.5, 50., 50., 5., 50., 50., 5.,
            50., 500., 5., 50., -50., 5000., 0.05, 50000., 5., 5000.,
        ]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        for &i in POSITIVE6.iter() {
            if !(x[i] > 0.) {
                log::error!("{}: x{} = {} must be positive", self.base.title(), i + 1, x[i]);
                return Err(ProblemError::Domain("non-positive unknown"));
            }
        }
        Ok(())
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(f64::NEG_INFINITY);
        u.fill(f64::INFINITY);
        for &i in POSITIVE6.iter() {
            l[i] = 0.;
        }
    }
}
