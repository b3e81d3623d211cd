use nlbench_core::system::NonlinearSystem;
use nlbench_core::ValueFill;
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
@article{Hiebert:1982,
  author  = {Hiebert, K. L.},
  title   = {An Evaluation of Mathematical Software That
             Solves Systems of Nonlinear Equations},
  journal = {ACM Trans. Math. Softw.},
  year    = {1982},
  volume  = {8},
  number  = {1},
  pages   = {5--20},
  doi     = {10.1145/355984.355986},
}
";

const ROWS_2X2: &[&[usize]] = &[
    &[1],
    &[0, 1],
];

/// \\(x_1 = 10,\ x_0 x_1 = 5 \cdot 10^4\\).
pub struct HiebertChem2x2
{
    base: ProbBase,
}

impl HiebertChem2x2
{
    pub fn new() -> Self
    {
        HiebertChem2x2 {
            base: ProbBase::new("Hiebert Chem 2x2", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for HiebertChem2x2
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[1] - 10.,
            _ => x[0] * x[1] - 5e4,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(ROWS_2X2)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, ROWS_2X2, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.copy_from_slice(&[1., x[1], x[0]]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[5000., 10.]);
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

const ROWS_6X6: &[&[usize]] = &[
    &[0, 1, 3],
    &[4, 5],
    &[0, 1, 2, 4, 5],
    &[0, 1],
    &[0, 2, 3],
    &[2, 3, 5],
];

const SOLUTIONS_6X6: [[f64; 6]; 3] = [
    [
        0.10000000000000865800865802832637712049655126051610e-3,
        0.10000000000000865800865802832637712049655126051610e-2,
        -0.99999999999913419913419799193454109698763804853664e-4,
        -0.10000000000009523809523831159014832546206386567714e-3,
        54.999999999999999818181818181487603305784236699939,
        0.18181818181851239669421576330006082348099514876998e-15,
    ],
    [
        -0.18181818182178512396701422689707131359333381750224e-14,
        -0.18181818182178512396701422689707131359333381750224e-13,
        -0.18181818181814876033057918557475582208319103887114e-15,
        0.10000000000200000000003963636363715649586778444953e-2,
        55.001000000000020181818182214512396702144144252600,
        -0.10000000000201818181822145123967021441442526003173e-2,
    ],
    [
        0.82644628099181424635970070847176598631923570438011e-4,
        0.82644628099181424635970070847176598631923570438011e-3,
        0.90909090909186147186147038862875597975247651584838e-4,
        0.90909090909004329004329220681057415048840725181878e-4,
        54.999999999999999818181818182181818181817073593074,
        0.18181818181781818181818292640692640295982173534745e-15,
    ],
];

/// Badly scaled chemical equilibrium in six species.
pub struct HiebertChem6x6
{
    base: ProbBase,
}

impl HiebertChem6x6
{
    pub fn new() -> Self
    {
        HiebertChem6x6 {
            base: ProbBase::new("Hiebert Chem 6x6", BIBTEX, 6),
        }
    }
}

impl NonlinearSystem<f64> for HiebertChem6x6
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0] + x[1] + x[3] - 0.001,
            1 => x[4] + x[5] - 55.,
            2 => x[0] + x[1] + x[2] + 2. * x[4] + x[5] - 110.001,
            3 => x[0] - 0.1 * x[1],
            4 => x[0] - 10000. * x[2] * x[3],
            _ => x[3] - 55e14 * x[2] * x[5],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(ROWS_6X6)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, ROWS_6X6, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.copy_from_slice(&[
            1., 1., 1.,
            1., 1.,
            1., 1., 1., 2., 1.,
            1., -0.1,
            1., -10000. * x[3], -10000. * x[2],
            -55e14 * x[5], 1., -55e14 * x[2],
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        SOLUTIONS_6X6.len()
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        x.copy_from_slice(&SOLUTIONS_6X6[idx]);
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

// equilibrium constants of HiebertChem10x10
const K5: f64 = 2597. / 1000000.;
const K6: f64 = 431. / 125000.;
const K7: f64 = 1799. / 100000000.;
const K8: f64 = 431. / 2000000.;
const K9: f64 = 1923. / 50000000.;

const ROWS_10X10: &[&[usize]] = &[
    &[0, 3],
    &[0, 1, 3, 6, 7, 8, 9],
    &[1, 4, 5, 6],
    &[2, 4],
    &[0, 1, 3, 4],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
];

/// Combustion of propane in air with ten products, \\(R = 10^4\\).
///
/// The last five equations couple every unknown through the total \\(\sum_j x_j\\).
pub struct HiebertChem10x10
{
    base: ProbBase,
    r: f64,
}

impl HiebertChem10x10
{
    pub fn new() -> Self
    {
        HiebertChem10x10 {
            base: ProbBase::new("Hiebert Chem 10x10", BIBTEX, 10),
            r: 10000.,
        }
    }
}

impl NonlinearSystem<f64> for HiebertChem10x10
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let tot: f64 = x.iter().sum();
        let r = self.r;
        match k {
            0 => x[0] + x[3] - 3.,
            1 => 2. * x[0] + x[1] + x[3] + x[6] + x[7] + x[8] + 2. * x[9] - r,
            2 => 2. * x[1] + 2. * x[4] + x[5] + x[6] - 8.,
            3 => 2. * x[2] + x[4] - 4. * r,
            4 => x[0] * x[4] - 0.193 * x[1] * x[3],
            5 => x[5] * x[1].sqrt() - K5 * (x[1] * x[3] * tot).sqrt(),
            6 => x[6] * x[3].sqrt() - K6 * (x[0] * x[3] * tot).sqrt(),
            7 => x[7] * x[3] - K7 * x[2] * tot,
            8 => x[8] * x[3] - K8 * x[0] * (x[2] * tot).sqrt(),
            _ => x[9] * x[3] * x[3] - K9 * x[3] * x[3] * tot,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(ROWS_10X10)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, ROWS_10X10, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let tot: f64 = x.iter().sum();
        let mut v = ValueFill::new(jac);

        for e in [1., 1.] {
            v.push(e);
        }
        for e in [2., 1., 1., 1., 1., 1., 2.] {
            v.push(e);
        }
        for e in [2., 2., 1., 1.] {
            v.push(e);
        }
        for e in [2., 1.] {
            v.push(e);
        }
        for e in [x[4], -0.193 * x[3], -0.193 * x[1], x[0]] {
            v.push(e);
        }

        // k sqrt(a b tot) has the common partial k a b / (2 sqrt(a b tot)) in every unknown
        let s5 = (x[1] * x[3] * tot).sqrt();
        let c5 = K5 * x[1] * x[3] / (2. * s5);
        let s6 = (x[0] * x[3] * tot).sqrt();
        let c6 = K6 * x[0] * x[3] / (2. * s6);
        let s8 = (x[2] * tot).sqrt();
        let c8 = K8 * x[0] * x[2] / (2. * s8);
        let c9 = K9 * x[3] * x[3];

        for j in 0.. 10 {
            let d = match j {
                1 => x[5] / (2. * x[1].sqrt()) - K5 * x[3] * tot / (2. * s5),
                3 => -K5 * x[1] * tot / (2. * s5),
                5 => x[1].sqrt(),
                _ => 0.,
            };
            v.push(d - c5);
        }
        for j in 0.. 10 {
            let d = match j {
                0 => -K6 * x[3] * tot / (2. * s6),
                3 => x[6] / (2. * x[3].sqrt()) - K6 * x[0] * tot / (2. * s6),
                6 => x[3].sqrt(),
                _ => 0.,
            };
            v.push(d - c6);
        }
        for j in 0.. 10 {
            let d = match j {
                2 => -K7 * tot,
                3 => x[7],
                7 => x[3],
                _ => 0.,
            };
            v.push(d - K7 * x[2]);
        }
        for j in 0.. 10 {
            let d = match j {
                0 => -K8 * s8,
                2 => -K8 * x[0] * tot / (2. * s8),
                3 => x[8],
                8 => x[3],
                _ => 0.,
            };
            v.push(d - c8);
        }
        for j in 0.. 10 {
            let d = match j {
                3 => 2. * x[9] * x[3] - 2. * K9 * x[3] * tot,
                9 => x[3] * x[3],
                _ => 0.,
            };
            v.push(d - c9);
        }
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
