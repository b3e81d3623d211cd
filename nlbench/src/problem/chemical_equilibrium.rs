use nlbench_core::system::NonlinearSystem;
use super::{ProbBase, fill_rows, rows_nnz};

const BIBTEX: &str = "\
@article{Meintjes:1990,
  author  = {Meintjes, Keith and Morgan, Alexander P.},
  title   = {Chemical Equilibrium Systems As Numerical Test Problems},
  journal = {ACM Trans. Math. Softw.},
  year    = {1990},
  volume  = {16},
  number  = {2},
  pages   = {143--151},
  doi     = {10.1145/78928.78930},
}

@article{Hentenryck:1997,
  author  = {Van Hentenryck, P. and McAllester, D. and Kapur, D.},
  title   = {Solving Polynomial Systems Using a Branch and Prune Approach},
  journal = {SIAM Journal on Numerical Analysis},
  year    = {1997},
  volume  = {34},
  number  = {2},
  pages   = {797-827},
  doi = {10.1137/S0036142995281504}
}
";

const ROWS: [&[usize]; 5] = [
    &[0, 1, 4],
    &[0, 1, 2, 3, 4],
    &[1, 2, 4],
    &[1, 3, 4],
    &[0, 1, 2, 3],
];

/// Combustion of propane in air, reduced to five unknowns.
pub struct ChemicalEquilibriumApplication
{
    base: ProbBase,
    /// \\(R_5, \dots, R_{10}\\)
    r: [f64; 6],
}

impl ChemicalEquilibriumApplication
{
    const R: f64 = 10.;

    pub fn new() -> Self
    {
        let s = 40f64.sqrt();
        ChemicalEquilibriumApplication {
            base: ProbBase::new("Chemical Equilibrium Application", BIBTEX, 5),
            r: [0.193, 0.002597 / s, 0.003448 / s, 0.00001799 / s, 0.0002155 / s, 0.00003846 / s],
        }
    }
}

impl NonlinearSystem<f64> for ChemicalEquilibriumApplication
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let [r5, r6, r7, r8, r9, r10] = self.r;
        let r = Self::R;
        match k {
            0 => x[0] * x[1] + x[0] - 3. * x[4],
            1 => 2. * x[0] * x[1] + x[0] + x[1] * x[2] * x[2]
               + r8 * x[1] - r * x[4] + 2. * r10 * x[1] * x[1]
               + r7 * x[1] * x[2] + r9 * x[1] * x[3],
            2 => 2. * (x[1] + r5) * x[2] * x[2] - 8. * x[4] + r6 * x[2] + r7 * x[1] * x[2],
            3 => (r9 * x[1] + 2. * x[3]) * x[3] - 4. * r * x[4],
            _ => x[0] * (x[1] + 1.) + (r8 + r10 * x[1] + r7 * x[2] + r9 * x[3]) * x[1]
               + (r5 + x[1]) * x[2] * x[2] + x[3] * x[3] - 1. + r6 * x[2],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&ROWS)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &ROWS, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let [r5, r6, r7, r8, r9, r10] = self.r;
        let r = Self::R;
        jac.copy_from_slice(&[
            1. + x[1], x[0], -3.,

            2. * x[1] + 1.,
            4. * r10 * x[1] + r7 * x[2] + r9 * x[3] + x[2] * x[2] + r8 + 2. * x[0],
            2. * x[1] * x[2] + r7 * x[1],
            r9 * x[1],
            -r,

            2. * x[2] * x[2] + r7 * x[2],
            4. * (x[1] + r5) * x[2] + r6 + r7 * x[1],
            -8.,

            r9 * x[3], r9 * x[1] + 4. * x[3], -4. * r,

            x[1] + 1.,
            x[0] + r8 + 2. * r10 * x[1] + r7 * x[2] + r9 * x[3] + x[2] * x[2],
            r7 * x[1] + 2. * (r5 + x[1]) * x[2] + r6,
            r9 * x[1] + 2. * x[3],
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[
            0.005066801362929779,
            20.852464769680285,
            0.08361452339896808,
            0.8589773935872527,
            0.03690736609279702,
        ]);
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
