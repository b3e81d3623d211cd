use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, check_domain, eval_fk_by_f};

const BIBTEX: &str = "\
@article{Sincovec:1975,
  author  = {Sincovec, Richard F. and Madsen, Niel K.},
  title   = {Software for Nonlinear Partial Differential Equations},
  journal = {ACM Trans. Math. Softw.},
  volume  = {1},
  number  = {3},
  year    = {1975},
  pages   = {232--260},
  doi     = {10.1145/355644.355649}
}
";

/// Stationary state of the SST atmospheric pollution model, scaled by \\(10^{-7}\\).
///
/// Two variants differ by the source term of the third species.
pub struct SSTnonlinearityTerm
{
    base: ProbBase,
    idx: usize,
    sst1: f64,
}

impl SSTnonlinearityTerm
{
    const SCALE: f64 = 1e7;

    /// * `idx` shall be 0 or 1.
    pub fn new(idx: usize) -> Self
    {
        let sst1 = match idx {
            0 => 360.,
            1 => 3250.,
            _ => panic!("SSTnonlinearityTerm, idx = {} must be 0 or 1", idx),
        };

        SSTnonlinearityTerm {
            base: ProbBase::new(&format!("SST nonlinearity term, N.{}", idx), BIBTEX, 4),
            idx,
            sst1,
        }
    }
}

impl NonlinearSystem<f64> for SSTnonlinearityTerm
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let r01 = 3.67e-16 * x[0] * x[1];
        let r12 = 3.57e-15 * x[1] * x[2];
        f.copy_from_slice(&[
            4e5 - 272.443800016 * x[0] + 1e-4 * x[1] + 7e-3 * x[3] - r01 - 4.13e-12 * x[0] * x[3],
            272.4438 * x[0] - 1.00016e-4 * x[1] + r01 - r12,
            -1.6e-8 * x[2] + 7e-3 * x[3] + 4.1283e-12 * x[0] * x[3] - r12 + 800. + self.sst1,
            -7.000016e-3 * x[3] + r12 - 4.1283e-12 * x[0] * x[3] + 800.,
        ]);
        for fk in f.iter_mut() {
            *fk /= Self::SCALE;
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        16
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(4);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.copy_from_slice(&[
            -272.443800016 - 3.67e-16 * x[1] - 4.13e-12 * x[3],
            1e-4 - 3.67e-16 * x[0],
            0.,
            7e-3 - 4.13e-12 * x[0],

            272.4438 + 3.67e-16 * x[1],
            -1.00016e-4 + 3.67e-16 * x[0] - 3.57e-15 * x[2],
            -3.57e-15 * x[1],
            0.,

            4.1283e-12 * x[3],
            -3.57e-15 * x[2],
            -1.6e-8 - 3.57e-15 * x[1],
            7e-3 + 4.1283e-12 * x[0],

            -4.1283e-12 * x[3],
            3.57e-15 * x[2],
            3.57e-15 * x[1],
            -7.000016e-3 - 4.1283e-12 * x[0],
        ]);
        for v in jac.iter_mut() {
            *v /= Self::SCALE;
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(match self.idx {
            0 => &[
                1.264224341494800168746220557617102243320e6,
                8.501430437421119197727722658565357159210e11,
                8.547006912362613482744674003963465220779e10,
                3.702993087637386517255325996036534779221e10,
            ],
            _ => &[
                1.167055115589686729437819269080948198165e6,
                3.069755937686399353641443136774453022013e11,
                2.621168343680655428727664834155029399049e11,
                4.100816563193445712723351658449706009508e10,
            ],
        });
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1e9, 1e9, 1e13, 1e7]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|&v| v > 0.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(0.);
        u.fill(f64::MAX);
    }
}
