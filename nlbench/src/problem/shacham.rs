use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain, fill_rows, rows_nnz};

const SHACHAM_BIBTEX: &str = "\
@inbook{eden2014proceedings,
  author    = {M. Shacham},
  title     = {Recent developments in solution techniques for
               systems of nonlinear equations},
  booktitle = {Proceedings of the 2nd International Conference
               on Foundations of Computer-Aided Process Design},
  editor    = {A.W. Westerberg, H.H. Chien},
  series    = {Computer Aided Chemical Engineering},
  year      = {1983},
}

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

@article{Shacham:1985,
  author  = {Mordechai Shacham},
  title   = {Comparing software for the solution of systems
              of nonlinear algebraic equations arising in
              chemical engineering},
  journal = {Computers \\& Chemical Engineering},
  year    = {1985},
  volume  = {9},
  number  = {2},
  pages   = {103--112},
  doi     = {10.1016/0098-1354(85)85001-8}
}
";

const CONSTRAINED_BIBTEX: &str = "\
@article{Mordechai:10.1002/nme.1620230805,
  author  = {Shacham Mordechai},
  title   = {Numerical solution of constrained non-linear algebraic equations},
  journal = {International Journal for Numerical Methods in Engineering},
  year    = {1986},
  volume  = {23},
  number  = {8},
  pages   = {1455-1481},
  doi     = {10.1002/nme.1620230805},
}
";

const CUTLIP_BIBTEX: &str = "\
@inbook{eden2014proceedings,
  author    = {M. Shacham},
  title     = {Recent developments in solution techniques for
               systems of nonlinear equations},
  booktitle = {Proceedings of the 2nd International Conference
               on Foundations of Computer-Aided Process Design},
  editor    = {A.W. Westerberg, H.H. Chien},
  series    = {Computer Aided Chemical Engineering},
  year      = {1983},
}

@article{Mordechai:10.1002/nme.1620230805,
  author  = {Shacham Mordechai},
  title   = {Numerical solution of constrained non-linear algebraic equations},
  journal = {International Journal for Numerical Methods in Engineering},
  year    = {1986},
  volume  = {23},
  number  = {8},
  pages   = {1455-1481},
  doi     = {10.1002/nme.1620230805},
}
";

const DECOMPOSITION_BIBTEX: &str = "\
@article{Mordechai,
  author  = {Shacham Mordechai},
  title   = {Decomposition of systems of nonlinear algebraic equations},
  journal = {AIChE Journal},
  year    = {1984},
  volume  = {30},
  number  = {1},
  pages   = {92--99},
  doi     = {10.1002/aic.690300114},
}
";

const DISCONTINUITIES_BIBTEX: &str = "\
@article{Shacham:2002,
  author  = {Mordechai Shacham and Neima Brauner},
  title   = {Numerical solution of non-linear algebraic
             equations with discontinuities},
  journal = {Computers \\& Chemical Engineering},
  volume  = {26},
  number  = {10},
  pages   = {1449--1457},
  year    = {2002},
  doi     = {10.1016/S0098-1354(02)00122-9}
}
";

const PROPANE_BIBTEX: &str = "\
@article{Shacham:2002,
  author  = {Mordechai Shacham and Neima Brauner},
  title   = {Numerical solution of non-linear algebraic
             equations with discontinuities},
  journal = {Computers \\& Chemical Engineering},
  volume  = {26},
  number  = {10},
  pages   = {1449--1457},
  year    = {2002},
  doi     = {10.1016/S0098-1354(02)00122-9}
}

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

//

/// Rate constants of [`ChemicalReactorEquilibriumConversion`] at temperature `t`:
/// \\((k, k', dk/dT, dk'/dT)\\), or `None` out of the valid range.
fn equilibrium_rates(t: f64, y: f64) -> Option<(f64, f64, f64, f64)>
{
    if !(y <= 1. && t > 0.) {
        return None;
    }
    let bf1 = 149750. / t;
    let bf2 = 192050. / t;
    let k1 = 92.5 - bf1;
    let k2 = 116.7 - bf2 - 0.17 * t.ln();
    if !(k1 <= 350. && k2 <= 350.) {
        return None;
    }
    let k = k1.exp();
    let kp = k2.exp();
    Some((k, kp, k * bf1 / t, kp * (bf2 - 0.17) / t))
}

/// Equilibrium conversion in a chemical reactor, unknowns \\((T, y)\\).
pub struct ChemicalReactorEquilibriumConversion
{
    base: ProbBase,
}

impl ChemicalReactorEquilibriumConversion
{
    pub fn new() -> Self
    {
        ChemicalReactorEquilibriumConversion {
            base: ProbBase::new("Chemical Reactor Equilibrium Conversion", SHACHAM_BIBTEX, 2),
        }
    }

    fn f1(y: f64) -> f64
    {
        (1. - y).sqrt() * (1.82 - y) / (18.2 - y)
    }

    fn f1_1(y: f64) -> f64
    {
        (y * (26.39 - 0.5 * y) - 32.942) / ((1. - y).sqrt() * (y - 18.2).powi(2))
    }

    fn f2(y: f64) -> f64
    {
        y * y * (1. - y).powf(-1.5)
    }

    fn f2_1(y: f64) -> f64
    {
        0.5 * y * (4. - y) * (1. - y).powf(-2.5)
    }
}

impl NonlinearSystem<f64> for ChemicalReactorEquilibriumConversion
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (t, y) = (x[0], x[1]);
        match k {
            0 => match equilibrium_rates(t, y) {
                Some((kk, kp, _, _)) => kk * Self::f1(y) - kp * Self::f2(y),
                None => f64::NAN,
            },
            _ => t * (1.84 * y + 77.3) - 43260. * y - 105128.,
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
        let (t, y) = (x[0], x[1]);
        let (j0, j1) = match equilibrium_rates(t, y) {
            Some((kk, kp, kk_1, kp_1)) => (
                kk_1 * Self::f1(y) - kp_1 * Self::f2(y),
                kk * Self::f1_1(y) - kp * Self::f2_1(y),
            ),
            None => (f64::NAN, f64::NAN),
        };
        jac.copy_from_slice(&[j0, j1, 1.84 * y + 77.3, 1.84 * t - 43260.]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1637.7032294649301990, 0.53337289955233521695]);
    }

    fn num_initial_points(&self) -> usize
    {
        8
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        let p = match idx {
            0 => [1700., 0.5],
            1 => [1600., 0.],
            2 => [1600., 0.9],
            3 => [1650., 0.],
            4 => [1700., 0.9],
            5 => [1360., 0.],
            6 => [200., 0.],
            _ => [1650., 0.],
        };
        x.copy_from_slice(&p);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[1] <= 1., self.base.title(), "y > 1")?;
        check_domain(x[0] > 0., self.base.title(), "T <= 0")?;
        check_domain(equilibrium_rates(x[0], x[1]).is_some(), self.base.title(), "rate exponent > 350")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.copy_from_slice(&[100., f64::NEG_INFINITY]);
        u.copy_from_slice(&[20000., 1.]);
    }
}

//

/// Steady state of a chemical reactor, unknowns \\((y, T)\\).
pub struct ChemicalReactorSteadyState
{
    base: ProbBase,
}

impl ChemicalReactorSteadyState
{
    pub fn new() -> Self
    {
        ChemicalReactorSteadyState {
            base: ProbBase::new("Chemical Reactor Steady State", SHACHAM_BIBTEX, 2),
        }
    }

    fn rate(t: f64) -> Option<f64>
    {
        let arg = 12581. * (t - 298.) / (298. * t);
        if arg > 395. {None} else {Some(0.12 * arg.exp())}
    }
}

impl NonlinearSystem<f64> for ChemicalReactorSteadyState
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (y, t) = (x[0], x[1]);
        match Self::rate(t) {
            Some(kr) => match k {
                0 => 120. * y - 75. * kr * (1. - y),
                _ => -y * (873. - t) + 11. * (t - 300.),
            },
            None => f64::NAN,
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
        let (y, t) = (x[0], x[1]);
        let kr = Self::rate(t).unwrap_or(f64::NAN);
        let dkdt = kr * (12581. * 298. * t - 12581. * (t - 298.) * 298.) / (298. * t).powi(2);
        jac.copy_from_slice(&[120. + 75. * kr, -75. * dkdt * (1. - y), -(873. - t), y + 11.]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.963868051279533, 346.1636981464456]);
    }

    fn num_initial_points(&self) -> usize
    {
        9
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        let p = match idx {
            0 => [0.5, 320.],
            1 => [0., 300.],
            2 => [0., 350.],
            3 => [1., 400.],
            4 => [0.964, 338.],
            5 => [0.9, 350.],
            6 => [0.9, 310.],
            7 => [0.9, 390.],
            _ => [0.906948356846E+00, 0.308103350833E+03],
        };
        x.copy_from_slice(&p);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[0] >= 0., self.base.title(), "y < 0")?;
        check_domain(x[1] >= 298., self.base.title(), "T < 298")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.copy_from_slice(&[0., f64::NEG_INFINITY]);
        u.fill(f64::INFINITY);
    }
}

//

const METHANE_PATTERN: [&[usize]; 7] = [
    &[1, 2, 3, 6, 7],
    &[3, 4, 5, 7],
    &[1, 2, 5, 7],
    &[1, 2, 3, 4, 5, 6, 7],
    &[1, 2, 3, 4, 5],
    &[1, 3, 4, 5],
    &[1, 2, 3, 4],
];

fn methane_fk(x: &[f64], k: usize) -> f64
{
    let (x1, x2, x3, x4, x5, x6, x7) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6]);
    match k {
        0 => 0.5 * x1 + x2 + 0.5 * x3 - x6 / x7,
        1 => x3 + x4 + 2. * x5 - 2. / x7,
        2 => x1 + x2 + x5 - 1. / x7,
        3 => -28837. * x1 - 139009. * x2 - 78213. * x3 + 18927. * x4 + 8427. * x5
             + 13492. / x7 - 10690. * x6 / x7,
        4 => x1 + x2 + x3 + x4 + x5 - 1.,
        5 => 400. * x1 * x4.powi(3) - 1.7837e5 * x3 * x5,
        _ => x1 * x3 - 2.6058 * x2 * x4,
    }
}

fn methane_jacobian(x: &[f64], jac: &mut[f64])
{
    let (x1, x2, x3, x4, x5, x6, x7) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6]);
    let x7sq = x7 * x7;
    jac.copy_from_slice(&[
        0.5, 1., 0.5, -1. / x7, x6 / x7sq,
        1., 1., 2., 2. / x7sq,
        1., 1., 1., 1. / x7sq,
        -28837., -139009., -78213., 18927., 8427., -10690. / x7, (10690. * x6 - 13492.) / x7sq,
        1., 1., 1., 1., 1.,
        400. * x4.powi(3), -1.7837e5 * x5, 1200. * x1 * x4 * x4, -1.7837e5 * x3,
        x3, -2.6058 * x4, x1, -2.6058 * x2,
    ]);
}

/// Chemical equilibrium resulting from a partial methane oxidation.
pub struct ChemicalEquilibriumPartialMethaneOxidation
{
    base: ProbBase,
}

impl ChemicalEquilibriumPartialMethaneOxidation
{
    pub fn new() -> Self
    {
        ChemicalEquilibriumPartialMethaneOxidation {
            base: ProbBase::new("Chemical equilibrium resulting from a Partial Methane Oxidation", SHACHAM_BIBTEX, 7),
        }
    }
}

impl NonlinearSystem<f64> for ChemicalEquilibriumPartialMethaneOxidation
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        methane_fk(x, k)
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&METHANE_PATTERN)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &METHANE_PATTERN, 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        methane_jacobian(x, jac);
    }

    fn num_initial_points(&self) -> usize
    {
        5
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        let p = match idx {
            0 => [0.5, 0., 0., 0.5, 0., 0.5, 2.],
            1 => [0.22, 0.075, 0.001, 0.58, 0.125, 0.436, 2.35],
            2 => [0.3, 0.01, 0.05, 0.6, 0.004, 0.6, 3.],
            3 => [1.5, -1.13, 1.33, -0.66, -0.0007, 0.8, 3.],
            _ => [1.5, 0.001, 1.33, 1e-3, 1e-4, 0.8, 3.],
        };
        x.copy_from_slice(&p);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[0] > 0., self.base.title(), "x[0] <= 0")?;
        check_domain(x.iter().all(|v| v.abs() < 20.), self.base.title(), "x out of [-20,20]")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-20.);
        l[0] = 0.;
        u.fill(20.);
    }
}

//

/// Pipeline network problem, the partial methane oxidation with a reference solution.
pub struct PipelineNetworkProblem
{
    base: ProbBase,
}

impl PipelineNetworkProblem
{
    pub fn new() -> Self
    {
        PipelineNetworkProblem {
            base: ProbBase::new("Pipeline Network Problem (partial oxydation of methane)", DECOMPOSITION_BIBTEX, 7),
        }
    }
}

const METHANE_SOLUTION: [f64; 7] = [
    0.32287083947654068257,
    0.92235435391875035348e-2,
    0.46017090960632262350e-1,
    0.61817167507082410985,
    0.37168509528154416956e-2,
    0.57671539593554916672,
    2.9778634507911453048,
];

const METHANE_INITIAL: [f64; 7] = [0.208, 0.042, 0.048, 0.452, 0.250, 0.340, 2.];

impl NonlinearSystem<f64> for PipelineNetworkProblem
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        methane_fk(x, k)
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&METHANE_PATTERN)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &METHANE_PATTERN, 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        methane_jacobian(x, jac);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&METHANE_SOLUTION);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&METHANE_INITIAL);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[6] > 0., self.base.title(), "x[6] <= 0")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(f64::NEG_INFINITY);
        l[6] = 0.;
        u.fill(f64::INFINITY);
    }
}

//

const PIPELINE2_PATTERN: [&[usize]; 9] = [
    &[1, 2, 3, 9],
    &[3, 4, 5, 8],
    &[1, 2, 5, 8],
    &[1, 2, 3, 4, 5, 8, 9],
    &[1, 2, 3, 4, 5],
    &[1, 3, 4, 5],
    &[1, 2, 3, 4],
    &[7, 8],
    &[6, 7, 9],
];

/// Pipeline network problem with the reciprocals \\(1/x_7\\) and \\(x_6/x_7\\) as extra unknowns.
pub struct PipelineNetworkProblem2
{
    base: ProbBase,
}

impl PipelineNetworkProblem2
{
    pub fn new() -> Self
    {
        PipelineNetworkProblem2 {
            base: ProbBase::new("Pipeline Network Problem version 2 (partial oxydation of methane)", DECOMPOSITION_BIBTEX, 9),
        }
    }

    fn extend(x: &mut[f64], x7: &[f64; 7])
    {
        x[.. 7].copy_from_slice(x7);
        x[7] = 1. / x7[6];
        x[8] = x7[5] / x7[6];
    }
}

impl NonlinearSystem<f64> for PipelineNetworkProblem2
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2, x3, x4, x5, x6, x7, x8, x9) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7], x[8]);
        match k {
            0 => 0.5 * x1 + x2 + 0.5 * x3 - x9,
            1 => x3 + x4 + 2. * x5 - 2. * x8,
            2 => x1 + x2 + x5 - x8,
            3 => -28837. * x1 - 139009. * x2 - 78213. * x3 + 18927. * x4 + 8427. * x5
                 + 13492. * x8 - 10690. * x9,
            7 => x8 - 1. / x7,
            8 => x9 - x6 / x7,
            _ => methane_fk(x, k),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&PIPELINE2_PATTERN)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &PIPELINE2_PATTERN, 1);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (x1, x2, x3, x4, x5, x6, x7) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6]);
        jac.copy_from_slice(&[
            0.5, 1., 0.5, -1.,
            1., 1., 2., -2.,
            1., 1., 1., -1.,
            -28837., -139009., -78213., 18927., 8427., 13492., -10690.,
            1., 1., 1., 1., 1.,
            400. * x4.powi(3), -1.7837e5 * x5, 1200. * x1 * x4 * x4, -1.7837e5 * x3,
            x3, -2.6058 * x4, x1, -2.6058 * x2,
            1. / (x7 * x7), 1.,
            -1. / x7, x6 / (x7 * x7), 1.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        Self::extend(x, &METHANE_SOLUTION);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        Self::extend(x, &METHANE_INITIAL);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[6] > 0., self.base.title(), "x[6] <= 0")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(f64::NEG_INFINITY);
        l[6] = 0.;
        u.fill(f64::INFINITY);
    }
}

//

const CUTLIP_PATTERN: [&[usize]; 6] = [
    &[0, 3, 5],
    &[1, 4, 5],
    &[2, 3, 4],
    &[0, 3, 4, 5],
    &[1, 3, 4, 5],
    &[3, 4, 5],
];

/// Cutlip's steady state for reaction rate equations, with one of three sets of rate constants.
pub struct CutlipsSteadyStateForReactionRateEquations
{
    base: ProbBase,
    k1: f64,
    kr1: f64,
    k2: f64,
    kr2: f64,
    k3: f64,
}

impl CutlipsSteadyStateForReactionRateEquations
{
    /// * `k_set` is a set of rate constants, 0, 1 or 2.
    pub fn new(k_set: usize) -> Self
    {
        let (k1, kr1, k2, kr2, k3) = match k_set {
            0 => (31.24, 2.062, 0.272, 0.02, 303.03),
            1 => (17.721, 3.483, 0.118, 0.033, 505.051),
            2 => (17.721, 6.966, 0.118, 333.333, 505.051),
            _ => panic!("Cutlip's rate constant set {} must be 0, 1 or 2", k_set),
        };

        CutlipsSteadyStateForReactionRateEquations {
            base: ProbBase::new(
                &format!("Cutlips steady state for reaction rate equations, k set N.{}", k_set),
                CUTLIP_BIBTEX, 6
            ),
            k1, kr1, k2, kr2, k3,
        }
    }
}

impl NonlinearSystem<f64> for CutlipsSteadyStateForReactionRateEquations
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => 1. - x[0] - self.k1 * x[0] * x[5] + self.kr1 * x[3],
            1 => 1. - x[1] - self.k2 * x[1] * x[5] + self.kr2 * x[4],
            2 => -x[2] + 2. * self.k3 * x[3] * x[4],
            3 => self.k1 * x[0] * x[5] - self.kr1 * x[3] - self.k3 * x[3] * x[4],
            4 => 1.5 * (self.k2 * x[1] * x[5] - self.kr2 * x[4]) - self.k3 * x[3] * x[4],
            _ => 1. - x[3] - x[4] - x[5],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&CUTLIP_PATTERN)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &CUTLIP_PATTERN, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (k1, kr1, k2, kr2, k3) = (self.k1, self.kr1, self.k2, self.kr2, self.k3);
        jac.copy_from_slice(&[
            -1. - k1 * x[5], kr1, -k1 * x[0],
            -1. - k2 * x[5], kr2, -k2 * x[1],
            -1., 2. * k3 * x[4], 2. * k3 * x[3],
            k1 * x[5], -kr1 - k3 * x[4], -k3 * x[3], k1 * x[0],
            1.5 * k2 * x[5], -k3 * x[4], -1.5 * kr2 - k3 * x[3], 1.5 * k2 * x[1],
            -1., -1., -1.,
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        7
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        let p = match idx {
            0 => [0.99, 0.05, 0.05, 0.99, 0.05, 0.],
            1 => [0.05, 0.99, 0.05, 0.05, 0.99, 0.],
            2 => [0.97, 0.98, 0.06, 0.99, 0., 0.],
            3 => [3.56e-2, 3.57e-1, 1.92, 3.60e-2, 8.84e-2, 8.76e-1],
            4 => [3.62e-2, 3.57e-1, 1.92, 9.36e-2, 3.40e-2, 8.72e-1],
            5 => [1.03, 1.02, -6.65e-2, 1.10e-4, 1.00, -1.03e-3],
            _ => [150.994, 1066.746, 1466.816, 0.438855, 0.54453, 0.016612],
        };
        x.copy_from_slice(&p);
    }
}

//

/// Hiebert's third chemical equilibrium problem, ten species with a parameter \\(R\\).
pub struct Hiebert3ChemicalEquilibriumProblem
{
    base: ProbBase,
    r: f64,
}

impl Hiebert3ChemicalEquilibriumProblem
{
    /// * `r` is the parameter \\(R\\), which also appears in the title.
    pub fn new(r: f64) -> Self
    {
        Hiebert3ChemicalEquilibriumProblem {
            base: ProbBase::new(&format!("Hiebert's 3rd Chemical Equilibrium Problem, R = {}", r), CONSTRAINED_BIBTEX, 10),
            r,
        }
    }

    fn in_domain(x: &[f64]) -> bool
    {
        x[0] > 0. && x[1] > 0. && x[2] > 0. && x[3] >= 0.
    }
}

impl NonlinearSystem<f64> for Hiebert3ChemicalEquilibriumProblem
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if !Self::in_domain(x) {
            return f64::NAN;
        }
        let s: f64 = x.iter().sum();
        match k {
            0 => x[0] + x[3] - 3.,
            1 => 2. * x[0] + x[1] + x[3] + x[6] + x[7] + x[8] + 2. * x[9] - self.r,
            2 => 2. * x[1] + 2. * x[4] + x[5] + x[6] - 8.,
            3 => 2. * x[2] + x[4] - 4. * self.r,
            4 => x[0] * x[4] - 0.193 * x[1] * x[3],
            5 => x[5] * x[1].sqrt() - 0.002597 * (x[1] * x[3] * s).sqrt(),
            6 => x[6] * x[3].sqrt() - 0.003448 * (x[0] * x[3] * s).sqrt(),
            7 => x[7] * x[3] - 1.799e-5 * x[1] * s,
            8 => x[8] * x[3] - 2.155e-4 * x[0] * (x[2] * s).sqrt(),
            _ => x[3] * x[3] * (x[9] - 3.846e-5 * s),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        100
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(10);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let s: f64 = x.iter().sum();
        let mut a = [[0.; 10]; 10];

        a[0][0] = 1.;
        a[0][3] = 1.;
        a[1] = [2., 1., 0., 1., 0., 0., 1., 1., 1., 2.];
        a[2] = [0., 2., 0., 0., 2., 1., 1., 0., 0., 0.];
        a[3][2] = 2.;
        a[3][4] = 1.;
        a[4][0] = x[4];
        a[4][1] = -0.193 * x[3];
        a[4][3] = -0.193 * x[1];
        a[4][4] = x[0];

        // rows 5 to 9 depend on every unknown through the total s
        let t1 = 0.0012985 * (x[1] * x[3] / s).sqrt();
        let t2 = 0.1724e-2 * (x[0] * x[3] / s).sqrt();
        let t3 = 0.1799e-4 * x[1];
        let t4 = 0.10775e-3 * x[0] * (x[2] / s).sqrt();
        let t5 = 0.3846e-4 * x[3] * x[3];
        for (r, t) in [(5, t1), (6, t2), (7, t3), (8, t4), (9, t5)] {
            a[r].fill(-t);
        }
        a[5][1] += 0.5 * x[5] / x[1].sqrt() - 0.12985e-2 * (s * x[3] / x[1]).sqrt();
        a[5][3] += -0.12985e-2 * (s * x[1] / x[3]).sqrt();
        a[5][5] += x[1].sqrt();
        a[6][0] += -0.1724e-2 * (s * x[3] / x[0]).sqrt();
        a[6][3] += 0.5 * x[6] / x[3].sqrt() - 0.1724e-2 * (s * x[0] / x[3]).sqrt();
        a[6][6] += x[3].sqrt();
        a[7][1] = -0.1799e-4 * (s + x[1]);
        a[7][3] += x[7];
        a[7][7] += x[3];
        a[8][0] += -0.2155e-3 * (x[2] * s).sqrt();
        a[8][2] += -0.10775e-3 * x[0] * (s / x[2]).sqrt();
        a[8][3] += x[8];
        a[8][8] += x[3];
        a[9][3] += -0.7692e-4 * x[3] * s + 2. * x[3] * x[9];
        a[9][9] = 0.99996154 * x[3] * x[3];

        let mut v = ValueFill::new(jac);
        for row in a.iter() {
            for &e in row.iter() {
                v.push(e);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        4
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x.fill(0.);
        let head = match idx {
            0 => [1., 1., 10., 1., 1., 1.],
            1 => [2., 2., 10., 1., 1., 2.],
            2 => [2., 5., 40., 10., 0., 0.],
            _ => [2., 1., 20., 1., 0., 0.],
        };
        x[.. 6].copy_from_slice(&head);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        let s: f64 = x.iter().sum();
        check_domain(x[.. 4].iter().all(|&v| v >= 0.), self.base.title(), "negative x[0..4]")?;
        check_domain(s >= 0., self.base.title(), "negative total")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(f64::NEG_INFINITY);
        l[.. 4].fill(0.);
        u.fill(f64::INFINITY);
    }
}

//

const FRACTIONAL_CONVERSION_ROOT: f64 = 0.7573962462537539;

/// Fractional conversion in a chemical reactor, a scalar equation in \\(x \in [0, 0.8)\\).
pub struct FractionalConversionInAchemicalReactor
{
    base: ProbBase,
}

impl FractionalConversionInAchemicalReactor
{
    pub fn new() -> Self
    {
        FractionalConversionInAchemicalReactor {
            base: ProbBase::new("Fractional conversion in a chemical reactor", CONSTRAINED_BIBTEX, 1),
        }
    }

    fn in_domain(x: f64) -> bool
    {
        x >= 0. && x < 0.8
    }
}

impl NonlinearSystem<f64> for FractionalConversionInAchemicalReactor
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], _k: usize) -> f64
    {
        let x = x[0];
        if Self::in_domain(x) {
            x / (1. - x) - 5. * (0.4 * (1. - x) / (0.4 - 0.5 * x)).ln() + 4.45977
        }
        else {
            f64::NAN
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        1
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        i[0] = 0;
        j[0] = 0;
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let x = x[0];
        jac[0] = if Self::in_domain(x) {
            0.1 / ((0.5 * x - 0.4) * (x - 1.).powi(2))
        }
        else {
            f64::NAN
        };
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x[0] = FRACTIONAL_CONVERSION_ROOT;
    }

    fn num_initial_points(&self) -> usize
    {
        8
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x[0] = idx as f64 * 0.1;
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(Self::in_domain(x[0]), self.base.title(), "x out of [0,0.8)")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l[0] = 0.;
        u[0] = 0.8;
    }
}

//

/// Fractional conversion in a chemical reactor, with the denominators as extra unknowns.
pub struct FractionalConversionInAchemicalReactor2
{
    base: ProbBase,
}

impl FractionalConversionInAchemicalReactor2
{
    pub fn new() -> Self
    {
        FractionalConversionInAchemicalReactor2 {
            base: ProbBase::new("Fractional conversion in a chemical reactor (ver 2)", CONSTRAINED_BIBTEX, 3),
        }
    }

    fn extend(x: &mut[f64], x1: f64)
    {
        x[0] = x1;
        x[1] = 1. - x1;
        x[2] = 0.4 - 0.5 * x1;
    }
}

impl NonlinearSystem<f64> for FractionalConversionInAchemicalReactor2
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2, x3) = (x[0], x[1], x[2]);
        if x2 <= 0. || x3 <= 0. {
            return f64::NAN;
        }
        match k {
            0 => x1 / x2 - 5. * (0.4 * x2 / x3).ln() + 4.45977,
            1 => x2 + x1 - 1.,
            _ => x3 + 0.5 * x1 - 0.4,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        9
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(3);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (x1, x2, x3) = (x[0], x[1], x[2]);
        jac.copy_from_slice(&[
            1. / x2, -(x1 / x2 + 5.) / x2, 5. / x3,
            1., 1., 0.,
            0.5, 0., 1.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        Self::extend(x, FRACTIONAL_CONVERSION_ROOT);
    }

    fn num_initial_points(&self) -> usize
    {
        8
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        Self::extend(x, idx as f64 * 0.1);
        if x[2] <= 0. {
            x[2] = 0.1;
        }
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[1] > 0., self.base.title(), "x2 <= 0")?;
        check_domain(x[2] > 0., self.base.title(), "x3 <= 0")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.copy_from_slice(&[f64::NEG_INFINITY, 0., 0.]);
        u.fill(f64::INFINITY);
    }
}

//

const CSTR_PATTERN: [&[usize]; 15] = [
    &[2, 7],
    &[3, 8],
    &[4, 9],
    &[5, 10],
    &[6, 11],
    &[0, 1],
    &[2, 3, 7, 12],
    &[2, 3, 4, 8, 12, 13],
    &[2, 3, 4, 9, 12, 13],
    &[3, 4, 5, 10, 13, 14],
    &[5, 11, 14],
    &[0, 12],
    &[0, 13],
    &[0, 14],
    &[1, 2, 3, 4, 5, 12, 13, 14],
];

/// Model equations for a CSTR with three reactions
///
/// Unknowns are \\((T, \mathit{SRH}, C_A, C_B, C_C, C_D, C_E, r_A, r_B, r_C, r_D, r_E, k_{1B}, k_{2C}, k_{3E})\\).
pub struct ModelEquationsForTheCSTR
{
    base: ProbBase,
    r: f64,
    v: f64,
    vo: f64,
    cao: f64,
    cbo: f64,
}

impl ModelEquationsForTheCSTR
{
    pub fn new() -> Self
    {
        let vo = 75. / 3.3;

        ModelEquationsForTheCSTR {
            base: ProbBase::new("Model equations for the CSTR", DISCONTINUITIES_BIBTEX, 15),
            r: 1.987,
            v: 500.,
            vo,
            cao: 25. / vo,
            cbo: 50. / vo,
        }
    }
}

impl NonlinearSystem<f64> for ModelEquationsForTheCSTR
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (t, srh, ca, cb, cc, cd, ce) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6]);
        let (ra, rb, rc, rd, re) = (x[7], x[8], x[9], x[10], x[11]);
        let (k1b, k2c, k3e) = (x[12], x[13], x[14]);
        let (v, vo, r) = (self.v, self.vo, self.r);
        match k {
            0 => v * ra + vo * (self.cao - ca),
            1 => v * rb + vo * (self.cbo - cb),
            2 => v * rc - vo * cc,
            3 => v * rd - vo * cd,
            4 => v * re - vo * ce,
            5 => srh * v - 6500. * t + 2200000.,
            6 => ra + 2. * k1b * ca * cb,
            7 => rb + (k1b * ca + 2. * k2c * cc * cb) * cb,
            8 => rc - (3. * k1b * ca - k2c * cc * cb) * cb,
            9 => rd + (k3e * cd - k2c * cc * cb * cb),
            10 => re - k3e * cd,
            11 => k1b - 0.4 * ((200. / 3.009 - 20000. / t) / r).exp(),
            12 => k2c - 10. * ((50. / 3.1 - 5000. / t) / r).exp(),
            13 => k3e - 10. * ((100. / 3.209 - 10000. / t) / r).exp(),
            _ => srh - 40000. * k1b * ca * cb - 20000. * k2c * cc * cb * cb + 5000. * k3e * cd,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        rows_nnz(&CSTR_PATTERN)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        fill_rows(i, j, &CSTR_PATTERN, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (t, ca, cb, cc, cd) = (x[0], x[2], x[3], x[4], x[5]);
        let (k1b, k2c, k3e) = (x[12], x[13], x[14]);
        let (v, vo, r) = (self.v, self.vo, self.r);
        let rt2 = r * t * t;
        jac.copy_from_slice(&[
            -vo, v,
            -vo, v,
            -vo, v,
            -vo, v,
            -vo, v,
            -6500., v,
            2. * k1b * cb, 2. * k1b * ca, 1., 2. * ca * cb,
            cb * k1b, 4. * cb * cc * k2c + ca * k1b, 2. * cb * cb * k2c, 1., ca * cb, 2. * cc * cb * cb,
            -3. * cb * k1b, 2. * cb * cc * k2c - 3. * ca * k1b, cb * cb * k2c, 1., -3. * ca * cb, cb * cb * cc,
            -2. * k2c * cc * cb, -cb * cb * k2c, k3e, 1., -cc * cb * cb, cd,
            -k3e, 1., -cd,
            -8000. * ((200. / 3.009 - 20000. / t) / r).exp() / rt2, 1.,
            -50000. * ((50. / 3.1 - 5000. / t) / r).exp() / rt2, 1.,
            -100000. * ((100. / 3.209 - 10000. / t) / r).exp() / rt2, 1.,
            1., -40000. * k1b * cb, -40000. * (cb * cc * k2c + ca * k1b), -20000. * cb * cb * k2c, 5000. * k3e,
            -40000. * ca * cb, -20000. * cc * cb * cb, 5000. * cd,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[
            458.18172725396032261,
            1556.3624543014841939,
            0.35883693347107439649e-4,
            0.17948231578524555024e-1,
            0.83391131932590483949,
            0.33768297695385023131e-4,
            0.81600108683637911432,
            -0.49998368923029676935e-1,
            -0.99184171291885247499e-1,
            0.37905059969359310886e-1,
            0.15349226225175010514e-5,
            0.37090958492562687015e-1,
            38815.665805380501262,
            138.07747308025211743,
            1098.3958631006667095,
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[
            420., 1164944., 0.5, 0.01, 1., 0.0001, 1.,
            -58.245, -29.1393, 87.35913, -0.03391, 0.042291,
            5824.501, 83.80888, 422.9115,
        ]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        let positive = [0, 2, 3, 4, 5, 6, 12, 13, 14].iter().all(|&i| x[i] > 0.);
        check_domain(positive, self.base.title(), "non positive temperature, concentration or rate constant")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(f64::NEG_INFINITY);
        for i in [0, 2, 3, 4, 5, 6, 12, 13, 14] {
            l[i] = 0.;
        }
        u.fill(f64::INFINITY);
    }
}

//

const PROPANE_SOLUTIONS: [(f64, [f64; 10]); 2] = [
    (10., [
        2.9192636961895215, 3.96158249068772, 19.983234543081295, 0.08073630381047828, 0.021145674813650133,
        0.0006068394522716562, 0.033936829544987446, 0.000439916731273017, 0.016765456918704288, 0.0340058049638966,
    ]),
    (5., [
        0.3559599245750029, 1.6428810042560626, 9.999899747218013, 2.6440400754249973, 2.355213838697167,
        0.002753117723184878, 0.001057196370356032, 1.0294419638791883e-06, 0.00010025278198640915, 2.9628731404005646e-07,
    ]),
];

const PROPANE_INITIAL: [f64; 10] = [1.5, 2., 35., 0.5, 0.05, 0.005, 0.04, 0.003, 0.02, 5.];

const PROPANE_K5: f64 = 0.193;
const PROPANE_K6: f64 = 0.002597;
const PROPANE_K7: f64 = 0.003448;
const PROPANE_K8: f64 = 1.799e-5;
const PROPANE_K9: f64 = 2.155e-4;
const PROPANE_K10: f64 = 3.846e-5;
const PROPANE_P: f64 = 40.;

/// Combustion of propane in air, ten product species with an air ratio \\(R\\).
///
/// Components 6 to 10 scale with \\(\sqrt{p / n_T}\\) or \\(p / n_T\\),
/// where \\(n_T\\) is the total of all unknowns.
pub struct ModelEquationsForCombustionOfPropane
{
    base: ProbBase,
    r: f64,
}

impl ModelEquationsForCombustionOfPropane
{
    /// * `r` is the air ratio \\(R\\), which also appears in the title.
    pub fn new(r: f64) -> Self
    {
        ModelEquationsForCombustionOfPropane {
            base: ProbBase::new(&format!("Model equations for combustion of propane, R = {}", r), PROPANE_BIBTEX, 10),
            r,
        }
    }
}

impl NonlinearSystem<f64> for ModelEquationsForCombustionOfPropane
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if x.iter().any(|&v| v < 0.) {
            return f64::NAN;
        }
        let (n1, n2, n3, n4, n5, n6, n7, n8, n9, n10) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7], x[8], x[9]);
        let pt = PROPANE_P / x.iter().sum::<f64>();
        let r = self.r;
        match k {
            0 => n1 + n4 - 3.,
            1 => 2. * n1 + n2 + n4 + n7 + n8 + n9 + 2. * n10 - r,
            2 => 2. * n2 + 2. * n5 + n6 + n7 - 8.,
            3 => 2. * n3 + 2. * n9 - 4. * r,
            4 => PROPANE_K5 * n2 * n4 - n1 * n5,
            5 => PROPANE_K6 * (n1 * n4).sqrt() - n1.sqrt() * n6 * pt.sqrt(),
            6 => PROPANE_K7 * (n1 * n2).sqrt() - n4.sqrt() * n7 * pt.sqrt(),
            7 => PROPANE_K8 * n1 - n4 * n8 * pt,
            8 => PROPANE_K9 * (n1 * n3).sqrt() - n4 * n9 * pt.sqrt(),
            _ => PROPANE_K10 * n1 * n1 - n4 * n4 * n10 * pt,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        100
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(10);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (n1, n2, n3, n4, n6, n7, n8, n9, n10) = (x[0], x[1], x[2], x[3], x[5], x[6], x[7], x[8], x[9]);
        let nt: f64 = x.iter().sum();
        let sp = (PROPANE_P / nt).sqrt();
        let mut a = [[0.; 10]; 10];

        a[0][0] = 1.;
        a[0][3] = 1.;
        a[1] = [2., 1., 0., 1., 0., 0., 1., 1., 1., 2.];
        a[2] = [0., 2., 0., 0., 2., 1., 1., 0., 0., 0.];
        a[3][2] = 2.;
        a[3][8] = 2.;
        a[4][0] = -x[4];
        a[4][1] = PROPANE_K5 * n4;
        a[4][3] = PROPANE_K5 * n2;
        a[4][4] = -n1;

        // d(-g sqrt(p/nT))/dn_j = g sqrt(p/nT) / (2 nT) for every j, plus the own terms of g
        let g5 = n1.sqrt() * n6;
        let g6 = n4.sqrt() * n7;
        let g8 = n4 * n9;
        a[5].fill(0.5 * g5 * sp / nt);
        a[6].fill(0.5 * g6 * sp / nt);
        a[8].fill(0.5 * g8 * sp / nt);
        // d(-g p/nT)/dn_j = g p / nT^2
        a[7].fill(n4 * n8 * PROPANE_P / (nt * nt));
        a[9].fill(n4 * n4 * n10 * PROPANE_P / (nt * nt));

        let t6 = PROPANE_K6 / (n1 * n4).sqrt();
        a[5][0] += 0.5 * t6 * n4 - 0.5 * n6 * sp / n1.sqrt();
        a[5][3] += 0.5 * t6 * n1;
        a[5][5] += -n1.sqrt() * sp;

        let t7 = PROPANE_K7 / (n1 * n2).sqrt();
        a[6][0] += 0.5 * t7 * n2;
        a[6][1] += 0.5 * t7 * n1;
        a[6][3] += -0.5 * n7 * sp / n4.sqrt();
        a[6][6] += -n4.sqrt() * sp;

        a[7][0] += PROPANE_K8;
        a[7][3] += -n8 * PROPANE_P / nt;
        a[7][7] += -n4 * PROPANE_P / nt;

        let t9 = PROPANE_K9 / (n1 * n3).sqrt();
        a[8][0] += 0.5 * t9 * n3;
        a[8][2] += 0.5 * t9 * n1;
        a[8][3] += -n9 * sp;
        a[8][8] += -n4 * sp;

        a[9][0] += 2. * PROPANE_K10 * n1;
        a[9][3] += -2. * n4 * n10 * PROPANE_P / nt;
        a[9][9] += -n4 * n4 * PROPANE_P / nt;

        let mut v = ValueFill::new(jac);
        for row in a.iter() {
            for &e in row.iter() {
                v.push(e);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        if PROPANE_SOLUTIONS.iter().any(|s| s.0 == self.r) {1} else {0}
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        if let Some((_, sol)) = PROPANE_SOLUTIONS.iter().find(|s| s.0 == self.r) {
            x.copy_from_slice(sol);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&PROPANE_INITIAL);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x[.. 3].iter().all(|&v| v >= 0.), self.base.title(), "negative x[0..3]")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(f64::NEG_INFINITY);
        l[.. 3].fill(0.);
        u.fill(f64::INFINITY);
    }
}
