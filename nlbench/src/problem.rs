//! Test problems
//!
//! Each problem is a plain struct implementing [`NonlinearSystem`]`<f64>`,
//! built once with its parameters and never mutated afterwards.

use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;

/// Citation of problems with no reference.
pub const NO_DOC: &str = "no doc";

/// Attributes common to every problem instance.
#[derive(Debug, Clone)]
pub struct ProbBase
{
    title: String,
    bibtex: &'static str,
    n: usize,
}

impl ProbBase
{
    /// Creates an instance.
    ///
    /// Returns [`ProbBase`] whose title is suffixed with the number of equations,
    /// e.g. `"Beale neq = 2"`.
    /// * `title` is a base title.
    /// * `bibtex` is a reference citation text.
    /// * `n` is a number of equations.
    pub fn new(title: &str, bibtex: &'static str, n: usize) -> Self
    {
        ProbBase {
            title: format!("{} neq = {}", title, n),
            bibtex,
            n,
        }
    }

    pub fn title(&self) -> &str
    {
        &self.title
    }

    pub fn bibtex(&self) -> &'static str
    {
        self.bibtex
    }

    pub fn n(&self) -> usize
    {
        self.n
    }
}

/// Asserts `n >= n_min`.
pub fn check_min_equations(n: usize, n_min: usize)
{
    assert!(n >= n_min, "number of equations {} < {}", n, n_min);
}

/// Asserts `n` is even and `n >= n_min`.
pub fn check_even(n: usize, n_min: usize)
{
    assert!(n % 2 == 0 && n >= n_min, "number of equations {} is not even or < {}", n, n_min);
}

/// Asserts `n` is odd and `n >= n_min`.
pub fn check_odd(n: usize, n_min: usize)
{
    assert!(n % 2 != 0 && n >= n_min, "number of equations {} is not odd or < {}", n, n_min);
}

/// Asserts `n` is a multiple of `m` and `n >= n_min`.
pub fn check_multiple(n: usize, m: usize, n_min: usize)
{
    assert!(n % m == 0 && n >= n_min, "number of equations {} is not a multiple of {} or < {}", n, m, n_min);
}

/// Returns `Ok` if `cond` holds, or logs and returns [`ProblemError::Domain`] with `what`.
pub fn check_domain(cond: bool, title: &str, what: &'static str) -> Result<(), ProblemError>
{
    if cond {
        Ok(())
    }
    else {
        log::error!("{}: {}", title, what);
        Err(ProblemError::Domain(what))
    }
}

/// Writes a pattern given as a list of column lists, one per row.
/// 
/// * `rows[r]` is columns of row `r`, numbered from `base`.
pub fn fill_rows(i: &mut[usize], j: &mut[usize], rows: &[&[usize]], base: usize)
{
    let mut p = PatternFill::new(i, j);
    for (r, cols) in rows.iter().enumerate() {
        p.push_row(r, cols.iter().map(|c| c - base));
    }
}

/// Number of entries of a pattern given to [`fill_rows`].
pub fn rows_nnz(rows: &[&[usize]]) -> usize
{
    rows.iter().map(|r| r.len()).sum()
}

/// Evaluates all components through [`NonlinearSystem::eval_f`] and picks the `k`-th.
///
/// For problems whose components share most of their computation.
pub fn eval_fk_by_f<P>(prob: &P, x: &[f64], k: usize) -> f64
where P: NonlinearSystem<f64> + ?Sized
{
    let mut f = vec![0.; prob.num_equations()];
    prob.eval_f(x, &mut f);
    f[k]
}

//

/// Implements the title, citation and size accessors through a `base: ProbBase` field.
macro_rules! prob_base {
    () => {
        fn title(&self) -> &str
        {
            self.base.title()
        }

        fn bibtex(&self) -> &str
        {
            self.base.bibtex()
        }

        fn num_equations(&self) -> usize
        {
            self.base.n()
        }
    };
}

/// Implements an empty set of exact solutions.
macro_rules! no_exact_solution {
    () => {
        fn num_exact_solutions(&self) -> usize
        {
            0
        }

        fn exact_solution(&self, _x: &mut[f64], _idx: usize)
        {
        }
    };
}

//

mod beale;
pub use beale::*;

mod bertolazzi;
pub use bertolazzi::*;

mod biggs;
pub use biggs::*;

mod boggs;
pub use boggs::*;

mod bohachevsky;
pub use bohachevsky::*;

mod box_problem;
pub use box_problem::*;

mod branin;
pub use branin::*;

mod brown;
pub use brown::*;

mod broyden;
pub use broyden::*;

mod bunlsi;
pub use bunlsi::*;

mod burden_faires;
pub use burden_faires::*;

mod chandrasekhar;
pub use chandrasekhar::*;

mod chebyquad;
pub use chebyquad::*;

mod chemical_equilibrium;
pub use chemical_equilibrium::*;

mod cliff;
pub use cliff::*;

mod colville;
pub use colville::*;

mod combustion;
pub use combustion::*;

mod complementary;
pub use complementary::*;

mod compressibility;
pub use compressibility::*;

mod countercurrent;
pub use countercurrent::*;

mod cragg_levy;
pub use cragg_levy::*;

mod cube;
pub use cube::*;

mod darvishi_barati;
pub use darvishi_barati::*;

mod de_villiers_glasser;
pub use de_villiers_glasser::*;

mod dennis;
pub use dennis::*;

mod diagonal_qo;
pub use diagonal_qo::*;

mod discrete;
pub use discrete::*;

mod dixon;
pub use dixon::*;

mod easom;
pub use easom::*;

mod esterific;
pub use esterific::*;

mod exponential;
pub use exponential::*;

mod freudenstein_roth;
pub use freudenstein_roth::*;

mod gauss;
pub use gauss::*;

mod geometric_programming;
pub use geometric_programming::*;

mod gheri_mancino;
pub use gheri_mancino::*;

mod goldstein_price;
pub use goldstein_price::*;

mod gregory_karney;
pub use gregory_karney::*;

mod griewank;
pub use griewank::*;

mod gulf;
pub use gulf::*;

mod hammarling;
pub use hammarling::*;

mod han_sun_han;
pub use han_sun_han::*;

mod hanbook;
pub use hanbook::*;

mod has;
pub use has::*;

mod helical_valley;
pub use helical_valley::*;

mod hiebert;
pub use hiebert::*;

mod hilbert;
pub use hilbert::*;

mod himmelblau;
pub use himmelblau::*;

mod inf_reflux;
pub use inf_reflux::*;

mod integral_equations;
pub use integral_equations::*;

mod interval_arithmetic;
pub use interval_arithmetic::*;

mod jennrich_sampson;
pub use jennrich_sampson::*;

mod kearfott;
pub use kearfott::*;

mod kelley;
pub use kelley::*;

mod kinematic;
pub use kinematic::*;

mod krzyworzcka;
pub use krzyworzcka::*;

mod la_cruz;
pub use la_cruz::*;

mod leon;
pub use leon::*;

mod linear_function;
pub use linear_function::*;

mod logarithmic;
pub use logarithmic::*;

mod mccormic;
pub use mccormic::*;

mod mckinnon;
pub use mckinnon::*;

mod mexican_hat;
pub use mexican_hat::*;

mod miele_cantrell;
pub use miele_cantrell::*;

mod nowak_weimann;
pub use nowak_weimann::*;

mod order10to11;
pub use order10to11::*;

mod paviani;
pub use paviani::*;

mod penalty;
pub use penalty::*;

mod powell3d;
pub use powell3d::*;

mod powell_augmented;
pub use powell_augmented::*;

mod powell_badly_scaled;
pub use powell_badly_scaled::*;

mod powell_quartic;
pub use powell_quartic::*;

mod powell_singular;
pub use powell_singular::*;

mod rklm;
pub use rklm::*;

mod rosenbrock;
pub use rosenbrock::*;

mod sample_problem;
pub use sample_problem::*;

mod schaffer;
pub use schaffer::*;

mod schubert_broyden;
pub use schubert_broyden::*;

mod semiconductor;
pub use semiconductor::*;

mod shacham;
pub use shacham::*;

mod shekel;
pub use shekel::*;

mod shen_ypma;
pub use shen_ypma::*;

mod shubert;
pub use shubert::*;

mod singular;
pub use singular::*;

mod sir_test;
pub use sir_test::*;

mod six_hump;
pub use six_hump::*;

mod spedicato;
pub use spedicato::*;

mod sst_nonlinearity;
pub use sst_nonlinearity::*;

mod strictly_convex;
pub use strictly_convex::*;

mod toint;
pub use toint::*;

mod tridimensional_valley;
pub use tridimensional_valley::*;

mod trig_exp;
pub use trig_exp::*;

mod trigonometric;
pub use trigonometric::*;

mod troesch;
pub use troesch::*;

mod two_point_bvp;
pub use two_point_bvp::*;

mod variably_dimensioned;
pub use variably_dimensioned::*;

mod watson;
pub use watson::*;

mod weibull;
pub use weibull::*;

mod wood;
pub use wood::*;

mod xiao_yin;
pub use xiao_yin::*;

mod yixun_shi;
pub use yixun_shi::*;

mod zero_jacobian;
pub use zero_jacobian::*;
