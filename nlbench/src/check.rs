//! Consistency checks of a problem implementation.

use nlbench_core::system::{NonlinearSystem, ProblemError};
use crate::CsrBuild;

/// Checker parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerParam
{
    /// Relative step of central differences, scaled by \\(\max(1, |x_j|)\\).
    pub fd_step: f64,
    /// Relative tolerance between analytic and finite-difference Jacobians.
    pub fd_tol: f64,
    /// Relative tolerance between [`NonlinearSystem::eval_f`] and [`NonlinearSystem::eval_fk`].
    pub comp_tol: f64,
    /// Tolerance of \\(\\|F(x^*)\\|_\infty\\) at exact solutions.
    pub exact_tol: f64,
}

impl Default for CheckerParam
{
    fn default() -> Self
    {
        CheckerParam {
            fd_step: 1e-6,
            fd_tol: 1e-4,
            comp_tol: 1e-12,
            exact_tol: 1e-8,
        }
    }
}

/// Check errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckError
{
    /// \\(F(x)_k\\) and \\(F_k(x)\\) disagree.
    ComponentMismatch {
        component: usize,
        full: f64,
        single: f64,
    },
    /// Analytic and finite-difference \\(\partial F_i / \partial x_j\\) disagree.
    JacobianMismatch {
        row: usize,
        col: usize,
        analytic: f64,
        numeric: f64,
    },
    /// Residual at an exact solution is not small.
    ExactResidual {
        solution: usize,
        norm: f64,
    },
    /// Assembled arrays violate the compressed sparse row invariants.
    CsrInvalid,
    /// Error from the problem or the assembler.
    Problem(ProblemError),
}

impl core::fmt::Display for CheckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            CheckError::ComponentMismatch {component, full, single} => write!(f, "ComponentMismatch: F[{}] {:e} vs {:e}", component, full, single),
            CheckError::JacobianMismatch {row, col, analytic, numeric} => write!(f, "JacobianMismatch: ({}, {}) {:e} vs {:e}", row, col, analytic, numeric),
            CheckError::ExactResidual {solution, norm} => write!(f, "ExactResidual: solution #{} has |F| {:e}", solution, norm),
            CheckError::CsrInvalid => write!(f, "CsrInvalid: assembled arrays are not compressed sparse row"),
            CheckError::Problem(e) => write!(f, "Problem: {}", e),
        }
    }
}

impl std::error::Error for CheckError {}

impl From<ProblemError> for CheckError
{
    fn from(e: ProblemError) -> Self
    {
        CheckError::Problem(e)
    }
}

/// \\(|a - b| \le tol \max(1, |a|, |b|)\\); two `NaN`s agree.
fn close(a: f64, b: f64, tol: f64) -> bool
{
    if a.is_nan() && b.is_nan() {
        return true;
    }
    (a - b).abs() <= tol * 1f64.max(a.abs()).max(b.abs())
}

//

/// Problem checker
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Cross-checks the operations of a [`NonlinearSystem`] against each other:
/// single components against the whole residual,
/// the sparse Jacobian against central differences,
/// exact solutions against the residual,
/// and the assembled compressed sparse row arrays against their invariants.
pub struct Checker
{
    /// checker parameters.
    pub par: CheckerParam,
}

impl Checker
{
    /// Creates an instance.
    ///
    /// Returns [`Checker`] instance.
    pub fn new() -> Self
    {
        Checker {
            par: CheckerParam::default(),
        }
    }

    /// Changes checker parameters.
    ///
    /// Returns [`Checker`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut CheckerParam)
    {
        f(&mut self.par);
        self
    }

    /// Checks that [`NonlinearSystem::eval_fk`] agrees with [`NonlinearSystem::eval_f`] at `x`.
    pub fn check_components<P>(&self, prob: &P, x: &[f64]) -> Result<(), CheckError>
    where P: NonlinearSystem<f64> + ?Sized
    {
        let n = prob.num_equations();
        let mut f = vec![0.; n];
        prob.eval_f(x, &mut f);

        for (k, &full) in f.iter().enumerate() {
            let single = prob.eval_fk(x, k);
            if !close(full, single, self.par.comp_tol) {
                log::error!("{}: F[{}] {:e} vs {:e}", prob.title(), k, full, single);
                return Err(CheckError::ComponentMismatch {
                    component: k, full, single
                });
            }
        }

        Ok(())
    }

    /// Checks the Jacobian at `x` against central differences of [`NonlinearSystem::eval_f`].
    ///
    /// Entries outside the pattern are checked to be zero as well.
    /// Columns where either side is not finite are skipped.
    pub fn check_jacobian<P>(&self, prob: &P, x: &[f64]) -> Result<(), CheckError>
    where P: NonlinearSystem<f64> + ?Sized
    {
        let n = prob.num_equations();

        let csr = CsrBuild::assemble(prob, x)?;
        let mut dense = vec![0.; n * n];
        csr.as_op().to_dense(&mut dense);

        let mut xp = x.to_vec();
        let mut fp = vec![0.; n];
        let mut fm = vec![0.; n];

        for c in 0.. n {
            let h = self.par.fd_step * 1f64.max(x[c].abs());

            xp[c] = x[c] + h;
            prob.eval_f(&xp, &mut fp);
            xp[c] = x[c] - h;
            prob.eval_f(&xp, &mut fm);
            xp[c] = x[c];

            for r in 0.. n {
                let analytic = dense[c * n + r];
                let numeric = (fp[r] - fm[r]) / (2. * h);
                if !analytic.is_finite() || !numeric.is_finite() {
                    continue;
                }
                if !close(analytic, numeric, self.par.fd_tol) {
                    log::error!("{}: J({}, {}) {:e} vs {:e}", prob.title(), r, c, analytic, numeric);
                    return Err(CheckError::JacobianMismatch {
                        row: r, col: c, analytic, numeric
                    });
                }
            }
        }

        Ok(())
    }

    /// Checks that every exact solution is a root within `exact_tol`.
    pub fn check_exact_solutions<P>(&self, prob: &P) -> Result<(), CheckError>
    where P: NonlinearSystem<f64> + ?Sized
    {
        let n = prob.num_equations();
        let mut x = vec![0.; n];
        let mut f = vec![0.; n];

        for idx in 0.. prob.num_exact_solutions() {
            prob.exact_solution(&mut x, idx);
            prob.eval_f(&x, &mut f);

            let norm = f.iter().fold(0f64, |m, v| m.max(v.abs()));
            if !(norm <= self.par.exact_tol) {
                log::error!("{}: exact solution #{} has |F| {:e}", prob.title(), idx, norm);
                return Err(CheckError::ExactResidual {
                    solution: idx, norm
                });
            }
        }

        Ok(())
    }

    /// Assembles the Jacobian at `x` and checks the compressed sparse row invariants.
    ///
    /// Duplicated entries are accepted here; the assembler warns about them.
    /// Returns `Ok` with the assembled [`CsrBuild`].
    pub fn check_csr<P>(&self, prob: &P, x: &[f64]) -> Result<CsrBuild<f64>, CheckError>
    where P: NonlinearSystem<f64> + ?Sized
    {
        let n = prob.num_equations();
        let csr = CsrBuild::assemble(prob, x)?;

        if !csr.as_op().is_valid() || csr.row_ptr()[n] != prob.jacobian_nnz() {
            log::error!("{}: invalid compressed sparse row arrays", prob.title());
            return Err(CheckError::CsrInvalid);
        }

        Ok(csr)
    }

    /// Runs every check at every initial point, and on exact solutions.
    pub fn check_all<P>(&self, prob: &P) -> Result<(), CheckError>
    where P: NonlinearSystem<f64> + ?Sized
    {
        let mut x = vec![0.; prob.num_equations()];

        for idx in 0.. prob.num_initial_points() {
            prob.initial_point(&mut x, idx);
            log::debug!("{}: initial point #{}", prob.title(), idx);

            self.check_components(prob, &x)?;
            self.check_csr(prob, &x)?;
            self.check_jacobian(prob, &x)?;
        }

        self.check_exact_solutions(prob)
    }
}

//

#[test]
fn test_checker1()
{
    use crate::ScalarProblem;

    let _ = env_logger::builder().is_test(true).try_init();

    let prob = ScalarProblem::new();
    Checker::new().check_all(&prob).unwrap();
}

#[test]
fn test_checker2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // wrong sign of the Jacobian
    struct Flipped;

    impl NonlinearSystem<f64> for Flipped
    {
        fn title(&self) -> &str {"flipped"}
        fn bibtex(&self) -> &str {""}
        fn num_equations(&self) -> usize {1}
        fn eval_fk(&self, x: &[f64], _k: usize) -> f64 {x[0] * x[0] - 4.}
        fn jacobian_nnz(&self) -> usize {1}
        fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
        {
            i[0] = 0;
            j[0] = 0;
        }
        fn jacobian(&self, x: &[f64], jac: &mut[f64])
        {
            jac[0] = -2. * x[0];
        }
        fn num_exact_solutions(&self) -> usize {1}
        fn exact_solution(&self, x: &mut[f64], _idx: usize)
        {
            x[0] = 3.;
        }
        fn num_initial_points(&self) -> usize {1}
        fn initial_point(&self, x: &mut[f64], _idx: usize)
        {
            x[0] = 1.;
        }
    }

    let c = Checker::new();
    assert!(matches!(c.check_jacobian(&Flipped, &[1.]), Err(CheckError::JacobianMismatch {row: 0, col: 0, ..})));
    assert!(matches!(c.check_exact_solutions(&Flipped), Err(CheckError::ExactResidual {solution: 0, ..})));
    assert!(c.check_components(&Flipped, &[1.]).is_ok());
    assert!(c.check_csr(&Flipped, &[1.]).is_ok());
}
