//! Nonlinear system

use num_traits::Float;
use crate::system::ProblemError;

/// Nonlinear system trait
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
/// 
/// Expresses a square system of equations \\(F: \mathbb{R}^n \to \mathbb{R}^n\\)
/// together with its sparse Jacobian \\(\partial F_i / \partial x_j\\),
/// known solutions and suggested starting points.
/// 
/// Every method is a pure function of its arguments and of the parameters fixed at construction.
/// Evaluation outside the natural domain of a problem is not an error:
/// the affected entries are `NaN` and the caller is expected to test for them.
pub trait NonlinearSystem<F: Float>
{
    /// Display name, unique within a registry.
    fn title(&self) -> &str;

    /// Reference citation text.
    fn bibtex(&self) -> &str;

    /// Number of equations \\(n\\), which is also the number of unknowns.
    fn num_equations(&self) -> usize;

    /// Calculates the single component \\(F_k(x)\\).
    /// 
    /// Returns the same value as the `k`-th entry of [`NonlinearSystem::eval_f`].
    /// * `x` is a vector \\(x\\).
    ///   The length of `x` shall be \\(n\\).
    /// * `k` is a component index in `0..n`.
    fn eval_fk(&self, x: &[F], k: usize) -> F;

    /// Calculates \\(F(x)\\).
    ///
    /// The default implementation calls [`NonlinearSystem::eval_fk`] for each component.
    /// * `x` is a vector \\(x\\).
    ///   The length of `x` shall be \\(n\\).
    /// * `f` is \\(F(x)\\) on exit.
    ///   The length of `f` shall be \\(n\\).
    fn eval_f(&self, x: &[F], f: &mut[F])
    {
        for (k, e) in f.iter_mut().enumerate() {
            *e = self.eval_fk(x, k);
        }
    }

    /// Number of structural nonzeros of the Jacobian, independent of \\(x\\).
    fn jacobian_nnz(&self) -> usize;

    /// Structural positions of the Jacobian nonzeros.
    /// 
    /// The order is implementation-defined and is the order of [`NonlinearSystem::jacobian`] values.
    /// * `i` is row indices on exit.
    /// * `j` is column indices on exit.
    ///   The length of `i` and `j` shall be [`NonlinearSystem::jacobian_nnz`].
    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize]);

    /// Calculates the Jacobian nonzeros at \\(x\\).
    /// 
    /// * `x` is a vector \\(x\\).
    /// * `jac` is values on exit, `jac[k]` being \\(\partial F_{i_k} / \partial x_{j_k}\\)
    ///   where \\((i_k, j_k)\\) is the `k`-th pair of [`NonlinearSystem::jacobian_pattern`].
    ///   The length of `jac` shall be [`NonlinearSystem::jacobian_nnz`].
    fn jacobian(&self, x: &[F], jac: &mut[F]);

    /// Number of known exact solutions, possibly zero.
    fn num_exact_solutions(&self) -> usize;

    /// Known exact solution.
    /// 
    /// * `x` is the `idx`-th solution on exit.
    ///   It is left untouched when [`NonlinearSystem::num_exact_solutions`] is zero.
    /// * `idx` is in `0..num_exact_solutions()`.
    fn exact_solution(&self, x: &mut[F], idx: usize);

    /// Number of suggested initial points, at least one.
    fn num_initial_points(&self) -> usize;

    /// Suggested initial point.
    /// 
    /// * `x` is the `idx`-th initial point on exit.
    /// * `idx` is in `0..num_initial_points()`.
    fn initial_point(&self, x: &mut[F], idx: usize);

    /// Checks a problem-specific feasibility condition.
    /// 
    /// Returns `Ok` for unconstrained problems,
    /// or `Err` with [`ProblemError::Domain`] when `x` is not admissible.
    fn check_admissible(&self, _x: &[F]) -> Result<(), ProblemError>
    {
        Ok(())
    }

    /// Bounding box \\(L \le x \le U\\).
    /// 
    /// The default implementation is unbounded, \\(L=-\infty\\) and \\(U=+\infty\\).
    /// * `l` is \\(L\\) on exit.
    /// * `u` is \\(U\\) on exit.
    fn bounding_box(&self, l: &mut[F], u: &mut[F])
    {
        for v in l.iter_mut() {
            *v = F::neg_infinity();
        }
        for v in u.iter_mut() {
            *v = F::infinity();
        }
    }
}
