use num_traits::Float;
use nlbench_core::system::{Assembler, NonlinearSystem, ProblemError};
use nlbench_core::CsrOp;

/// Jacobian in compressed sparse row form
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Struct which owns `Vec`s of the three compressed sparse row arrays
/// and is able to be converted as [`nlbench_core::CsrOp`].
/// This struct relies on dynamic heap allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrBuild<F: Float>
{
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<F>,
}

impl<F: Float> CsrBuild<F>
{
    /// Assembles the Jacobian of `prob` at `x` with default [`Assembler`] parameters.
    ///
    /// Returns `Ok` with [`CsrBuild`] instance, or `Err` with [`ProblemError`] type.
    pub fn assemble<P>(prob: &P, x: &[F]) -> Result<Self, ProblemError>
    where P: NonlinearSystem<F> + ?Sized
    {
        Self::assemble_by(&Assembler::new(), prob, x)
    }

    /// Assembles the Jacobian of `prob` at `x`.
    ///
    /// Returns `Ok` with [`CsrBuild`] instance, or `Err` with [`ProblemError`] type.
    /// * `asm` is an assembler with its parameters.
    /// * `prob` is a problem instance.
    /// * `x` is a point of length \\(n\\).
    pub fn assemble_by<P>(asm: &Assembler, prob: &P, x: &[F]) -> Result<Self, ProblemError>
    where P: NonlinearSystem<F> + ?Sized
    {
        let n = prob.num_equations();
        let nnz = prob.jacobian_nnz();

        let mut row_ptr = vec![0; n + 1];
        let mut col_idx = vec![0; nnz];
        let mut values = vec![F::zero(); nnz];
        let mut work = vec![0; Assembler::query_worklen(nnz)];

        asm.assemble(prob, x, &mut row_ptr, &mut col_idx, &mut values, &mut work)?;

        Ok(CsrBuild {
            row_ptr, col_idx, values
        })
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        let n = self.row_ptr.len() - 1;
        (n, n)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize
    {
        self.values.len()
    }

    pub fn row_ptr(&self) -> &[usize]
    {
        &self.row_ptr
    }

    pub fn col_idx(&self) -> &[usize]
    {
        &self.col_idx
    }

    pub fn values(&self) -> &[F]
    {
        &self.values
    }

    /// Converted as [`nlbench_core::CsrOp`].
    ///
    /// Returns the [`nlbench_core::CsrOp`] borrowing the internal arrays.
    pub fn as_op(&self) -> CsrOp<'_, F>
    {
        CsrOp::new(&self.row_ptr, &self.col_idx, &self.values)
    }

    /// Consumes and returns `(row_ptr, col_idx, values)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<F>)
    {
        (self.row_ptr, self.col_idx, self.values)
    }
}

impl<F: Float> AsRef<[F]> for CsrBuild<F>
{
    fn as_ref(&self) -> &[F]
    {
        &self.values
    }
}

impl<F: Float + core::fmt::LowerExp> core::fmt::Display for CsrBuild<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (n, _) = self.size();
        let op = self.as_op();
        write!(f, "{}x{} nnz {}", n, n, self.nnz())?;

        for r in 0.. n {
            let (cols, vals) = op.row(r);
            if cols.is_empty() {
                continue;
            }
            writeln!(f)?;
            write!(f, "  {}:", r)?;
            for (c, v) in cols.iter().zip(vals) {
                write!(f, " ({}, {:.3e})", c, v)?;
            }
        }

        Ok(())
    }
}

//

#[test]
fn test_csrbuild1()
{
    use crate::ScalarProblem;

    let _ = env_logger::builder().is_test(true).try_init();

    let prob = ScalarProblem::new();
    let csr = CsrBuild::assemble(&prob, &[1.]).unwrap();

    assert_eq!(csr.size(), (1, 1));
    assert_eq!(csr.row_ptr(), &[0, 1]);
    assert_eq!(csr.col_idx(), &[0]);
    assert_eq!(csr.values(), &[8.]);
    assert!(csr.as_op().is_valid());

    log::debug!("{}", csr);
}
