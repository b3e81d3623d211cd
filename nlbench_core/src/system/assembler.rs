use num_traits::Float;
use crate::system::{NonlinearSystem, ProblemError};
use crate::sort_ij::{sort_ij, SORT_IJ_THRESH};

/// Assembler parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblerParam
{
    /// Partition size at or below which the triplet sort switches to insertion sort.
    pub sort_thresh: usize,
    /// Rejects pattern entries out of `0..n` before building row pointers.
    pub check_range: bool,
    /// Outputs a warning log for each duplicated \\((i, j)\\) found after sorting.
    pub warn_duplicate: bool,
}

impl Default for AssemblerParam
{
    fn default() -> Self
    {
        AssemblerParam {
            sort_thresh: SORT_IJ_THRESH,
            check_range: true,
            warn_duplicate: true,
        }
    }
}

//

/// Jacobian assembler into compressed sparse row form.
///
/// The Jacobian \\(J(x)\\) of a [`NonlinearSystem`] is evaluated as triplets
/// (pattern from [`NonlinearSystem::jacobian_pattern`], values from [`NonlinearSystem::jacobian`]),
/// which are sorted by row then column and compressed into
/// * `row_ptr` of length \\(n+1\\), `row_ptr[0] = 0`, `row_ptr[n] = nnz`,
/// * `col_idx` of length `nnz`, ascending within each row,
/// * `values` of length `nnz`, permuted in lock-step with `col_idx`.
///
/// Duplicated \\((i, j)\\) are kept as separate adjacent entries, not summed.
pub struct Assembler
{
    /// assembler parameters.
    pub par: AssemblerParam,
}

impl Assembler
{
    /// Query of a length of work slice.
    ///
    /// Returns a length of work slice that [`Assembler::assemble`] requires.
    /// * `nnz` is a number of Jacobian nonzeros, [`NonlinearSystem::jacobian_nnz`].
    pub fn query_worklen(nnz: usize) -> usize
    {
        nnz
    }

    /// Creates an instance.
    ///
    /// Returns [`Assembler`] instance.
    pub fn new() -> Self
    {
        Assembler {
            par: AssemblerParam::default(),
        }
    }

    /// Changes assembler parameters.
    ///
    /// Returns [`Assembler`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut AssemblerParam)
    {
        f(&mut self.par);
        self
    }

    /// Assembles the Jacobian of `prob` at `x`.
    ///
    /// Returns `Ok` with the number of stored entries, or `Err` with [`ProblemError`] type.
    /// * `prob` is a problem instance.
    /// * `x` is a point of length \\(n\\).
    /// * `row_ptr` is a slice of length \\(n+1\\) for row pointers.
    /// * `col_idx` is a slice of length `nnz` for column indices.
    /// * `values` is a slice of length `nnz` for Jacobian values.
    /// * `work` slice is used for row indices of triplets. [`Assembler::assemble`] does not rely on dynamic heap allocation.
    pub fn assemble<F, P>(&self,
        prob: &P, x: &[F],
        row_ptr: &mut[usize], col_idx: &mut[usize], values: &mut[F],
        work: &mut[usize]
    ) -> Result<usize, ProblemError>
    where F: Float, P: NonlinearSystem<F> + ?Sized
    {
        let n = prob.num_equations();
        let nnz = prob.jacobian_nnz();

        if x.len() != n || row_ptr.len() != n + 1 || col_idx.len() != nnz || values.len() != nnz {
            log::error!("Size mismatch: n {}, nnz {}, x {}, row_ptr {}, col_idx {}, values {}",
                n, nnz, x.len(), row_ptr.len(), col_idx.len(), values.len());
            return Err(ProblemError::SizeMismatch);
        }

        if Self::query_worklen(nnz) > work.len() {
            log::error!("Work memory length {} must be >= {}", work.len(), Self::query_worklen(nnz));
            return Err(ProblemError::WorkShortage);
        }

        let row_idx = &mut work[.. nnz];

        prob.jacobian_pattern(row_idx, col_idx);
        prob.jacobian(x, values);

        if self.par.check_range {
            for k in 0.. nnz {
                if row_idx[k] >= n || col_idx[k] >= n {
                    log::error!("{}: pattern entry #{} ({}, {}) is out of {}x{}",
                        prob.title(), k, row_idx[k], col_idx[k], n, n);
                    return Err(ProblemError::PatternOutOfRange {
                        entry: k, row: row_idx[k], col: col_idx[k]
                    });
                }
            }
        }

        sort_ij(row_idx, col_idx, values, self.par.sort_thresh);

        if self.par.warn_duplicate {
            for k in 1.. nnz {
                if row_idx[k] == row_idx[k - 1] && col_idx[k] == col_idx[k - 1] {
                    log::warn!("{}: duplicated entry ({}, {})", prob.title(), row_idx[k], col_idx[k]);
                }
            }
        }

        // count per row, then prefix sum
        row_ptr.fill(0);
        for r in row_idx.iter() {
            row_ptr[r + 1] += 1;
        }
        for r in 0.. n {
            row_ptr[r + 1] += row_ptr[r];
        }

        log::trace!("{}: assembled {}x{} with {} entries", prob.title(), n, n, nnz);

        Ok(nnz)
    }
}

//

#[cfg(test)]
struct Tri2;

#[cfg(test)]
impl NonlinearSystem<f64> for Tri2
{
    fn title(&self) -> &str {"tri2"}
    fn bibtex(&self) -> &str {""}
    fn num_equations(&self) -> usize {3}
    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0] * x[1],
            1 => x[1] + x[2],
            _ => x[2] * x[2],
        }
    }
    fn jacobian_nnz(&self) -> usize {5}
    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        // deliberately unsorted
        i.copy_from_slice(&[2, 1, 0, 1, 0]);
        j.copy_from_slice(&[2, 2, 1, 1, 0]);
    }
    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.copy_from_slice(&[2. * x[2], 1., x[0], 1., x[1]]);
    }
    fn num_exact_solutions(&self) -> usize {0}
    fn exact_solution(&self, _x: &mut[f64], _idx: usize) {}
    fn num_initial_points(&self) -> usize {1}
    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }
}

#[test]
fn test_assembler1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let x = &[2., 3., 5.];
    let row_ptr = &mut[0; 4];
    let col_idx = &mut[0; 5];
    let values = &mut[0.; 5];
    let work = &mut[0; 5];

    let nnz = Assembler::new().assemble(&Tri2, x, row_ptr, col_idx, values, work).unwrap();

    assert_eq!(nnz, 5);
    assert_eq!(row_ptr, &[0, 2, 4, 5]);
    assert_eq!(col_idx, &[0, 1, 1, 2, 2]);
    assert_eq!(values, &[3., 2., 1., 1., 10.]);
}

#[test]
fn test_assembler2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let x = &[2., 3., 5.];
    let row_ptr = &mut[0; 4];
    let col_idx = &mut[0; 5];
    let values = &mut[0.; 5];

    let r = Assembler::new().assemble(&Tri2, x, row_ptr, col_idx, values, &mut[0; 4]);
    assert_eq!(r, Err(ProblemError::WorkShortage));

    let r = Assembler::new().assemble(&Tri2, x, &mut[0; 3], col_idx, values, &mut[0; 5]);
    assert_eq!(r, Err(ProblemError::SizeMismatch));

    let r = Assembler::new().assemble(&Tri2, &[1., 1.], row_ptr, col_idx, values, &mut[0; 5]);
    assert_eq!(r, Err(ProblemError::SizeMismatch));
}

#[test]
fn test_assembler3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // any threshold gives the same arrays
    let x = &[2., 3., 5.];
    let row_ptr = &mut[0; 4];
    let col_idx = &mut[0; 5];
    let values = &mut[0.; 5];
    let work = &mut[0; 5];

    for t in [0, 1, 4, 16] {
        Assembler::new().par(|p| {
            p.sort_thresh = t;
        }).assemble(&Tri2, x, row_ptr, col_idx, values, work).unwrap();

        assert_eq!(row_ptr, &[0, 2, 4, 5]);
        assert_eq!(col_idx, &[0, 1, 1, 2, 2]);
        assert_eq!(values, &[3., 2., 1., 1., 10.]);
    }
}

#[test]
fn test_assembler4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // no structural nonzeros
    struct Empty2;

    impl NonlinearSystem<f64> for Empty2
    {
        fn title(&self) -> &str {"empty2"}
        fn bibtex(&self) -> &str {""}
        fn num_equations(&self) -> usize {2}
        fn eval_fk(&self, _x: &[f64], _k: usize) -> f64 {1.}
        fn jacobian_nnz(&self) -> usize {0}
        fn jacobian_pattern(&self, _i: &mut[usize], _j: &mut[usize]) {}
        fn jacobian(&self, _x: &[f64], _jac: &mut[f64]) {}
        fn num_exact_solutions(&self) -> usize {0}
        fn exact_solution(&self, _x: &mut[f64], _idx: usize) {}
        fn num_initial_points(&self) -> usize {1}
        fn initial_point(&self, x: &mut[f64], _idx: usize)
        {
            x.fill(0.);
        }
    }

    let row_ptr = &mut[9; 3];
    let col_idx: &mut[usize] = &mut[];
    let values: &mut[f64] = &mut[];

    let r = Assembler::new().assemble(&Empty2, &[0., 0.], row_ptr, col_idx, values, &mut[]);

    assert_eq!(r, Ok(0));
    assert_eq!(row_ptr, &[0, 0, 0]);
    assert!(col_idx.is_empty());
    assert!(values.is_empty());
}
