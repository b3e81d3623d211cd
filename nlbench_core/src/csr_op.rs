use num_traits::Float;

/// Compressed sparse row matrix operator
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Square matrix struct which borrows the three slices filled by [`crate::system::Assembler::assemble`].
/// Entries with a duplicated \\((i, j)\\) are treated as terms of a sum.
#[derive(Debug)]
pub struct CsrOp<'a, F: Float>
{
    row_ptr: &'a[usize],
    col_idx: &'a[usize],
    values: &'a[F],
}

impl<'a, F: Float> CsrOp<'a, F>
{
    /// Creates an instance
    ///
    /// Returns [`CsrOp`] instance.
    /// * `row_ptr`: row pointers of length \\(n+1\\).
    /// * `col_idx`: column indices of length `row_ptr[n]`.
    /// * `values`: values of length `row_ptr[n]`.
    pub fn new(row_ptr: &'a[usize], col_idx: &'a[usize], values: &'a[F]) -> Self
    {
        assert!(!row_ptr.is_empty());
        assert_eq!(col_idx.len(), values.len());
        assert_eq!(row_ptr[row_ptr.len() - 1], values.len());

        CsrOp {
            row_ptr, col_idx, values
        }
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and a number of columns.
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

    /// Stored entries of a row.
    ///
    /// Returns a tuple of column indices and values of the `r`-th row.
    pub fn row(&self, r: usize) -> (&'a[usize], &'a[F])
    {
        let (b, e) = (self.row_ptr[r], self.row_ptr[r + 1]);
        (&self.col_idx[b.. e], &self.values[b.. e])
    }

    /// Row pointers.
    pub fn row_ptr(&self) -> &'a[usize]
    {
        self.row_ptr
    }

    /// Column indices.
    pub fn col_idx(&self) -> &'a[usize]
    {
        self.col_idx
    }

    /// Checks the compressed sparse row invariants.
    ///
    /// Returns `true` if `row_ptr` starts at zero and is non-decreasing,
    /// and column indices are in range and non-decreasing within each row.
    pub fn is_valid(&self) -> bool
    {
        let (n, _) = self.size();

        if self.row_ptr[0] != 0 {
            return false;
        }

        for r in 0.. n {
            if self.row_ptr[r] > self.row_ptr[r + 1] {
                return false;
            }
            let (cols, _) = self.row(r);
            if cols.iter().any(|&c| c >= n) {
                return false;
            }
            if cols.windows(2).any(|w| w[0] > w[1]) {
                return false;
            }
        }

        true
    }

    /// Calculates \\(\alpha J x + \beta y\\).
    ///
    /// * `y` is overwritten with the result.
    pub fn op(&self, alpha: F, x: &[F], beta: F, y: &mut[F])
    {
        let (n, _) = self.size();
        assert_eq!(x.len(), n);
        assert_eq!(y.len(), n);

        for (r, e) in y.iter_mut().enumerate() {
            let (cols, vals) = self.row(r);
            let s = cols.iter().zip(vals)
                .fold(F::zero(), |s, (&c, &v)| s + v * x[c]);
            *e = alpha * s + beta * *e;
        }
    }

    /// Calculates \\(\alpha J^T x + \beta y\\).
    ///
    /// * `y` is overwritten with the result.
    pub fn trans_op(&self, alpha: F, x: &[F], beta: F, y: &mut[F])
    {
        let (n, _) = self.size();
        assert_eq!(x.len(), n);
        assert_eq!(y.len(), n);

        for e in y.iter_mut() {
            *e = beta * *e;
        }
        for r in 0.. n {
            let (cols, vals) = self.row(r);
            for (&c, &v) in cols.iter().zip(vals) {
                y[c] = y[c] + alpha * v * x[r];
            }
        }
    }

    /// Scatters the entries to a dense matrix.
    ///
    /// * `array` is overwritten with column-major \\(n \times n\\) data.
    ///   Duplicated entries are added up.
    pub fn to_dense(&self, array: &mut[F])
    {
        let (n, _) = self.size();
        assert_eq!(array.len(), n * n);

        array.fill(F::zero());
        for r in 0.. n {
            let (cols, vals) = self.row(r);
            for (&c, &v) in cols.iter().zip(vals) {
                array[c * n + r] = array[c * n + r] + v;
            }
        }
    }
}

impl<'a, F: Float> AsRef<[F]> for CsrOp<'a, F>
{
    fn as_ref(&self) -> &[F]
    {
        self.values
    }
}

//

#[test]
fn test_csrop1()
{
    use float_eq::assert_float_eq;

    // [1 0 2]
    // [0 0 3]
    // [4 5 0]
    let row_ptr = &[0, 2, 3, 5];
    let col_idx = &[0, 2, 2, 0, 1];
    let values = &[1., 2., 3., 4., 5.];

    let m = CsrOp::new(row_ptr, col_idx, values);
    assert!(m.is_valid());
    assert_eq!(m.size(), (3, 3));
    assert_eq!(m.nnz(), 5);

    let x = &[1., 2., 3.];
    let y = &mut[1., 1., 1.];
    m.op(2., x, -1., y);
    assert_float_eq!(y.as_ref(), [13., 17., 27.].as_ref(), abs_all <= 1e-12);

    let y = &mut[0.; 3];
    m.trans_op(1., x, 0., y);
    assert_float_eq!(y.as_ref(), [13., 15., 8.].as_ref(), abs_all <= 1e-12);

    let d = &mut[0.; 9];
    m.to_dense(d);
    assert_float_eq!(d.as_ref(), [1., 0., 4., 0., 0., 5., 2., 3., 0.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_csrop2()
{
    use float_eq::assert_float_eq;

    // duplicated (0, 1) entries are summed by consumers
    let row_ptr = &[0, 2, 2];
    let col_idx = &[1, 1];
    let values = &[1.5, 2.5];

    let m = CsrOp::new(row_ptr, col_idx, values);
    assert!(m.is_valid());

    let d = &mut[0.; 4];
    m.to_dense(d);
    assert_float_eq!(d.as_ref(), [0., 0., 4., 0.].as_ref(), abs_all <= 1e-12);

    let bad = CsrOp::new(&[0, 2, 2], &[1, 0], &[1., 1.]);
    assert!(!bad.is_valid());
    let bad = CsrOp::new(&[0, 1, 1], &[2], &[1.]);
    assert!(!bad.is_valid());
}
