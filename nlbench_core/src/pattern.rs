//! Sequential writers of Jacobian triplets

/// Writer of a Jacobian pattern
///
/// Pushes \\((i, j)\\) pairs one by one into the slices given to
/// [`crate::system::NonlinearSystem::jacobian_pattern`].
pub struct PatternFill<'a>
{
    i: &'a mut[usize],
    j: &'a mut[usize],
    k: usize,
}

impl<'a> PatternFill<'a>
{
    /// Creates an instance
    ///
    /// Returns [`PatternFill`] instance positioned at the first entry.
    pub fn new(i: &'a mut[usize], j: &'a mut[usize]) -> Self
    {
        assert_eq!(i.len(), j.len());

        PatternFill {i, j, k: 0}
    }

    /// Appends an entry at row `r` and column `c`.
    #[inline]
    pub fn push(&mut self, r: usize, c: usize)
    {
        self.i[self.k] = r;
        self.j[self.k] = c;
        self.k += 1;
    }

    /// Appends all entries of row `r` over columns `cols`.
    pub fn push_row<I>(&mut self, r: usize, cols: I)
    where I: IntoIterator<Item=usize>
    {
        for c in cols {
            self.push(r, c);
        }
    }

    /// Appends a dense \\(n \times n\\) block, row by row.
    pub fn push_dense(&mut self, n: usize)
    {
        for r in 0.. n {
            self.push_row(r, 0.. n);
        }
    }

    /// Appends the diagonal of an \\(n \times n\\) block.
    pub fn push_diag(&mut self, n: usize)
    {
        for k in 0.. n {
            self.push(k, k);
        }
    }

    /// Number of entries pushed so far.
    pub fn len(&self) -> usize
    {
        self.k
    }

    /// Checks if every slot has been written.
    pub fn is_full(&self) -> bool
    {
        self.k == self.i.len()
    }
}

//

/// Writer of Jacobian values in the order of its [`PatternFill`] counterpart.
pub struct ValueFill<'a, F>
{
    v: &'a mut[F],
    k: usize,
}

impl<'a, F> ValueFill<'a, F>
{
    /// Creates an instance
    ///
    /// Returns [`ValueFill`] instance positioned at the first entry.
    pub fn new(v: &'a mut[F]) -> Self
    {
        ValueFill {v, k: 0}
    }

    /// Appends a value.
    #[inline]
    pub fn push(&mut self, value: F)
    {
        self.v[self.k] = value;
        self.k += 1;
    }

    /// Number of values pushed so far.
    pub fn len(&self) -> usize
    {
        self.k
    }

    /// Checks if every slot has been written.
    pub fn is_full(&self) -> bool
    {
        self.k == self.v.len()
    }
}

//

#[test]
fn test_pattern1()
{
    let i = &mut[0; 6];
    let j = &mut[0; 6];

    let mut p = PatternFill::new(i, j);
    p.push(1, 1);
    p.push_dense(2);
    p.push_row(0, [3]);
    assert!(p.is_full());
    drop(p);

    assert_eq!(i, &[1, 0, 0, 1, 1, 0]);
    assert_eq!(j, &[1, 0, 1, 0, 1, 3]);

    let v = &mut[0.; 2];
    let mut w = ValueFill::new(v);
    w.push(1.);
    w.push(2.);
    assert_eq!(w.len(), 2);
    drop(w);
    assert_eq!(v, &[1., 2.]);
}

#[test]
fn test_pattern2()
{
    let i = &mut[9; 3];
    let j = &mut[9; 3];

    let mut p = PatternFill::new(i, j);
    p.push_diag(3);
    assert_eq!(p.len(), 3);
    assert!(p.is_full());
    drop(p);

    assert_eq!(i, &[0, 1, 2]);
    assert_eq!(j, &[0, 1, 2]);
}
