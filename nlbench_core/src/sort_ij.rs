//! Lexicographic sort of sparse triplets

/// Default partition size at or below which [`sort_ij`] switches to insertion sort.
pub const SORT_IJ_THRESH: usize = 4;

#[inline]
fn gt(i: usize, j: usize, i1: usize, j1: usize) -> bool
{
    if i == i1 {j > j1} else {i > i1}
}

struct Triplets<'a, T>
{
    i: &'a mut[usize],
    j: &'a mut[usize],
    a: &'a mut[T],
}

impl<'a, T> Triplets<'a, T>
{
    #[inline]
    fn gt(&self, p: isize, q: isize) -> bool
    {
        let (p, q) = (p as usize, q as usize);
        gt(self.i[p], self.j[p], self.i[q], self.j[q])
    }

    #[inline]
    fn gt_key(&self, (ki, kj): (usize, usize), q: isize) -> bool
    {
        let q = q as usize;
        gt(ki, kj, self.i[q], self.j[q])
    }

    #[inline]
    fn key_gt(&self, p: isize, (ki, kj): (usize, usize)) -> bool
    {
        let p = p as usize;
        gt(self.i[p], self.j[p], ki, kj)
    }

    #[inline]
    fn key(&self, p: isize) -> (usize, usize)
    {
        let p = p as usize;
        (self.i[p], self.j[p])
    }

    #[inline]
    fn swap(&mut self, p: isize, q: isize)
    {
        let (p, q) = (p as usize, q as usize);
        self.i.swap(p, q);
        self.j.swap(p, q);
        self.a.swap(p, q);
    }
}

/// Sorts sparse triplets \\((i_k, j_k, a_k)\\) by \\((i_k, j_k)\\) ascending, row first.
/// 
/// Quicksort with median-of-three pivots and an explicit stack,
/// finished by insertion sort over partitions of `max_thresh` elements or less.
/// The three slices are permuted in lock-step.
/// The sort is not stable; entries with an equal \\((i, j)\\) are kept, never merged.
/// 
/// * `i` is row indices.
/// * `j` is column indices.
/// * `a` is values carried along with their \\((i, j)\\).
///   `i`, `j` and `a` shall have the same length.
/// * `max_thresh` is a partition size threshold, typically [`SORT_IJ_THRESH`].
pub fn sort_ij<T>(i: &mut[usize], j: &mut[usize], a: &mut[T], max_thresh: usize)
{
    assert_eq!(i.len(), j.len());
    assert_eq!(i.len(), a.len());

    let total_elems = i.len() as isize;
    let thresh = max_thresh as isize;
    let mut t = Triplets {i, j, a};

    if total_elems <= 1 {
        return;
    }

    if total_elems > thresh {
        // larger partition is pushed, so the depth stays below log2(len)
        let mut stack = [(0_isize, 0_isize); usize::BITS as usize];
        let mut top = 0;

        let mut lo = 0;
        let mut hi = total_elems - 1;

        loop {
            let mid = (hi + lo) / 2;

            // median of three, which also places sentinels at lo and hi
            if t.gt(lo, mid) {
                t.swap(mid, lo);
            }
            if t.gt(mid, hi) {
                t.swap(hi, mid);
                if t.gt(lo, mid) {
                    t.swap(mid, lo);
                }
            }

            let pivot = t.key(mid);
            let mut left_ptr = lo + 1;
            let mut right_ptr = hi - 1;

            loop {
                while t.gt_key(pivot, left_ptr) {
                    left_ptr += 1;
                }
                while t.key_gt(right_ptr, pivot) {
                    right_ptr -= 1;
                }

                if left_ptr < right_ptr {
                    t.swap(left_ptr, right_ptr);
                    left_ptr += 1;
                    right_ptr -= 1;
                }
                else if left_ptr == right_ptr {
                    left_ptr += 1;
                    right_ptr -= 1;
                    break;
                }

                if left_ptr > right_ptr {
                    break;
                }
            }

            if right_ptr - lo <= thresh {
                if hi - left_ptr <= thresh {
                    if top == 0 {
                        break;
                    }
                    top -= 1;
                    (lo, hi) = stack[top];
                }
                else {
                    lo = left_ptr;
                }
            }
            else if hi - left_ptr <= thresh {
                hi = right_ptr;
            }
            else if right_ptr - lo > hi - left_ptr {
                stack[top] = (lo, right_ptr);
                top += 1;
                lo = left_ptr;
            }
            else {
                stack[top] = (left_ptr, hi);
                top += 1;
                hi = right_ptr;
            }
        }
    }

    for p in 1.. total_elems {
        let mut q = p;
        while q > 0 && t.gt(q - 1, q) {
            t.swap(q, q - 1);
            q -= 1;
        }
    }
}

/// Checks if \\((i_k, j_k)\\) is non-decreasing in the order of [`sort_ij`].
pub fn is_sorted_ij(i: &[usize], j: &[usize]) -> bool
{
    assert_eq!(i.len(), j.len());

    (1.. i.len()).all(|k| !gt(i[k - 1], j[k - 1], i[k], j[k]))
}

//

#[test]
fn test_sort_ij1()
{
    let i = &mut[2, 0, 1, 0, 2, 1, 0];
    let j = &mut[1, 2, 0, 0, 0, 1, 1];
    let a = &mut[21., 2., 10., 0., 20., 11., 1.];

    sort_ij(i, j, a, SORT_IJ_THRESH);

    assert_eq!(i, &[0, 0, 0, 1, 1, 2, 2]);
    assert_eq!(j, &[0, 1, 2, 0, 1, 0, 1]);
    assert_eq!(a, &[0., 1., 2., 10., 11., 20., 21.]);
}

#[test]
fn test_sort_ij2()
{
    // column-major dense pattern, which is the reverse of the target order per row
    let n = 40;
    let mut i = [0; 1600];
    let mut j = [0; 1600];
    let mut a = [0_usize; 1600];
    for c in 0.. n {
        for r in 0.. n {
            let k = c * n + r;
            i[k] = r;
            j[k] = c;
            a[k] = r * n + c;
        }
    }

    sort_ij(&mut i, &mut j, &mut a, SORT_IJ_THRESH);

    assert!(is_sorted_ij(&i, &j));
    for (k, v) in a.iter().enumerate() {
        assert_eq!(*v, k);
        assert_eq!(i[k] * n + j[k], k);
    }
}

#[test]
fn test_sort_ij3()
{
    // row takes priority over column
    let i = &mut[1, 0];
    let j = &mut[0, 5];
    let a = &mut['b', 'a'];

    sort_ij(i, j, a, 0);

    assert_eq!(i, &[0, 1]);
    assert_eq!(j, &[5, 0]);
    assert_eq!(a, &['a', 'b']);
}

#[test]
fn test_sort_ij4()
{
    let i: &mut[usize] = &mut[];
    let j: &mut[usize] = &mut[];
    let a: &mut[f64] = &mut[];

    sort_ij(i, j, a, SORT_IJ_THRESH);

    let i = &mut[3];
    let j = &mut[4];
    let a = &mut[5.];

    sort_ij(i, j, a, SORT_IJ_THRESH);

    assert_eq!((i[0], j[0], a[0]), (3, 4, 5.));
}

#[test]
fn test_sort_ij5()
{
    // duplicated keys are kept side by side
    let i = &mut[1, 0, 1, 0, 1, 0, 1, 0];
    let j = &mut[1, 0, 1, 0, 0, 1, 0, 1];
    let a = &mut[1., 2., 3., 4., 5., 6., 7., 8.];

    sort_ij(i, j, a, SORT_IJ_THRESH);

    assert_eq!(i, &[0, 0, 0, 0, 1, 1, 1, 1]);
    assert_eq!(j, &[0, 0, 1, 1, 0, 0, 1, 1]);
    let mut pairs = [(a[0], a[1]), (a[2], a[3]), (a[4], a[5]), (a[6], a[7])];
    for p in pairs.iter_mut() {
        if p.0 > p.1 {
            *p = (p.1, p.0);
        }
    }
    assert_eq!(pairs, [(2., 4.), (6., 8.), (5., 7.), (1., 3.)]);
}
