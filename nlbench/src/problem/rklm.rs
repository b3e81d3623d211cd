//! Test examples of systems of nonlinear equations collected by
//! Roose, Kulla, Lomb and Meressoo.
//!
//! Problems with no closed-form root carry roots tabulated for a few sizes only;
//! other sizes report no exact solution.

use std::ops::RangeInclusive;

const BIBTEX: &str = "\
@book{meresoo:1990,
  title     = {Test Examples of Systems of Nonlinear Equations: Version 3-90},
  author    = {Meresoo, T. and Roose, A. and Kulla,
               V. and Estonian Software and Computer Service Company},
  year      = 1990,
  publisher = {Estonian Software and Computer Service Company}
}
";

/// Roots keyed by the number of equations.
pub type Table = &'static [(usize, &'static [&'static [f64]])];

fn tabulated(table: Table, n: usize) -> &'static [&'static [f64]]
{
    table.iter()
        .find(|(m, _)| *m == n)
        .map_or(&[], |(_, s)| s)
}

/// Columns `k - below ..= k + above` clipped to `0.. n`.
fn band(n: usize, k: usize, below: usize, above: usize) -> RangeInclusive<usize>
{
    k.saturating_sub(below)..= (k + above).min(n - 1)
}

/// Returns \\((x_{k-1}, x_{k+1})\\), substituting `lo` and `hi` beyond either end.
fn neighbours(x: &[f64], k: usize, lo: f64, hi: f64) -> (f64, f64)
{
    let xm = if k > 0 {x[k - 1]} else {lo};
    let xp = if k + 1 < x.len() {x[k + 1]} else {hi};
    (xm, xp)
}

/// Implements exact solutions looked up in a [`Table`].
macro_rules! tabulated_solutions {
    ($table: expr) => {
        fn num_exact_solutions(&self) -> usize
        {
            super::tabulated($table, self.base.n()).len()
        }

        fn exact_solution(&self, x: &mut[f64], idx: usize)
        {
            x.copy_from_slice(super::tabulated($table, self.base.n())[idx]);
        }
    };
}

mod tables;

//

mod recurrence;
pub use recurrence::*;

//

mod boundary_value;
pub use boundary_value::*;

//

mod coupled;
pub use coupled::*;

//

#[test]
fn test_tabulated1()
{
    assert_eq!(tabulated(tables::N206, 5).len(), 1);
    assert_eq!(tabulated(tables::N206, 5)[0].len(), 5);
    assert!(tabulated(tables::N206, 7).is_empty());
}

#[test]
fn test_band1()
{
    assert_eq!(band(10, 0, 3, 3), 0..= 3);
    assert_eq!(band(10, 8, 5, 1), 3..= 9);
    assert_eq!(band(10, 9, 5, 1), 4..= 9);
}
