use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, eval_fk_by_f};

const BIBTEX: &str = "\
@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
}
";

static CENTERS: [[f64; 4]; 10] = [
    [4., 4., 4., 4.],
    [1., 1., 1., 1.],
    [8., 8., 8., 8.],
    [6., 6., 6., 6.],
    [3., 7., 3., 7.],
    [2., 9., 2., 9.],
    [5., 5., 3., 3.],
    [8., 1., 8., 1.],
    [6., 2., 6., 2.],
    [7., 3.6, 7., 3.6],
];

static WIDTHS: [f64; 10] = [0.1, 0.2, 0.2, 0.4, 0.6, 0.6, 0.3, 0.7, 0.5, 0.5];

/// Gradient of the Shekel function \\(-\sum_{j<m} 1 / (c_j + \|x - a_j\|^2)\\) in four dimensions.
///
/// Exact solutions are the stationary points of the deepest well near \\((4, 4, 4, 4)\\).
pub struct ShekelSQR
{
    base: ProbBase,
    m: usize,
}

impl ShekelSQR
{
    /// * `m` is a number of wells, 5, 7 or 10.
    pub fn new(m: usize) -> Self
    {
        assert!(matches!(m, 5 | 7 | 10), "Shekel function with {} wells", m);

        ShekelSQR {
            base: ProbBase::new(&format!("Shekel SQRN{} Function", m), BIBTEX, 4),
            m,
        }
    }

    fn wells<'a>(&self, x: &'a [f64]) -> impl Iterator<Item=(&'static [f64; 4], f64)> + 'a
    {
        CENTERS[.. self.m].iter().zip(&WIDTHS)
            .map(move |(a, c)| {
                let d = c + x.iter().zip(a).map(|(xi, ai)| (xi - ai).powi(2)).sum::<f64>();
                (a, d)
            })
    }
}

impl NonlinearSystem<f64> for ShekelSQR
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        f.fill(0.);
        for (a, d) in self.wells(x) {
            for (k, fk) in f.iter_mut().enumerate() {
                *fk += 2. * (x[k] - a[k]) / (d * d);
            }
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        16
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(4);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.fill(0.);
        for (a, d) in self.wells(x) {
            for r in 0.. 4 {
                for c in 0.. 4 {
                    jac[r * 4 + c] -= 8. * (x[r] - a[r]) * (x[c] - a[c]) / (d * d * d);
                }
                jac[r * 4 + r] += 2. / (d * d);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(match self.m {
            5 => &[4.000037617180809, 4.000131883274596, 4.000037617180809, 4.000131883274596],
            7 => &[4.000573380565874, 4.000687973788778, 3.9994901727514187, 3.999604765974322],
            _ => &[4.000746996122428, 4.000591542027785, 3.999663862065013, 3.9995084079703713],
        });
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 3., 5., 6.]);
    }
}
