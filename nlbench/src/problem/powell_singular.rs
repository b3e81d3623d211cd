use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_multiple};

const BIBTEX: &str = "\
@article{Powell:1962,
  author  = {Powell, M. J. D.},
  title   = {An Iterative Method for Finding Stationary
             Values of a Function of Several Variables},
  journal = {The Computer Journal},
  year    = {1962},
  volume  = {5},
  number  = {2},
  pages   = {147--151},
  doi     = {10.1093/comjnl/5.2.147}
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  year    = {1981},
  volume  = {7},
  number  = {1},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

/// Extended Powell singular function, independent blocks of four with a singular Jacobian at the root.
pub struct ExtendedPowellSingularFunction
{
    base: ProbBase,
    sqrt5: f64,
    sqrt10: f64,
}

impl ExtendedPowellSingularFunction
{
    pub fn new() -> Self
    {
        Self::with_size(4)
    }

    /// * `n` shall be a multiple of 4.
    pub fn with_size(n: usize) -> Self
    {
        check_multiple(n, 4, 4);

        ExtendedPowellSingularFunction {
            base: ProbBase::new("Extended Powell singular function", BIBTEX, n),
            sqrt5: 5_f64.sqrt(),
            sqrt10: 10_f64.sqrt(),
        }
    }
}

impl NonlinearSystem<f64> for ExtendedPowellSingularFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let b = &x[k - k % 4..];
        match k % 4 {
            0 => b[0] + 10. * b[1],
            1 => self.sqrt5 * (b[2] - b[3]),
            2 => (b[1] - 2. * b[2]).powi(2),
            _ => self.sqrt10 * (b[0] - b[3]).powi(2),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in (0.. self.base.n()).step_by(4) {
            p.push_row(k, [k, k + 1]);
            p.push_row(k + 1, [k + 2, k + 3]);
            p.push_row(k + 2, [k + 1, k + 2]);
            p.push_row(k + 3, [k, k + 3]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for b in x.chunks_exact(4) {
            let d2 = 2. * (b[1] - 2. * b[2]);
            let d3 = 2. * self.sqrt10 * (b[0] - b[3]);
            for e in [1., 10., self.sqrt5, -self.sqrt5, d2, -2. * d2, d3, -d3] {
                v.push(e);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        for b in x.chunks_exact_mut(4) {
            b.copy_from_slice(&[3., -1., 0., 1.]);
        }
    }
}
