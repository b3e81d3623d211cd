use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_multiple};

const BIBTEX: &str = "\
@article{Gasparo:2000,
  Author    = {Maria Grazia Gasparo},
  Title     = {A nonmonotone hybrid method for nonlinear systems},
  Journal   = {Optimization Methods and Software},
  Number    = {2},
  Pages     = {79--94},
  Publisher = {Taylor & Francis},
  Volume    = {13},
  Year      = {2000},
  Doi       = {10.1080/10556780008805776},
}
";

/// Diagonal functions multiplied by a quasi-orthogonal matrix, independent blocks of three.
pub struct DiagonalFunctionMulQO
{
    base: ProbBase,
}

impl DiagonalFunctionMulQO
{
    /// * `n` shall be a multiple of 3.
    pub fn new(n: usize) -> Self
    {
        check_multiple(n, 3, 3);

        DiagonalFunctionMulQO {
            base: ProbBase::new("Diagonal Functions Multiplied by quasi-orthogonal matrix", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for DiagonalFunctionMulQO
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let b = &x[k - k % 3..];
        let (x0, x1, x2) = (b[0], b[1], b[2]);
        match k % 3 {
            0 => x0 * (0.6 + 1.6 * x0 * x0) + x1 * (9.6 - 7.2 * x1) - 4.8,
            1 => 0.48 * x0 + x1 * (-4.32 + x1 * (3.24 - 0.72 * x1)) + x2 * (0.2 * x2 * x2 - 1.) + 2.16,
            _ => x2 * (1.25 - 0.25 * x2 * x2),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in (0.. self.base.n()).step_by(3) {
            p.push_row(k, [k, k + 1]);
            p.push_row(k + 1, [k, k + 1, k + 2]);
            p.push(k + 2, k + 2);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for b in x.chunks_exact(3) {
            let (x0, x1, x2) = (b[0], b[1], b[2]);
            v.push(0.6 + 4.8 * x0 * x0);
            v.push(9.6 - 14.4 * x1);
            v.push(0.48);
            v.push(-4.32 + x1 * (6.48 - 2.16 * x1));
            v.push(0.6 * x2 * x2 - 1.);
            v.push(1.25 - 0.75 * x2 * x2);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        for b in x.chunks_exact_mut(3) {
            b.copy_from_slice(&[-1., 0.5, -1.]);
        }
    }
}
