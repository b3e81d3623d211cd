use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

const BIBTEX: &str = "\
@article{Morgan:1987,
  author  = {Alexander Morgan and Andrew Sommese},
  title   = {Computing all solutions to polynomial
             systems using homotopy continuation},
  journal = {Applied Mathematics and Computation},
  volume  = {24},
  number  = {2},
  pages   = {115--138},
  year    = {1987},
  issn    = {0096-3003},
  doi     = {10.1016/0096-3003(87)90064-6}
}

@article{Hentenryck:1997,
  author  = {Van Hentenryck, P. and McAllester, D. and Kapur, D.},
  title   = {Solving Polynomial Systems Using a Branch and Prune Approach},
  journal = {SIAM Journal on Numerical Analysis},
  year    = {1997},
  volume  = {34},
  number  = {2},
  pages   = {797-827},
  doi     = {10.1137/S0036142995281504}
}
";

/// `(a_i, b_i, [p, q, r])` of \\(x_i - a_i - b_i x_p x_q x_r\\).
const TERMS: [(f64, f64, [usize; 3]); 10] = [
    (0.25428722, 0.18324757, [3, 2, 8]),
    (0.37842197, 0.16275449, [0, 9, 5]),
    (0.27162577, 0.16955071, [0, 1, 9]),
    (0.19807914, 0.15585316, [6, 0, 5]),
    (0.44166728, 0.19950920, [6, 5, 2]),
    (0.14654113, 0.18922793, [7, 4, 9]),
    (0.42937161, 0.21180486, [1, 4, 7]),
    (0.07056438, 0.17081208, [0, 6, 5]),
    (0.34504906, 0.19612740, [9, 5, 7]),
    (0.42651102, 0.21466544, [3, 7, 0]),
];

pub struct IntervalArithmeticBenchmarks
{
    base: ProbBase,
}

impl IntervalArithmeticBenchmarks
{
    pub fn new() -> Self
    {
        IntervalArithmeticBenchmarks {
            base: ProbBase::new("Interval Arithmetic Benchmarks", BIBTEX, 10),
        }
    }
}

impl NonlinearSystem<f64> for IntervalArithmeticBenchmarks
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (a, b, [p, q, r]) = TERMS[k];
        x[k] - a - b * x[p] * x[q] * x[r]
    }

    fn jacobian_nnz(&self) -> usize
    {
        4 * TERMS.len()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut pf = PatternFill::new(i, j);
        for (k, (_, _, [p, q, r])) in TERMS.iter().enumerate() {
            pf.push_row(k, [k, *p, *q, *r]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for (_, b, [p, q, r]) in TERMS.iter() {
            v.push(1.);
            v.push(-b * x[*q] * x[*r]);
            v.push(-b * x[*p] * x[*r]);
            v.push(-b * x[*p] * x[*q]);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }
}
