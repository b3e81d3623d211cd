use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@article{LaCruz:2003,
  author    = {William {La Cruz}  and  Marcos Raydan},
  title     = {Nonmonotone Spectral Methods for Large-Scale Nonlinear Systems},
  journal   = {Optimization Methods and Software},
  year      = {2003},
  volume    = {18},
  number    = {5},
  pages     = {583--599},
  publisher = {Taylor & Francis},
  doi       = {10.1080/10556780310001610493},
}
";

/// \\(\|x\|^2\\) followed by \\(-2 x_0 x_i\\); the Jacobian vanishes at the root.
pub struct ZeroJacobianFunction
{
    base: ProbBase,
}

impl ZeroJacobianFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        ZeroJacobianFunction {
            base: ProbBase::new("Zero Jacobian Function (same as function 27)", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for ZeroJacobianFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k == 0 {
            x.iter().map(|v| v * v).sum()
        }
        else {
            -2. * x[0] * x[k]
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        3 * self.base.n() - 2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        p.push_row(0, 0.. n);
        for k in 1.. n {
            p.push_row(k, [0, k]);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for xk in x {
            v.push(2. * xk);
        }
        for xk in &x[1..] {
            v.push(-2. * xk);
            v.push(-2. * x[0]);
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
        let n = self.base.n() as f64;
        x.fill((1. / 60. - 100. / (6. * n)) * (1. / 60. - 50. / 6.));
        x[0] = 100. * (n - 100.) / n;
    }
}
