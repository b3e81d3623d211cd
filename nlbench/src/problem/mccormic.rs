use std::f64::consts::PI;
use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
MVF - Multivariate Test Functions Library in C for Unconstrained Global Optimization
Ernesto P. Adorio Department of Mathematics U.P. Diliman
ernesto.adorio@gmail.com eadorio@yahoo.com, 2005
";

/// \\(\cos(x+y) \pm 2(x-y) + c_k\\).
pub struct McCormicFunction
{
    base: ProbBase,
}

impl McCormicFunction
{
    pub fn new() -> Self
    {
        McCormicFunction {
            base: ProbBase::new("McCormic function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for McCormicFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let c = (x[0] + x[1]).cos();
        let d = 2. * (x[0] - x[1]);
        match k {
            0 => c + d - 1.5,
            _ => c - d + 2.5,
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        4
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(2);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let s = (x[0] + x[1]).sin();
        jac.copy_from_slice(&[2. - s, -2. - s, -2. - s, 2. - s]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[PI / 3. + 0.5, PI / 3. - 0.5]);
    }

    fn num_initial_points(&self) -> usize
    {
        2
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.copy_from_slice(&[-1.5, 4.]),
            _ => x.copy_from_slice(&[-3., 4.]),
        }
    }
}
