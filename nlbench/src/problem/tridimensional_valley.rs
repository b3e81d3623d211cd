use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, NO_DOC};

const C1: f64 = 1.003344481605351;
const C2: f64 = -3.344481605351171e-3;

pub struct TridimensionalValley
{
    base: ProbBase,
}

impl TridimensionalValley
{
    pub fn new() -> Self
    {
        TridimensionalValley {
            base: ProbBase::new("Tridimensional valley.", NO_DOC, 3),
        }
    }
}

impl NonlinearSystem<f64> for TridimensionalValley
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => {
                let t = x[0] * x[0];
                (C2 * t + C1) * x[0] * (-t / 100.).exp() - 1.
            },
            1 => 10. * (x[0].sin() - x[1]),
            _ => 10. * (x[0].cos() - x[2]),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        5
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        p.push(0, 0);
        p.push_row(1, [0, 1]);
        p.push_row(2, [0, 2]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let t = x[0] * x[0];
        let d0 = (C1 - t / 50. * (C1 + C2 * (t - 150.))) * (-t / 100.).exp();
        jac.copy_from_slice(&[
            d0,
            10. * x[0].cos(), -10.,
            -10. * x[0].sin(), -10.,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[
            1.0103301175891008618821430258424435903873866121054053,
            0.847007375051043571769939585744456415641478463861070185,
            0.531581138312055623979884869864864195697816223034820704,
        ]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-4., 1., 2.]);
    }
}
