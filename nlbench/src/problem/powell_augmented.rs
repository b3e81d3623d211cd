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

fn phi(t: f64) -> f64
{
    if t <= -1. {
        t / 2. - 2.
    }
    else if t >= 2. {
        t / 2. + 2.
    }
    else {
        (-1924. + t * (4551. + t * (888. - t * 592.))) / 1998.
    }
}

fn phi_1(t: f64) -> f64
{
    if t <= -1. || t >= 2. {
        0.5
    }
    else {
        (4551. + t * (2. * 888. - t * 3. * 592.)) / 1998.
    }
}

/// Badly scaled augmented Powell's function, made of independent blocks of three.
pub struct BadlyScaledAugmentedPowellFunction
{
    base: ProbBase,
}

impl BadlyScaledAugmentedPowellFunction
{
    /// * `n` shall be a multiple of 3.
    pub fn new(n: usize) -> Self
    {
        check_multiple(n, 3, 3);

        BadlyScaledAugmentedPowellFunction {
            base: ProbBase::new("Badly scaled augmented Powell’s function", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for BadlyScaledAugmentedPowellFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let b = &x[k - k % 3..];
        match k % 3 {
            0 => 10000. * (b[0] * b[1]) - 1.,
            1 => (-b[1]).exp() + (-b[0]).exp() - 1.0001,
            _ => phi(b[2]),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        (self.base.n() / 3) * 5
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in (0.. self.base.n()).step_by(3) {
            p.push(k, k);
            p.push(k, k + 1);
            p.push(k + 1, k);
            p.push(k + 1, k + 1);
            p.push(k + 2, k + 2);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for b in x.chunks_exact(3) {
            v.push(10000. * b[1]);
            v.push(10000. * b[0]);
            v.push(-(-b[0]).exp());
            v.push(-(-b[1]).exp());
            v.push(phi_1(b[2]));
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        for b in x.chunks_exact_mut(3) {
            b.copy_from_slice(&[
                0.109815932969981745568376164563E-4,
                9.10614673986652401094671049032,
                0.3998810580736440979319618294548679254646,
            ]);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        2
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        let p = match idx {
            0 => [0., 1., -4.],
            _ => [1e-3, 18., 1.],
        };
        for b in x.chunks_exact_mut(3) {
            b.copy_from_slice(&p);
        }
    }
}
