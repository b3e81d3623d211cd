use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{McKinnon:1998,
  author  = {McKinnon, K.},
  title   = {Convergence of the Nelder--Mead Simplex
             Method to a Nonstationary Point},
  journal = {SIAM Journal on Optimization},
  volume  = {9},
  number  = {1},
  pages   = {148-158},
  year    = {1998},
  doi     = {10.1137/S1052623496303482},
}
";

/// Gradient of \\(\theta \phi |x|^\tau + y + y^2\\) for \\(x \le 0\\),
/// \\(\theta x^\tau + y + y^2\\) otherwise.
pub struct McKinnon
{
    base: ProbBase,
    tau: f64,
    theta: f64,
    phi: f64,
}

impl McKinnon
{
    pub fn new() -> Self
    {
        McKinnon {
            base: ProbBase::new("McKinnon function", BIBTEX, 2),
            tau: 2.,
            theta: 6.,
            phi: 60.,
        }
    }

    fn weight(&self, x: f64) -> f64
    {
        if x <= 0. {self.theta * self.phi} else {self.theta}
    }
}

impl NonlinearSystem<f64> for McKinnon
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => {
                let x0 = x[0];
                self.weight(x0) * self.tau * x0.signum() * x0.abs().powf(self.tau - 1.)
            },
            _ => 1. + 2. * x[1],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_diag(2);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let x0 = x[0];
        let tau = self.tau;
        jac[0] = self.weight(x0) * tau * (tau - 1.) * x0.abs().powf(tau - 2.);
        jac[1] = 2.;
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., -0.5]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }
}
