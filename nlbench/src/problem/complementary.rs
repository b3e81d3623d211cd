use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_even};

const BIBTEX: &str = "\
@article{LaCruz:2006,
  title   = {Spectral Residual Method without Gradient Information
             for Solving Large-Scale Nonlinear Systems of Equations},
  author  = {William La Cruz and Jos\\`e Mario Mart\\`\\inez and Marcos Raydan},
  journal = {Mathematics of Computation},
  year    = {2006},
  volume  = {75},
  number  = {255},
  pages   = {1429--1448},
  publisher = {American Mathematical Society},
}

@article{LaCruz:2003,
  author    = { William {La Cruz}  and  Marcos Raydan},
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

/// Complementary function, a diagonal system of Fischer-Burmeister like terms
/// \\(\sqrt{a^2 + b^2} - a - b\\).
pub struct ComplementaryFunction
{
    base: ProbBase,
}

impl ComplementaryFunction
{
    /// * `n` shall be even.
    pub fn new(n: usize) -> Self
    {
        check_even(n, 2);

        ComplementaryFunction {
            base: ProbBase::new("Complementary Function", BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for ComplementaryFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let xk = x[k];
        let ek = xk.exp();
        if k % 2 == 0 {
            let t = 1. / self.base.n() as f64;
            (xk * xk + (ek * xk - t).powi(2)).sqrt() - (ek + 1.) * xk + t
        }
        else {
            let sk = xk.sin();
            (xk * xk + (3. * xk + sk + ek).powi(2)).sqrt() - 4. * xk - sk - ek
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for k in 0.. self.base.n() {
            p.push(k, k);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let t = 1. / self.base.n() as f64;
        let mut v = ValueFill::new(jac);
        for (k, &xk) in x.iter().enumerate() {
            let ek = xk.exp();
            if k % 2 == 0 {
                let t3 = ek * xk;
                let t5 = t3 - t;
                let t8 = (xk * xk + t5 * t5).sqrt();
                v.push((xk + (ek + t3) * t5) / t8 - 1. - ek - t3);
            }
            else {
                let t5 = 3. * xk + xk.sin() + ek;
                let t8 = (xk * xk + t5 * t5).sqrt();
                let ck = xk.cos();
                v.push((xk + (3. + ck + ek) * t5) / t8 - 4. - ck - ek);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.5);
    }
}
