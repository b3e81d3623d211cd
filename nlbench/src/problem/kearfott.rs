use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

const EIGER_BIBTEX: &str = "\
@article{Eiger:1984,
  author  = {Eiger, A. and Sikorski, K. and Stenger, F.},
  title   = {A Bisection Method for Systems of Nonlinear Equations},
  journal = {ACM Trans. Math. Softw.},
  year    = {1984},
  volume  = {10},
  number  = {4},
  pages   = {367--377},
  doi     = {10.1145/2701.2705},
}

@article{Kearfott:1987,
  author  = {Kearfott, R. Baker},
  title   = {Some Tests of Generalized Bisection},
  journal = {ACM Trans. Math. Softw.},
  year    = {1987},
  volume  = {13},
  number  = {3},
  pages   = {197--220},
  doi     = {10.1145/29380.29862},
}
";

const KEARFOTT_BIBTEX: &str = "\
@phdthesis{Kearfott:1977,
  author    = {Kearfott, Ralph Baker},
  title     = {Computing the Degree of Maps and a Generalized
               Method of Bisection},
  year      = {1977},
  note      = {AAI7723103},
  publisher = {The University of Utah},
}

@Article{Kearfott:1979,
  author  = {Kearfott, Baker},
  title   = {An efficient degree-computation method for a generalized
             method of bisection},
  journal = {Numerische Mathematik},
  year    = {1979},
  volume  = {32},
  number  = {2},
  pages   = {109--127},
  doi     = {10.1007/BF01404868}
}
";

/// Pattern of \\(f_i(x_i, x_{(i+1) \bmod n})\\): the diagonal entry, then the cyclic successor.
fn cyclic_pattern(n: usize, i: &mut[usize], j: &mut[usize])
{
    let mut p = PatternFill::new(i, j);
    for k in 0.. n {
        p.push_row(k, [k, (k + 1) % n]);
    }
}

/// Extended Eiger-Sikorski-Stenger function \\((x_i - 0.1)^2 + x_{i+1} - 0.1\\), cyclic in 9 unknowns.
pub struct ExtendedEigerSikorskiStenger
{
    base: ProbBase,
}

impl ExtendedEigerSikorskiStenger
{
    pub fn new() -> Self
    {
        ExtendedEigerSikorskiStenger {
            base: ProbBase::new("Extended Eiger-Sikorski-Stenger Function", EIGER_BIBTEX, 9),
        }
    }
}

impl NonlinearSystem<f64> for ExtendedEigerSikorskiStenger
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        let next = x[(i + 1) % self.base.n()];
        (x[i] - 0.1).powi(2) + next - 0.1
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        cyclic_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for &xi in x {
            v.push(2. * (xi - 0.1));
            v.push(1.);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(-2000.);
    }
}

//

/// Extended Kearfott function \\(x_i^2 - x_{i+1}\\), cyclic in 7 unknowns.
pub struct ExtendedKearfottFunction
{
    base: ProbBase,
}

impl ExtendedKearfottFunction
{
    pub fn new() -> Self
    {
        ExtendedKearfottFunction {
            base: ProbBase::new("Extended Kearfott Function", KEARFOTT_BIBTEX, 7),
        }
    }
}

impl NonlinearSystem<f64> for ExtendedKearfottFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], i: usize) -> f64
    {
        x[i] * x[i] - x[(i + 1) % self.base.n()]
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n()
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        cyclic_pattern(self.base.n(), i, j);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for &xi in x {
            v.push(2. * xi);
            v.push(-1.);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.1);
    }
}
