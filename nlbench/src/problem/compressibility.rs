use nlbench_core::system::NonlinearSystem;
use super::ProbBase;

const BIBTEX: &str = "\
@book{Cutlip:2007,
  author    = {Cutlip, Michael and Shacham, Mordechai},
  title     = {Problem Solving in Chemical and Biochemical Engineering
               with Polymath,\\texttrademark Excel,
               and Matlab\\textregistered, Second Edition},
  year      = {2007},
  isbn      = {9780131482043},
  publisher = {Prentice Hall Press},
}
";

/// Compressibility factor \\(z\\) of nitrogen from the Redlich-Kwong cubic
/// \\(z^3 - z^2 - qz - r = 0\\).
pub struct CompressibilityFactorFromTheRKequation
{
    base: ProbBase,
    q: f64,
    r: f64,
}

impl CompressibilityFactorFromTheRKequation
{
    pub fn new() -> Self
    {
        let (p, pc) = (200., 33.5);
        let (t, tc) = (631. * 2., 126.2);
        let pr = p / pc;
        let tr: f64 = t / tc;
        let asqr = 0.4278 * pr / tr.powf(2.5);
        let b = 0.0867 * pr / tr;

        CompressibilityFactorFromTheRKequation {
            base: ProbBase::new("Compressibility factor from the RK equation", BIBTEX, 1),
            q: b * b + b - asqr,
            r: asqr * b,
        }
    }
}

impl NonlinearSystem<f64> for CompressibilityFactorFromTheRKequation
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], _k: usize) -> f64
    {
        let z = x[0];
        ((z - 1.) * z - self.q) * z - self.r
    }

    fn jacobian_nnz(&self) -> usize
    {
        1
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        i[0] = 0;
        j[0] = 0;
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let z = x[0];
        jac[0] = (3. * z - 2.) * z - self.q;
    }

    fn num_initial_points(&self) -> usize
    {
        4
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        x[0] = [0.65, -0.5, 1., -0.02][idx];
    }
}
