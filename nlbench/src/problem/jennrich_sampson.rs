use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@article{Jennrich:1968,
  author  = { Jennrich, R. I. and Sampson, P. F.},
  title   = {Application of Stepwise Regression to Non-Linear Estimation},
  journal = {Technometrics},
  year    = {1968},
  volume  = {10},
  number  = {1},
  pages   = {63--72},
  doi     = {10.1080/00401706.1968.10490535},
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  year    = {1981},
  volume  = {7},
  number  = {1},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

/// Gradient of \\((4 - e^x - e^y)^2 + (6 - e^{2x} - e^{2y})^2\\).
pub struct JennrichAndSampsonFunction
{
    base: ProbBase,
}

impl JennrichAndSampsonFunction
{
    pub fn new() -> Self
    {
        JennrichAndSampsonFunction {
            base: ProbBase::new("Jennrich and Sampson function", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for JennrichAndSampsonFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (e1x, e1y) = (x[0].exp(), x[1].exp());
        let (e2x, e2y) = ((2. * x[0]).exp(), (2. * x[1]).exp());
        let r1 = 4. - e1x - e1y;
        let r2 = 6. - e2x - e2y;
        match k {
            0 => -2. * r1 * e1x - 4. * r2 * e2x,
            _ => -2. * r1 * e1y - 4. * r2 * e2y,
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
        let (e1x, e1y) = (x[0].exp(), x[1].exp());
        let (e2x, e2y) = ((2. * x[0]).exp(), (2. * x[1]).exp());
        let r1 = 4. - e1x - e1y;
        let r2 = 6. - e2x - e2y;
        let off = 2. * e1y * e1x + 8. * e2y * e2x;
        jac.copy_from_slice(&[
            2. * e1x * e1x - 2. * r1 * e1x + 8. * e2x * e2x - 8. * r2 * e2x, off,
            off, 2. * e1y * e1y - 2. * r1 * e1y + 8. * e2y * e2y - 8. * r2 * e2y,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.56094757316937756309038010217356986023053667529762);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.3, 0.4]);
    }
}
