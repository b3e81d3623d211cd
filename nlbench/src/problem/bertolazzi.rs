use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, NO_DOC};

/// \\(\log(1 + \log(1 + x/\epsilon)) = 0,\ \delta y + y^2 = 0\\).
///
/// The first component is `NaN` for \\(x \le \epsilon(e^{-1} - 1)\\).
pub struct BertolazziRootPlusSquare
{
    base: ProbBase,
    epsilon: f64,
    delta: f64,
    xmin: f64,
}

impl BertolazziRootPlusSquare
{
    pub fn new() -> Self
    {
        let epsilon = 1e-6;

        BertolazziRootPlusSquare {
            base: ProbBase::new("Bertolazzi: root+square.", NO_DOC, 2),
            epsilon,
            delta: 1e-8,
            xmin: epsilon * (1. / 1_f64.exp() - 1.),
        }
    }
}

impl NonlinearSystem<f64> for BertolazziRootPlusSquare
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => if x[0] > self.xmin {(x[0] / self.epsilon).ln_1p().ln_1p()} else {f64::NAN},
            _ => self.delta * x[1] + x[1] * x[1],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        i.copy_from_slice(&[0, 1]);
        j.copy_from_slice(&[0, 1]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac[0] = if x[0] > self.xmin {
            1. / ((x[0] + self.epsilon) * (1. + (x[0] / self.epsilon).ln_1p()))
        }
        else {
            f64::NAN
        };
        jac[1] = self.delta + 2. * x[1];
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
        x.fill(1000.);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        if x[0] < self.xmin {
            log::error!("{}: x[0] = {} must be >= {}", self.base.title(), x[0], self.xmin);
            return Err(ProblemError::Domain("x[0] below the log argument limit"));
        }
        Ok(())
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.copy_from_slice(&[self.xmin, f64::NEG_INFINITY]);
        u.fill(f64::INFINITY);
    }
}

//

/// \\(\arctan(x/\epsilon) = 0,\ \epsilon y + x y = 0\\).
pub struct BertolazziAtanPlusQuadratic
{
    base: ProbBase,
    epsilon: f64,
}

impl BertolazziAtanPlusQuadratic
{
    pub fn new() -> Self
    {
        BertolazziAtanPlusQuadratic {
            base: ProbBase::new("Bertolazzi: atan+quadratic", NO_DOC, 2),
            epsilon: 1e-9,
        }
    }
}

impl NonlinearSystem<f64> for BertolazziAtanPlusQuadratic
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => (x[0] / self.epsilon).atan(),
            _ => self.epsilon * x[1] + x[0] * x[1],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        3
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        i.copy_from_slice(&[0, 1, 1]);
        j.copy_from_slice(&[0, 0, 1]);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let xe = x[0] / self.epsilon;
        jac.copy_from_slice(&[1. / (self.epsilon + x[0] * xe), x[1], self.epsilon + x[0]]);
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
        x.fill(1.);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        for (i, v) in x.iter().enumerate() {
            if v.abs() >= 10. {
                log::error!("{}: x[{}] = {} out of range [-10,10]", self.base.title(), i, v);
                return Err(ProblemError::Domain("x out of range [-10,10]"));
            }
        }
        Ok(())
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-10.);
        u.fill(10.);
    }
}

//

/// Sum and difference of
/// \\(x(1+x^2)e^{-x} + e^{x/10} - 1\\) and \\(y e^{-y} + e^{y/10} - (3e^{-3} + e^{3/10})\\).
pub struct BertolazziHard
{
    base: ProbBase,
}

impl BertolazziHard
{
    pub fn new() -> Self
    {
        BertolazziHard {
            base: ProbBase::new("Bertolazzi Hard.", NO_DOC, 2),
        }
    }
}

impl NonlinearSystem<f64> for BertolazziHard
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x, y) = (x[0], x[1]);
        let t1 = (x / 10.).exp();
        let t2 = (y / 10.).exp();
        let t3 = (3. / 10_f64).exp();
        let t4 = x * (x * x + 1.) * (-x).exp();
        let t5 = y * (-y).exp();
        let t6 = 3. * (-3_f64).exp();
        match k {
            0 => t6 - 1. + t4 - t5 + t1 - t2 + t3,
            _ => -t6 - 1. + t4 + t5 + t1 + t2 - t3,
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
        let (x, y) = (x[0], x[1]);
        let xx = x * x;
        let t1 = (x / 10.).exp() / 10. + (-x).exp() * (3. * xx + 1. - x * (1. + xx));
        let t2 = -(y / 10.).exp() / 10. + (-y).exp() * (y - 1.);
        jac.copy_from_slice(&[t1, t2, t1, -t2]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., 3.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[10., -1.]);
    }
}

//

/// \\(x(1+x^2)e^{-x} + e^{x/10} - 1 = 0\\).
pub struct BertolazziSingleEQ
{
    base: ProbBase,
}

impl BertolazziSingleEQ
{
    pub fn new() -> Self
    {
        BertolazziSingleEQ {
            base: ProbBase::new("Bertolazzi Single EQ.", NO_DOC, 1),
        }
    }
}

impl NonlinearSystem<f64> for BertolazziSingleEQ
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], _k: usize) -> f64
    {
        let x = x[0];
        (-x).exp() * (x * x + 1.) * x + (x / 10.).exp() - 1.
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
        let x = x[0];
        let t1 = x * x;
        let t2 = (-x).exp();
        jac[0] = 3. * t2 * t1 + t2 - t1 * x * t2 - t2 * x + (x / 10.).exp() / 10.;
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x[0] = 0.;
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x[0] = 10.;
    }
}
