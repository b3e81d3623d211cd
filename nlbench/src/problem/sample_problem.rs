use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, NO_DOC, check_domain};

/// \\(x_1^2 \phi(x_0),\ x_0 \phi(x_1)\\) with \\(\phi(t) = (1 - e^{-t^2}) / t\\).
pub struct SampleProblem18
{
    base: ProbBase,
}

impl SampleProblem18
{
    const EPS: f64 = 1e-8;

    pub fn new() -> Self
    {
        SampleProblem18 {
            base: ProbBase::new("Sample problem 18", NO_DOC, 2),
        }
    }

    fn phi(t: f64) -> f64
    {
        let t2 = t * t;
        if t2 > Self::EPS {
            (1. - (-t2).exp()) / t
        }
        else {
            // series near zero
            t * (1. + t2 * (t2 / 6. - 0.5))
        }
    }

    fn phi_d(t: f64) -> f64
    {
        let t2 = t * t;
        if t2 > Self::EPS {
            let e = (-t2).exp();
            2. * e - (1. - e) / t2
        }
        else {
            1. + t2 * (5. / 6. * t2 - 1.5)
        }
    }
}

impl NonlinearSystem<f64> for SampleProblem18
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[1] * x[1] * Self::phi(x[0]),
            _ => x[0] * Self::phi(x[1]),
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
        jac.copy_from_slice(&[
            x[1] * x[1] * Self::phi_d(x[0]), 2. * x[1] * Self::phi(x[0]),
            Self::phi(x[1]), x[0] * Self::phi_d(x[1]),
        ]);
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
        x.fill(2.);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 4.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-4.);
        u.fill(4.);
    }
}

//

/// \\(x_0 \|x\|^2,\ x_1 \|x\|^2\\), with a triple root at the origin.
pub struct SampleProblem19
{
    base: ProbBase,
}

impl SampleProblem19
{
    pub fn new() -> Self
    {
        SampleProblem19 {
            base: ProbBase::new("Sample problem 19", NO_DOC, 2),
        }
    }
}

impl NonlinearSystem<f64> for SampleProblem19
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        x[k] * (x[0] * x[0] + x[1] * x[1])
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
        let (a, b) = (x[0], x[1]);
        let off = 2. * a * b;
        jac.copy_from_slice(&[3. * a * a + b * b, off, off, a * a + 3. * b * b]);
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
        x.fill(3.);
    }
}

//

/// \\(x (x - 5)^2\\), a simple and a double root.
pub struct ScalarProblem
{
    base: ProbBase,
}

impl ScalarProblem
{
    pub fn new() -> Self
    {
        ScalarProblem {
            base: ProbBase::new("Scalar problem f(x) = x * ( x - 5 )**2", NO_DOC, 1),
        }
    }
}

impl NonlinearSystem<f64> for ScalarProblem
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], _k: usize) -> f64
    {
        x[0] * (x[0] - 5.).powi(2)
    }

    fn jacobian_nnz(&self) -> usize
    {
        1
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push(0, 0);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac[0] = (3. * x[0] - 5.) * (x[0] - 5.);
    }

    fn num_exact_solutions(&self) -> usize
    {
        2
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        x[0] = if idx == 0 {0.} else {5.};
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x[0] = 1.;
    }
}

//

#[test]
fn test_sample18_series1()
{
    use float_eq::assert_float_eq;

    // both branches agree near the switch point
    let t = 1.0001e-4;
    let s = t * (1. + t * t * (t * t / 6. - 0.5));
    assert_float_eq!(SampleProblem18::phi(t), s, r2nd <= 1e-6);
    assert_float_eq!(SampleProblem18::phi_d(t), 1. + t * t * (5. / 6. * t * t - 1.5), r2nd <= 1e-6);
}
