use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain};

const BIBTEX: &str = "\
@Article{Griewan:k1981,
  author  = {Griewank, A. O.},
  title   = {Generalized descent for global optimization},
  journal = {Journal of Optimization Theory and Applications},
  year    = {1981},
  volume  = {34},
  number  = {1},
  pages   = {11--39},
  doi     = {10.1007/BF00933356}
}
";

/// Gradient of the Griewank function
/// \\(1 + \sum_i x_i^2 / 4000 - \prod_i \cos(x_i / \sqrt{i+1})\\).
pub struct GriewankFunction
{
    base: ProbBase,
}

impl GriewankFunction
{
    /// * `n` shall be in `2..=20`.
    pub fn new(n: usize) -> Self
    {
        assert!((2..= 20).contains(&n), "GriewankFunction(n={}) must be in range [2..20]", n);

        GriewankFunction {
            base: ProbBase::new("Griewank function", BIBTEX, n),
        }
    }

    /// Product of \\(\cos t_k\\) over all \\(k\\), with \\(\sin t_k\\) in place of it for `k` in `sines`.
    fn product(x: &[f64], sines: &[usize]) -> f64
    {
        x.iter().enumerate().fold(1., |p, (k, &xk)| {
            let t = xk / ((k + 1) as f64).sqrt();
            if sines.contains(&k) {p * t.sin()} else {p * t.cos()}
        })
    }
}

impl NonlinearSystem<f64> for GriewankFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        Self::product(x, &[k]) / ((k + 1) as f64).sqrt() + x[k] / 2000.
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        n * n
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(self.base.n());
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let cos_all = Self::product(x, &[]);
        let mut v = ValueFill::new(jac);
        for i in 0.. n {
            for j in 0.. n {
                if i == j {
                    v.push(cos_all / (i + 1) as f64 + 1. / 2000.);
                }
                else {
                    v.push(-Self::product(x, &[i, j]) / (((i + 1) * (j + 1)) as f64).sqrt());
                }
            }
        }
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
        2
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        let s = (1 + 9 * idx) as f64;
        for p in x.chunks_mut(2) {
            p[0] = -50. * s;
            if let Some(e) = p.get_mut(1) {
                *e = 70. * s;
            }
        }
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 1000.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-1000.);
        u.fill(1000.);
    }
}
