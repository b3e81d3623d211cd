use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BOX_BIBTEX: &str = "\
@article{Box:1966,
  author  = {Box, M. J.},
  title   = {A Comparison of Several Current Optimization Methods,
             and the use of Transformations in Constrained Problems},
  journal = {The Computer Journal},
  volume  = {9},
  number  = {1},
  pages   = {67-77},
  year    = {1966},
  doi     = {10.1093/comjnl/9.1.67},
}

@article{More:1981,
  author  = {Mor{\\'e}, Jorge J. and Garbow, Burton S. and Hillstrom, Kenneth E.},
  title   = {Testing Unconstrained Optimization Software},
  journal = {ACM Trans. Math. Softw.},
  volume  = {7},
  number  = {1},
  year    = {1981},
  pages   = {17--41},
  doi     = {10.1145/355934.355936},
}
";

const BRENT_BIBTEX: &str = "\
@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
}
";

/// Box three-dimensional problem
/// \\(e^{-t_k x_0} - e^{-t_k x_1} - x_2 (e^{-t_k} - e^{-10 t_k}) = 0\\), \\(t_k = 0.1, 0.2, 0.3\\).
pub struct BoxProblem
{
    base: ProbBase,
    coef: [f64; 3],
}

impl BoxProblem
{
    pub fn new() -> Self
    {
        BoxProblem {
            base: ProbBase::new("Box Problem", BOX_BIBTEX, 3),
            coef: std::array::from_fn(|k| {
                let t = 0.1 * (k + 1) as f64;
                (-t).exp() - (-t * 10.).exp()
            }),
        }
    }
}

impl NonlinearSystem<f64> for BoxProblem
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let t = 0.1 * (k + 1) as f64;
        (-t * x[0]).exp() - (-t * x[1]).exp() - x[2] * self.coef[k]
    }

    fn jacobian_nnz(&self) -> usize
    {
        9
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(3);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        for (k, row) in jac.chunks_exact_mut(3).enumerate() {
            let t = 0.1 * (k + 1) as f64;
            row.copy_from_slice(&[-t * (-t * x[0]).exp(), t * (-t * x[1]).exp(), -self.coef[k]]);
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        2
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.copy_from_slice(&[1., 10., 1.]),
            _ => x.copy_from_slice(&[10., 1., -1.]),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., 1., 0.]);
    }
}

//

/// Gradient of the Box three-dimensional least squares
/// \\(\sum_{i=1}^{10} (e^{c_i x_0} - e^{c_i x_1} - x_2 (e^{c_i} - e^{10 c_i}))^2\\), \\(c_i = -i/10\\).
pub struct Box3
{
    base: ProbBase,
}

impl Box3
{
    pub fn new() -> Self
    {
        Box3 {
            base: ProbBase::new("Box3", BRENT_BIBTEX, 3),
        }
    }

    /// Returns the residual and its gradient of the `i`-th term.
    fn term(x: &[f64], i: usize) -> (f64, [f64; 3], [f64; 2])
    {
        let c = -((i + 1) as f64) / 10.;
        let e0 = (c * x[0]).exp();
        let e1 = (c * x[1]).exp();
        let fi = e0 - e1 - x[2] * (c.exp() - (10. * c).exp());
        let df = [c * e0, -c * e1, -(c.exp() - (10. * c).exp())];
        let d2f = [c * c * e0, -c * c * e1];
        (fi, df, d2f)
    }
}

impl NonlinearSystem<f64> for Box3
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        (0.. 10).fold(0., |s, i| {
            let (fi, df, _) = Self::term(x, i);
            s + 2. * fi * df[k]
        })
    }

    fn jacobian_nnz(&self) -> usize
    {
        9
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(3);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.fill(0.);
        for i in 0.. 10 {
            let (fi, df, d2f) = Self::term(x, i);
            for r in 0.. 3 {
                for c in 0.. 3 {
                    jac[r * 3 + c] += 2. * df[r] * df[c];
                }
            }
            jac[0] += 2. * fi * d2f[0];
            jac[4] += 2. * fi * d2f[1];
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 10., 1.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., 10., 5.]);
    }
}
