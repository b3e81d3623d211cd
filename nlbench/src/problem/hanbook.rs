use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations};

const BIBTEX: &str = "\
@techreport{Raydan:2004,
  author = {William La Cruz and Jose Mario Martinez and Marcos Raydan},
  title  = {Spectral residual method without gradient
            information for solving large-scale nonlinear
            systems of equations: Theory and experiments},
  number = {Technical Report RT-04-08},
  year   = {2004}
}

@article{LaCruz:2003,
  author    = {William {La Cruz}  and  Marcos Raydan},
  title     = {Nonmonotone Spectral Methods for Large-Scale Nonlinear Systems},
  journal   = {Optimization Methods and Software},
  year      = {2003},
  volume    = {18},
  number    = {5},
  pages     = {583--599},
  publisher = {Taylor \\& Francis},
  doi       = {10.1080/10556780310001610493},
}
";

/// \\(f_i = (x_i - 1)/20 + (2 + 4(x_i - 1)) \sin(s_1 + s_2) + 2 \sin s_1\\),
/// with \\(s_1 = \sum (x_j - 1),\ s_2 = \sum (x_j - 1)^2\\).
pub struct HanbookFunction
{
    base: ProbBase,
}

impl HanbookFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        HanbookFunction {
            base: ProbBase::new("Hanbook Function", BIBTEX, n),
        }
    }

    fn sums(x: &[f64]) -> (f64, f64)
    {
        x.iter().fold((0., 0.), |(s1, s2), v| {
            let d = v - 1.;
            (s1 + d, s2 + d * d)
        })
    }
}

impl NonlinearSystem<f64> for HanbookFunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (s1, s2) = Self::sums(x);
        let d = x[k] - 1.;
        0.05 * d + (2. + 4. * d) * (s1 + s2).sin() + 2. * s1.sin()
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
        let (s1, s2) = Self::sums(x);
        let (s12, c12) = (s1 + s2).sin_cos();
        let c1 = 2. * s1.cos();
        let mut v = ValueFill::new(jac);
        for (i, &xi) in x.iter().enumerate() {
            for (j, &xj) in x.iter().enumerate() {
                let mut d = (2. + 4. * (xi - 1.)) * (2. * xj - 1.) * c12 + c1;
                if i == j {
                    d += 0.05 + 4. * s12;
                }
                v.push(d);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(5.);
    }
}
