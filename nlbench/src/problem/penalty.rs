use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations, eval_fk_by_f};

const LA_CRUZ_BIBTEX: &str = "\
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

/// \\(\sqrt{10^{-5}}(x_k - 1)\\) for `k < n-1`
/// and \\((\frac1n \sum_i x_i^2 - 1)/4\\) for the last.
pub struct PenaltyIfunction
{
    base: ProbBase,
}

impl PenaltyIfunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        PenaltyIfunction {
            base: ProbBase::new("Penalty I", LA_CRUZ_BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for PenaltyIfunction
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k + 1 == n {
            let sum: f64 = x.iter().map(|v| v * v).sum();
            (sum / n as f64 - 1.) / 4.
        }
        else {
            1e-5_f64.sqrt() * (x[k] - 1.)
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * self.base.n() - 1
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        p.push_diag(n - 1);
        p.push_row(n - 1, 0.. n);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let (d, last) = jac.split_at_mut(n - 1);
        d.fill(1e-5_f64.sqrt());
        for (l, xi) in last.iter_mut().zip(x) {
            *l = 0.5 * xi / n as f64;
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1. / 3.);
    }
}

//

/// Gradient of Brent's penalty function N.1,
/// \\((2\epsilon + 4\sum_i x_i^2 - 1) x_k - 2\epsilon\\).
pub struct PenaltyN1
{
    base: ProbBase,
    epsilon: f64,
}

impl PenaltyN1
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        PenaltyN1 {
            base: ProbBase::new("Penalty Function #1", BRENT_BIBTEX, n),
            epsilon: 1e-5,
        }
    }

    fn scale(&self, x: &[f64]) -> f64
    {
        2. * self.epsilon + 4. * x.iter().map(|v| v * v).sum::<f64>() - 1.
    }
}

impl NonlinearSystem<f64> for PenaltyN1
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        self.scale(x) * x[k] - 2. * self.epsilon
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let s = self.scale(x);
        for (fk, xk) in f.iter_mut().zip(x) {
            *fk = s * xk - 2. * self.epsilon;
        }
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
        let s = self.scale(x);
        let mut v = ValueFill::new(jac);
        for (r, xr) in x.iter().enumerate() {
            for (c, xc) in x.iter().enumerate() {
                let d = 8. * xr * xc;
                v.push(if r == c {d + s} else {d});
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        for (i, xi) in x.iter_mut().enumerate() {
            *xi = (i + 1) as f64;
        }
    }
}

//

/// Gradient of Brent's penalty function N.2, a weighted quartic
/// \\((\sum_j (n-j) x_j^2 - 1)^2\\) plus exponential penalties on neighbours
/// and \\((x_0 - 0.2)^2\\).
pub struct PenaltyN2
{
    base: ProbBase,
    epsilon: f64,
}

impl PenaltyN2
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        PenaltyN2 {
            base: ProbBase::new("Penalty Function #2", BRENT_BIBTEX, n),
            epsilon: 1e-5,
        }
    }

    fn weighted(&self, x: &[f64]) -> f64
    {
        let n = self.base.n();
        x.iter().enumerate().fold(-1., |s, (j, v)| s + (n - j) as f64 * v * v)
    }
}

impl NonlinearSystem<f64> for PenaltyN2
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let n = self.base.n();
        let ap = self.epsilon;
        let e1 = 0.1_f64.exp();
        let th = 4. * self.weighted(x);

        let mut d2 = 1.;
        let mut s2 = 0.;
        for j in 0.. n {
            f[j] = (n - j) as f64 * x[j] * th;
            let s1 = (x[j] / 10.).exp();
            if j > 0 {
                let s3 = s1 + s2 - d2 * (e1 + 1.);
                f[j] += ap * s1 * (s3 + s1 - 1. / e1) / 5.;
                f[j - 1] += ap * s2 * s3 / 5.;
            }
            s2 = s1;
            d2 *= e1;
        }
        f[0] += 2. * (x[0] - 0.2);
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
        let ap = self.epsilon;
        let e1 = 0.1_f64.exp();
        let th = 4. * self.weighted(x);
        let w = |j: usize| (n - j) as f64;

        for r in 0.. n {
            for c in 0.. n {
                let d = 8. * w(r) * w(c) * x[r] * x[c];
                jac[r * n + c] = if r == c {d + w(r) * th} else {d};
            }
        }

        let mut d2 = 1.;
        let mut s2 = 0.;
        for j in 0.. n {
            let s1 = (x[j] / 10.).exp();
            if j > 0 {
                let s3 = s1 + s2 - d2 * (e1 + 1.);
                jac[j * n + j] += ap * s1 * (s3 + 3. * s1 - 1. / e1) / 50.;
                jac[(j - 1) * n + j - 1] += ap * s2 * (s2 + s3) / 50.;
                let off = ap * s1 * s2 / 50.;
                jac[j * n + j - 1] += off;
                jac[(j - 1) * n + j] += off;
            }
            s2 = s1;
            d2 *= e1;
        }
        jac[0] += 2.;
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
