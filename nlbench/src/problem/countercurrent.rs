use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_even, check_min_equations};

const BIBTEX: &str = "\
@article{Bogle:1990,
  author  = {Bogle, I. and Perkins, J.},
  title   = {A New Sparsity Preserving Quasi-Newton Update
             for Solving Nonlinear Equations},
  journal = {SIAM Journal on Scientific and Statistical Computing},
  year    = {1990},
  volume  = {11},
  number  = {4},
  pages   = {621-630},
  doi     = {10.1137/0911036},
}
@techreport{Bodon:1990,
  author  = {Elena Bodon and Ladislav Luksan and Emilio Spedicato},
  title   = {Numerical performance of ABS codes for nonlinear least squares},
  year    = {2001},
  number  = {Tech. Rep. DMSIA 27/2001, Universita degli Studi di Bergamo}
}
";

/// Shared starting profile 0.1, 0.2, ..., 0.5, ..., 0.2 repeated every 8 unknowns,
/// scaled by 1, 10 or 100.
fn countercurrent_initial(x: &mut[f64], idx: usize)
{
    const PROFILE: [f64; 8] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.4, 0.3, 0.2];
    let scale = [1., 10., 100.][idx];
    for (i, v) in x.iter_mut().enumerate() {
        *v = PROFILE[i % 8] * scale;
    }
}

/// Countercurrent reactors problem N.1, pairs \\((x_{2i}, x_{2i+1})\\) coupled to the neighbouring pairs.
pub struct CountercurrentReactorsProblem1
{
    base: ProbBase,
    alpha: f64,
    theta: f64,
}

impl CountercurrentReactorsProblem1
{
    /// * `n` shall be even and at least 4.
    pub fn new(n: usize) -> Self
    {
        check_even(n, 4);

        CountercurrentReactorsProblem1 {
            base: ProbBase::new("Countercurrent Reactors Problem N.1", BIBTEX, n),
            alpha: 0.5,
            theta: 4.,
        }
    }
}

impl NonlinearSystem<f64> for CountercurrentReactorsProblem1
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        let i = k - k % 2;
        let (xm2, xm1) = if i == 0 {(1., 0.)} else {(x[i - 2], x[i - 1])};
        let (xp2, xp3) = if i + 2 >= n {(0., 1.)} else {(x[i + 2], x[i + 3])};
        let (xi, xp1) = (x[i], x[i + 1]);
        let a = self.alpha;
        if k % 2 == 0 {
            a * xm2 + (a - 1.) * xp2 - xi * (1. + self.theta * xp1)
        }
        else {
            (a - 1.) * xm1 + (a - 2.) * xp3 - self.theta * xi * xp1
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        // 4 per pair, 2 more for each neighbour pair
        let pairs = self.base.n() / 2;
        4 * pairs + 4 * (pairs - 1)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for r in (0.. n).step_by(2) {
            if r > 0 {
                p.push(r, r - 2);
                p.push(r + 1, r - 1);
            }
            if r + 2 < n {
                p.push(r, r + 2);
                p.push(r + 1, r + 3);
            }
            p.push(r, r);
            p.push(r, r + 1);
            p.push(r + 1, r);
            p.push(r + 1, r + 1);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let (a, th) = (self.alpha, self.theta);
        let mut v = ValueFill::new(jac);
        for r in (0.. n).step_by(2) {
            if r > 0 {
                v.push(a);
                v.push(a - 1.);
            }
            if r + 2 < n {
                v.push(a - 1.);
                v.push(a - 2.);
            }
            let (xi, xp1) = (x[r], x[r + 1]);
            v.push(-(1. + th * xp1));
            v.push(-th * xi);
            v.push(-th * xp1);
            v.push(-th * xi);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        3
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        countercurrent_initial(x, idx);
    }
}

//

/// Countercurrent reactors problem N.2, where every component past the third depends on \\(x_0\\).
pub struct CountercurrentReactorsProblem2
{
    base: ProbBase,
    a0: f64,
    a1: f64,
    b0: f64,
    theta: f64,
}

impl CountercurrentReactorsProblem2
{
    /// * `n` shall be at least 6.
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 6);

        CountercurrentReactorsProblem2 {
            base: ProbBase::new("Countercurrent Reactors Problem N.2", BIBTEX, n),
            a0: 1.,
            a1: 0.414214,
            b0: 0.,
            theta: 4.,
        }
    }

    /// \\(x_{i+2}\\) extended by 0 at \\(n\\) and 1 beyond.
    fn xp2(&self, x: &[f64], i: usize) -> f64
    {
        let n = self.base.n();
        if i + 2 < n {x[i + 2]} else if i + 2 == n {0.} else {1.}
    }
}

impl NonlinearSystem<f64> for CountercurrentReactorsProblem2
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (a1, th) = (self.a1, self.theta);
        match k {
            0 => self.a0 * x[0] - (1. - x[0]) * x[2] - a1 - th * a1 * x[1],
            1 => self.b0 * x[0] - (1. - x[0]) * x[3] - a1 - th * a1 * x[1],
            2 => a1 * x[0] - (1. - x[0]) * x[4] - x[2] - th * x[2] * x[3],
            i => x[0] * x[i - 2] - (1. - x[0]) * self.xp2(x, i) - x[i] - th * x[i - 1] * x[i],
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        10 + 4 * (n - 3) + (n - 5)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        p.push_row(0, [0, 1, 2]);
        p.push_row(1, [0, 1, 3]);
        p.push_row(2, [0, 2, 3, 4]);
        for r in 3.. n {
            p.push(r, r - 2);
            p.push(r, r - 1);
            p.push(r, r);
            if r + 2 < n {
                p.push(r, r + 2);
            }
            p.push(r, 0);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        let (a1, th) = (self.a1, self.theta);
        let mut v = ValueFill::new(jac);
        for e in [
            self.a0 + x[2], -th * a1, x[0] - 1.,
            self.b0 + x[3], -th * a1, x[0] - 1.,
            a1 + x[4], -1. - th * x[3], -th * x[2], x[0] - 1.,
        ] {
            v.push(e);
        }
        for r in 3.. n {
            v.push(x[0]);
            v.push(-th * x[r]);
            v.push(-1. - th * x[r - 1]);
            if r + 2 < n {
                v.push(x[0] - 1.);
            }
            v.push(x[r - 2] + self.xp2(x, r));
        }
    }

    fn num_initial_points(&self) -> usize
    {
        3
    }

    fn initial_point(&self, x: &mut[f64], idx: usize)
    {
        countercurrent_initial(x, idx);
    }
}
