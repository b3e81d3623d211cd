use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

const BIBTEX: &str = "\
@Article{Biggs:1971,
  author = {M. C. Biggs},
  title  = { Minimization algorithms making use of non-quadratic
             properties of the objective function},
  volume = {8},
  pages  = {315--327},
  year   = {1971},
  journal = {Journal of the Institute of Mathematics and its Applications}
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

const MAX_M: usize = 5;

/// Gradient of the least squares \\(\frac12 \sum_k (e_k(x) - y_k)^2\\)
/// of Biggs EXP2 to EXP5 exponential models.
///
/// With \\(z_k = 0.1 (k+1)\\), \\(e_0 = e^{-x_0 z}\\), \\(e_1 = e^{-x_1 z}\\), \\(e_4 = e^{-x_4 z}\\):
/// * EXP2: \\(e_0 - 5 e_1\\)
/// * EXP3: \\(e_0 - x_2 e_1\\)
/// * EXP4: \\(x_2 e_0 - x_3 e_1\\)
/// * EXP5: \\(x_2 e_0 - x_3 e_1 + 3 e_4\\)
pub struct BiggsExp
{
    base: ProbBase,
    z: Vec<f64>,
    y: Vec<f64>,
}

impl BiggsExp
{
    /// * `m` is a model number from 2 to 5, which is also the number of equations.
    pub fn new(m: usize) -> Self
    {
        assert!((2..= MAX_M).contains(&m));

        let npt = if m == 5 {11} else {10};
        let z: Vec<f64> = (0.. npt).map(|k| (k + 1) as f64 * 0.1).collect();
        let y = z.iter().map(|&z| {
            let y = (-z).exp() - 5. * (-10. * z).exp();
            if m == 5 {y + 3. * (-4. * z).exp()} else {y}
        }).collect();

        BiggsExp {
            base: ProbBase::new(&format!("Biggs EXP{} function", m), BIBTEX, m),
            z, y,
        }
    }

    /// Returns the model residual at the `k`-th point, filling its gradient `g` and Hessian `h`.
    fn model(&self, x: &[f64], k: usize, g: &mut[f64; MAX_M], h: &mut[[f64; MAX_M]; MAX_M]) -> f64
    {
        let zk = self.z[k];
        let zk2 = zk * zk;
        let ex0 = (-x[0] * zk).exp();
        let ex1 = (-x[1] * zk).exp();

        *g = [0.; MAX_M];
        *h = [[0.; MAX_M]; MAX_M];

        let e = match self.base.n() {
            2 => {
                g[0] = -zk * ex0;
                g[1] = 5. * zk * ex1;
                h[0][0] = zk2 * ex0;
                h[1][1] = -5. * zk2 * ex1;
                ex0 - 5. * ex1
            },
            3 => {
                g[0] = -zk * ex0;
                g[1] = x[2] * zk * ex1;
                g[2] = -ex1;
                h[0][0] = zk2 * ex0;
                h[1][1] = -x[2] * zk2 * ex1;
                h[1][2] = zk * ex1;
                h[2][1] = zk * ex1;
                ex0 - x[2] * ex1
            },
            m => {
                g[0] = -x[2] * zk * ex0;
                g[1] = x[3] * zk * ex1;
                g[2] = ex0;
                g[3] = -ex1;
                h[0][0] = x[2] * zk2 * ex0;
                h[0][2] = -zk * ex0;
                h[2][0] = -zk * ex0;
                h[1][1] = -x[3] * zk2 * ex1;
                h[1][3] = zk * ex1;
                h[3][1] = zk * ex1;
                if m == 5 {
                    let ex4 = (-x[4] * zk).exp();
                    g[4] = -3. * zk * ex4;
                    h[4][4] = 3. * zk2 * ex4;
                    x[2] * ex0 - x[3] * ex1 + 3. * ex4
                }
                else {
                    x[2] * ex0 - x[3] * ex1
                }
            },
        };

        e - self.y[k]
    }
}

impl NonlinearSystem<f64> for BiggsExp
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let mut g = [0.; MAX_M];
        let mut h = [[0.; MAX_M]; MAX_M];
        (0.. self.z.len()).fold(0., |s, p| {
            let e = self.model(x, p, &mut g, &mut h);
            s + e * g[k]
        })
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
        let mut g = [0.; MAX_M];
        let mut h = [[0.; MAX_M]; MAX_M];

        jac.fill(0.);
        for p in 0.. self.z.len() {
            let e = self.model(x, p, &mut g, &mut h);
            for r in 0.. n {
                for c in 0.. n {
                    jac[r * n + c] += e * h[r][c] + g[r] * g[c];
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
        let sol: &[f64] = match self.base.n() {
            2 => &[16.7046761257, 16.7046761257],
            3 => &[1., 10., 5.],
            4 => &[-1.370515321, -1.370515321, 0.146554089168054, 0.003045452799256],
            _ => &[1., 10., 1., 5., 4.],
        };
        x.copy_from_slice(sol);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
        x[1] = 2.;
    }
}

//

/// Biggs EXP6 function as a square system of 6 residuals
/// \\(x_2 e^{-t_k x_0} - x_3 e^{-t_k x_1} + x_5 e^{-t_k x_4} - y_k\\).
pub struct BiggsExp6
{
    base: ProbBase,
    xmin: f64,
    xmax: f64,
    t: [f64; 6],
    y: [f64; 6],
}

impl BiggsExp6
{
    pub fn new() -> Self
    {
        let mut t = [0.; 6];
        let mut y = [0.; 6];
        for k in 0.. 6 {
            t[k] = (k + 1) as f64 * 0.1;
            y[k] = (-t[k]).exp() - 5. * (-10. * t[k]).exp() + 3. * (-4. * t[k]).exp();
        }

        BiggsExp6 {
            base: ProbBase::new("Biggs EXP6 function", BIBTEX, 6),
            xmin: -10.,
            xmax: 20.,
            t, y,
        }
    }
}

impl NonlinearSystem<f64> for BiggsExp6
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let e0 = (-self.t[k] * x[0]).exp();
        let e1 = (-self.t[k] * x[1]).exp();
        let e4 = (-self.t[k] * x[4]).exp();
        x[2] * e0 - x[3] * e1 + x[5] * e4 - self.y[k]
    }

    fn jacobian_nnz(&self) -> usize
    {
        36
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(6);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for &t in self.t.iter() {
            let e0 = (-t * x[0]).exp();
            let e1 = (-t * x[1]).exp();
            let e4 = (-t * x[4]).exp();
            v.push(-x[2] * t * e0);
            v.push(x[3] * t * e1);
            v.push(e0);
            v.push(-e1);
            v.push(-x[5] * t * e4);
            v.push(e4);
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        2
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        match idx {
            0 => x.copy_from_slice(&[10., 4., -5., -3., 1., 1.]),
            _ => x.copy_from_slice(&[1., 10., 1., 5., 4., 3.]),
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 2., 1., 1., 1., 1.]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        if x.iter().all(|&v| v > self.xmin && v < self.xmax) {
            Ok(())
        }
        else {
            log::error!("{}: {:?} out of ({}, {})", self.base.title(), x, self.xmin, self.xmax);
            Err(ProblemError::Domain("Bad Range"))
        }
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(self.xmin);
        u.fill(self.xmax);
    }
}
