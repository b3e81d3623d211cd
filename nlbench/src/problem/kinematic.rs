use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_domain};

const BIBTEX: &str = "\
@article{Morgan:1987,
  author  = {Alexander Morgan and Andrew Sommese},
  title   = {Computing all solutions to polynomial
             systems using homotopy continuation},
  journal = {Applied Mathematics and Computation},
  volume  = {24},
  number  = {2},
  pages   = {115--138},
  year    = {1987},
  doi     = {10.1016/0096-3003(87)90064-6}
}

@article{Hentenryck:1997,
  author  = {Van Hentenryck, P. and McAllester, D. and Kapur, D.},
  title   = {Solving Polynomial Systems Using a Branch and Prune Approach},
  journal = {SIAM Journal on Numerical Analysis},
  year    = {1997},
  volume  = {34},
  number  = {2},
  pages   = {797-827},
  doi     = {10.1137/S0036142995281504}
}
";

/// Bilinear pairs `(p, q)` weighted by the first eight coefficients of each row of [`COEF`].
const PAIRS: [(usize, usize); 8] = [(0, 1), (0, 3), (1, 2), (1, 3), (1, 6), (4, 7), (5, 6), (5, 7)];

/// Per equation 4..8: eight bilinear weights, eight linear weights, a constant.
const COEF: [[f64; 17]; 4] = [
    [-0.249150680, 1.609135400, 0.279423430, 1.434801600, 0., 0.400263840, -0.800527680, 0.,
     0.074052388, -0.083050031, -0.386159610, -0.755266030, 0.504201680, -1.091628700, 0., 0.049207290,
     0.049207290],
    [0.125016350, -0.686607360, -0.119228120, -0.719940470, -0.432419270, 0., 0., -0.864838550,
     -0.037157270, 0.035436896, 0.085383482, 0., -0.039251967, 0., -0.432419270, 0.,
     0.013873010],
    [-0.635550077, -0.115719920, -0.666404480, 0.110362110, 0.290702030, 1.258776700, -0.629388360, 0.581404060,
     0.195946620, -1.228034200, 0., -0.079034221, 0.026387877, -0.057131430, -1.162808100, 1.258776700,
     2.162575000],
    [1.48947730, 0.23062341, 1.32810730, -0.25864503, 1.16517200, -0.26908494, 0.53816987, 0.58258598,
     -0.20816985, 2.68683200, -0.69910317, 0.35744413, 1.24991170, 1.46773600, 1.16517200, 1.07633970,
     -0.69686809],
];

/// Inverse kinematics of a six-revolute manipulator: four unit-circle constraints
/// \\(x_k^2 + x_{k+1}^2 = 1\\) and four bilinear equations.
pub struct KinematicApplication
{
    base: ProbBase,
}

impl KinematicApplication
{
    pub fn new() -> Self
    {
        KinematicApplication {
            base: ProbBase::new("Kinematic Application", BIBTEX, 8),
        }
    }
}

impl NonlinearSystem<f64> for KinematicApplication
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        if k < 4 {
            return x[k] * x[k] + x[k + 1] * x[k + 1] - 1.;
        }
        let a = &COEF[k - 4];
        let bilinear = PAIRS.iter().zip(&a[..8]).map(|(&(p, q), c)| c * x[p] * x[q]);
        let linear = x.iter().zip(&a[8..16]).map(|(xi, c)| c * xi);
        bilinear.chain(linear).sum::<f64>() + a[16]
    }

    fn jacobian_nnz(&self) -> usize
    {
        2 * 4 + 8 * 4
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut pf = PatternFill::new(i, j);
        for k in 0.. 4 {
            pf.push_row(k, [k, k + 1]);
        }
        for k in 4.. 8 {
            pf.push_row(k, 0.. 8);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let mut v = ValueFill::new(jac);
        for k in 0.. 4 {
            v.push(2. * x[k]);
            v.push(2. * x[k + 1]);
        }
        for a in COEF.iter() {
            let mut g = [0.; 8];
            g.copy_from_slice(&a[8..16]);
            for (&(p, q), c) in PAIRS.iter().zip(&a[..8]) {
                g[p] += c * x[q];
                g[q] += c * x[p];
            }
            for gc in g {
                v.push(gc);
            }
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.5);
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
