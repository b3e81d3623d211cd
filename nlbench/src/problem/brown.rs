use std::f64::consts::{E, PI, FRAC_1_PI};
use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, check_min_equations};

const ALMOST_LINEAR_BIBTEX: &str = "\
@article{Brown:1968,
  author    = {Brown, Kenneth M.},
  title     = {A Quadratically Convergent Newton-Like Method Based
               Upon Gaussian-Elimination},
  volume    = {6},
  number    = {4},
  year      = {1969},
  pages     = {560--569}
  publisher = {SIAM Journal on Numerical Analysis},
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

const CONTE_BIBTEX: &str = "\
@inproceedings{Brown:1967,
  author    = {Brown, Kenneth M. and Conte, Samuel D.},
  title     = {The Solution of Simultaneous Nonlinear Equations},
  booktitle = {Proceedings of the 1967 22Nd National Conference},
  series    = {ACM '67},
  year      = {1967},
  pages     = {111--114},
  doi       = {10.1145/800196.805981},
  acmid     = {805981},
  publisher = {ACM},
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

/// Brown almost linear function:
/// \\(x_k + \sum_i x_i - (n+1) = 0\\) for \\(k < n-1\\) and \\(\prod_i x_i - 1 = 0\\).
pub struct BrownAlmostLinearFunction
{
    base: ProbBase,
}

impl BrownAlmostLinearFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 2);

        BrownAlmostLinearFunction {
            base: ProbBase::new("Brown almost linear function", ALMOST_LINEAR_BIBTEX, n),
        }
    }
}

impl NonlinearSystem<f64> for BrownAlmostLinearFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let n = self.base.n();
        if k < n - 1 {
            x[k] + (x.iter().sum::<f64>() - (n + 1) as f64)
        }
        else {
            x.iter().product::<f64>() - 1.
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        let n = self.base.n();
        n * n
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let n = self.base.n();
        let mut p = PatternFill::new(i, j);
        for c in 0.. n {
            for r in 0.. n {
                p.push(r, c);
            }
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let n = self.base.n();
        jac.fill(1.);
        for i in 0.. n - 1 {
            jac[i + i * n] = 2.;
        }
        for c in 0.. n {
            jac[(n - 1) + c * n] = x.iter().enumerate()
                .filter(|&(k, _)| k != c)
                .fold(1., |p, (_, v)| p * v);
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
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

//

/// Brown and Conte function.
pub struct BrownAndConteFunction
{
    base: ProbBase,
    cst: f64,
}

impl BrownAndConteFunction
{
    pub fn new() -> Self
    {
        BrownAndConteFunction {
            base: ProbBase::new("Brown and Conte function", CONTE_BIBTEX, 2),
            cst: 1. - 1. / (4. * PI),
        }
    }
}

impl NonlinearSystem<f64> for BrownAndConteFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => ((x[0] * x[1]).sin() - x[1] / (2. * PI) - x[0]) / 2.,
            _ => self.cst * ((2. * x[0]).exp() - E) + x[1] * E * FRAC_1_PI - 2. * E * x[0],
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
        let c = (x[0] * x[1]).cos();
        jac.copy_from_slice(&[
            (x[1] * c - 1.) / 2.,
            x[0] * c / 2. - 0.25 / PI,
            2. * (self.cst * (2. * x[0]).exp() - E),
            E * FRAC_1_PI,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.5, PI]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.6, 3.]);
    }
}

//

/// Gradient of the Brown and Dennis function
/// \\(\sum_{i=1}^{20} \left((x_1 + c_i x_2 - e^{c_i})^2 + (x_3 + x_4 \sin c_i - \cos c_i)^2\right)^2\\), \\(c_i = i/5\\).
pub struct BrownAndDennis
{
    base: ProbBase,
}

impl BrownAndDennis
{
    pub fn new() -> Self
    {
        BrownAndDennis {
            base: ProbBase::new("Brown and Dennis Function", BRENT_BIBTEX, 4),
        }
    }
}

impl NonlinearSystem<f64> for BrownAndDennis
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let s = (0.. 20).fold(0., |s, i| {
            let c = (i as f64 + 1.) / 5.;
            let sinc = c.sin();
            let f1 = x[0] + c * x[1] - c.exp();
            let f2 = x[2] + sinc * x[3] - c.cos();
            let tmp = f1 * f1 + f2 * f2;
            s + match k {
                0 => f1 * tmp,
                1 => f1 * tmp * c,
                2 => f2 * tmp,
                _ => f2 * tmp * sinc,
            }
        });
        4. * s
    }

    fn jacobian_nnz(&self) -> usize
    {
        16
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(4);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        jac.fill(0.);
        for i in 0.. 20 {
            let c = (i as f64 + 1.) / 5.;
            let sinc = c.sin();
            let f1 = x[0] + c * x[1] - c.exp();
            let f2 = x[2] + sinc * x[3] - c.cos();
            let f11 = f1 * f1;
            let f12 = f1 * f2;
            let f22 = f2 * f2;
            // derivative of f1^3 + f1*f2^2 and f1^2*f2 + f2^3 w.r.t. (f1, f2)
            let rows = [
                (3. * f11 + f22, 2. * f12),
                ((3. * f11 + f22) * c, 2. * f12 * c),
                (2. * f12, f11 + 3. * f22),
                (2. * f12 * sinc, (f11 + 3. * f22) * sinc),
            ];
            for (r, (t1, t2)) in rows.iter().enumerate() {
                jac[r * 4] += t1;
                jac[r * 4 + 1] += t1 * c;
                jac[r * 4 + 2] += t2;
                jac[r * 4 + 3] += t2 * sinc;
            }
        }
        for v in jac.iter_mut() {
            *v *= 4.;
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-11.594439904762165, 13.203630051207204, -0.40343948817685954, 0.2367787744557363]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[25., 5., -5., -1.]);
    }
}

//

const GEARHART_BIBTEX: &str = "\
@Article{Brow1971,
  author  = {Brow, Kenneth M. and Gearhart, William B.},
  title   = {Deflation techniques for the calculation of further solutions
             of a nonlinear system},
  journal = {Numerische Mathematik},
  year    = {1971},
  volume  = {16},
  number  = {4},
  pages   = {334--342},
  doi     = \"10.1007/BF02165004\",
}
";

/// Brown and Gearhart function, three quadrics.
pub struct BrownAndGearhartFunction
{
    base: ProbBase,
    sqrt2: f64,
}

impl BrownAndGearhartFunction
{
    pub fn new() -> Self
    {
        BrownAndGearhartFunction {
            base: ProbBase::new("Brown and Gearhart function", GEARHART_BIBTEX, 3),
            sqrt2: 2_f64.sqrt(),
        }
    }
}

impl NonlinearSystem<f64> for BrownAndGearhartFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0].powi(2) + 2. * x[1].powi(2) - 4.,
            1 => x[0].powi(2) + x[1].powi(2) + x[2] - 8.,
            _ => (x[0] - 1.).powi(2) + (2. * x[1] - self.sqrt2).powi(2) + (x[2] - 5.).powi(2) - 4.,
        }
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
        jac.copy_from_slice(&[
            2. * x[0], 4. * x[1], 0.,
            2. * x[0], 2. * x[1], 1.,
            2. * (x[0] - 1.), 4. * (2. * x[1] - self.sqrt2), 2. * (x[2] - 5.),
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., self.sqrt2, 6.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1., 0.7, 5.]);
    }
}

//

/// Gradient of the Brown badly scaled function
/// \\((x_1 - 10^6)^2 + (x_2 - 2 \cdot 10^{-6})^2 + (x_1 x_2 - 2)^2\\).
pub struct BrownBadlyScaled
{
    base: ProbBase,
}

impl BrownBadlyScaled
{
    pub fn new() -> Self
    {
        BrownBadlyScaled {
            base: ProbBase::new("Brown Badly Scaled Function", BRENT_BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for BrownBadlyScaled
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2) = (x[0], x[1]);
        match k {
            0 => (2. * x1 * (1. + x2 * x2) - 4. * x2) - 2000000.,
            _ => (2. * x2 * (1. + x1 * x1) - 4. * x1) - 0.000004,
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
        let (x1, x2) = (x[0], x[1]);
        let off = 4. * (x1 * x2 - 1.);
        jac.copy_from_slice(&[2. * (1. + x2 * x2), off, off, 2. * (1. + x1 * x1)]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1e6, 2e-6]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(1.);
    }
}

//

const QI_SUN_BIBTEX: &str = "\
@article{Qi:2006,
  author  = {Qi, H. and Sun, D.},
  title   = {A Quadratically Convergent Newton Method for
             Computing the Nearest Correlation Matrix},
  journal = {SIAM Journal on Matrix Analysis and Applications},
  volume  = {28},
  number  = {2},
  pages   = {360--385},
  year    = {2006},
  doi     = {10.1137/050624509},
}
";

/// Intersection of a parabola and a circle.
pub struct BrownFunction
{
    base: ProbBase,
}

impl BrownFunction
{
    pub fn new() -> Self
    {
        BrownFunction {
            base: ProbBase::new("Brown function", QI_SUN_BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for BrownFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0] * x[0] - (x[1] + 1.),
            _ => (x[0] - 2.).powi(2) + (x[1] - 0.5).powi(2) - 1.,
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
        jac.copy_from_slice(&[2. * x[0], -1., 2. * x[0] - 4., 2. * x[1] - 1.]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[1.0673460858066897, 0.13922766688686145]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0.1, 2.]);
    }
}
