use nlbench_core::system::{NonlinearSystem, ProblemError};
use nlbench_core::PatternFill;
use super::{ProbBase, check_domain};

const GAY_BIBTEX: &str = "\
@techreport{Dennis:1983,
  author = {J. E. Dennis, D. M. Gay, and P. A. Vu},
  title  = {A new nonlinear equations test problem},
  number = {Technical Report 83-16, Mathematical Sciences Department},
  year   = {1983}
  note   = {Rice University (1983 - revised 1985)}
}
";

const SCHNABEL_BIBTEX: &str = "\
@book{Dennis:1996,
  author    = {Dennis, J. and Schnabel, R.},
  title     = {Numerical Methods for Unconstrained
               Optimization and Nonlinear Equations},
  publisher = {Society for Industrial and Applied Mathematics},
  year      = {1996},
  doi       = {10.1137/1.9781611971200},
}
";

/// Data sets of the Dennis, Gay and Vu problem:
/// `(summx, summy, suma, sumb, sumc, sumd, sume, sumf)`.
const GAY_SUMS: [[f64; 8]; 5] = [
    [0.485, -0.0019, -0.0581, 0.015, 0.105, 0.0406, 0.167, -0.399],
    [-0.69, -0.044, -1.57, -1.31, -2.65, 2.0, -12.6, 9.48],
    [-0.816, -0.017, -1.826, -0.754, -4.839, -3.259, -14.023, 15.467],
    [-0.809, -0.021, -2.04, -0.614, -6.903, -2.934, -26.328, 18.639],
    [-0.807, -0.021, -2.379, -0.364, -10.541, -1.961, -51.551, 21.053],
];

const GAY8_INITIAL: [[f64; 8]; 5] = [
    [0.299, 0.186, -0.0273, 0.0254, -0.474, 0.474, -0.0892, 0.0892],
    [-0.3, -0.39, 0.3, -0.344, -1.2, 2.69, 1.59, -1.5],
    [-0.041, -0.775, 0.03, -0.047, -2.565, 2.565, -0.754, 0.754],
    [-0.056, -0.753, 0.026, -0.047, -2.991, 2.991, -0.568, 0.568],
    [-0.074, -0.733, 0.013, -0.034, -3.632, 3.632, -0.289, 0.289],
];

const GAY6_INITIAL: [[f64; 6]; 5] = [
    [0.299, -0.0273, -0.474, 0.474, -0.0892, 0.0892],
    [-0.3, 0.3, -1.2, 2.69, 1.59, -1.5],
    [-0.041, 0.03, -2.565, 2.565, -0.754, 0.754],
    [-0.056, 0.026, -2.991, 2.991, -0.568, 0.568],
    [-0.074, 0.013, -3.632, 3.632, -0.289, 0.289],
];

/// The six moment equations in \\(y = (a, b, c, d, t, u, v, w)\\) and their partial derivatives.
///
/// Returns the `k`-th residual, with `d` filled by its gradient in `y` when given.
fn gay_moments(sums: &[f64; 8], y: &[f64; 8], k: usize, d: Option<&mut[f64; 8]>) -> f64
{
    let [a, b, c, dd, t, u, v, w] = *y;
    let tv = t * v;
    let uw = u * w;
    let tsvs = t * t - v * v;
    let ts3vs = t * t - 3. * v * v;
    let vs3ts = v * v - 3. * t * t;
    let usws = u * u - w * w;
    let us3ws = u * u - 3. * w * w;
    let ws3us = w * w - 3. * u * u;

    let (r, g) = match k {
        0 => (
            t * a + u * b - v * c - w * dd - sums[2],
            [t, u, -v, -w, a, b, -c, -dd],
        ),
        1 => (
            v * a + w * b + t * c + u * dd - sums[3],
            [v, w, t, u, c, dd, a, b],
        ),
        2 => (
            a * tsvs - 2. * c * tv + b * usws - 2. * dd * uw - sums[4],
            [
                tsvs, usws, -2. * tv, -2. * uw,
                2. * (a * t - c * v), 2. * (b * u - dd * w), -2. * (a * v + c * t), -2. * (b * w + dd * u),
            ],
        ),
        3 => (
            c * tsvs + 2. * a * tv + dd * usws + 2. * b * uw - sums[5],
            [
                2. * tv, 2. * uw, tsvs, usws,
                2. * (c * t + a * v), 2. * (dd * u + b * w), 2. * (a * t - c * v), 2. * (b * u - dd * w),
            ],
        ),
        4 => (
            a * t * ts3vs + c * v * vs3ts + b * u * us3ws + dd * w * ws3us - sums[6],
            [
                t * ts3vs, u * us3ws, v * vs3ts, w * ws3us,
                3. * (a * tsvs - 2. * c * tv), 3. * (b * usws - 2. * dd * uw),
                -3. * (c * tsvs + 2. * a * tv), -3. * (dd * usws + 2. * b * uw),
            ],
        ),
        _ => (
            c * t * ts3vs - a * v * vs3ts + dd * u * us3ws - b * w * ws3us - sums[7],
            [
                -v * vs3ts, -w * ws3us, t * ts3vs, u * us3ws,
                3. * (c * tsvs + 2. * a * tv), 3. * (dd * usws + 2. * b * uw),
                3. * (a * tsvs - 2. * c * tv), 3. * (b * usws - 2. * dd * uw),
            ],
        ),
    };

    if let Some(d) = d {
        *d = g;
    }
    r
}

//

/// Dennis, Gay and Vu problem with the two sums eliminated,
/// unknowns \\((a, c, t, u, v, w)\\) and \\(b = \sum m_x - a,\ d = \sum m_y - c\\).
pub struct DennisAndGay6eq
{
    base: ProbBase,
    set: usize,
}

impl DennisAndGay6eq
{
    /// * `set` is a data set number from 1 to 5.
    pub fn new(set: usize) -> Self
    {
        assert!((1..= 5).contains(&set));

        DennisAndGay6eq {
            base: ProbBase::new(&format!("Dennis and Gay 6 eq N {}", set), GAY_BIBTEX, 6),
            set,
        }
    }

    fn expand(&self, x: &[f64]) -> [f64; 8]
    {
        let s = &GAY_SUMS[self.set - 1];
        [x[0], s[0] - x[0], x[1], s[1] - x[1], x[2], x[3], x[4], x[5]]
    }
}

impl NonlinearSystem<f64> for DennisAndGay6eq
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        gay_moments(&GAY_SUMS[self.set - 1], &self.expand(x), k, None)
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
        let sums = &GAY_SUMS[self.set - 1];
        let y = self.expand(x);
        let mut d = [0.; 8];
        for (k, row) in jac.chunks_exact_mut(6).enumerate() {
            gay_moments(sums, &y, k, Some(&mut d));
            row.copy_from_slice(&[d[0] - d[1], d[2] - d[3], d[4], d[5], d[6], d[7]]);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&GAY6_INITIAL[self.set - 1]);
    }

    fn check_admissible(&self, x: &[f64]) -> Result<(), ProblemError>
    {
        check_domain(x.iter().all(|v| v.abs() < 100.), self.base.title(), "Bad range")
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-100.);
        u.fill(100.);
    }
}

//

/// Dennis, Gay and Vu problem in all eight unknowns \\((a, b, c, d, t, u, v, w)\\).
pub struct DennisAndGay8eq
{
    base: ProbBase,
    set: usize,
}

impl DennisAndGay8eq
{
    /// * `set` is a data set number from 1 to 5.
    pub fn new(set: usize) -> Self
    {
        assert!((1..= 5).contains(&set));

        DennisAndGay8eq {
            base: ProbBase::new(&format!("Dennis and Gay 8 eq N {}", set), GAY_BIBTEX, 8),
            set,
        }
    }
}

impl NonlinearSystem<f64> for DennisAndGay8eq
{
    prob_base!();
    no_exact_solution!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let sums = &GAY_SUMS[self.set - 1];
        match k {
            0 => x[0] + x[1] - sums[0],
            1 => x[2] + x[3] - sums[1],
            _ => {
                let mut y = [0.; 8];
                y.copy_from_slice(x);
                gay_moments(sums, &y, k - 2, None)
            },
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        64
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        PatternFill::new(i, j).push_dense(8);
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let sums = &GAY_SUMS[self.set - 1];
        let mut y = [0.; 8];
        y.copy_from_slice(x);
        let (head, tail) = jac.split_at_mut(16);
        head.fill(0.);
        head[0] = 1.;
        head[1] = 1.;
        head[10] = 1.;
        head[11] = 1.;
        for (k, row) in tail.chunks_exact_mut(8).enumerate() {
            let mut d = [0.; 8];
            gay_moments(sums, &y, k, Some(&mut d));
            row.copy_from_slice(&d);
        }
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&GAY8_INITIAL[self.set - 1]);
    }
}

//

/// \\(x_0 + x_1 = 3,\ x_0^2 + x_1^2 = 9\\).
pub struct DennisAndSchnabel2x2example
{
    base: ProbBase,
}

impl DennisAndSchnabel2x2example
{
    pub fn new() -> Self
    {
        DennisAndSchnabel2x2example {
            base: ProbBase::new("Dennis and Schnabel 2 by 2 example", SCHNABEL_BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for DennisAndSchnabel2x2example
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        match k {
            0 => x[0] + x[1] - 3.,
            _ => x[0] * x[0] + x[1] * x[1] - 9.,
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
        jac.copy_from_slice(&[1., 1., 2. * x[0], 2. * x[1]]);
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
        x.copy_from_slice(&[1., 5.]);
    }
}
