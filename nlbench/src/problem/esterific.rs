use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@book{Luus:2000,
  author    = {Luus, Rein},
  title     = {Iterative Dynamic Programming},
  year      = {2000},
  isbn      = {1584881488},
  edition   = {1st},
  publisher = {CRC Press, Inc.},
}
";

/// Esterification reaction equilibrium in two unknowns \\((X, Y)\\),
/// both components written through \\(s = (X+Y)(6.875X + 7.875Y)/(5.797X + 6.797Y)\\).
pub struct EsterificReaction
{
    base: ProbBase,
}

impl EsterificReaction
{
    pub fn new() -> Self
    {
        EsterificReaction {
            base: ProbBase::new("EsterificReaction (example 4)", BIBTEX, 2),
        }
    }

    /// Returns \\(s\\) and its partial derivatives.
    fn s(x: f64, y: f64) -> (f64, f64, f64)
    {
        let num = 6.875 * x + 7.875 * y;
        let den = 5.797 * x + 6.797 * y;
        let s = (x + y) * num / den;
        let sx = (num + (x + y) * 6.875) / den - s * 5.797 / den;
        let sy = (num + (x + y) * 7.875) / den - s * 6.797 / den;
        (s, sx, sy)
    }

    /// Linear factors of the second component as `[constant, X, Y, s]` coefficients.
    const LINEAR: [[f64; 4]; 4] = [
        [0.7647126E2, 0.1556548821E3, 0.2801659319E3, -0.1433314531E3],
        [0.61177E2, 0.1134099326E3, 0.2031305325E3, -0.1043629412E3],
        [-0.7585949E2, -0.1544048821E3, -0.2789159319E3, 0.1422774531E3],
        [-0.61177E2, -0.125E3, -0.225E3, 0.11526E3],
    ];

    fn linear(k: usize, x: f64, y: f64, s: f64) -> f64
    {
        let c = &Self::LINEAR[k];
        c[0] + c[1] * x + c[2] * y + c[3] * s
    }
}

impl NonlinearSystem<f64> for EsterificReaction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x, y) = (x[0], x[1]);
        let (s, _, _) = Self::s(x, y);
        match k {
            0 => {
                let a = 1.25 * x + 2.25 * y - 1.054 * s;
                let b = s - y - x;
                let c = 1.1526 * s - 1.25 * x - 2.25 * y;
                a * b * b - 2056.4 * c * c
            },
            _ => {
                5.5 * Self::linear(0, x, y, s) * Self::linear(1, x, y, s)
                - Self::linear(2, x, y, s) * Self::linear(3, x, y, s)
            },
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
        let (x, y) = (x[0], x[1]);
        let (s, sx, sy) = Self::s(x, y);

        let a = 1.25 * x + 2.25 * y - 1.054 * s;
        let b = s - y - x;
        let c = 1.1526 * s - 1.25 * x - 2.25 * y;
        // partials with s held fixed, then through s
        let f0x = 1.25 * b * b - 2. * a * b + 2. * 2056.4 * 1.25 * c;
        let f0y = 2.25 * b * b - 2. * a * b + 2. * 2056.4 * 2.25 * c;
        let f0s = -1.054 * b * b + 2. * a * b - 2. * 2056.4 * 1.1526 * c;

        let l: [f64; 4] = std::array::from_fn(|k| Self::linear(k, x, y, s));
        let dl = |k: usize, v: usize| Self::LINEAR[k][v];
        let f1 = |v: usize| 5.5 * (dl(0, v) * l[1] + l[0] * dl(1, v)) - (dl(2, v) * l[3] + l[2] * dl(3, v));
        let (f1x, f1y, f1s) = (f1(1), f1(2), f1(3));

        jac.copy_from_slice(&[
            f0x + f0s * sx, f0y + f0s * sy,
            f1x + f1s * sx, f1y + f1s * sy,
        ]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        2
    }

    fn exact_solution(&self, x: &mut[f64], idx: usize)
    {
        let p = match idx {
            0 => [61.15373203411816, 6.976291974526703],
            _ => [67.09266776655221, 7.6148055570405715],
        };
        x.copy_from_slice(&p);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(20.);
    }
}
