use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::{ProbBase, eval_fk_by_f};

const BIBTEX: &str = "\
@book{Michalewicz:1996,
  author    = {Michalewicz, Zbigniew},
  title     = {Genetic Algorithms + Data Structures = Evolution Programs (3rd Ed.)},
  year      = {1996},
  isbn      = {3-540-60676-9},
  publisher = {Springer-Verlag},
  address   = {Berlin, Heidelberg},
}

@book{brent2013,
  author    = {Brent, R.P.},
  title     = {Algorithms for Minimization Without Derivatives},
  isbn      = {9780486143682},
  series    = {Dover Books on Mathematics},
  year      = {2013},
  publisher = {Dover Publications}
}
";

/// Factors of the Goldstein-Price polynomial \\(P Q\\) and their derivatives.
struct Factors
{
    p: f64,
    q: f64,
    p1: f64,
    q1: f64,
    q2: f64,
    p11: f64,
    q11: f64,
    q12: f64,
    q22: f64,
}

impl Factors
{
    fn new(x: &[f64]) -> Self
    {
        let (x1, x2) = (x[0], x[1]);
        let a = x1 + x2 + 1.;
        let b = 19. - 14. * x1 + 3. * x1 * x1 - 14. * x2 + 6. * x1 * x2 + 3. * x2 * x2;
        let e = -14. + 6. * (x1 + x2);
        let c = 2. * x1 - 3. * x2;
        let d = 18. - 32. * x1 + 12. * x1 * x1 + 48. * x2 - 36. * x1 * x2 + 27. * x2 * x2;
        let r = -32. + 24. * x1 - 36. * x2;
        let s = 48. - 36. * x1 + 54. * x2;
        let (a2, c2) = (a * a, c * c);

        // P depends on x1 + x2 only, so its partials in x1 and x2 coincide
        Factors {
            p: 1. + a2 * b,
            q: 30. + c2 * d,
            p1: 2. * a * b + a2 * e,
            q1: 4. * c * d + c2 * r,
            q2: -6. * c * d + c2 * s,
            p11: 2. * b + 4. * a * e + 6. * a2,
            q11: 8. * d + 8. * c * r + 24. * c2,
            q12: -12. * d + 4. * c * s - 6. * c * r - 36. * c2,
            q22: 18. * d - 12. * c * s + 54. * c2,
        }
    }
}

/// Gradient of the Goldstein-Price polynomial.
pub struct GoldsteinPrice
{
    base: ProbBase,
}

impl GoldsteinPrice
{
    pub fn new() -> Self
    {
        GoldsteinPrice {
            base: ProbBase::new("Goldstein Price Polynomial", BIBTEX, 2),
        }
    }
}

impl NonlinearSystem<f64> for GoldsteinPrice
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let t = Factors::new(x);
        f[0] = t.p * t.q1 + t.p1 * t.q;
        f[1] = t.p * t.q2 + t.p1 * t.q;
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
        let t = Factors::new(x);
        let h11 = t.p11 * t.q + 2. * t.p1 * t.q1 + t.p * t.q11;
        let h12 = t.p11 * t.q + t.p1 * (t.q1 + t.q2) + t.p * t.q12;
        let h22 = t.p11 * t.q + 2. * t.p1 * t.q2 + t.p * t.q22;
        jac.copy_from_slice(&[h11, h12, h12, h22]);
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[0., -1.]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&[-0.5, 0.25]);
    }
}
