use std::f64::consts::PI;
use nlbench_core::system::NonlinearSystem;
use nlbench_core::PatternFill;
use super::ProbBase;

const BIBTEX: &str = "\
@book{Michalewicz:1996,
  author = {Michalewicz, Zbigniew},
  title = {Genetic Algorithms + Data Structures = Evolution Programs (3rd Ed.)},
  year = {1996},
  isbn = {3-540-60676-9},
  publisher = {Springer-Verlag},
  address = {Berlin, Heidelberg},
}

@book{brent2002algorithms,
  author={Brent, R.P.},
  title={Algorithms for Minimization Without Derivatives},
  year={2002},
  isbn={9780486419985},
  series={Dover Books on Mathematics},
  publisher={Dover Publications}
}
";

/// Gradients of the Bohachevsky functions N1, N2 and N3, all stationary at the origin.
///
/// N1 is \\(x_1^2 + 2x_2^2 - 0.3\cos(3\pi x_1) - 0.4\cos(4\pi x_2) + 0.7\\)
/// and N2 is \\(x_1^2 + 2x_2^2 - 0.3\cos(3\pi x_1)\cos(4\pi x_2) + 0.3\\).
pub struct Bohachevsky
{
    base: ProbBase,
    variant: usize,
}

impl Bohachevsky
{
    /// * `variant` is 1, 2 or 3.
    pub fn new(variant: usize) -> Self
    {
        assert!((1..= 3).contains(&variant));

        Bohachevsky {
            base: ProbBase::new(&format!("BohachevskyN{}", variant), BIBTEX, 2),
            variant,
        }
    }
}

impl NonlinearSystem<f64> for Bohachevsky
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        let (x1, x2) = (x[0], x[1]);
        match (self.variant, k) {
            (1, 0) => 2. * x1 + 0.9 * PI * (3. * PI * x1).sin(),
            (1, _) => 4. * x2 + 1.6 * PI * (4. * PI * x2).sin(),
            (2, 0) => 2. * x1 + 0.9 * PI * (3. * PI * x1).sin() * (4. * PI * x2).cos(),
            (2, _) => 4. * x2 + 1.2 * PI * (3. * PI * x1).cos() * (4. * PI * x2).sin(),
            (_, 0) => 2. * x1 + 0.9 * PI * (3. * PI * x1).sin(),
            (_, _) => 4. * x2 - 4. * PI * (4. * PI * x2).sin(),
        }
    }

    fn jacobian_nnz(&self) -> usize
    {
        if self.variant == 3 {2} else {4}
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        if self.variant == 3 {
            i.copy_from_slice(&[0, 1]);
            j.copy_from_slice(&[0, 1]);
        }
        else {
            PatternFill::new(i, j).push_dense(2);
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let (x1, x2) = (x[0], x[1]);
        let pi2 = PI * PI;
        match self.variant {
            1 => {
                jac.copy_from_slice(&[
                    2. + 2.7 * pi2 * (3. * PI * x1).cos(), 0.,
                    0., 4. + 6.4 * pi2 * (4. * PI * x2).cos(),
                ]);
            },
            2 => {
                let a = pi2 * (3. * PI * x1).sin() * (4. * PI * x2).sin();
                let b = pi2 * (3. * PI * x1).cos() * (4. * PI * x2).cos();
                jac.copy_from_slice(&[2. + 2.7 * b, -3.6 * a, -3.6 * a, 4. + 4.8 * b]);
            },
            _ => {
                jac.copy_from_slice(&[
                    2. + 2.7 * pi2 * (3. * PI * x1).cos(),
                    4. - 16. * pi2 * (4. * PI * x2).cos(),
                ]);
            },
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        if self.variant == 2 {
            x.copy_from_slice(&[0.6, 1.3]);
        }
        else {
            x.copy_from_slice(&[0.5, 1.]);
        }
    }
}
