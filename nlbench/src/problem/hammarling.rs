use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::ProbBase;

const BIBTEX: &str = "\
n by n matrix square root problem (hammarling)
S. J. Hammarling, private communication to P. E. Gill.
";

/// Matrix square root \\(X^2 = A\\) for an \\(m \times m\\) matrix \\(X\\) stored row-major,
/// where \\(A = X_e^2\\) for a known root \\(X_e\\).
pub struct HammarlingMatrixSquareRoot
{
    base: ProbBase,
    m: usize,
    xe: Vec<f64>,
    a: Vec<f64>,
}

impl HammarlingMatrixSquareRoot
{
    fn with_root(title: &str, m: usize, xe: &[f64]) -> Self
    {
        assert_eq!(xe.len(), m * m);

        let mut a = vec![0.; m * m];
        for i in 0.. m {
            for k in 0.. m {
                a[i * m + k] = (0.. m).map(|j| xe[i * m + j] * xe[j * m + k]).sum();
            }
        }

        HammarlingMatrixSquareRoot {
            base: ProbBase::new(title, BIBTEX, m * m),
            m,
            xe: xe.to_vec(),
            a,
        }
    }

    /// 2 by 2 problem with \\(A = \begin{bmatrix} 10^{-4} & 1 \\\\ 0 & 10^{-4} \end{bmatrix}\\).
    pub fn two_by_two() -> Self
    {
        Self::with_root(
            "Hammarling 2 by 2 matrix square root problem", 2,
            &[0.01, 50.,
              0., 0.01],
        )
    }

    /// 3 by 3 problems.
    /// * `set` is from 1 to 3.
    pub fn three_by_three(set: usize) -> Self
    {
        let xe: [f64; 9] = match set {
            1 => [0.01, 50., 0.,
                  0., 0.01, 0.,
                  0., 0., 0.01],
            2 => [0., 0., 1.,
                  1., 1., 0.,
                  0., 1., 0.],
            3 => [1., 1., 1.,
                  0., 0., 0.,
                  0., 0., 0.],
            _ => panic!("Hammarling 3 by 3 problem set {} is out of 1..=3", set),
        };
        Self::with_root(&format!("Hammarling 3 by 3 matrix square root problem N.{}", set), 3, &xe)
    }

    /// Columns of row \\((i, k)\\): the \\(i\\)-th row and the \\(k\\)-th column of \\(X\\).
    fn row_cols(&self, r: usize) -> impl Iterator<Item=usize>
    {
        let m = self.m;
        let (i, k) = (r / m, r % m);
        (0.. m * m).filter(move |c| c / m == i || c % m == k)
    }
}

impl NonlinearSystem<f64> for HammarlingMatrixSquareRoot
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], r: usize) -> f64
    {
        let m = self.m;
        let (i, k) = (r / m, r % m);
        (0.. m).map(|j| x[i * m + j] * x[j * m + k]).sum::<f64>() - self.a[r]
    }

    fn jacobian_nnz(&self) -> usize
    {
        self.base.n() * (2 * self.m - 1)
    }

    fn jacobian_pattern(&self, i: &mut[usize], j: &mut[usize])
    {
        let mut p = PatternFill::new(i, j);
        for r in 0.. self.base.n() {
            p.push_row(r, self.row_cols(r));
        }
    }

    fn jacobian(&self, x: &[f64], jac: &mut[f64])
    {
        let m = self.m;
        let mut v = ValueFill::new(jac);
        for r in 0.. self.base.n() {
            let (i, k) = (r / m, r % m);
            for c in self.row_cols(r) {
                let (a, b) = (c / m, c % m);
                let mut d = 0.;
                if a == i {
                    d += x[b * m + k];
                }
                if b == k {
                    d += x[i * m + a];
                }
                v.push(d);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        1
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(&self.xe);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(0.);
        for d in x.iter_mut().step_by(self.m + 1) {
            *d = 1.;
        }
    }
}
