use nlbench_core::system::NonlinearSystem;
use nlbench_core::{PatternFill, ValueFill};
use super::{ProbBase, check_min_equations, eval_fk_by_f};

const BIBTEX: &str = "\
Spedicato, E.
Computational experience with quasi-newton algoritms.
for minimization problems of moderately large size.
Rep. CISE-N-175, Segrate (Milano), 1975.

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

/// Known roots for `n = 1..=7`.
static EXACT: [&[f64]; 7] = [
    &[0.9272952180016122324285124629224288040571],
    &[
        0.2430642022015621601022305882114319166998,
        0.6126761171373341819109378923948284268791,
    ],
    &[
        0.1386586620895952548146908578480828567861,
        0.1523812304815232863265755985362427737938,
        0.4677872324751889220566183484237867528208,
    ],
    &[
        0.8918060157524354158025129022089306168185e-1,
        0.9406975483676078600641830110116749612994e-1,
        0.1003490382176274133617689339270703727279,
        0.3808809535377544791201056909371821869283,
    ],
    &[
        0.6175491892349230228810295448928096965843e-1,
        0.6393992541842797329197797360800517769138e-1,
        0.6648669739226701899975920126598738991514e-1,
        0.6953055812954323530954539703632692011629e-1,
        0.3214890943456119400418258781551987027807,
    ],
    &[
        0.8132473891069603437697201795975588604775e-1,
        0.8530626471926446687284354166824938025959e-1,
        0.9026634644303587807017746608650930337132e-1,
        0.9681157292880582269931805627675287360652e-1,
        0.2883772090157352444000677796595946026999,
        0.2050122782185276818395942743633900930887,
    ],
    &[
        0.6359323463117480599802577468484466344791e-1,
        -6.217264595163630379660558017324158265004,
        25.20139044537194916081602821610694937520,
        -6.211249092913161143844503944299933134998,
        6.359242333673542087936017626710132641735,
        0.2487285997274638495927700030181851144571,
        0.1938449788520964162432781487951685607177,
    ],
];

/// \\(t_{1,i}\, t_{2,i}\\) with
/// \\(t_{1,i} = n + (i+1)(1 - \cos x_i) - \sin x_i - \sum_j \cos x_j\\)
/// and \\(t_{2,i} = 2\sin x_i - \cos x_i\\).
pub struct TrigonometricFunction
{
    base: ProbBase,
}

impl TrigonometricFunction
{
    pub fn new(n: usize) -> Self
    {
        check_min_equations(n, 1);

        TrigonometricFunction {
            base: ProbBase::new("Trigonometric function", BIBTEX, n),
        }
    }

    fn t1(&self, x: &[f64], cos_sum: f64, i: usize) -> f64
    {
        let n = self.base.n() as f64;
        n + (i + 1) as f64 * (1. - x[i].cos()) - x[i].sin() - cos_sum
    }
}

impl NonlinearSystem<f64> for TrigonometricFunction
{
    prob_base!();

    fn eval_fk(&self, x: &[f64], k: usize) -> f64
    {
        eval_fk_by_f(self, x, k)
    }

    fn eval_f(&self, x: &[f64], f: &mut[f64])
    {
        let cos_sum: f64 = x.iter().map(|v| v.cos()).sum();
        for (i, fi) in f.iter_mut().enumerate() {
            *fi = self.t1(x, cos_sum, i) * (2. * x[i].sin() - x[i].cos());
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
        let n = self.base.n();
        let cos_sum: f64 = x.iter().map(|v| v.cos()).sum();
        let mut v = ValueFill::new(jac);
        for i in 0.. n {
            let (s, c) = x[i].sin_cos();
            let t1 = self.t1(x, cos_sum, i);
            let t2 = 2. * s - c;
            for j in 0.. n {
                let mut d = t2 * x[j].sin();
                if i == j {
                    d += t1 * (2. * c + s) + t2 * ((i + 1) as f64 * s - c);
                }
                v.push(d);
            }
        }
    }

    fn num_exact_solutions(&self) -> usize
    {
        if self.base.n() <= EXACT.len() {1} else {0}
    }

    fn exact_solution(&self, x: &mut[f64], _idx: usize)
    {
        x.copy_from_slice(EXACT[self.base.n() - 1]);
    }

    fn num_initial_points(&self) -> usize
    {
        1
    }

    fn initial_point(&self, x: &mut[f64], _idx: usize)
    {
        x.fill(101. / (100. * self.base.n() as f64));
    }

    fn bounding_box(&self, l: &mut[f64], u: &mut[f64])
    {
        l.fill(-f64::MAX);
        u.fill(f64::MAX);
    }
}
