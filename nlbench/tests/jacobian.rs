use float_eq::assert_float_eq;
use nlbench::*;
use nlbench_core::system::{Assembler, NonlinearSystem};

type AProb = Box<dyn NonlinearSystem<f64>>;

fn small_problems() -> Vec<AProb>
{
    vec![
        Box::new(ScalarProblem::new()),
        Box::new(Beale::new()),
        Box::new(GeneralizedRosenbrock::new(10)),
        Box::new(WoodFunction::new()),
        Box::new(ExtendedPowellSingularFunction::new()),
        Box::new(LinearFunctionFullRank::with_size(10)),
        Box::new(VariablyDimensionedFunction::new(10)),
        Box::new(StrictlyConvexFunction1::new(10)),
        Box::new(ZeroJacobianFunction::new(10)),
        Box::new(ChemicalEquilibriumApplication::new()),
    ]
}

//

#[test]
fn test_jacobian_fd1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let checker = Checker::new();
    for prob in small_problems() {
        log::info!("{}", prob.title());
        checker.check_all(prob.as_ref()).unwrap();
    }
}

#[test]
fn test_jacobian_fd2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // away from the branch cut of atan2
    let prob = HelicalValleyFunction::new();
    let checker = Checker::new();
    checker.check_jacobian(&prob, &[0.5, 0.5, 0.3]).unwrap();
    checker.check_components(&prob, &[0.5, 0.5, 0.3]).unwrap();
    checker.check_exact_solutions(&prob).unwrap();
}

#[test]
fn test_linear_full_rank1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let prob = LinearFunctionFullRank::with_size(10);
    let mut x = vec![0.; 10];
    let mut f = vec![0.; 10];

    prob.exact_solution(&mut x, 0);
    prob.eval_f(&x, &mut f);
    assert_float_eq!(f[..], [0.; 10].as_ref(), abs_all <= 1e-9);

    // linear, so one Newton step from anywhere lands on the root
    prob.initial_point(&mut x, 0);
    prob.eval_f(&x, &mut f);
    let jac = CsrBuild::assemble(&prob, &x).unwrap();
    let mut dense = vec![0.; 100];
    jac.as_op().to_dense(&mut dense);

    // J = I - (2/n) 1 1^T is its own inverse
    let mut step = vec![0.; 10];
    jac.as_op().op(1., &f, 0., &mut step);
    for (xk, dk) in x.iter_mut().zip(&step) {
        *xk -= dk;
    }
    assert_float_eq!(x[..], [1.; 10].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(dense[0], 0.8, abs <= 1e-15);
}

#[test]
fn test_assemble_slices1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let prob = GeneralizedRosenbrock::new(4);
    let nnz = prob.jacobian_nnz();
    let x = [-1.2, 1., -1.2, 1.];

    let asm = Assembler::new().par(|p| {
        p.sort_thresh = 2;
    });
    let mut row_ptr = vec![0; 5];
    let mut col_idx = vec![0; nnz];
    let mut values = vec![0.; nnz];
    let mut work = vec![0; Assembler::query_worklen(nnz)];
    asm.assemble(&prob, &x, &mut row_ptr, &mut col_idx, &mut values, &mut work).unwrap();

    assert_eq!(row_ptr, [0, 2, 5, 8, 10]);
    assert_eq!(col_idx, [0, 1, 0, 1, 2, 1, 2, 3, 2, 3]);

    let by_default = CsrBuild::assemble(&prob, &x).unwrap();
    assert_eq!(by_default.values(), values.as_slice());
}

#[test]
fn test_admissible1()
{
    use nlbench_core::system::ProblemError;

    let _ = env_logger::builder().is_test(true).try_init();

    let prob = Weibull::new();
    let mut x = [0.; 3];
    prob.exact_solution(&mut x, 0);
    assert_eq!(prob.check_admissible(&x), Ok(()));

    x[0] = -1.;
    assert!(matches!(prob.check_admissible(&x), Err(ProblemError::Domain(_))));

    // no condition by default
    assert_eq!(Beale::new().check_admissible(&[-1e300, 1e300]), Ok(()));
}
