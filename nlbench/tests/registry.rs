use std::collections::HashSet;
use nlbench::*;
use nlbench_core::system::NonlinearSystem;

/// Skips assembling Jacobians larger than this.
const NNZ_LIMIT: usize = 1_000_000;

/// Skips component-wise evaluation of systems larger than this.
const COMPONENT_LIMIT: usize = 500;

//

#[test]
fn test_registry_titles1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::new();

    let mut seen = HashSet::new();
    for prob in reg.iter() {
        let suffix = format!(" neq = {}", prob.num_equations());
        assert!(prob.title().ends_with(&suffix), "{}", prob.title());
        assert!(seen.insert(prob.title().to_string()), "{}", prob.title());
        assert!(!prob.bibtex().is_empty(), "{}", prob.title());
    }
    assert_eq!(seen.len(), reg.count());
}

#[test]
fn test_registry_lookup1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::new();

    for k in 1..= reg.count() {
        let p = reg.by_index(k).unwrap();
        let q = reg.by_name(p.title()).unwrap();
        assert_eq!(p.title(), q.title());
        assert_eq!(p.num_equations(), q.num_equations());
    }

    assert!(matches!(reg.by_index(0), Err(RegistryError::IndexOutOfRange {..})));
    assert!(matches!(reg.by_name("no such problem"), Err(RegistryError::NotFound(_))));
}

#[test]
fn test_registry_points1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::new();

    for prob in reg.iter() {
        let n = prob.num_equations();
        assert!(n > 0, "{}", prob.title());
        assert!(prob.num_initial_points() > 0, "{}", prob.title());

        let mut l = vec![0.; n];
        let mut u = vec![0.; n];
        prob.bounding_box(&mut l, &mut u);
        assert!(l.iter().zip(&u).all(|(a, b)| a <= b), "{}", prob.title());

        let mut x = vec![f64::NAN; n];
        for idx in 0.. prob.num_initial_points() {
            prob.initial_point(&mut x, idx);
            assert!(x.iter().all(|v| v.is_finite()), "{} initial point #{}", prob.title(), idx);
        }
        for idx in 0.. prob.num_exact_solutions() {
            prob.exact_solution(&mut x, idx);
            assert!(x.iter().all(|v| v.is_finite()), "{} exact solution #{}", prob.title(), idx);
        }
    }
}

#[test]
fn test_registry_csr1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::new();
    let checker = Checker::new();

    for prob in reg.iter() {
        if prob.jacobian_nnz() > NNZ_LIMIT {
            log::info!("{}: skipped", prob.title());
            continue;
        }

        let mut x = vec![0.; prob.num_equations()];
        prob.initial_point(&mut x, 0);

        let csr = checker.check_csr(prob, &x).unwrap();
        assert_eq!(csr.nnz(), prob.jacobian_nnz(), "{}", prob.title());
    }
}

#[test]
fn test_registry_exact1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::new();
    let checker = Checker::new();

    for prob in reg.iter() {
        checker.check_exact_solutions(prob).unwrap();

        let n = prob.num_equations();
        if n > COMPONENT_LIMIT || prob.jacobian_nnz() > NNZ_LIMIT {
            log::info!("{}: components skipped", prob.title());
            continue;
        }

        let mut x = vec![0.; n];
        for idx in 0.. prob.num_initial_points() {
            prob.initial_point(&mut x, idx);
            checker.check_components(prob, &x).unwrap();
        }
    }
}
