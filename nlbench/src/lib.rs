/*!
nlbench is a catalog of **nonlinear systems of equations** \\(F(x) = 0\\) for testing solvers.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

Every problem implements [`nlbench_core::system::NonlinearSystem`] for `f64`,
which provides its residual, sparse Jacobian, known exact solutions and suggested initial points.

# General usage

1. Look a problem up in the [`Registry`] by its 1-based ordinal or by its exact title,
   or construct a problem struct directly with its parameters.
1. Evaluate the residual by [`nlbench_core::system::NonlinearSystem::eval_f`].
1. Assemble the Jacobian into compressed sparse row form by [`CsrBuild`],
   or by [`nlbench_core::system::Assembler`] with your own slices.
1. Optionally cross-check a problem implementation by [`Checker`].

# Examples

One Newton step for \\(x (x - 5)^2 = 0\\) from \\(x = 1\\):

```
use float_eq::assert_float_eq;
use nlbench::*;
use nlbench_core::system::NonlinearSystem;

//env_logger::init(); // Use any logger crate as `nlbench` uses `log` crate.

let reg = Registry::new();
let idx = reg.position("Scalar problem f(x) = x * ( x - 5 )**2 neq = 1").unwrap();
let prob = reg.by_index(idx).unwrap();

let mut x = vec![0.; prob.num_equations()];
prob.initial_point(&mut x, 0);

let mut f = vec![0.; prob.num_equations()];
prob.eval_f(&x, &mut f);
assert_float_eq!(f[0], 16., abs <= 1e-12);

let jac = CsrBuild::assemble(prob, &x).unwrap();
assert_eq!(jac.row_ptr(), &[0, 1]);
assert_float_eq!(jac.values()[0], 8., abs <= 1e-12);

x[0] -= f[0] / jac.values()[0];
assert_float_eq!(x[0], -1., abs <= 1e-12);
```
*/

mod problem;

pub use problem::*;

//

mod registry;

pub use registry::*;

//

mod csr_build;

pub use csr_build::*;

//

mod check;

pub use check::*;
