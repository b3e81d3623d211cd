//! Nonlinear system benchmark core
//!
//! <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
//! <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
//!
//! This crate provides the [`system::NonlinearSystem`] trait,
//! which a test problem \\(F(x) = 0,\ F: \mathbb{R}^n \to \mathbb{R}^n\\) implements,
//! and the [`system::Assembler`] that converts its sparse Jacobian triplets into compressed sparse row form.
//! It does not rely on dynamic heap allocation, so that it works also in `no_std` environments.

#![no_std]

pub mod system;

//

mod sort_ij;

pub use sort_ij::*;

//

mod pattern;

pub use pattern::*;

//

mod csr_op;

pub use csr_op::*;
