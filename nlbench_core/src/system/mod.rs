mod nonlinear_system;
mod problem_error;
mod assembler;

pub use nonlinear_system::*;
pub use problem_error::*;
pub use assembler::*;
