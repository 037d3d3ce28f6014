//! Dense LU Decomposition with Partial Pivoting (LUP)

mod debug;
mod error;
mod lup;
mod matrix;
mod traits;

#[cfg(feature = "rayon")]
mod par_lup;

pub use error::*;
pub use lup::*;
pub use matrix::*;
pub use traits::*;

#[cfg(feature = "rayon")]
pub use par_lup::*;

#[cfg(feature = "debug")]
pub use debug::matrix_table;
