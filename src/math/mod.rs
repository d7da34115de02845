pub mod matrix;

pub use matrix::{dot, uniform, Matrix};
