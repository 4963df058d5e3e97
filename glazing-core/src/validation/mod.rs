//! Input and layout validation.

mod validate;

pub use validate::*;
