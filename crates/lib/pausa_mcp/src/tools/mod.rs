//! Tool parameter types, validation and tests.

pub mod types;
pub mod validation;
