//! Model factories for validation tests.

pub mod models;
pub mod type_usages;
