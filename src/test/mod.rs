//! Shared test support, compiled only for unit tests.
//!
//! Factories build small models that exhibit exactly one defect (or none), helpers run the
//! standard rule battery over them and pick findings apart.

pub mod factories;
mod helpers;

pub use helpers::*;
