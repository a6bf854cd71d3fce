// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # edmscope
//!
//! A structural validator for Entity Data Model (EDM) metadata. Before an EDM is used to
//! generate or interpret mappings, `edmscope` checks that every entity, property, association,
//! set and type usage is well-formed: names are present and legal for the data space, required
//! cross-references are populated, and composite type usages terminate.
//!
//! ## Features
//!
//! - **Type-scoped rules** - Every rule is bound to one node kind (or to "any named item")
//! - **Explicit dispatch** - Rules are matched against a closed set of node kinds, no runtime type inspection
//! - **Space-aware** - Conceptual and store models are validated with their own rule variations
//! - **Cycle-safe** - Self-referencing and shared type usages cannot cause unbounded recursion
//! - **Total** - Every defect in the model is reported in one pass, validation never stops early
//! - **Deterministic** - Sequential and parallel passes produce identical, ordered findings
//!
//! ## Quick Start
//!
//! ```rust
//! use edmscope::prelude::*;
//!
//! let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
//! let customer = builder.entity_type("Customer", "Shop");
//! builder.entity_set("Customers", Some(customer));
//! builder.entity_set("Orphans", None);
//! let model = builder.build()?;
//!
//! let engine = ValidationEngine::new(syntactic_rules(), ValidationConfig::default());
//! let report = engine.validate(&model);
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.errors()[0].slot, Some(Slot::EntityType));
//! # Ok::<(), edmscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata::model`] - The in-memory metadata graph the rules read from
//! - [`metadata::validation`] - Context, rules, catalog and the dispatching engine
//! - [`metadata::token`] - Kind-tagged node identities
//!
//! Findings are never returned as [`Error`]. The crate error type covers operational failures
//! only, such as building a model with a dangling reference. Callers that prefer fail-fast
//! handling can convert a report with [`ValidationReport::into_result`].

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use edmscope::prelude::*;
///
/// let config = ValidationConfig::minimal();
/// assert!(config.enable_naming_validation);
/// ```
pub mod prelude;

/// Metadata graph representation and its validation.
pub mod metadata;

/// `edmscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `edmscope` Error type
///
/// The main error type for all operational failures in this crate. Validation findings are
/// not errors, see [`metadata::validation::ValidationError`].
pub use error::Error;

/// Main model types.
pub use metadata::model::{EdmModel, EdmModelBuilder};

/// Main validation entry points.
pub use metadata::validation::{ValidationConfig, ValidationEngine, ValidationReport};
