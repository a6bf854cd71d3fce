//! Syntactic validation of EDM metadata.
//!
//! Validation is organized around a small number of pieces:
//!
//! - [`ValidationContext`] - the per-pass state: model, data space, configuration and the
//!   sink findings are recorded into
//! - [`Rule`] - a named, stateless check bound to one node kind through [`RuleCheck`]
//! - [`rules`] - the standard battery, assembled by [`syntactic_rules`]
//! - [`ValidationEngine`] - walks a model and dispatches every applicable rule to every node
//! - [`ValidationReport`] - the ordered findings of one pass
//!
//! Findings are [`ValidationError`] values: the offending node, an optional [`Slot`] locating
//! the defect within the node, and a structured [`ErrorMessage`] that a [`MessageCatalog`]
//! turns into text.
//!
//! # Examples
//!
//! ```rust
//! use edmscope::metadata::model::{DataSpace, EdmModelBuilder, EdmTypeRef};
//! use edmscope::metadata::validation::{
//!     syntactic_rules, ErrorKind, TypeUsagePolicy, ValidationConfig, ValidationEngine,
//! };
//!
//! let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
//! let usage = builder.type_usage(None);
//! builder.set_usage_type(usage, Some(EdmTypeRef::Collection(usage)));
//! let model = builder.build()?;
//!
//! let engine = ValidationEngine::new(syntactic_rules(), ValidationConfig::default());
//! let report = engine.validate(&model);
//! assert_eq!(report.count(ErrorKind::InvalidTypeUsage), 1);
//!
//! // A true cycle is rejected under either revisit semantics
//! let config = ValidationConfig::default().with_type_usage_policy(TypeUsagePolicy::PathOnly);
//! let report = ValidationEngine::new(syntactic_rules(), config).validate(&model);
//! assert_eq!(report.count(ErrorKind::InvalidTypeUsage), 1);
//! # Ok::<(), edmscope::Error>(())
//! ```

mod circularity;
mod config;
mod context;
mod engine;
mod finding;
mod identifier;
mod messages;
mod report;
mod rule;
pub mod rules;

pub use circularity::{check_type_usage, is_type_usage_valid};
pub use config::{TypeUsagePolicy, ValidationConfig, DEFAULT_MAX_NAME_LENGTH};
pub use context::ValidationContext;
pub use engine::ValidationEngine;
pub use finding::{ErrorKind, Slot, ValidationError};
pub use identifier::{is_blank, is_valid_undotted_name, name_length};
pub use messages::{DefaultCatalog, ErrorMessage, MessageCatalog};
pub use report::ValidationReport;
pub use rule::{CheckFn, NamedCheckFn, Rule, RuleCategory, RuleCheck};
pub use rules::syntactic_rules;
