//! Entity Data Model metadata and its structural validation.
//!
//! This module contains the in-memory metadata graph that the validation rules read from, the
//! identities used to refer to its nodes, and the validation framework itself.
//!
//! # Key Components
//!
//! - [`model`] - Node kinds, the [`model::EdmModel`] arena and its builder
//! - [`token`] - Kind-tagged [`token::NodeId`] identities used for every cross-reference
//! - [`validation`] - Rules, context, catalog and the dispatching engine
//!
//! # Examples
//!
//! ```rust
//! use edmscope::metadata::model::{DataSpace, EdmModelBuilder, MetadataKind};
//!
//! let mut builder = EdmModelBuilder::new(DataSpace::Store);
//! let table = builder.entity_type("Orders", "dbo");
//! let model = builder.build()?;
//!
//! assert_eq!(table.kind(), Some(MetadataKind::EntityType));
//! assert_eq!(model.len(), 1);
//! # Ok::<(), edmscope::Error>(())
//! ```

/// The metadata node graph
pub mod model;
/// Node identities
pub mod token;
/// Structural validation of the metadata graph
pub mod validation;
