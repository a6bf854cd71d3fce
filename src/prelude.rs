//! # edmscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! of the edmscope library. Import it to build a model and validate it without spelling out
//! module paths.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all edmscope operations
pub use crate::Error;

/// The result type used throughout edmscope
pub use crate::Result;

// ================================================================================================
// Metadata Model
// ================================================================================================

/// The model arena, its builder and the data space it describes
pub use crate::metadata::model::{DataSpace, EdmModel, EdmModelBuilder};

/// Node kinds and the named item view
pub use crate::metadata::model::{MetadataKind, MetadataNode, NamedItem};

/// Type references and association multiplicities
pub use crate::metadata::model::{EdmTypeRef, PrimitiveKind, RelationshipMultiplicity};

/// Kind-tagged node identity
pub use crate::metadata::token::NodeId;

// ================================================================================================
// Validation
// ================================================================================================

/// Engine, configuration and the standard rule battery
pub use crate::metadata::validation::{
    syntactic_rules, TypeUsagePolicy, ValidationConfig, ValidationEngine,
};

/// Rule building blocks for custom batteries
pub use crate::metadata::validation::{Rule, RuleCategory, RuleCheck, ValidationContext};

/// Findings and their rendering
pub use crate::metadata::validation::{
    DefaultCatalog, ErrorKind, ErrorMessage, MessageCatalog, Slot, ValidationError,
    ValidationReport,
};
