//! The validation context shared by all rules of one pass.
//!
//! A context carries the ambient state a rule may read (the model being validated, the data
//! space, the configuration) and the sink rules write their findings to. It is created fresh for
//! every pass and handed back to the caller, or turned into a
//! [`crate::metadata::validation::ValidationReport`], afterwards.
//!
//! # Recording
//!
//! [`ValidationContext::record_error`] never fails and never deduplicates. Findings are kept in
//! insertion order, which makes the output of a pass deterministic.
//!
//! # Parallel Passes
//!
//! Rules never read the findings recorded so far, so a pass may validate different nodes on
//! different threads. The engine gives each node its own [`ValidationContext::fork`] and
//! [`ValidationContext::absorb`]s the forks back in node order, which reconstructs exactly the
//! sequence a sequential pass would have produced.
//!
//! # Usage Examples
//!
//! ```rust
//! use edmscope::metadata::model::{DataSpace, EdmModelBuilder};
//! use edmscope::metadata::validation::{ErrorMessage, Slot, ValidationConfig, ValidationContext};
//!
//! let mut builder = EdmModelBuilder::new(DataSpace::Store);
//! let set = builder.entity_set("Orders", None);
//! let model = builder.build()?;
//!
//! let mut context = ValidationContext::new(&model, DataSpace::Store, ValidationConfig::default());
//! assert!(!context.is_conceptual_space());
//!
//! context.record_error(set, Some(Slot::EntityType), ErrorMessage::EntitySetElementTypeMissing);
//! assert_eq!(context.errors().len(), 1);
//! # Ok::<(), edmscope::Error>(())
//! ```

use crate::metadata::{
    model::{DataSpace, EdmModel},
    token::NodeId,
    validation::{
        config::ValidationConfig,
        finding::{Slot, ValidationError},
        messages::ErrorMessage,
    },
};

/// Context of one validation pass.
///
/// The data space is fixed at construction and never changes during the pass.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    /// The model being validated
    model: &'a EdmModel,
    /// The data space the model is validated in
    data_space: DataSpace,
    /// Configuration of this pass
    config: ValidationConfig,
    /// Findings in recording order
    errors: Vec<ValidationError>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a new context with an empty sink
    #[must_use]
    pub fn new(model: &'a EdmModel, data_space: DataSpace, config: ValidationConfig) -> Self {
        Self {
            model,
            data_space,
            config,
            errors: Vec::new(),
        }
    }

    /// Appends a finding to the sink
    ///
    /// # Arguments
    ///
    /// * `node` - The node the finding belongs to
    /// * `slot` - The attribute of the node, `None` for whole-node findings
    /// * `message` - The structured message
    pub fn record_error(&mut self, node: NodeId, slot: Option<Slot>, message: ErrorMessage) {
        self.errors.push(ValidationError::new(node, slot, message));
    }

    /// Returns true if this pass validates the conceptual space
    #[must_use]
    pub fn is_conceptual_space(&self) -> bool {
        self.data_space.is_conceptual()
    }

    /// The data space of this pass
    #[must_use]
    pub fn data_space(&self) -> DataSpace {
        self.data_space
    }

    /// The model being validated
    #[must_use]
    pub fn model(&self) -> &'a EdmModel {
        self.model
    }

    /// The configuration of this pass
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Findings recorded so far, in recording order
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns true if at least one finding was recorded
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the context and returns its findings
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Creates a context with the same model, space and configuration but an empty sink
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            model: self.model,
            data_space: self.data_space,
            config: self.config,
            errors: Vec::new(),
        }
    }

    /// Appends all findings of a forked context, preserving their order
    pub fn absorb(&mut self, other: ValidationContext<'_>) {
        self.errors.extend(other.errors);
    }
}
