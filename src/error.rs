use thiserror::Error;

use crate::metadata::{model::MetadataKind, token::NodeId};

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which covers every operational failure this library can return.
///
/// Validation findings are deliberately not part of this enum: a rule never fails, it records a
/// [`crate::metadata::validation::ValidationError`] in its context instead. The variants below
/// describe problems with the inputs to validation, such as a model that references nodes which
/// do not exist, or a caller converting a failed report into an error.
///
/// # Error Categories
///
/// ## Model Construction Errors
/// - [`Error::NodeNotFound`] - An id does not refer to a node of the model
/// - [`Error::KindMismatch`] - A reference points at a node of the wrong kind
/// - [`Error::DanglingReference`] - A populated reference points at nothing
/// - [`Error::Malformed`] - The model could not be assembled
///
/// ## Validation Errors
/// - [`Error::ValidationFailed`] - A report with findings was converted into an error
///
/// # Examples
///
/// ```rust
/// use edmscope::{Error, metadata::model::{DataSpace, EdmModelBuilder, MetadataKind}};
/// use edmscope::metadata::token::NodeId;
///
/// let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
/// builder.entity_set("Customers", Some(NodeId::new(MetadataKind::EntityType, 42)));
///
/// match builder.build() {
///     Err(Error::DanglingReference { to, .. }) => assert_eq!(to.row(), 42),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The model is damaged and could not be assembled.
    ///
    /// The error includes the source location where the problem was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Failed to find a node in the model.
    ///
    /// The associated [`NodeId`] identifies which node was requested.
    #[error("Failed to find node in model - {0}")]
    NodeNotFound(NodeId),

    /// A reference points at a node of an unexpected kind.
    #[error("Node {id} is a {found}, expected {expected}")]
    KindMismatch {
        /// The referenced node
        id: NodeId,
        /// The kind the reference requires
        expected: MetadataKind,
        /// The kind of the referenced node
        found: MetadataKind,
    },

    /// A populated reference does not resolve to a node of the model.
    ///
    /// Absent references are not an error, they are reported by validation. This variant is
    /// only produced for references that carry an id which is not part of the model.
    #[error("Node {from} references {to}, which is not part of the model")]
    DanglingReference {
        /// The node holding the reference
        from: NodeId,
        /// The unresolved id
        to: NodeId,
    },

    /// Validation recorded findings and the caller asked for a fail-fast result.
    #[error("Validation failed with {errors} error(s), first: {first}")]
    ValidationFailed {
        /// Number of recorded findings
        errors: usize,
        /// Rendered text of the first finding
        first: String,
    },
}
