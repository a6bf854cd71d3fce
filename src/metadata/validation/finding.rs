//! Validation findings.
//!
//! A finding ties an [`ErrorMessage`] to the node it was recorded on and, optionally, to the
//! attribute ("slot") of that node the defect belongs to. Slots use the attribute names of the
//! schema documents the model was read from, so a caller can map a finding back to a source
//! location.

use std::fmt;

use strum::{AsRefStr, Display, EnumCount, EnumIter};

use crate::metadata::{
    model::MetadataKind,
    token::NodeId,
    validation::messages::{DefaultCatalog, ErrorMessage, MessageCatalog},
};

/// The attribute of a node a finding is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, AsRefStr)]
pub enum Slot {
    /// The `Name` attribute
    Name,
    /// The `End` element of an association
    End,
    /// The `DependentRole` element of a referential constraint
    DependentRole,
    /// The `Relationship` attribute of a navigation property
    Relationship,
    /// The `ToRole` attribute of a navigation property or association set end
    ToRole,
    /// The `FromRole` attribute of an association set end
    FromRole,
    /// The `Type` attribute of an association end
    Type,
    /// The `EntityType` attribute of a set
    EntityType,
}

/// Category of a finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount, AsRefStr,
)]
pub enum ErrorKind {
    /// A required name is absent or blank
    MissingName,
    /// A name exceeds the length bound
    NameTooLong,
    /// A name violates the character or namespace rules of the data space
    NameNotAllowed,
    /// A required cross-reference is absent
    MissingReference,
    /// A required collection is absent or empty
    EmptyCollection,
    /// A type usage failed the cycle-safe validity check
    InvalidTypeUsage,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// The node the finding was recorded on
    pub node: NodeId,
    /// The attribute of the node the finding belongs to, `None` for whole-node findings
    pub slot: Option<Slot>,
    /// The structured message
    pub message: ErrorMessage,
}

impl ValidationError {
    /// Creates a new finding
    #[must_use]
    pub fn new(node: NodeId, slot: Option<Slot>, message: ErrorMessage) -> Self {
        Self {
            node,
            slot,
            message,
        }
    }

    /// Category of this finding
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.message.kind()
    }

    /// Kind of the node this finding was recorded on
    #[must_use]
    pub fn node_kind(&self) -> Option<MetadataKind> {
        self.node.kind()
    }

    /// Renders the message text through a catalog
    #[must_use]
    pub fn render(&self, catalog: &dyn MessageCatalog) -> String {
        catalog.render(&self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self
            .node_kind()
            .map_or_else(|| "Unknown".to_string(), |kind| kind.to_string());

        match self.slot {
            Some(slot) => write!(
                f,
                "{} {} [{}]: {}",
                kind,
                self.node,
                slot,
                self.render(&DefaultCatalog)
            ),
            None => write!(f, "{} {}: {}", kind, self.node, self.render(&DefaultCatalog)),
        }
    }
}
