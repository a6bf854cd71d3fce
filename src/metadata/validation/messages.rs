//! Validation messages and their rendering.
//!
//! Rules record structured [`ErrorMessage`]s, parameterized with the data a message needs (for
//! example the offending name). Turning a message into text is the job of a
//! [`MessageCatalog`], so callers can localize or reword findings without touching the rules.
//! [`DefaultCatalog`] provides the English texts.

use std::fmt;

use crate::metadata::validation::finding::ErrorKind;

/// A structured validation message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    /// The name of an item is missing or blank
    NameMissing,
    /// The name of an item exceeds the length bound
    NameTooLong {
        /// The offending name
        name: String,
        /// The bound that was exceeded
        max: usize,
    },
    /// The name of an item is not allowed in the current data space
    NameNotAllowed {
        /// The offending name
        name: String,
    },
    /// An association type lacks one of its ends
    AssociationEndMissing,
    /// A referential constraint has no dependent role
    DependentRoleMissing,
    /// A referential constraint has no dependent properties
    DependentPropertiesEmpty,
    /// A navigation property has no association
    NavigationAssociationMissing,
    /// A navigation property has no target end
    NavigationTargetEndMissing,
    /// The entity type of an association end cannot be resolved
    AssociationEndEntityTypeMissing,
    /// An entity set has no element type
    EntitySetElementTypeMissing,
    /// An association set has no element type
    AssociationSetElementTypeMissing,
    /// An association set has no source set
    AssociationSetSourceSetMissing,
    /// An association set has no target set
    AssociationSetTargetSetMissing,
    /// A type usage failed the cycle-safe validity check
    TypeUsageNotValid,
}

impl ErrorMessage {
    /// Category of findings carrying this message
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorMessage::NameMissing => ErrorKind::MissingName,
            ErrorMessage::NameTooLong { .. } => ErrorKind::NameTooLong,
            ErrorMessage::NameNotAllowed { .. } => ErrorKind::NameNotAllowed,
            ErrorMessage::DependentPropertiesEmpty => ErrorKind::EmptyCollection,
            ErrorMessage::TypeUsageNotValid => ErrorKind::InvalidTypeUsage,
            ErrorMessage::AssociationEndMissing
            | ErrorMessage::DependentRoleMissing
            | ErrorMessage::NavigationAssociationMissing
            | ErrorMessage::NavigationTargetEndMissing
            | ErrorMessage::AssociationEndEntityTypeMissing
            | ErrorMessage::EntitySetElementTypeMissing
            | ErrorMessage::AssociationSetElementTypeMissing
            | ErrorMessage::AssociationSetSourceSetMissing
            | ErrorMessage::AssociationSetTargetSetMissing => ErrorKind::MissingReference,
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DefaultCatalog.render(self))
    }
}

/// Renders [`ErrorMessage`]s into human readable text.
pub trait MessageCatalog: Send + Sync {
    /// Renders one message
    fn render(&self, message: &ErrorMessage) -> String;
}

/// The built-in English message texts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn render(&self, message: &ErrorMessage) -> String {
        match message {
            ErrorMessage::NameMissing => "Item name is missing or empty.".to_string(),
            ErrorMessage::NameTooLong { name, max } => {
                format!("The specified name must not be longer than {max} characters: '{name}'.")
            }
            ErrorMessage::NameNotAllowed { name } => {
                format!("The specified name is not allowed: '{name}'.")
            }
            ErrorMessage::AssociationEndMissing => {
                "The association type must define both of its ends.".to_string()
            }
            ErrorMessage::DependentRoleMissing => {
                "The dependent role of the referential constraint must not be null.".to_string()
            }
            ErrorMessage::DependentPropertiesEmpty => {
                "The dependent properties of the referential constraint must not be empty."
                    .to_string()
            }
            ErrorMessage::NavigationAssociationMissing => {
                "The association of the navigation property must not be null.".to_string()
            }
            ErrorMessage::NavigationTargetEndMissing => {
                "The result end of the navigation property must not be null.".to_string()
            }
            ErrorMessage::AssociationEndEntityTypeMissing => {
                "The entity type of the association end must not be null.".to_string()
            }
            ErrorMessage::EntitySetElementTypeMissing => {
                "The element type of the entity set must not be null.".to_string()
            }
            ErrorMessage::AssociationSetElementTypeMissing => {
                "The element type of the association set must not be null.".to_string()
            }
            ErrorMessage::AssociationSetSourceSetMissing => {
                "The source set of the association set must not be null.".to_string()
            }
            ErrorMessage::AssociationSetTargetSetMissing => {
                "The target set of the association set must not be null.".to_string()
            }
            ErrorMessage::TypeUsageNotValid => "The type reference is not valid.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ShortCatalog;

    impl MessageCatalog for ShortCatalog {
        fn render(&self, message: &ErrorMessage) -> String {
            message.kind().to_string()
        }
    }

    #[test]
    fn test_parameterized_messages() {
        let message = ErrorMessage::NameTooLong {
            name: "abc".to_string(),
            max: 2,
        };
        assert_eq!(
            message.to_string(),
            "The specified name must not be longer than 2 characters: 'abc'."
        );

        let message = ErrorMessage::NameNotAllowed {
            name: "Foo.Bar".to_string(),
        };
        assert!(message.to_string().contains("'Foo.Bar'"));
    }

    #[test]
    fn test_message_kinds() {
        assert_eq!(ErrorMessage::NameMissing.kind(), ErrorKind::MissingName);
        assert_eq!(
            ErrorMessage::DependentPropertiesEmpty.kind(),
            ErrorKind::EmptyCollection
        );
        assert_eq!(
            ErrorMessage::AssociationSetTargetSetMissing.kind(),
            ErrorKind::MissingReference
        );
        assert_eq!(
            ErrorMessage::TypeUsageNotValid.kind(),
            ErrorKind::InvalidTypeUsage
        );
    }

    #[test]
    fn test_custom_catalog() {
        assert_eq!(
            ShortCatalog.render(&ErrorMessage::DependentRoleMissing),
            "MissingReference"
        );
    }
}
