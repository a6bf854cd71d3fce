//! Structural types, their properties and type usages.

use strum::{AsRefStr, Display, EnumIter};

use crate::metadata::token::NodeId;

/// Primitive types a type usage can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
#[allow(missing_docs)]
pub enum PrimitiveKind {
    Binary,
    Boolean,
    Byte,
    DateTime,
    DateTimeOffset,
    Decimal,
    Double,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    Time,
}

/// The type a [`TypeUsage`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdmTypeRef {
    /// A primitive type
    Primitive(PrimitiveKind),
    /// An entity type, by value
    Entity(NodeId),
    /// A complex type
    Complex(NodeId),
    /// An anonymous row type
    Row(NodeId),
    /// A reference to an entity type
    Ref(NodeId),
    /// A collection whose elements are described by another type usage
    Collection(NodeId),
}

impl EdmTypeRef {
    /// The node this type refers to, `None` for primitives
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        match *self {
            EdmTypeRef::Primitive(_) => None,
            EdmTypeRef::Entity(id)
            | EdmTypeRef::Complex(id)
            | EdmTypeRef::Row(id)
            | EdmTypeRef::Ref(id)
            | EdmTypeRef::Collection(id) => Some(id),
        }
    }

    /// The entity type an entity or reference type refers to
    #[must_use]
    pub fn entity_type(&self) -> Option<NodeId> {
        match *self {
            EdmTypeRef::Entity(id) | EdmTypeRef::Ref(id) => Some(id),
            _ => None,
        }
    }
}

/// Describes how a type is used by a property, an association end or a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUsage {
    /// Id of this node
    pub id: NodeId,
    /// The described type, `None` if it could not be resolved
    pub edm_type: Option<EdmTypeRef>,
    /// Whether values of this usage may be null
    pub nullable: bool,
}

/// An entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    /// Id of this node
    pub id: NodeId,
    /// Name of the type
    pub name: String,
    /// Namespace of the type
    pub namespace: String,
    /// Optional base type
    pub base_type: Option<NodeId>,
    /// Whether the type is abstract
    pub is_abstract: bool,
    /// Key properties
    pub key_members: Vec<NodeId>,
    /// Declared structural properties
    pub properties: Vec<NodeId>,
    /// Declared navigation properties
    pub navigation_properties: Vec<NodeId>,
}

impl EntityType {
    /// Namespace qualified name of the type
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// A complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    /// Id of this node
    pub id: NodeId,
    /// Name of the type
    pub name: String,
    /// Namespace of the type
    pub namespace: String,
    /// Declared structural properties
    pub properties: Vec<NodeId>,
}

/// An anonymous, structurally typed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowType {
    /// Id of this node
    pub id: NodeId,
    /// Generated name of the row type
    pub name: String,
    /// Declared structural properties
    pub properties: Vec<NodeId>,
}

/// A structural property of an entity, complex or row type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmProperty {
    /// Id of this node
    pub id: NodeId,
    /// Name of the property
    pub name: String,
    /// The declaring type
    pub declaring_type: NodeId,
    /// Type usage of the property
    pub type_usage: Option<NodeId>,
}

/// A navigation property of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationProperty {
    /// Id of this node
    pub id: NodeId,
    /// Name of the property
    pub name: String,
    /// The declaring entity type
    pub declaring_type: NodeId,
    /// The association this property navigates
    pub association: Option<NodeId>,
    /// The end member this property navigates to
    pub to_end_member: Option<NodeId>,
}
