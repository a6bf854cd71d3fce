//! The Entity Data Model metadata graph.
//!
//! The model is an arena of [`MetadataNode`]s addressed by [`NodeId`]. Nodes refer to each
//! other through optional ids, so an absent reference is always an explicit `None` rather than
//! a sentinel. The validation rules only ever read from an [`EdmModel`]; models are created
//! through the [`EdmModelBuilder`], which rejects dangling or mistyped references but accepts
//! absent ones.
//!
//! # Node Kinds
//!
//! | Kind | Named | Optional references |
//! |------|-------|---------------------|
//! | [`EntityType`] | yes | |
//! | [`ComplexType`] | yes | |
//! | [`RowType`] | yes, structurally anonymous | |
//! | [`EdmProperty`] | yes | type usage |
//! | [`NavigationProperty`] | yes | association, target end |
//! | [`AssociationType`] | yes | source end, target end |
//! | [`AssociationEndMember`] | yes | type usage (and so its entity type) |
//! | [`ReferentialConstraint`] | no | dependent role, dependent properties |
//! | [`EntityContainer`] | yes | |
//! | [`EntitySet`] | yes | element type |
//! | [`AssociationSet`] | yes | element type, source set, target set |
//! | [`TypeUsage`] | no | described type, which may contain further type usages |
//!
//! The type usage sub-graph may contain cycles, for example a complex type that contains a
//! property of its own type.

mod association;
mod builder;
mod container;
mod types;

pub use association::{
    AssociationEndMember, AssociationType, ReferentialConstraint, RelationshipMultiplicity,
};
pub use builder::EdmModelBuilder;
pub use container::{AssociationSet, EntityContainer, EntitySet};
pub use types::{
    ComplexType, EdmProperty, EdmTypeRef, EntityType, NavigationProperty, PrimitiveKind, RowType,
    TypeUsage,
};

use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoEnumIterator};

pub use crate::metadata::token::NodeId;
use crate::Result;

/// The data space a model describes.
///
/// Some naming and structural rules differ between the conceptual model and the store model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum DataSpace {
    /// The conceptual (CSDL) model
    Conceptual,
    /// The store (SSDL) model
    Store,
}

impl DataSpace {
    /// Returns true for the conceptual space
    #[must_use]
    pub fn is_conceptual(self) -> bool {
        self == DataSpace::Conceptual
    }
}

/// The closed set of node kinds in a metadata graph.
///
/// The discriminant is the tag stored in the high byte of a [`NodeId`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount, AsRefStr,
)]
#[repr(u8)]
pub enum MetadataKind {
    /// An entity type
    EntityType = 0x01,
    /// A complex type
    ComplexType = 0x02,
    /// An anonymous row type
    RowType = 0x03,
    /// A structural property
    Property = 0x04,
    /// A navigation property
    NavigationProperty = 0x05,
    /// An association type
    AssociationType = 0x06,
    /// An association end member
    AssociationEnd = 0x07,
    /// A referential constraint of an association
    ReferentialConstraint = 0x08,
    /// An entity container
    EntityContainer = 0x09,
    /// An entity set
    EntitySet = 0x0A,
    /// An association set
    AssociationSet = 0x0B,
    /// A type usage
    TypeUsage = 0x0C,
}

impl MetadataKind {
    /// Returns the tag of this kind
    #[must_use]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Looks up the kind for a tag
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<Self> {
        MetadataKind::iter().find(|kind| kind.tag() == tag)
    }

    /// Returns true if nodes of this kind carry a name
    #[must_use]
    pub fn is_named(self) -> bool {
        !matches!(
            self,
            MetadataKind::ReferentialConstraint | MetadataKind::TypeUsage
        )
    }

    /// Returns true for the structurally anonymous row type
    #[must_use]
    pub fn is_row_type(self) -> bool {
        self == MetadataKind::RowType
    }

    /// Returns true for kinds that declare structural properties
    #[must_use]
    pub fn is_structural_type(self) -> bool {
        matches!(
            self,
            MetadataKind::EntityType | MetadataKind::ComplexType | MetadataKind::RowType
        )
    }
}

/// Read access to a node that carries a name.
pub trait NamedItem {
    /// The id of the node
    fn id(&self) -> NodeId;

    /// The name of the node, possibly empty
    fn name(&self) -> &str;

    /// The kind of the node
    fn kind(&self) -> MetadataKind;

    /// Returns true if the node is a row type, exempt from the length and dot checks
    fn is_row_type(&self) -> bool {
        self.kind().is_row_type()
    }
}

macro_rules! impl_named_item {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl NamedItem for $ty {
                fn id(&self) -> NodeId {
                    self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }

                fn kind(&self) -> MetadataKind {
                    MetadataKind::$kind
                }
            }
        )*
    };
}

impl_named_item!(
    EntityType => EntityType,
    ComplexType => ComplexType,
    RowType => RowType,
    EdmProperty => Property,
    NavigationProperty => NavigationProperty,
    AssociationType => AssociationType,
    AssociationEndMember => AssociationEnd,
    EntityContainer => EntityContainer,
    EntitySet => EntitySet,
    AssociationSet => AssociationSet,
);

/// A node of the metadata graph.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataNode {
    /// An entity type
    EntityType(EntityType),
    /// A complex type
    ComplexType(ComplexType),
    /// An anonymous row type
    RowType(RowType),
    /// A structural property
    Property(EdmProperty),
    /// A navigation property
    NavigationProperty(NavigationProperty),
    /// An association type
    AssociationType(AssociationType),
    /// An association end member
    AssociationEnd(AssociationEndMember),
    /// A referential constraint
    ReferentialConstraint(ReferentialConstraint),
    /// An entity container
    EntityContainer(EntityContainer),
    /// An entity set
    EntitySet(EntitySet),
    /// An association set
    AssociationSet(AssociationSet),
    /// A type usage
    TypeUsage(TypeUsage),
}

impl MetadataNode {
    /// The kind of this node
    #[must_use]
    pub fn kind(&self) -> MetadataKind {
        match self {
            MetadataNode::EntityType(_) => MetadataKind::EntityType,
            MetadataNode::ComplexType(_) => MetadataKind::ComplexType,
            MetadataNode::RowType(_) => MetadataKind::RowType,
            MetadataNode::Property(_) => MetadataKind::Property,
            MetadataNode::NavigationProperty(_) => MetadataKind::NavigationProperty,
            MetadataNode::AssociationType(_) => MetadataKind::AssociationType,
            MetadataNode::AssociationEnd(_) => MetadataKind::AssociationEnd,
            MetadataNode::ReferentialConstraint(_) => MetadataKind::ReferentialConstraint,
            MetadataNode::EntityContainer(_) => MetadataKind::EntityContainer,
            MetadataNode::EntitySet(_) => MetadataKind::EntitySet,
            MetadataNode::AssociationSet(_) => MetadataKind::AssociationSet,
            MetadataNode::TypeUsage(_) => MetadataKind::TypeUsage,
        }
    }

    /// The id of this node
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            MetadataNode::EntityType(node) => node.id,
            MetadataNode::ComplexType(node) => node.id,
            MetadataNode::RowType(node) => node.id,
            MetadataNode::Property(node) => node.id,
            MetadataNode::NavigationProperty(node) => node.id,
            MetadataNode::AssociationType(node) => node.id,
            MetadataNode::AssociationEnd(node) => node.id,
            MetadataNode::ReferentialConstraint(node) => node.id,
            MetadataNode::EntityContainer(node) => node.id,
            MetadataNode::EntitySet(node) => node.id,
            MetadataNode::AssociationSet(node) => node.id,
            MetadataNode::TypeUsage(node) => node.id,
        }
    }

    /// Returns the node as a named item, `None` for kinds without a name
    #[must_use]
    pub fn as_named(&self) -> Option<&dyn NamedItem> {
        match self {
            MetadataNode::EntityType(node) => Some(node),
            MetadataNode::ComplexType(node) => Some(node),
            MetadataNode::RowType(node) => Some(node),
            MetadataNode::Property(node) => Some(node),
            MetadataNode::NavigationProperty(node) => Some(node),
            MetadataNode::AssociationType(node) => Some(node),
            MetadataNode::AssociationEnd(node) => Some(node),
            MetadataNode::EntityContainer(node) => Some(node),
            MetadataNode::EntitySet(node) => Some(node),
            MetadataNode::AssociationSet(node) => Some(node),
            MetadataNode::ReferentialConstraint(_) | MetadataNode::TypeUsage(_) => None,
        }
    }

    /// The name of this node, `None` for kinds without a name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.as_named().map(NamedItem::name)
    }
}

/// An immutable Entity Data Model.
///
/// Nodes are stored in insertion order; that order is the order in which the validation engine
/// visits them and therefore the order of the reported findings.
#[derive(Debug, Clone, PartialEq)]
pub struct EdmModel {
    data_space: DataSpace,
    nodes: Vec<MetadataNode>,
}

impl EdmModel {
    pub(crate) fn from_parts(data_space: DataSpace, nodes: Vec<MetadataNode>) -> Self {
        Self { data_space, nodes }
    }

    /// The data space this model describes
    #[must_use]
    pub fn data_space(&self) -> DataSpace {
        self.data_space
    }

    /// Number of nodes in the model
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the model has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order
    #[must_use]
    pub fn nodes(&self) -> &[MetadataNode] {
        &self.nodes
    }

    /// Iterates over the nodes of one kind, in insertion order
    pub fn nodes_of_kind(&self, kind: MetadataKind) -> impl Iterator<Item = &MetadataNode> {
        self.nodes.iter().filter(move |node| node.kind() == kind)
    }

    /// Looks up a node, `None` if the id does not refer to a node of this model
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&MetadataNode> {
        let row = id.row() as usize;
        if row == 0 {
            return None;
        }

        self.nodes
            .get(row - 1)
            .filter(|node| Some(node.kind()) == id.kind())
    }

    /// Looks up a node
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NodeNotFound`] if the id does not refer to a node of this model.
    pub fn node(&self, id: NodeId) -> Result<&MetadataNode> {
        self.get(id).ok_or(crate::Error::NodeNotFound(id))
    }

    /// Returns true if the id refers to a node of this model
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Looks up an entity type
    #[must_use]
    pub fn entity_type(&self, id: NodeId) -> Option<&EntityType> {
        match self.get(id)? {
            MetadataNode::EntityType(node) => Some(node),
            _ => None,
        }
    }

    /// Looks up a complex type
    #[must_use]
    pub fn complex_type(&self, id: NodeId) -> Option<&ComplexType> {
        match self.get(id)? {
            MetadataNode::ComplexType(node) => Some(node),
            _ => None,
        }
    }

    /// Looks up a row type
    #[must_use]
    pub fn row_type(&self, id: NodeId) -> Option<&RowType> {
        match self.get(id)? {
            MetadataNode::RowType(node) => Some(node),
            _ => None,
        }
    }

    /// Looks up a structural property
    #[must_use]
    pub fn property(&self, id: NodeId) -> Option<&EdmProperty> {
        match self.get(id)? {
            MetadataNode::Property(node) => Some(node),
            _ => None,
        }
    }

    /// Looks up an association end member
    #[must_use]
    pub fn association_end(&self, id: NodeId) -> Option<&AssociationEndMember> {
        match self.get(id)? {
            MetadataNode::AssociationEnd(node) => Some(node),
            _ => None,
        }
    }

    /// Looks up a type usage
    #[must_use]
    pub fn type_usage(&self, id: NodeId) -> Option<&TypeUsage> {
        match self.get(id)? {
            MetadataNode::TypeUsage(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the properties declared by a structural type, empty for any other node
    #[must_use]
    pub fn declared_properties(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(MetadataNode::EntityType(node)) => &node.properties,
            Some(MetadataNode::ComplexType(node)) => &node.properties,
            Some(MetadataNode::RowType(node)) => &node.properties,
            _ => &[],
        }
    }

    /// Returns the constituent type usages of a type usage.
    ///
    /// A collection usage is composed of its element usage; a row or complex usage is composed
    /// of the usages of the type's properties, in declaration order. Primitive, entity and
    /// reference usages have no constituents.
    #[must_use]
    pub fn type_usage_components(&self, usage: &TypeUsage) -> Vec<NodeId> {
        match usage.edm_type {
            Some(EdmTypeRef::Collection(element)) => vec![element],
            Some(EdmTypeRef::Row(id) | EdmTypeRef::Complex(id)) => self
                .declared_properties(id)
                .iter()
                .filter_map(|property| self.property(*property)?.type_usage)
                .collect(),
            Some(EdmTypeRef::Primitive(_) | EdmTypeRef::Entity(_) | EdmTypeRef::Ref(_)) | None => {
                Vec::new()
            }
        }
    }
}
