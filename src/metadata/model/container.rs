//! Entity containers and the sets they hold.

use crate::metadata::token::NodeId;

/// An entity container grouping entity and association sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityContainer {
    /// Id of this node
    pub id: NodeId,
    /// Name of the container
    pub name: String,
    /// Entity and association sets of the container
    pub base_entity_sets: Vec<NodeId>,
}

/// A set of entities of one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
    /// Id of this node
    pub id: NodeId,
    /// Name of the set
    pub name: String,
    /// The entity type of the elements
    pub element_type: Option<NodeId>,
}

/// A set of associations of one association type.
///
/// The source and target sets are bindings of the association ends to entity sets. They are
/// required in the conceptual space and may be omitted in the store space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationSet {
    /// Id of this node
    pub id: NodeId,
    /// Name of the set
    pub name: String,
    /// The association type of the elements
    pub element_type: Option<NodeId>,
    /// Entity set bound to the source end
    pub source_set: Option<NodeId>,
    /// Entity set bound to the target end
    pub target_set: Option<NodeId>,
}
