//! Associations, their end members and referential constraints.

use strum::{AsRefStr, Display, EnumIter};

use crate::metadata::{model::EdmModel, token::NodeId};

/// Multiplicity of an association end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum RelationshipMultiplicity {
    /// `0..1`
    #[strum(serialize = "0..1")]
    ZeroOrOne,
    /// `1`
    #[strum(serialize = "1")]
    One,
    /// `*`
    #[strum(serialize = "*")]
    Many,
}

/// An association between two entity types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationType {
    /// Id of this node
    pub id: NodeId,
    /// Name of the association
    pub name: String,
    /// Namespace of the association
    pub namespace: String,
    /// The source end member
    pub source_end: Option<NodeId>,
    /// The target end member
    pub target_end: Option<NodeId>,
    /// Referential constraints declared on this association
    pub constraints: Vec<NodeId>,
}

impl AssociationType {
    /// Returns the end members that are present, source first
    pub fn ends(&self) -> impl Iterator<Item = NodeId> {
        self.source_end.into_iter().chain(self.target_end)
    }
}

/// One end of an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationEndMember {
    /// Id of this node
    pub id: NodeId,
    /// Role name of the end
    pub name: String,
    /// Type usage of the end, normally a reference to an entity type
    pub type_usage: Option<NodeId>,
    /// Multiplicity of the end
    pub multiplicity: RelationshipMultiplicity,
}

impl AssociationEndMember {
    /// Resolves the entity type of this end through its type usage.
    ///
    /// Returns `None` if the end has no type usage, the usage has no type, or the type is not an
    /// entity or a reference to an entity.
    #[must_use]
    pub fn entity_type(&self, model: &EdmModel) -> Option<NodeId> {
        let usage = model.type_usage(self.type_usage?)?;
        let entity = usage.edm_type?.entity_type()?;
        model.entity_type(entity).map(|entity| entity.id)
    }
}

/// A referential constraint between the principal and the dependent end of an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferentialConstraint {
    /// Id of this node
    pub id: NodeId,
    /// The association declaring this constraint
    pub association: NodeId,
    /// The principal end
    pub from_role: Option<NodeId>,
    /// The principal properties
    pub from_properties: Vec<NodeId>,
    /// The dependent end
    pub to_role: Option<NodeId>,
    /// The dependent properties, in order
    pub to_properties: Option<Vec<NodeId>>,
}
