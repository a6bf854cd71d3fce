//! Incremental construction of an [`EdmModel`].
//!
//! The builder hands out a [`NodeId`] for every node it adds, so callers wire references
//! together as they go. Optional references may be left as `None`, which is exactly the state
//! the validation rules report. Populated references are checked once, in
//! [`EdmModelBuilder::build`]: a reference to an id that is not part of the model, or to a node
//! of the wrong kind, is a construction error and not a validation finding.
//!
//! # Examples
//!
//! ```rust
//! use edmscope::metadata::model::{
//!     DataSpace, EdmModelBuilder, EdmTypeRef, RelationshipMultiplicity,
//! };
//!
//! let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
//! let customer = builder.entity_type("Customer", "Shop");
//! let order = builder.entity_type("Order", "Shop");
//!
//! let customer_ref = builder.type_usage(Some(EdmTypeRef::Ref(customer)));
//! let order_ref = builder.type_usage(Some(EdmTypeRef::Ref(order)));
//! let source = builder.association_end("Customer", Some(customer_ref), RelationshipMultiplicity::One);
//! let target = builder.association_end("Orders", Some(order_ref), RelationshipMultiplicity::Many);
//! let association = builder.association_type("CustomerOrders", "Shop", Some(source), Some(target));
//! builder.navigation_property(customer, "Orders", Some(association), Some(target));
//!
//! let model = builder.build()?;
//! assert_eq!(model.len(), 8);
//! # Ok::<(), edmscope::Error>(())
//! ```

use crate::{
    metadata::{
        model::{
            AssociationEndMember, AssociationSet, AssociationType, ComplexType, DataSpace,
            EdmModel, EdmProperty, EdmTypeRef, EntityContainer, EntitySet, EntityType,
            MetadataKind, MetadataNode, NavigationProperty, ReferentialConstraint,
            RelationshipMultiplicity, RowType, TypeUsage,
        },
        token::NodeId,
    },
    Error, Result,
};

/// Builder for [`EdmModel`]s.
///
/// Structural problems found while adding nodes (for example attaching a property to a node
/// that cannot declare properties) are remembered and reported by [`EdmModelBuilder::build`],
/// so the adding methods stay infallible and can be chained freely.
#[derive(Debug)]
pub struct EdmModelBuilder {
    data_space: DataSpace,
    nodes: Vec<MetadataNode>,
    deferred: Option<Error>,
}

impl EdmModelBuilder {
    /// Creates an empty builder for a model in the given data space
    #[must_use]
    pub fn new(data_space: DataSpace) -> Self {
        Self {
            data_space,
            nodes: Vec::new(),
            deferred: None,
        }
    }

    /// Number of nodes added so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been added yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds an entity type
    pub fn entity_type(&mut self, name: &str, namespace: &str) -> NodeId {
        self.push(MetadataKind::EntityType, |id| {
            MetadataNode::EntityType(EntityType {
                id,
                name: name.to_string(),
                namespace: namespace.to_string(),
                base_type: None,
                is_abstract: false,
                key_members: Vec::new(),
                properties: Vec::new(),
                navigation_properties: Vec::new(),
            })
        })
    }

    /// Sets the base type of an entity type
    pub fn set_base_type(&mut self, entity: NodeId, base_type: NodeId) {
        match node_as_mut!(self.nodes, entity, EntityType) {
            Some(node) => node.base_type = Some(base_type),
            None => self.defer_missing(entity, MetadataKind::EntityType),
        }
    }

    /// Marks a declared property of an entity type as key member
    pub fn add_key_member(&mut self, entity: NodeId, property: NodeId) {
        match node_as_mut!(self.nodes, entity, EntityType) {
            Some(node) => node.key_members.push(property),
            None => self.defer_missing(entity, MetadataKind::EntityType),
        }
    }

    /// Adds a complex type
    pub fn complex_type(&mut self, name: &str, namespace: &str) -> NodeId {
        self.push(MetadataKind::ComplexType, |id| {
            MetadataNode::ComplexType(ComplexType {
                id,
                name: name.to_string(),
                namespace: namespace.to_string(),
                properties: Vec::new(),
            })
        })
    }

    /// Adds an anonymous row type
    pub fn row_type(&mut self, name: &str) -> NodeId {
        self.push(MetadataKind::RowType, |id| {
            MetadataNode::RowType(RowType {
                id,
                name: name.to_string(),
                properties: Vec::new(),
            })
        })
    }

    /// Adds a structural property and declares it on `owner`.
    ///
    /// The owner must be an entity, complex or row type added earlier.
    pub fn property(&mut self, owner: NodeId, name: &str, type_usage: Option<NodeId>) -> NodeId {
        let id = self.push(MetadataKind::Property, |id| {
            MetadataNode::Property(EdmProperty {
                id,
                name: name.to_string(),
                declaring_type: owner,
                type_usage,
            })
        });

        let declared = match owner.kind() {
            Some(MetadataKind::EntityType) => node_as_mut!(self.nodes, owner, EntityType)
                .map(|node| node.properties.push(id))
                .is_some(),
            Some(MetadataKind::ComplexType) => node_as_mut!(self.nodes, owner, ComplexType)
                .map(|node| node.properties.push(id))
                .is_some(),
            Some(MetadataKind::RowType) => node_as_mut!(self.nodes, owner, RowType)
                .map(|node| node.properties.push(id))
                .is_some(),
            _ => false,
        };
        if !declared {
            self.defer_missing(owner, MetadataKind::EntityType);
        }

        id
    }

    /// Adds a navigation property and declares it on the entity type `owner`
    pub fn navigation_property(
        &mut self,
        owner: NodeId,
        name: &str,
        association: Option<NodeId>,
        to_end_member: Option<NodeId>,
    ) -> NodeId {
        let id = self.push(MetadataKind::NavigationProperty, |id| {
            MetadataNode::NavigationProperty(NavigationProperty {
                id,
                name: name.to_string(),
                declaring_type: owner,
                association,
                to_end_member,
            })
        });

        match node_as_mut!(self.nodes, owner, EntityType) {
            Some(node) => node.navigation_properties.push(id),
            None => self.defer_missing(owner, MetadataKind::EntityType),
        }

        id
    }

    /// Adds a nullable type usage describing `edm_type`
    pub fn type_usage(&mut self, edm_type: Option<EdmTypeRef>) -> NodeId {
        self.push(MetadataKind::TypeUsage, |id| {
            MetadataNode::TypeUsage(TypeUsage {
                id,
                edm_type,
                nullable: true,
            })
        })
    }

    /// Replaces the described type of a type usage added earlier.
    ///
    /// This is how a usage that refers to itself, directly or through other usages, is wired.
    pub fn set_usage_type(&mut self, usage: NodeId, edm_type: Option<EdmTypeRef>) {
        match node_as_mut!(self.nodes, usage, TypeUsage) {
            Some(node) => node.edm_type = edm_type,
            None => self.defer_missing(usage, MetadataKind::TypeUsage),
        }
    }

    /// Sets whether a type usage is nullable
    pub fn set_nullable(&mut self, usage: NodeId, nullable: bool) {
        match node_as_mut!(self.nodes, usage, TypeUsage) {
            Some(node) => node.nullable = nullable,
            None => self.defer_missing(usage, MetadataKind::TypeUsage),
        }
    }

    /// Adds an association end member
    pub fn association_end(
        &mut self,
        name: &str,
        type_usage: Option<NodeId>,
        multiplicity: RelationshipMultiplicity,
    ) -> NodeId {
        self.push(MetadataKind::AssociationEnd, |id| {
            MetadataNode::AssociationEnd(AssociationEndMember {
                id,
                name: name.to_string(),
                type_usage,
                multiplicity,
            })
        })
    }

    /// Adds an association type over two end members added earlier
    pub fn association_type(
        &mut self,
        name: &str,
        namespace: &str,
        source_end: Option<NodeId>,
        target_end: Option<NodeId>,
    ) -> NodeId {
        self.push(MetadataKind::AssociationType, |id| {
            MetadataNode::AssociationType(AssociationType {
                id,
                name: name.to_string(),
                namespace: namespace.to_string(),
                source_end,
                target_end,
                constraints: Vec::new(),
            })
        })
    }

    /// Adds a referential constraint and declares it on `association`
    pub fn referential_constraint(
        &mut self,
        association: NodeId,
        from_role: Option<NodeId>,
        from_properties: Vec<NodeId>,
        to_role: Option<NodeId>,
        to_properties: Option<Vec<NodeId>>,
    ) -> NodeId {
        let id = self.push(MetadataKind::ReferentialConstraint, |id| {
            MetadataNode::ReferentialConstraint(ReferentialConstraint {
                id,
                association,
                from_role,
                from_properties,
                to_role,
                to_properties,
            })
        });

        match node_as_mut!(self.nodes, association, AssociationType) {
            Some(node) => node.constraints.push(id),
            None => self.defer_missing(association, MetadataKind::AssociationType),
        }

        id
    }

    /// Adds an entity set
    pub fn entity_set(&mut self, name: &str, element_type: Option<NodeId>) -> NodeId {
        self.push(MetadataKind::EntitySet, |id| {
            MetadataNode::EntitySet(EntitySet {
                id,
                name: name.to_string(),
                element_type,
            })
        })
    }

    /// Adds an association set
    pub fn association_set(
        &mut self,
        name: &str,
        element_type: Option<NodeId>,
        source_set: Option<NodeId>,
        target_set: Option<NodeId>,
    ) -> NodeId {
        self.push(MetadataKind::AssociationSet, |id| {
            MetadataNode::AssociationSet(AssociationSet {
                id,
                name: name.to_string(),
                element_type,
                source_set,
                target_set,
            })
        })
    }

    /// Adds an entity container holding the given entity and association sets
    pub fn entity_container(&mut self, name: &str, sets: Vec<NodeId>) -> NodeId {
        self.push(MetadataKind::EntityContainer, |id| {
            MetadataNode::EntityContainer(EntityContainer {
                id,
                name: name.to_string(),
                base_entity_sets: sets,
            })
        })
    }

    /// Verifies every populated reference and produces the model.
    ///
    /// # Errors
    ///
    /// Returns the first problem remembered while adding nodes, otherwise:
    /// - [`Error::KindMismatch`] if a reference points at a node of the wrong kind
    /// - [`Error::DanglingReference`] if a reference points at an id that is not in the model
    pub fn build(self) -> Result<EdmModel> {
        if let Some(error) = self.deferred {
            return Err(error);
        }

        let model = EdmModel::from_parts(self.data_space, self.nodes);
        for node in model.nodes() {
            for (target, allowed) in references(node) {
                check_reference(&model, node.id(), target, allowed)?;
            }
        }

        tracing::debug!(
            "built {} model with {} nodes",
            model.data_space(),
            model.len()
        );

        Ok(model)
    }

    fn push(&mut self, kind: MetadataKind, make: impl FnOnce(NodeId) -> MetadataNode) -> NodeId {
        let row = self.nodes.len() + 1;
        if row > NodeId::MAX_ROW as usize {
            if self.deferred.is_none() {
                self.deferred = Some(malformed_error!(
                    "model exceeds {} nodes while adding a {}",
                    NodeId::MAX_ROW,
                    kind
                ));
            }
            return NodeId::NULL;
        }

        // The bound above keeps the row within 24 bits.
        #[allow(clippy::cast_possible_truncation)]
        let id = NodeId::new(kind, row as u32);
        self.nodes.push(make(id));
        id
    }

    fn defer_missing(&mut self, id: NodeId, expected: MetadataKind) {
        if self.deferred.is_some() {
            return;
        }

        let found = (id.row() as usize)
            .checked_sub(1)
            .and_then(|index| self.nodes.get(index))
            .map(MetadataNode::kind)
            .filter(|kind| Some(*kind) == id.kind());

        self.deferred = Some(match found {
            Some(found) => Error::KindMismatch {
                id,
                expected,
                found,
            },
            None => Error::NodeNotFound(id),
        });
    }
}

const ENTITY_TYPE: &[MetadataKind] = &[MetadataKind::EntityType];
const COMPLEX_TYPE: &[MetadataKind] = &[MetadataKind::ComplexType];
const ROW_TYPE: &[MetadataKind] = &[MetadataKind::RowType];
const STRUCTURAL_TYPE: &[MetadataKind] = &[
    MetadataKind::EntityType,
    MetadataKind::ComplexType,
    MetadataKind::RowType,
];
const PROPERTY: &[MetadataKind] = &[MetadataKind::Property];
const NAVIGATION_PROPERTY: &[MetadataKind] = &[MetadataKind::NavigationProperty];
const ASSOCIATION_TYPE: &[MetadataKind] = &[MetadataKind::AssociationType];
const ASSOCIATION_END: &[MetadataKind] = &[MetadataKind::AssociationEnd];
const REFERENTIAL_CONSTRAINT: &[MetadataKind] = &[MetadataKind::ReferentialConstraint];
const ENTITY_SET: &[MetadataKind] = &[MetadataKind::EntitySet];
const BASE_ENTITY_SET: &[MetadataKind] = &[MetadataKind::EntitySet, MetadataKind::AssociationSet];
const TYPE_USAGE: &[MetadataKind] = &[MetadataKind::TypeUsage];

/// Collects every populated reference of a node together with the kinds it may point at
fn references(node: &MetadataNode) -> Vec<(NodeId, &'static [MetadataKind])> {
    let mut refs = Vec::new();

    match node {
        MetadataNode::EntityType(entity) => {
            refs.extend(entity.base_type.map(|id| (id, ENTITY_TYPE)));
            refs.extend(entity.key_members.iter().map(|id| (*id, PROPERTY)));
            refs.extend(entity.properties.iter().map(|id| (*id, PROPERTY)));
            refs.extend(
                entity
                    .navigation_properties
                    .iter()
                    .map(|id| (*id, NAVIGATION_PROPERTY)),
            );
        }
        MetadataNode::ComplexType(complex) => {
            refs.extend(complex.properties.iter().map(|id| (*id, PROPERTY)));
        }
        MetadataNode::RowType(row) => {
            refs.extend(row.properties.iter().map(|id| (*id, PROPERTY)));
        }
        MetadataNode::Property(property) => {
            refs.push((property.declaring_type, STRUCTURAL_TYPE));
            refs.extend(property.type_usage.map(|id| (id, TYPE_USAGE)));
        }
        MetadataNode::NavigationProperty(navigation) => {
            refs.push((navigation.declaring_type, ENTITY_TYPE));
            refs.extend(navigation.association.map(|id| (id, ASSOCIATION_TYPE)));
            refs.extend(navigation.to_end_member.map(|id| (id, ASSOCIATION_END)));
        }
        MetadataNode::AssociationType(association) => {
            refs.extend(association.ends().map(|id| (id, ASSOCIATION_END)));
            refs.extend(
                association
                    .constraints
                    .iter()
                    .map(|id| (*id, REFERENTIAL_CONSTRAINT)),
            );
        }
        MetadataNode::AssociationEnd(end) => {
            refs.extend(end.type_usage.map(|id| (id, TYPE_USAGE)));
        }
        MetadataNode::ReferentialConstraint(constraint) => {
            refs.push((constraint.association, ASSOCIATION_TYPE));
            refs.extend(constraint.from_role.map(|id| (id, ASSOCIATION_END)));
            refs.extend(constraint.to_role.map(|id| (id, ASSOCIATION_END)));
            refs.extend(constraint.from_properties.iter().map(|id| (*id, PROPERTY)));
            if let Some(properties) = &constraint.to_properties {
                refs.extend(properties.iter().map(|id| (*id, PROPERTY)));
            }
        }
        MetadataNode::EntityContainer(container) => {
            refs.extend(
                container
                    .base_entity_sets
                    .iter()
                    .map(|id| (*id, BASE_ENTITY_SET)),
            );
        }
        MetadataNode::EntitySet(set) => {
            refs.extend(set.element_type.map(|id| (id, ENTITY_TYPE)));
        }
        MetadataNode::AssociationSet(set) => {
            refs.extend(set.element_type.map(|id| (id, ASSOCIATION_TYPE)));
            refs.extend(set.source_set.map(|id| (id, ENTITY_SET)));
            refs.extend(set.target_set.map(|id| (id, ENTITY_SET)));
        }
        MetadataNode::TypeUsage(usage) => match usage.edm_type {
            Some(EdmTypeRef::Entity(id) | EdmTypeRef::Ref(id)) => refs.push((id, ENTITY_TYPE)),
            Some(EdmTypeRef::Complex(id)) => refs.push((id, COMPLEX_TYPE)),
            Some(EdmTypeRef::Row(id)) => refs.push((id, ROW_TYPE)),
            Some(EdmTypeRef::Collection(id)) => refs.push((id, TYPE_USAGE)),
            Some(EdmTypeRef::Primitive(_)) | None => {}
        },
    }

    refs
}

fn check_reference(
    model: &EdmModel,
    from: NodeId,
    target: NodeId,
    allowed: &[MetadataKind],
) -> Result<()> {
    let Some(kind) = target.kind() else {
        return Err(Error::DanglingReference { from, to: target });
    };

    if !allowed.contains(&kind) {
        return Err(Error::KindMismatch {
            id: target,
            expected: allowed[0],
            found: kind,
        });
    }

    if !model.contains(target) {
        return Err(Error::DanglingReference { from, to: target });
    }

    Ok(())
}
