//! Factories for type usage graphs of every shape the cycle-safe check distinguishes.
//!
//! Each factory returns the model together with the top-level usage to check.

use crate::metadata::{
    model::{DataSpace, EdmModel, EdmModelBuilder, EdmTypeRef, PrimitiveKind},
    token::NodeId,
};

/// A collection of a complex type with two primitive properties: no cycle, nothing shared
pub fn acyclic_usage() -> (EdmModel, NodeId) {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let address = builder.complex_type("Address", "Shop");
    let street = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::String)));
    let zip = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::Int32)));
    builder.property(address, "Street", Some(street));
    builder.property(address, "Zip", Some(zip));

    let element = builder.type_usage(Some(EdmTypeRef::Complex(address)));
    let root = builder.type_usage(Some(EdmTypeRef::Collection(element)));

    (builder.build().unwrap(), root)
}

/// A collection usage whose element usage is the usage itself
pub fn self_referencing_usage() -> (EdmModel, NodeId) {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let root = builder.type_usage(None);
    builder.set_usage_type(root, Some(EdmTypeRef::Collection(root)));

    (builder.build().unwrap(), root)
}

/// A complex type whose `Children` property is a collection of the complex type itself
pub fn mutual_cycle_usage() -> (EdmModel, NodeId) {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let tree = builder.complex_type("Tree", "Shop");
    let root = builder.type_usage(Some(EdmTypeRef::Complex(tree)));
    let children = builder.type_usage(Some(EdmTypeRef::Collection(root)));
    builder.property(tree, "Children", Some(children));

    (builder.build().unwrap(), root)
}

/// A row type whose two properties both use the same primitive usage: shared, but acyclic
pub fn diamond_usage() -> (EdmModel, NodeId) {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let shared = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::Decimal)));
    let left = builder.type_usage(Some(EdmTypeRef::Collection(shared)));
    let right = builder.type_usage(Some(EdmTypeRef::Collection(shared)));

    let pair = builder.row_type("Pair");
    builder.property(pair, "Left", Some(left));
    builder.property(pair, "Right", Some(right));
    let root = builder.type_usage(Some(EdmTypeRef::Row(pair)));

    (builder.build().unwrap(), root)
}
