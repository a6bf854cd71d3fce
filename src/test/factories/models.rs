//! Factories for complete models.

use crate::metadata::{
    model::{
        DataSpace, EdmModel, EdmModelBuilder, EdmTypeRef, PrimitiveKind, RelationshipMultiplicity,
    },
    token::NodeId,
};

/// Ids of the interesting nodes of the shop model
#[derive(Debug, Clone, Copy)]
pub struct ShopIds {
    pub customer_end: NodeId,
    pub order_end: NodeId,
    pub association: NodeId,
    pub constraint: NodeId,
    pub orders_navigation: NodeId,
    pub association_set: NodeId,
}

/// A small customer/order model without any defect, valid in either data space
pub fn shop_model(space: DataSpace) -> (EdmModel, ShopIds) {
    let mut builder = EdmModelBuilder::new(space);

    let int32 = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::Int32)));
    let string = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::String)));
    let city = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::String)));

    let address = builder.complex_type("Address", "Shop");
    builder.property(address, "City", Some(city));
    let address_usage = builder.type_usage(Some(EdmTypeRef::Complex(address)));

    let customer = builder.entity_type("Customer", "Shop");
    let customer_id = builder.property(customer, "Id", Some(int32));
    builder.add_key_member(customer, customer_id);
    builder.property(customer, "Name", Some(string));
    builder.property(customer, "Address", Some(address_usage));

    let order_id_usage = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::Int32)));
    let order_customer_usage =
        builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::Int32)));
    let order = builder.entity_type("Order", "Shop");
    let order_id = builder.property(order, "Id", Some(order_id_usage));
    builder.add_key_member(order, order_id);
    let order_customer = builder.property(order, "CustomerId", Some(order_customer_usage));

    let customer_ref = builder.type_usage(Some(EdmTypeRef::Ref(customer)));
    let order_ref = builder.type_usage(Some(EdmTypeRef::Ref(order)));
    let customer_end =
        builder.association_end("Customer", Some(customer_ref), RelationshipMultiplicity::One);
    let order_end =
        builder.association_end("Orders", Some(order_ref), RelationshipMultiplicity::Many);
    let association = builder.association_type(
        "CustomerOrders",
        "Shop",
        Some(customer_end),
        Some(order_end),
    );
    let constraint = builder.referential_constraint(
        association,
        Some(customer_end),
        vec![customer_id],
        Some(order_end),
        Some(vec![order_customer]),
    );
    let orders_navigation =
        builder.navigation_property(customer, "Orders", Some(association), Some(order_end));
    builder.navigation_property(order, "Customer", Some(association), Some(customer_end));

    let customers_set = builder.entity_set("Customers", Some(customer));
    let orders_set = builder.entity_set("Orders", Some(order));
    let association_set = builder.association_set(
        "CustomerOrders",
        Some(association),
        Some(customers_set),
        Some(orders_set),
    );
    builder.entity_container(
        "ShopContainer",
        vec![customers_set, orders_set, association_set],
    );

    let ids = ShopIds {
        customer_end,
        order_end,
        association,
        constraint,
        orders_navigation,
        association_set,
    };

    (builder.build().unwrap(), ids)
}
