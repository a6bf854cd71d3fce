//! Integration tests for the syntactic rule battery.
//!
//! Every test builds a model through the public builder, validates it with the standard
//! battery and inspects the report. Models are kept minimal so that each test observes exactly
//! the findings of the rule under test.

use edmscope::metadata::validation::{is_type_usage_valid, ErrorMessage};
use edmscope::prelude::*;

fn validate_in(model: &EdmModel, space: DataSpace) -> ValidationReport {
    ValidationEngine::new(syntactic_rules(), ValidationConfig::default()).validate_in(model, space)
}

fn kinds_on(report: &ValidationReport, node: NodeId) -> Vec<ErrorKind> {
    report.errors_for(node).map(ValidationError::kind).collect()
}

fn slots_on(report: &ValidationReport, node: NodeId) -> Vec<Option<Slot>> {
    report.errors_for(node).map(|error| error.slot).collect()
}

/// An entity type in the `Shop` namespace
fn entity_named(builder: &mut EdmModelBuilder, name: &str) -> NodeId {
    builder.entity_type(name, "Shop")
}

/// A model with one node of every named kind, all carrying `name`
fn every_named_kind(name: &str) -> Result<(EdmModel, Vec<NodeId>)> {
    let mut builder = EdmModelBuilder::new(DataSpace::Store);

    let entity = entity_named(&mut builder, name);
    let complex = builder.complex_type(name, "Shop");
    let int32 = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::Int32)));
    let property = builder.property(entity, name, Some(int32));
    let reference = builder.type_usage(Some(EdmTypeRef::Ref(entity)));
    let source = builder.association_end(name, Some(reference), RelationshipMultiplicity::One);
    let target = builder.association_end("Target", Some(reference), RelationshipMultiplicity::Many);
    let association = builder.association_type(name, "Shop", Some(source), Some(target));
    let navigation = builder.navigation_property(entity, name, Some(association), Some(target));
    let set = builder.entity_set(name, Some(entity));
    let other = builder.entity_set("Other", Some(entity));
    let association_set = builder.association_set(name, Some(association), Some(set), Some(other));
    let container = builder.entity_container(name, vec![set, other, association_set]);

    let ids = vec![
        entity,
        complex,
        property,
        source,
        association,
        navigation,
        set,
        association_set,
        container,
    ];
    Ok((builder.build()?, ids))
}

#[test]
fn blank_names_yield_exactly_one_missing_name() -> Result<()> {
    for name in ["", "   ", "\t"] {
        let (model, ids) = every_named_kind(name)?;
        for space in [DataSpace::Conceptual, DataSpace::Store] {
            let report = validate_in(&model, space);
            for id in &ids {
                assert_eq!(
                    kinds_on(&report, *id),
                    vec![ErrorKind::MissingName],
                    "{id:?} named {name:?} in {space}"
                );
                assert_eq!(slots_on(&report, *id), vec![Some(Slot::Name)]);
            }
            assert_eq!(report.count(ErrorKind::MissingName), ids.len());
        }
    }
    Ok(())
}

#[test]
fn names_longer_than_480_characters() -> Result<()> {
    let (model, ids) = every_named_kind(&"x".repeat(480))?;
    assert!(validate_in(&model, DataSpace::Conceptual).is_valid());

    let name = "x".repeat(481);
    let (model, ids_over) = every_named_kind(&name)?;
    let report = validate_in(&model, DataSpace::Conceptual);
    assert_eq!(report.len(), ids.len());
    for id in ids_over {
        let errors: Vec<_> = report.errors_for(id).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            ErrorMessage::NameTooLong {
                name: name.clone(),
                max: 480
            }
        );
    }
    Ok(())
}

#[test]
fn row_type_with_1000_character_name() -> Result<()> {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let row = builder.row_type(&"r".repeat(1000));
    let model = builder.build()?;

    for space in [DataSpace::Conceptual, DataSpace::Store] {
        assert!(validate_in(&model, space).errors_for(row).next().is_none());
    }
    Ok(())
}

#[test]
fn dotted_names() -> Result<()> {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let entity = entity_named(&mut builder, "Foo.Bar");
    let row = builder.row_type("Foo.Bar");
    let model = builder.build()?;

    // Dots are rejected in both spaces for every kind but row types
    for space in [DataSpace::Conceptual, DataSpace::Store] {
        let report = validate_in(&model, space);
        assert_eq!(kinds_on(&report, entity), vec![ErrorKind::NameNotAllowed]);
    }

    let store = validate_in(&model, DataSpace::Store);
    assert!(kinds_on(&store, row).is_empty());

    // In the conceptual space the identifier check still rejects the row type name
    let conceptual = validate_in(&model, DataSpace::Conceptual);
    assert_eq!(kinds_on(&conceptual, row), vec![ErrorKind::NameNotAllowed]);
    Ok(())
}

#[test]
fn association_ends() -> Result<()> {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let customer = entity_named(&mut builder, "Customer");
    let reference = builder.type_usage(Some(EdmTypeRef::Ref(customer)));
    let a = builder.association_end("A", Some(reference), RelationshipMultiplicity::One);
    let b = builder.association_end("B", Some(reference), RelationshipMultiplicity::Many);
    let complete = builder.association_type("Complete", "Shop", Some(a), Some(b));
    let half = builder.association_type("Half", "Shop", Some(a), None);
    let model = builder.build()?;

    let report = validate_in(&model, DataSpace::Conceptual);
    assert!(slots_on(&report, complete).is_empty());
    assert_eq!(slots_on(&report, half), vec![Some(Slot::End)]);
    assert_eq!(report.len(), 1);
    Ok(())
}

#[test]
fn empty_dependent_properties() -> Result<()> {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let customer = entity_named(&mut builder, "Customer");
    let reference = builder.type_usage(Some(EdmTypeRef::Ref(customer)));
    let a = builder.association_end("A", Some(reference), RelationshipMultiplicity::One);
    let b = builder.association_end("B", Some(reference), RelationshipMultiplicity::Many);
    let association = builder.association_type("Assoc", "Shop", Some(a), Some(b));
    let constraint =
        builder.referential_constraint(association, Some(a), Vec::new(), Some(b), Some(Vec::new()));
    let model = builder.build()?;

    let report = validate_in(&model, DataSpace::Conceptual);
    assert_eq!(kinds_on(&report, constraint), vec![ErrorKind::EmptyCollection]);
    assert_eq!(slots_on(&report, constraint), vec![Some(Slot::DependentRole)]);
    Ok(())
}

#[test]
fn association_set_bindings_depend_on_space() -> Result<()> {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let customer = entity_named(&mut builder, "Customer");
    let reference = builder.type_usage(Some(EdmTypeRef::Ref(customer)));
    let a = builder.association_end("A", Some(reference), RelationshipMultiplicity::One);
    let b = builder.association_end("B", Some(reference), RelationshipMultiplicity::Many);
    let association = builder.association_type("Assoc", "Shop", Some(a), Some(b));
    let set = builder.association_set("AssocSet", Some(association), None, None);
    let model = builder.build()?;

    let conceptual = validate_in(&model, DataSpace::Conceptual);
    assert_eq!(
        slots_on(&conceptual, set),
        vec![Some(Slot::FromRole), Some(Slot::ToRole)]
    );

    let store = validate_in(&model, DataSpace::Store);
    assert!(store.is_valid());
    Ok(())
}

#[test]
fn type_usage_shapes() -> Result<()> {
    // Acyclic, nothing shared
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let element = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::String)));
    let list = builder.type_usage(Some(EdmTypeRef::Collection(element)));
    let model = builder.build()?;
    assert!(validate_in(&model, DataSpace::Conceptual).is_valid());
    assert!(is_type_usage_valid(&model, list, TypeUsagePolicy::AnyRevisit));

    // Direct self reference
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let looped = builder.type_usage(None);
    builder.set_usage_type(looped, Some(EdmTypeRef::Collection(looped)));
    let model = builder.build()?;
    let report = validate_in(&model, DataSpace::Conceptual);
    assert_eq!(report.len(), 1);
    assert_eq!(kinds_on(&report, looped), vec![ErrorKind::InvalidTypeUsage]);
    assert_eq!(slots_on(&report, looped), vec![None]);

    // Diamond: shared, acyclic, still rejected by default
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    let shared = builder.type_usage(Some(EdmTypeRef::Primitive(PrimitiveKind::Int64)));
    let pair = builder.complex_type("Pair", "Shop");
    builder.property(pair, "First", Some(shared));
    builder.property(pair, "Second", Some(shared));
    let root = builder.type_usage(Some(EdmTypeRef::Complex(pair)));
    let model = builder.build()?;

    let report = validate_in(&model, DataSpace::Conceptual);
    assert_eq!(kinds_on(&report, root), vec![ErrorKind::InvalidTypeUsage]);
    assert_eq!(report.len(), 1);

    let relaxed = ValidationEngine::new(syntactic_rules(), ValidationConfig::cycles_only());
    assert!(relaxed.validate(&model).is_valid());
    Ok(())
}

fn messy_model() -> Result<EdmModel> {
    let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
    for index in 0..50 {
        let name = match index % 5 {
            0 => String::new(),
            1 => format!("Bad.Name{index}"),
            2 => "y".repeat(500),
            _ => format!("Entity{index}"),
        };
        let entity = entity_named(&mut builder, &name);
        let looped = builder.type_usage(None);
        builder.set_usage_type(looped, Some(EdmTypeRef::Collection(looped)));
        builder.property(entity, "Values", Some(looped));
        builder.entity_set(&format!("Set{index}"), (index % 2 == 0).then_some(entity));
        builder.association_set(&format!("Pairs{index}"), None, None, None);
        builder.navigation_property(entity, "Nav", None, None);
    }
    builder.build()
}

#[test]
fn passes_are_deterministic() -> Result<()> {
    let model = messy_model()?;
    let engine = ValidationEngine::new(syntactic_rules(), ValidationConfig::default());

    let first = engine.validate(&model);
    let second = engine.validate(&model);
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first.render(&DefaultCatalog), second.render(&DefaultCatalog));
    Ok(())
}

#[test]
fn parallel_pass_matches_sequential_pass() -> Result<()> {
    let model = messy_model()?;
    let sequential = ValidationEngine::new(syntactic_rules(), ValidationConfig::default());
    let parallel = ValidationEngine::new(syntactic_rules(), ValidationConfig::parallel());

    for space in [DataSpace::Conceptual, DataSpace::Store] {
        assert_eq!(
            sequential.validate_in(&model, space),
            parallel.validate_in(&model, space)
        );
    }
    Ok(())
}

#[test]
fn validation_is_total() -> Result<()> {
    let model = messy_model()?;
    let report = validate_in(&model, DataSpace::Conceptual);

    assert_eq!(report.nodes_checked(), model.len());
    assert_eq!(report.count(ErrorKind::MissingName), 10);
    assert_eq!(report.count(ErrorKind::NameTooLong), 10);
    assert_eq!(report.count(ErrorKind::InvalidTypeUsage), 50);

    assert!(matches!(
        report.into_result(),
        Err(Error::ValidationFailed { errors, .. }) if errors > 0
    ));
    Ok(())
}

#[test]
fn dangling_references_are_construction_errors() {
    let mut builder = EdmModelBuilder::new(DataSpace::Store);
    let foreign = NodeId::new(MetadataKind::EntityType, 7);
    builder.entity_set("Customers", Some(foreign));

    assert!(matches!(
        builder.build(),
        Err(Error::DanglingReference { to, .. }) if to == foreign
    ));
}
