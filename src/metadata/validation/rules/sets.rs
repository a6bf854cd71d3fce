//! Structural rules for entity sets and association sets.
//!
//! Store models may leave the source and target set of an association set unbound, so those two
//! checks only run in the conceptual space.

use crate::metadata::{
    model::{AssociationSet, EntitySet},
    validation::{
        context::ValidationContext,
        finding::Slot,
        messages::ErrorMessage,
        rule::{Rule, RuleCategory, RuleCheck},
    },
};

/// The set structural rules, in evaluation order
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "EntitySet_ElementTypeMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::EntitySet(entity_set_element_type_present),
        ),
        Rule::new(
            "AssociationSet_ElementTypeMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::AssociationSet(association_set_element_type_present),
        ),
        Rule::new(
            "AssociationSet_SourceSetMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::AssociationSet(association_set_source_set_present),
        ),
        Rule::new(
            "AssociationSet_TargetSetMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::AssociationSet(association_set_target_set_present),
        ),
    ]
}

fn entity_set_element_type_present(context: &mut ValidationContext<'_>, set: &EntitySet) {
    if set.element_type.is_none() {
        context.record_error(
            set.id,
            Some(Slot::EntityType),
            ErrorMessage::EntitySetElementTypeMissing,
        );
    }
}

fn association_set_element_type_present(
    context: &mut ValidationContext<'_>,
    set: &AssociationSet,
) {
    if set.element_type.is_none() {
        context.record_error(
            set.id,
            Some(Slot::EntityType),
            ErrorMessage::AssociationSetElementTypeMissing,
        );
    }
}

fn association_set_source_set_present(context: &mut ValidationContext<'_>, set: &AssociationSet) {
    if context.is_conceptual_space() && set.source_set.is_none() {
        context.record_error(
            set.id,
            Some(Slot::FromRole),
            ErrorMessage::AssociationSetSourceSetMissing,
        );
    }
}

fn association_set_target_set_present(context: &mut ValidationContext<'_>, set: &AssociationSet) {
    if context.is_conceptual_space() && set.target_set.is_none() {
        context.record_error(
            set.id,
            Some(Slot::ToRole),
            ErrorMessage::AssociationSetTargetSetMissing,
        );
    }
}
