//! Structural rules for associations, referential constraints and navigation properties.

use crate::metadata::{
    model::{AssociationEndMember, AssociationType, NavigationProperty, ReferentialConstraint},
    validation::{
        context::ValidationContext,
        finding::Slot,
        messages::ErrorMessage,
        rule::{Rule, RuleCategory, RuleCheck},
    },
};

/// The association structural rules, in evaluation order
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "AssociationType_AssociationEndMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::AssociationType(association_ends_present),
        ),
        Rule::new(
            "ReferentialConstraint_DependentRoleMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::ReferentialConstraint(dependent_role_present),
        ),
        Rule::new(
            "ReferentialConstraint_DependentPropertiesMustNotBeEmpty",
            RuleCategory::Structural,
            RuleCheck::ReferentialConstraint(dependent_properties_present),
        ),
        Rule::new(
            "NavigationProperty_AssociationMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::NavigationProperty(navigation_association_present),
        ),
        Rule::new(
            "NavigationProperty_ResultEndMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::NavigationProperty(navigation_target_end_present),
        ),
        Rule::new(
            "AssociationEnd_EntityTypeMustNotBeNull",
            RuleCategory::Structural,
            RuleCheck::AssociationEnd(end_entity_type_present),
        ),
    ]
}

fn association_ends_present(context: &mut ValidationContext<'_>, association: &AssociationType) {
    if association.source_end.is_none() || association.target_end.is_none() {
        context.record_error(
            association.id,
            Some(Slot::End),
            ErrorMessage::AssociationEndMissing,
        );
    }
}

fn dependent_role_present(context: &mut ValidationContext<'_>, constraint: &ReferentialConstraint) {
    if constraint.to_role.is_none() {
        context.record_error(
            constraint.id,
            Some(Slot::DependentRole),
            ErrorMessage::DependentRoleMissing,
        );
    }
}

// Both dependent side checks are attributed to the DependentRole element.
fn dependent_properties_present(
    context: &mut ValidationContext<'_>,
    constraint: &ReferentialConstraint,
) {
    let empty = constraint
        .to_properties
        .as_ref()
        .map_or(true, Vec::is_empty);

    if empty {
        context.record_error(
            constraint.id,
            Some(Slot::DependentRole),
            ErrorMessage::DependentPropertiesEmpty,
        );
    }
}

fn navigation_association_present(
    context: &mut ValidationContext<'_>,
    navigation: &NavigationProperty,
) {
    if navigation.association.is_none() {
        context.record_error(
            navigation.id,
            Some(Slot::Relationship),
            ErrorMessage::NavigationAssociationMissing,
        );
    }
}

fn navigation_target_end_present(
    context: &mut ValidationContext<'_>,
    navigation: &NavigationProperty,
) {
    if navigation.to_end_member.is_none() {
        context.record_error(
            navigation.id,
            Some(Slot::ToRole),
            ErrorMessage::NavigationTargetEndMissing,
        );
    }
}

fn end_entity_type_present(context: &mut ValidationContext<'_>, end: &AssociationEndMember) {
    if end.entity_type(context.model()).is_none() {
        context.record_error(
            end.id,
            Some(Slot::Type),
            ErrorMessage::AssociationEndEntityTypeMissing,
        );
    }
}
