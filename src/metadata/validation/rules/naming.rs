//! Naming rules, bound to every named item.
//!
//! All three rules ignore the node kind except for one distinction: row types are structurally
//! anonymous, so their generated names are exempt from the length bound and from the dot check.
//! They are not exempt from the simple identifier check of the conceptual space.

use crate::metadata::{
    model::NamedItem,
    validation::{
        context::ValidationContext,
        finding::Slot,
        identifier::{is_blank, is_valid_undotted_name, name_length},
        messages::ErrorMessage,
        rule::{Rule, RuleCategory, RuleCheck},
    },
};

/// Name of the rule rejecting empty or whitespace-only names
pub const NAME_MUST_NOT_BE_EMPTY: &str = "NamedItem_NameMustNotBeEmptyOrWhiteSpace";
/// Name of the rule bounding name length
pub const NAME_MUST_NOT_BE_TOO_LONG: &str = "NamedItem_NameMustNotBeTooLong";
/// Name of the rule rejecting dotted or non-identifier names
pub const NAME_MUST_BE_ALLOWED: &str = "NamedItem_NameMustBeAllowed";

/// The naming rules, in evaluation order
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            NAME_MUST_NOT_BE_EMPTY,
            RuleCategory::Naming,
            RuleCheck::Named(name_must_not_be_empty),
        ),
        Rule::new(
            NAME_MUST_NOT_BE_TOO_LONG,
            RuleCategory::Naming,
            RuleCheck::Named(name_must_not_be_too_long),
        ),
        Rule::new(
            NAME_MUST_BE_ALLOWED,
            RuleCategory::Naming,
            RuleCheck::Named(name_must_be_allowed),
        ),
    ]
}

fn name_must_not_be_empty(context: &mut ValidationContext<'_>, item: &dyn NamedItem) {
    if is_blank(item.name()) {
        context.record_error(item.id(), Some(Slot::Name), ErrorMessage::NameMissing);
    }
}

fn name_must_not_be_too_long(context: &mut ValidationContext<'_>, item: &dyn NamedItem) {
    let name = item.name();
    if is_blank(name) || item.is_row_type() {
        return;
    }

    let max = context.config().max_name_length;
    if name_length(name) > max {
        context.record_error(
            item.id(),
            Some(Slot::Name),
            ErrorMessage::NameTooLong {
                name: name.to_string(),
                max,
            },
        );
    }
}

fn name_must_be_allowed(context: &mut ValidationContext<'_>, item: &dyn NamedItem) {
    let name = item.name();
    if is_blank(name) {
        return;
    }

    let not_an_identifier = context.is_conceptual_space() && !is_valid_undotted_name(name);
    let dotted = name.contains('.') && !item.is_row_type();

    if not_an_identifier || dotted {
        context.record_error(
            item.id(),
            Some(Slot::Name),
            ErrorMessage::NameNotAllowed {
                name: name.to_string(),
            },
        );
    }
}
