//! The type usage validity rule.

use crate::metadata::{
    model::TypeUsage,
    validation::{
        circularity::is_type_usage_valid,
        context::ValidationContext,
        messages::ErrorMessage,
        rule::{Rule, RuleCategory, RuleCheck},
    },
};

/// The type usage rules
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![Rule::new(
        "TypeUsage_IsValid",
        RuleCategory::TypeUsage,
        RuleCheck::TypeUsage(type_usage_is_valid),
    )]
}

fn type_usage_is_valid(context: &mut ValidationContext<'_>, usage: &TypeUsage) {
    let policy = context.config().type_usage_policy;
    if !is_type_usage_valid(context.model(), usage.id, policy) {
        context.record_error(usage.id, None, ErrorMessage::TypeUsageNotValid);
    }
}
