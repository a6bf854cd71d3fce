//! The syntactic rule battery.
//!
//! Rules are grouped by the part of the model they inspect:
//!
//! - [`naming`] - name presence, length and validity of every named item
//! - [`association`] - association ends, referential constraints, navigation properties
//! - [`sets`] - element types and bindings of entity and association sets
//! - [`typeusage`] - the cycle-safe type usage check
//!
//! [`syntactic_rules`] assembles all of them into a fresh list the caller owns. Callers that
//! need a different battery build their own `Vec<Rule>` from the group functions or from custom
//! [`crate::metadata::validation::Rule`] values.

pub mod association;
pub mod naming;
pub mod sets;
pub mod typeusage;

use crate::metadata::validation::rule::Rule;

/// Builds the standard syntactic rule battery.
///
/// The order is naming, association, set and type usage rules. Since findings are recorded per
/// node in rule order, this order is visible in a report.
///
/// # Examples
///
/// ```rust
/// use edmscope::metadata::validation::{syntactic_rules, RuleCategory};
///
/// let rules = syntactic_rules();
/// assert_eq!(rules.len(), 14);
/// assert_eq!(rules[0].category(), RuleCategory::Naming);
/// ```
#[must_use]
pub fn syntactic_rules() -> Vec<Rule> {
    let mut rules = naming::rules();
    rules.extend(association::rules());
    rules.extend(sets::rules());
    rules.extend(typeusage::rules());
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{model::MetadataKind, validation::rule::RuleCategory};
    use rustc_hash::FxHashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_battery_shape() {
        let rules = syntactic_rules();
        assert_eq!(rules.len(), 14);

        let names: FxHashSet<_> = rules.iter().map(Rule::name).collect();
        assert_eq!(names.len(), rules.len(), "rule names are unique");

        let count = |category| rules.iter().filter(|r| r.category() == category).count();
        assert_eq!(count(RuleCategory::Naming), 3);
        assert_eq!(count(RuleCategory::Structural), 10);
        assert_eq!(count(RuleCategory::TypeUsage), 1);
    }

    #[test]
    fn test_rules_per_kind() {
        let rules = syntactic_rules();
        let applicable = |kind| rules.iter().filter(|r| r.applies_to(kind)).count();

        assert_eq!(applicable(MetadataKind::EntityType), 3);
        assert_eq!(applicable(MetadataKind::RowType), 3);
        assert_eq!(applicable(MetadataKind::AssociationType), 4);
        assert_eq!(applicable(MetadataKind::ReferentialConstraint), 2);
        assert_eq!(applicable(MetadataKind::NavigationProperty), 5);
        assert_eq!(applicable(MetadataKind::AssociationEnd), 4);
        assert_eq!(applicable(MetadataKind::EntitySet), 4);
        assert_eq!(applicable(MetadataKind::AssociationSet), 6);
        assert_eq!(applicable(MetadataKind::TypeUsage), 1);

        for kind in MetadataKind::iter() {
            assert!(applicable(kind) > 0, "{kind} has no rule");
        }
    }

    #[test]
    fn test_each_call_builds_a_fresh_list() {
        let mut first = syntactic_rules();
        first.clear();
        assert_eq!(syntactic_rules().len(), 14);
    }
}
