//! Validation rules and the node kinds they are bound to.
//!
//! A [`Rule`] is a named, stateless value. Its [`RuleCheck`] fixes the node kind the rule is
//! bound to and carries a plain function that receives the context and a node of exactly that
//! kind, so a rule body never has to inspect or downcast the node it is given. The one
//! super-kind, "any named item", is expressed by [`RuleCheck::Named`], which fires for every
//! kind where [`MetadataKind::is_named`] holds.
//!
//! Rules are ordinary values: a rule battery is a `Vec<Rule>` built by the caller, there is no
//! process-wide registry.

use std::fmt;

use strum::{AsRefStr, Display, EnumIter};

use crate::metadata::{
    model::{
        AssociationEndMember, AssociationSet, AssociationType, EntitySet, MetadataKind,
        MetadataNode, NamedItem, NavigationProperty, ReferentialConstraint, TypeUsage,
    },
    validation::{config::ValidationConfig, context::ValidationContext},
};

/// Check function of a rule bound to nodes of type `T`
pub type CheckFn<T> = fn(&mut ValidationContext<'_>, &T);

/// Check function of a rule bound to any named item
pub type NamedCheckFn = fn(&mut ValidationContext<'_>, &dyn NamedItem);

/// Rule categories, each switched on and off by [`ValidationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum RuleCategory {
    /// Naming rules
    Naming,
    /// Structural reference rules
    Structural,
    /// The type usage validity check
    TypeUsage,
}

/// The node kind a rule is bound to, together with its check function.
#[derive(Clone, Copy)]
pub enum RuleCheck {
    /// Bound to every named item
    Named(NamedCheckFn),
    /// Bound to association types
    AssociationType(CheckFn<AssociationType>),
    /// Bound to referential constraints
    ReferentialConstraint(CheckFn<ReferentialConstraint>),
    /// Bound to navigation properties
    NavigationProperty(CheckFn<NavigationProperty>),
    /// Bound to association end members
    AssociationEnd(CheckFn<AssociationEndMember>),
    /// Bound to entity sets
    EntitySet(CheckFn<EntitySet>),
    /// Bound to association sets
    AssociationSet(CheckFn<AssociationSet>),
    /// Bound to type usages
    TypeUsage(CheckFn<TypeUsage>),
}

impl RuleCheck {
    /// The exact kind this check is bound to, `None` for the named-item super-kind
    #[must_use]
    pub fn bound_kind(&self) -> Option<MetadataKind> {
        match self {
            RuleCheck::Named(_) => None,
            RuleCheck::AssociationType(_) => Some(MetadataKind::AssociationType),
            RuleCheck::ReferentialConstraint(_) => Some(MetadataKind::ReferentialConstraint),
            RuleCheck::NavigationProperty(_) => Some(MetadataKind::NavigationProperty),
            RuleCheck::AssociationEnd(_) => Some(MetadataKind::AssociationEnd),
            RuleCheck::EntitySet(_) => Some(MetadataKind::EntitySet),
            RuleCheck::AssociationSet(_) => Some(MetadataKind::AssociationSet),
            RuleCheck::TypeUsage(_) => Some(MetadataKind::TypeUsage),
        }
    }

    /// Returns true if nodes of `kind` are the bound kind or satisfy the bound super-kind
    #[must_use]
    pub fn applies_to(&self, kind: MetadataKind) -> bool {
        match self.bound_kind() {
            Some(bound) => bound == kind,
            None => kind.is_named(),
        }
    }
}

/// A named, stateless validation rule.
///
/// # Examples
///
/// ```rust
/// use edmscope::metadata::model::MetadataKind;
/// use edmscope::metadata::validation::{ErrorMessage, Rule, RuleCategory, RuleCheck, Slot};
///
/// let rule = Rule::new(
///     "EntitySet_NameMustStartWithUppercase",
///     RuleCategory::Naming,
///     RuleCheck::EntitySet(|context, set| {
///         if set.name.starts_with(char::is_lowercase) {
///             context.record_error(
///                 set.id,
///                 Some(Slot::Name),
///                 ErrorMessage::NameNotAllowed { name: set.name.clone() },
///             );
///         }
///     }),
/// );
///
/// assert!(rule.applies_to(MetadataKind::EntitySet));
/// assert!(!rule.applies_to(MetadataKind::AssociationSet));
/// ```
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    category: RuleCategory,
    check: RuleCheck,
}

impl Rule {
    /// Creates a new rule
    #[must_use]
    pub const fn new(name: &'static str, category: RuleCategory, check: RuleCheck) -> Self {
        Self {
            name,
            category,
            check,
        }
    }

    /// Name of the rule
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Category of the rule
    #[must_use]
    pub fn category(&self) -> RuleCategory {
        self.category
    }

    /// The node kind binding of the rule
    #[must_use]
    pub fn check(&self) -> &RuleCheck {
        &self.check
    }

    /// Returns true if the rule fires for nodes of `kind`
    #[must_use]
    pub fn applies_to(&self, kind: MetadataKind) -> bool {
        self.check.applies_to(kind)
    }

    /// Returns true if the category of the rule is enabled in `config`
    #[must_use]
    pub fn should_run(&self, config: &ValidationConfig) -> bool {
        match self.category {
            RuleCategory::Naming => config.enable_naming_validation,
            RuleCategory::Structural => config.enable_structural_validation,
            RuleCategory::TypeUsage => config.enable_type_usage_validation,
        }
    }

    /// Applies the rule to a node.
    ///
    /// Returns true if the rule fired, false if the node is outside the rule's binding.
    pub fn apply(&self, context: &mut ValidationContext<'_>, node: &MetadataNode) -> bool {
        match (&self.check, node) {
            (RuleCheck::Named(check), node) => match node.as_named() {
                Some(named) => {
                    check(context, named);
                    true
                }
                None => false,
            },
            (RuleCheck::AssociationType(check), MetadataNode::AssociationType(node)) => {
                check(context, node);
                true
            }
            (
                RuleCheck::ReferentialConstraint(check),
                MetadataNode::ReferentialConstraint(node),
            ) => {
                check(context, node);
                true
            }
            (RuleCheck::NavigationProperty(check), MetadataNode::NavigationProperty(node)) => {
                check(context, node);
                true
            }
            (RuleCheck::AssociationEnd(check), MetadataNode::AssociationEnd(node)) => {
                check(context, node);
                true
            }
            (RuleCheck::EntitySet(check), MetadataNode::EntitySet(node)) => {
                check(context, node);
                true
            }
            (RuleCheck::AssociationSet(check), MetadataNode::AssociationSet(node)) => {
                check(context, node);
                true
            }
            (RuleCheck::TypeUsage(check), MetadataNode::TypeUsage(node)) => {
                check(context, node);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = self
            .check
            .bound_kind()
            .map_or_else(|| "Named".to_string(), |kind| kind.to_string());

        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("bound", &bound)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        model::{DataSpace, EdmModelBuilder},
        validation::{finding::Slot, messages::ErrorMessage},
    };
    use strum::IntoEnumIterator;

    fn flag_every_named(context: &mut ValidationContext<'_>, item: &dyn NamedItem) {
        context.record_error(item.id(), Some(Slot::Name), ErrorMessage::NameMissing);
    }

    #[test]
    fn test_named_binding_covers_named_kinds() {
        let check = RuleCheck::Named(flag_every_named);
        for kind in MetadataKind::iter() {
            assert_eq!(check.applies_to(kind), kind.is_named(), "{kind}");
        }
    }

    #[test]
    fn test_exact_binding() {
        let check = RuleCheck::AssociationSet(|_, _| {});
        let bound: Vec<_> = MetadataKind::iter().filter(|k| check.applies_to(*k)).collect();
        assert_eq!(bound, vec![MetadataKind::AssociationSet]);
    }

    #[test]
    fn test_apply_dispatches_by_variant() {
        let mut builder = EdmModelBuilder::new(DataSpace::Conceptual);
        let set = builder.entity_set("Customers", None);
        let usage = builder.type_usage(None);
        let model = builder.build().unwrap();
        let mut context = ValidationContext::new(&model, DataSpace::Conceptual, Default::default());

        let rule = Rule::new("Every", RuleCategory::Naming, RuleCheck::Named(flag_every_named));
        assert!(rule.apply(&mut context, model.get(set).unwrap()));
        assert!(!rule.apply(&mut context, model.get(usage).unwrap()));

        let rule = Rule::new(
            "SetOnly",
            RuleCategory::Structural,
            RuleCheck::EntitySet(|context, set| {
                context.record_error(set.id, None, ErrorMessage::EntitySetElementTypeMissing)
            }),
        );
        assert!(!rule.apply(&mut context, model.get(usage).unwrap()));
        assert!(rule.apply(&mut context, model.get(set).unwrap()));

        assert_eq!(context.errors().len(), 2);
    }

    #[test]
    fn test_should_run_follows_category_switch() {
        let rule = Rule::new("R", RuleCategory::TypeUsage, RuleCheck::TypeUsage(|_, _| {}));
        assert!(rule.should_run(&ValidationConfig::default()));
        assert!(!rule.should_run(&ValidationConfig::minimal()));

        let rule = Rule::new("N", RuleCategory::Naming, RuleCheck::Named(|_, _| {}));
        assert!(rule.should_run(&ValidationConfig::minimal()));
        assert!(!rule.should_run(&ValidationConfig::disabled()));
    }

    #[test]
    fn test_rule_debug() {
        let rule = Rule::new("R", RuleCategory::Structural, RuleCheck::EntitySet(|_, _| {}));
        let debug = format!("{:?}", rule);
        assert!(debug.contains("EntitySet"));
        assert!(debug.contains("Structural"));
    }
}
