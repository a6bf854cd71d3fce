//! Cycle-safe validity check for type usages.
//!
//! A type usage is composed of further type usages (the element usage of a collection, the
//! property usages of a row or complex type), and this sub-graph may contain cycles. The check
//! walks the constituents of one top-level usage with an explicit worklist and a visited set that
//! is allocated for that check alone, so it terminates on any graph and never overflows the
//! stack on deep nesting.
//!
//! # Revisit Semantics
//!
//! Under [`TypeUsagePolicy::AnyRevisit`] any second visit of a usage fails the check. This
//! rejects a usage that refers to itself, but it also rejects a usage whose constituents share a
//! sub-usage (a diamond) even though no cycle exists. [`TypeUsagePolicy::PathOnly`] only fails on
//! a usage that is revisited while it is still on the current descent path, which accepts shared
//! sub-structure and rejects true cycles.

use rustc_hash::FxHashSet;

use crate::{
    metadata::{model::EdmModel, token::NodeId, validation::config::TypeUsagePolicy},
    Result,
};

/// Returns true if the type usage `usage` passes the cycle-safe validity check.
///
/// A usage that cannot be found in the model has no constituents and is valid.
///
/// # Arguments
///
/// * `model` - The model the usage belongs to
/// * `usage` - The top-level type usage to check
/// * `policy` - The revisit semantics to apply
#[must_use]
pub fn is_type_usage_valid(model: &EdmModel, usage: NodeId, policy: TypeUsagePolicy) -> bool {
    match policy {
        TypeUsagePolicy::AnyRevisit => check_any_revisit(model, usage),
        TypeUsagePolicy::PathOnly => check_path_only(model, usage),
    }
}

/// Checks a type usage that must exist in the model.
///
/// # Errors
///
/// Returns [`crate::Error::NodeNotFound`] if `usage` is not part of the model, or
/// [`crate::Error::KindMismatch`] if it is not a type usage.
pub fn check_type_usage(
    model: &EdmModel,
    usage: NodeId,
    policy: TypeUsagePolicy,
) -> Result<bool> {
    let usage = node_as!(model, usage, TypeUsage)?;
    Ok(is_type_usage_valid(model, usage.id, policy))
}

fn components(model: &EdmModel, usage: NodeId) -> Vec<NodeId> {
    model
        .type_usage(usage)
        .map(|usage| model.type_usage_components(usage))
        .unwrap_or_default()
}

fn check_any_revisit(model: &EdmModel, root: NodeId) -> bool {
    let mut visited = FxHashSet::default();
    let mut worklist = vec![root];

    while let Some(usage) = worklist.pop() {
        if !visited.insert(usage) {
            return false;
        }

        // Reverse so constituents are visited in declaration order
        worklist.extend(components(model, usage).into_iter().rev());
    }

    true
}

struct Frame {
    usage: NodeId,
    components: Vec<NodeId>,
    next: usize,
}

fn check_path_only(model: &EdmModel, root: NodeId) -> bool {
    let mut on_path = FxHashSet::default();
    let mut finished = FxHashSet::default();

    on_path.insert(root);
    let mut stack = vec![Frame {
        usage: root,
        components: components(model, root),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&child) = frame.components.get(frame.next) else {
            on_path.remove(&frame.usage);
            finished.insert(frame.usage);
            stack.pop();
            continue;
        };
        frame.next += 1;

        if on_path.contains(&child) {
            return false;
        }
        if finished.contains(&child) {
            continue;
        }

        on_path.insert(child);
        stack.push(Frame {
            usage: child,
            components: components(model, child),
            next: 0,
        });
    }

    true
}
