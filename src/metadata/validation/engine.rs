//! # Rule Dispatch
//!
//! The [`ValidationEngine`] walks every node of an [`EdmModel`] and applies every rule whose
//! binding matches the node's kind. It owns the rule battery it was constructed with; nothing
//! about the battery is global, so different engines in the same process may run different
//! rules.
//!
//! ## Dispatch Contract
//!
//! - Every node is visited exactly once, in model order
//! - Every rule bound to the node's kind, or to a super-kind the node satisfies, is applied
//! - Rules of a disabled category ([`Rule::should_run`]) are skipped for the whole pass
//! - No rule can stop the walk; a pass always visits the whole model
//!
//! ## Parallel Passes
//!
//! With the `parallel` switch of [`ValidationConfig`] set, nodes are validated on the [`rayon`]
//! thread pool. Each node writes into its own forked [`ValidationContext`] and the forks are
//! absorbed back in node order, so a parallel pass produces exactly the report of a sequential
//! one.
//!
//! ## Usage Examples
//!
//! ```rust
//! use edmscope::metadata::model::{DataSpace, EdmModelBuilder};
//! use edmscope::metadata::validation::{syntactic_rules, Slot, ValidationConfig, ValidationEngine};
//!
//! let mut builder = EdmModelBuilder::new(DataSpace::Store);
//! let set = builder.association_set("Pairs", None, None, None);
//! let model = builder.build()?;
//!
//! let engine = ValidationEngine::new(syntactic_rules(), ValidationConfig::default());
//!
//! // Store association sets may leave their source and target sets unbound
//! let store = engine.validate(&model);
//! assert_eq!(store.len(), 1);
//!
//! // The conceptual space requires them
//! let conceptual = engine.validate_in(&model, DataSpace::Conceptual);
//! let slots: Vec<_> = conceptual.errors_for(set).map(|e| e.slot).collect();
//! assert_eq!(slots, vec![Some(Slot::EntityType), Some(Slot::FromRole), Some(Slot::ToRole)]);
//! # Ok::<(), edmscope::Error>(())
//! ```

use rayon::prelude::*;

use crate::{
    metadata::{
        model::{DataSpace, EdmModel, MetadataNode},
        token::NodeId,
        validation::{
            circularity::check_type_usage, config::ValidationConfig, context::ValidationContext,
            report::ValidationReport, rule::Rule,
        },
    },
    Result,
};

/// Applies a rule battery to models.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    rules: Vec<Rule>,
    config: ValidationConfig,
}

impl ValidationEngine {
    /// Creates an engine over a caller-constructed rule battery
    ///
    /// # Arguments
    ///
    /// * `rules` - The rules to apply, in the order they are applied to each node
    /// * `config` - The configuration used by every pass of this engine
    #[must_use]
    pub fn new(rules: Vec<Rule>, config: ValidationConfig) -> Self {
        Self { rules, config }
    }

    /// The rule battery of this engine
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The configuration of this engine
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a model in the data space it was built for
    #[must_use]
    pub fn validate(&self, model: &EdmModel) -> ValidationReport {
        self.validate_in(model, model.data_space())
    }

    /// Validates a model in the given data space.
    ///
    /// The data space decides which space-dependent rule variations apply, independent of the
    /// space the model was built for.
    #[must_use]
    pub fn validate_in(&self, model: &EdmModel, data_space: DataSpace) -> ValidationReport {
        let active = self.active_rules();
        if self.rules.is_empty() {
            tracing::warn!("validating {} model with an empty rule battery", data_space);
        } else if active.is_empty() {
            tracing::debug!(
                "all {} rules are disabled, {} model is not validated",
                self.rules.len(),
                data_space
            );
        }

        tracing::info!(
            "validating {} nodes in {} space with {} of {} rules{}",
            model.len(),
            data_space,
            active.len(),
            self.rules.len(),
            if self.config.parallel { " (parallel)" } else { "" }
        );

        let mut context = ValidationContext::new(model, data_space, self.config);
        let rules_invoked = if self.config.parallel {
            let forks: Vec<_> = model
                .nodes()
                .par_iter()
                .map(|node| {
                    let mut fork = context.fork();
                    let invoked = apply_rules(&active, &mut fork, node);
                    (fork, invoked)
                })
                .collect();

            let mut invoked = 0;
            for (fork, count) in forks {
                context.absorb(fork);
                invoked += count;
            }
            invoked
        } else {
            model
                .nodes()
                .iter()
                .map(|node| apply_rules(&active, &mut context, node))
                .sum()
        };

        let report =
            ValidationReport::new(data_space, context.into_errors(), model.len(), rules_invoked);

        tracing::info!(
            "validated {} space: {} error(s), {} rule invocation(s)",
            data_space,
            report.len(),
            rules_invoked
        );

        report
    }

    /// Applies the battery to a single node, recording into `context`.
    ///
    /// Returns the number of rules that were applied.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NodeNotFound`] if `node` is not part of the context's model.
    pub fn validate_node(
        &self,
        context: &mut ValidationContext<'_>,
        node: NodeId,
    ) -> Result<usize> {
        let node = context.model().node(node)?;
        Ok(apply_rules(&self.active_rules(), context, node))
    }

    /// Runs the cycle-safe check on one type usage with this engine's revisit semantics.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NodeNotFound`] or [`crate::Error::KindMismatch`] if `usage` is not
    /// a type usage of `model`.
    pub fn check_type_usage(&self, model: &EdmModel, usage: NodeId) -> Result<bool> {
        check_type_usage(model, usage, self.config.type_usage_policy)
    }

    fn active_rules(&self) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| {
                let enabled = rule.should_run(&self.config);
                if !enabled {
                    tracing::debug!("rule {} ({}) is disabled", rule.name(), rule.category());
                }
                enabled
            })
            .collect()
    }
}

fn apply_rules(
    rules: &[&Rule],
    context: &mut ValidationContext<'_>,
    node: &MetadataNode,
) -> usize {
    let kind = node.kind();
    let mut invoked = 0;
    for rule in rules.iter().filter(|rule| rule.applies_to(kind)) {
        if rule.apply(context, node) {
            invoked += 1;
        }
    }
    invoked
}
