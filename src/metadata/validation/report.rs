//! The result of a validation pass.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{
    metadata::{
        model::DataSpace,
        token::NodeId,
        validation::{
            finding::{ErrorKind, ValidationError},
            messages::{DefaultCatalog, MessageCatalog},
        },
    },
    Error, Result,
};

/// All findings of one validation pass, in recording order.
///
/// The order is the node order of the model, and within one node the order of the rule battery.
/// Two passes with the same rules and configuration over the same model produce equal reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    data_space: DataSpace,
    errors: Vec<ValidationError>,
    nodes_checked: usize,
    rules_invoked: usize,
}

impl ValidationReport {
    pub(crate) fn new(
        data_space: DataSpace,
        errors: Vec<ValidationError>,
        nodes_checked: usize,
        rules_invoked: usize,
    ) -> Self {
        Self {
            data_space,
            errors,
            nodes_checked,
            rules_invoked,
        }
    }

    /// The data space the pass validated
    #[must_use]
    pub fn data_space(&self) -> DataSpace {
        self.data_space
    }

    /// All findings, in recording order
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the report and returns its findings
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Number of findings
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if the pass recorded no findings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if the model passed every rule that ran
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Number of nodes the pass visited
    #[must_use]
    pub fn nodes_checked(&self) -> usize {
        self.nodes_checked
    }

    /// Number of rule invocations across all nodes
    #[must_use]
    pub fn rules_invoked(&self) -> usize {
        self.rules_invoked
    }

    /// Findings recorded on one node
    pub fn errors_for(&self, node: NodeId) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |error| error.node == node)
    }

    /// Number of findings of one category
    #[must_use]
    pub fn count(&self, kind: ErrorKind) -> usize {
        self.errors.iter().filter(|error| error.kind() == kind).count()
    }

    /// Number of findings per category, categories without findings are omitted
    #[must_use]
    pub fn counts_by_kind(&self) -> FxHashMap<ErrorKind, usize> {
        let mut counts = FxHashMap::default();
        for error in &self.errors {
            *counts.entry(error.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Renders every finding through `catalog`, in recording order
    #[must_use]
    pub fn render(&self, catalog: &dyn MessageCatalog) -> Vec<String> {
        self.errors.iter().map(|error| error.render(catalog)).collect()
    }

    /// Converts the report into a fail-fast result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationFailed`] carrying the number of findings and the text of the
    /// first one if the report is not empty.
    pub fn into_result(self) -> Result<()> {
        match self.errors.first() {
            None => Ok(()),
            Some(first) => Err(Error::ValidationFailed {
                errors: self.errors.len(),
                first: first.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} model: {} error(s) in {} node(s)",
            self.data_space,
            self.errors.len(),
            self.nodes_checked
        )?;
        for error in &self.errors {
            writeln!(f, "  {}: {}", error.node, error.render(&DefaultCatalog))?;
        }
        Ok(())
    }
}
