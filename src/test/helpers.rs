use crate::metadata::{
    model::{DataSpace, EdmModel},
    token::NodeId,
    validation::{
        syntactic_rules, Rule, Slot, ValidationConfig, ValidationContext, ValidationEngine,
        ValidationError, ValidationReport,
    },
};

/// Applies `rules` to the single node `node` and returns what they recorded
pub fn apply_rules(
    rules: &[Rule],
    model: &EdmModel,
    node: NodeId,
    space: DataSpace,
) -> Vec<ValidationError> {
    let mut context = ValidationContext::new(model, space, ValidationConfig::default());
    let node = model.get(node).unwrap();
    for rule in rules {
        rule.apply(&mut context, node);
    }
    context.into_errors()
}

/// Runs the standard rule battery over `model` in `space`
pub fn validate_in(model: &EdmModel, space: DataSpace) -> ValidationReport {
    ValidationEngine::new(syntactic_rules(), ValidationConfig::default()).validate_in(model, space)
}

/// Slots of the findings recorded on `node`, in recording order
pub fn slots_on(report: &ValidationReport, node: NodeId) -> Vec<Option<Slot>> {
    report.errors_for(node).map(|error| error.slot).collect()
}

/// A name of `len` characters that is otherwise a valid identifier
pub fn long_name(len: usize) -> String {
    "N".repeat(len)
}
