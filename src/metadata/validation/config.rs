//! Validation configuration
//!
//! This module provides the switches that control which rule categories run, the name length
//! bound, the revisit semantics of the type usage check, and whether nodes are validated in
//! parallel.

use strum::{AsRefStr, Display, EnumIter};

/// Default upper bound for the length of a name, in UTF-16 code units
pub const DEFAULT_MAX_NAME_LENGTH: usize = 480;

/// Revisit semantics of the cycle-safe type usage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, AsRefStr)]
pub enum TypeUsagePolicy {
    /// Any second visit of a type usage during one check is invalid.
    ///
    /// This rejects true cycles and also shared, acyclic sub-structure (a diamond), because the
    /// two cannot be told apart with a single visited set.
    #[default]
    AnyRevisit,
    /// Only a revisit of a type usage on the current descent path is invalid.
    ///
    /// Shared sub-structure is accepted, only true cycles are rejected.
    PathOnly,
}

/// Configuration for a validation pass
///
/// Every rule belongs to one category; a disabled category is skipped entirely. The data space
/// is not part of the configuration, it is supplied per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationConfig {
    /// Enable the naming rules (missing name, name length, name validity)
    pub enable_naming_validation: bool,

    /// Enable the structural reference rules for associations, navigation properties and sets
    pub enable_structural_validation: bool,

    /// Enable the cycle-safe type usage check
    pub enable_type_usage_validation: bool,

    /// Maximum length of a name, in UTF-16 code units (default: 480)
    pub max_name_length: usize,

    /// Revisit semantics of the type usage check
    pub type_usage_policy: TypeUsagePolicy,

    /// Validate nodes on the rayon thread pool
    /// Findings are merged back in node order, so the result matches a sequential pass
    pub parallel: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enable_naming_validation: true,
            enable_structural_validation: true,
            enable_type_usage_validation: true,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            type_usage_policy: TypeUsagePolicy::AnyRevisit,
            parallel: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a disabled validation configuration
    ///
    /// No rule runs; a pass with this configuration always reports a valid model.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_naming_validation: false,
            enable_structural_validation: false,
            enable_type_usage_validation: false,
            ..Self::default()
        }
    }

    /// Creates a minimal validation configuration
    ///
    /// Only the naming rules run.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            enable_naming_validation: true,
            ..Self::disabled()
        }
    }

    /// Creates a comprehensive validation configuration
    ///
    /// Enables every rule category with the default revisit semantics.
    #[must_use]
    pub fn comprehensive() -> Self {
        Self::default()
    }

    /// Creates a configuration that validates nodes in parallel
    #[must_use]
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    /// Creates a configuration with every rule enabled that only rejects true type usage cycles
    ///
    /// Shared type usage sub-structure is accepted under this configuration.
    #[must_use]
    pub fn cycles_only() -> Self {
        Self {
            type_usage_policy: TypeUsagePolicy::PathOnly,
            ..Self::default()
        }
    }

    /// Returns a copy with a different revisit semantics for the type usage check
    #[must_use]
    pub fn with_type_usage_policy(mut self, policy: TypeUsagePolicy) -> Self {
        self.type_usage_policy = policy;
        self
    }

    /// Returns a copy with a different name length bound
    #[must_use]
    pub fn with_max_name_length(mut self, max_name_length: usize) -> Self {
        self.max_name_length = max_name_length;
        self
    }

    /// Returns true if at least one rule category is enabled
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enable_naming_validation
            || self.enable_structural_validation
            || self.enable_type_usage_validation
    }
}
