//! Generator configuration.

use crate::step::StepRule;

/// Configuration for a [`Generator`](crate::Generator).
///
/// All fields are plain values; the configuration is copied into the
/// generator at construction and cannot change mid-run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Stepping variant. Default: [`StepRule::Inverted`].
    pub rule: StepRule,

    /// Check every line sum and the `1..=n²` permutation in
    /// [`Generator::finish`](crate::Generator::finish).
    ///
    /// Default: `false`. For odd orders both rules always produce a
    /// magic square, so this is a self-check rather than a requirement.
    pub verify: bool,
}

impl GeneratorConfig {
    /// Default stepping rule.
    pub const DEFAULT_RULE: StepRule = StepRule::Inverted;

    /// Default for [`GeneratorConfig::verify`].
    pub const DEFAULT_VERIFY: bool = false;

    /// Configuration using the given rule, without verification.
    pub fn new(rule: StepRule) -> Self {
        Self {
            rule,
            ..Default::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rule: Self::DEFAULT_RULE,
            verify: Self::DEFAULT_VERIFY,
        }
    }
}
