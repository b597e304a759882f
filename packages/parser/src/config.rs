//! Parser configuration.
//!
//! The only tunable is the validation policy: the reference behavior is
//! inconsistent about whether a record-level validation failure should
//! abort the stream, so the choice is made explicit here instead of being
//! hard-coded in the driver.

/// How record-level validation failures are treated during a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Abort the whole stream on the first malformed record. This is the
    /// baseline behavior: a distribution file is expected to be internally
    /// consistent, and a bad record usually means a bad download.
    #[default]
    Strict,

    /// Log the malformed record and continue with the next one. Structural
    /// errors, unresolved schema references and sink failures still abort.
    SkipMalformed,
}

/// Configuration for a [`crate::MeshParser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserConfig {
    /// Policy applied when a record fails assembly-time validation.
    pub policy: ValidationPolicy,
}

impl ParserConfig {
    /// Create a configuration with the given validation policy.
    #[must_use]
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self { policy }
    }
}
