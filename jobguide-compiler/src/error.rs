/// Errors that can occur during a compilation pass.
///
/// Every variant is fatal: a failed pass leaves the interning tables in an
/// unusable state and there is no partial-output mode.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("unrecognized timing value: {0:?}")]
    MalformedTiming(String),

    #[error("combo action {name:?} not found in the action name table")]
    UnresolvedCombo { name: String },

    #[error("locale mismatch: expected {expected} values, got {got}")]
    LocaleMismatch { expected: usize, got: usize },

    #[error("job page {slug:?} has no role name")]
    MissingRole { slug: String },

    #[error("at least one locale must be configured")]
    NoLocales,
}
