use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Manifest or dataset JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Compilation pass failed
    #[error("Compile error: {0}")]
    Compile(#[from] jobguide_compiler::CompileError),
}
