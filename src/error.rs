use std::time::Duration;
use thiserror::Error;

/// Failure while computing a surface classification.
///
/// None of these reach callers of the resolver: the dispatcher logs them and
/// commits the undetermined classification instead.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Rendered tree unavailable")]
    TreeUnavailable,

    #[error("Render failed: {0}")]
    Render(#[from] anyhow::Error),

    #[error("Scan fault: {0}")]
    ScanFault(String),

    #[error("Classification panicked: {0}")]
    Panicked(String),
}

/// Failure handing work to, or waiting on, the designated context.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Designated context is closed")]
    ContextClosed,

    #[error("Timed out after {0:?} waiting for classification")]
    Timeout(Duration),

    #[error("Wait interrupted: {0}")]
    Interrupted(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}
