use thiserror::Error;

/// Errors raised by calculator lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrowthError {
    /// No registered growth function carries this label.
    #[error("growth function '{label}' not found")]
    UnknownFunction { label: String },
}
