// File: crates/chart-labels/src/error.rs
// Summary: Error type shared by formatters, templates, datasets and generators.

use thiserror::Error;

use crate::types::Component;

/// Result type alias for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// A required argument was missing or inconsistent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The template string could not be parsed.
    #[error("invalid template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// The dataset has no series at this index.
    #[error("no series at index {0}")]
    MissingSeries(usize),

    /// The dataset had no value for the requested item.
    #[error("no {component} for series {series}, item {item}")]
    MissingValue { component: Component, series: usize, item: usize },

    /// Millisecond timestamp outside the representable date range.
    #[error("timestamp {0} ms is outside the supported date range")]
    DateOutOfRange(i64),
}

impl LabelError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_template(template: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate { template: template.to_string(), reason: reason.into() }
    }

    pub fn missing(component: Component, series: usize, item: usize) -> Self {
        Self::MissingValue { component, series, item }
    }
}
