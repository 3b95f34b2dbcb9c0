//! Error taxonomy for the geometry core
//!
//! Two fatal categories exist: invalid derived dimensions (caller
//! configuration) and degenerate numeric input to the taper solver.
//! Out-of-range finger fill is recoverable and surfaces as a
//! `tracing::warn!`, never as an error.

use thiserror::Error;

/// Fatal errors raised by geometry construction and post-processing.
#[derive(Debug, Error)]
pub enum DesignError {
    /// A derived geometric dimension came out invalid. The offending
    /// value is reported so the caller can see which parameter
    /// combination broke the layout. Never silently clamped.
    #[error("invalid derived dimension: {name} = {value}")]
    Configuration { name: &'static str, value: f64 },

    /// Degenerate input to a numeric computation (current-density taper).
    /// Raised instead of letting NaN/Inf propagate into geometry.
    #[error("degenerate computation input: {reason}")]
    Computation { reason: String },
}

impl DesignError {
    pub(crate) fn configuration(name: &'static str, value: f64) -> Self {
        DesignError::Configuration { name, value }
    }

    pub(crate) fn computation(reason: impl Into<String>) -> Self {
        DesignError::Computation {
            reason: reason.into(),
        }
    }
}
