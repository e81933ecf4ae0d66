//! Core domain types for saaty.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod element;
mod matrix;
mod scale;
pub mod settings;

pub use element::Element;
pub use matrix::{JudgmentMatrix, MembershipVector};
pub use scale::{Intensity, Preference, SCALE, Scale};
pub use settings::{ReportFormat, UiOptions};

use thiserror::Error;

/// Errors raised anywhere in the elicitation pipeline.
///
/// Every variant is terminal for the current run: there is no retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaatyError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("input source unavailable: {0}")]
    InputSourceUnavailable(String),
    #[error("interrupted by operator")]
    Interrupted,
    #[error("terminal rendering failed: {0}")]
    Render(String),
}

impl SaatyError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn input_unavailable(message: impl Into<String>) -> Self {
        Self::InputSourceUnavailable(message.into())
    }
}

pub type Result<T, E = SaatyError> = std::result::Result<T, E>;
