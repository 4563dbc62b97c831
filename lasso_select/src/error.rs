// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the selector.

use lasso_gesture::SelectionMode;
use thiserror::Error;

/// Errors surfaced by [`Selector`](crate::Selector) and its configuration.
///
/// Bad pointer input and degenerate shapes are not errors; they select nothing.
#[derive(Debug, Error)]
pub enum SelectError {
    /// A mode change was requested while a gesture is in progress.
    #[error("cannot change selection mode while a {mode} gesture is active")]
    GestureActive {
        /// Mode of the active gesture.
        mode: SelectionMode,
    },
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A configuration document could not be parsed.
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for selector operations.
pub type SelectResult<T> = Result<T, SelectError>;
