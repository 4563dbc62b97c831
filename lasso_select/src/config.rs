// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector configuration.

use lasso_gesture::DEFAULT_MIN_VERTEX_SPACING;
use lasso_index::DEFAULT_CELL_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::{SelectError, SelectResult};

/// Default store size at which queries move to the worker thread.
pub const DEFAULT_OFFLOAD_THRESHOLD: usize = 20_000;

/// Tunables for a [`Selector`](crate::Selector).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use lasso_select::SelectorConfig;
///
/// let config = SelectorConfig::from_json(r#"{ "cell_size": 25.0 }"#).unwrap();
/// assert_eq!(config.cell_size, 25.0);
/// assert_eq!(config.min_vertex_spacing, 2.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Grid cell edge, in screen units.
    pub cell_size: f64,
    /// Minimum per-axis distance between retained lasso vertices.
    pub min_vertex_spacing: f64,
    /// Store size from which queries run on the worker thread; `None` keeps
    /// everything on the caller's thread.
    pub offload_threshold: Option<usize>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min_vertex_spacing: DEFAULT_MIN_VERTEX_SPACING,
            offload_threshold: Some(DEFAULT_OFFLOAD_THRESHOLD),
        }
    }
}

impl SelectorConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> SelectResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> SelectResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SelectError::InvalidConfig(format!(
                "cell_size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        if !(self.min_vertex_spacing.is_finite() && self.min_vertex_spacing >= 0.0) {
            return Err(SelectError::InvalidConfig(format!(
                "min_vertex_spacing must be non-negative and finite, got {}",
                self.min_vertex_spacing
            )));
        }
        Ok(())
    }

    /// Whether a store of `len` points should be queried off-thread.
    pub fn offloads(&self, len: usize) -> bool {
        self.offload_threshold.is_some_and(|t| len >= t)
    }
}
