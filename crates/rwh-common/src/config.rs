// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::api::error::{Result, RwhError};
use serde::{Deserialize, Serialize};

/// Parameters of one random walk hierarchy computation.
///
/// Deserializes from partial documents; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RwhConfig {
    /// Edges carry a third weight element (default: false)
    pub weighted: bool,

    /// Exponent applied to an edge's share of its source's outgoing
    /// weight (default: 1.0)
    pub alpha: f64,

    /// Decay parameter λ; restart mass per round is e^(1/λ) - 1 (default: 4.0)
    pub decay: f64,

    /// L1 distance between successive rounds at which iteration stops
    /// (default: 1e-7)
    pub precision: f64,

    /// Hard cap on iteration rounds (default: 10000)
    pub max_rounds: usize,

    /// Emit per-round progress at info level instead of trace (default: false)
    pub verbose: bool,

    /// Validate edges and parameters before computing (default: true)
    pub check_params: bool,
}

impl Default for RwhConfig {
    fn default() -> Self {
        Self {
            weighted: false,
            alpha: 1.0,
            decay: 4.0,
            precision: 1e-7,
            max_rounds: 10_000,
            verbose: false,
            check_params: true,
        }
    }
}

impl RwhConfig {
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn check_params(mut self, check_params: bool) -> Self {
        self.check_params = check_params;
        self
    }

    /// Reject parameter values for which the iteration is undefined.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() {
            return Err(RwhError::invalid_config(
                "alpha",
                format!("must be a finite number, got {}", self.alpha),
            ));
        }
        if !(self.decay.is_finite() && self.decay > 0.0) {
            return Err(RwhError::invalid_config(
                "decay",
                format!("must be a finite number > 0, got {}", self.decay),
            ));
        }
        if self.precision.is_nan() || self.precision < 0.0 {
            return Err(RwhError::invalid_config(
                "precision",
                format!("must be >= 0, got {}", self.precision),
            ));
        }
        Ok(())
    }
}
