// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Edge list preconditions, checked before any numeric state is built.

use rwh_common::{Edge, Result, RwhError};

/// Check shape and weights of every edge.
///
/// Weighted input requires a finite, nonnegative weight on every edge;
/// unweighted input must not carry weights at all.
pub fn validate_edges(edges: &[Edge], weighted: bool) -> Result<()> {
    if edges.is_empty() {
        return Err(RwhError::empty("edges"));
    }

    for (i, edge) in edges.iter().enumerate() {
        match (weighted, edge.weight) {
            (true, None) => {
                return Err(RwhError::invalid_argument(
                    "edges",
                    Some(i),
                    "expected (source, target, weight), weight is missing",
                ));
            }
            (true, Some(w)) if !w.is_finite() || w < 0.0 => {
                return Err(RwhError::invalid_argument(
                    "edges",
                    Some(i),
                    format!("weight must be a finite number >= 0, got {}", w),
                ));
            }
            (false, Some(_)) => {
                return Err(RwhError::invalid_argument(
                    "edges",
                    Some(i),
                    "expected (source, target), got a weight on an unweighted graph",
                ));
            }
            _ => {}
        }
    }

    Ok(())
}
