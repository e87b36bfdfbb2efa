// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Random Walk Hierarchy Engine
//!
//! Measures how hierarchical the flow structure of a directed, optionally
//! weighted graph is, and ranks its nodes by the stationary density of a
//! biased random walker.
//!
//! # Pipeline
//!
//! - **GraphIndex**: dense slots (first-seen order) plus in/out weight maps.
//! - **TransitionOperator**: immutable CSR operator, stochastic by column.
//! - **PowerIteration**: restart-injected power iteration to a fixed point
//!   or the round cap.
//! - **hierarchy_score**: `sqrt(N * sum(p^2) - 1)`.
//! - **rank**: densities paired with node identities, highest first.
//!
//! # Example
//!
//! ```
//! use rwh_algo::{Edge, RwhConfig, compute};
//!
//! let edges = vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")];
//! let result = compute(&edges, &RwhConfig::default())?;
//!
//! assert!(result.converged);
//! assert!(result.rwh < 1e-6);
//! # Ok::<(), rwh_algo::RwhError>(())
//! ```

mod graph_index;
mod id_map;
mod operator;
mod validate;

pub mod algorithms;
pub mod procedures;
pub mod ranking;

pub use graph_index::{GraphIndex, NeighborWeights};
pub use id_map::IdMap;
pub use operator::TransitionOperator;
pub use validate::validate_edges;

#[cfg(test)]
pub mod test_utils;

use algorithms::{RandomWalkHierarchy, RoundProgress, RwhResult};
use rwh_common::{Edge, Result, RwhConfig};
use tracing::{Span, instrument};

/// Compute the random walk hierarchy of a link list.
///
/// With `check_params` set the edges and parameters are validated first and
/// nothing is computed on failure. Reaching `max_rounds` without meeting
/// `precision` is not an error; see [`RwhResult::converged`].
pub fn compute(edges: &[Edge], config: &RwhConfig) -> Result<RwhResult> {
    compute_with_observer(edges, config, |_| {})
}

/// Like [`compute`], calling `observer` once per iteration round.
#[instrument(
    skip_all,
    fields(edges = edges.len(), weighted = config.weighted, nodes = tracing::field::Empty)
)]
pub fn compute_with_observer<F>(
    edges: &[Edge],
    config: &RwhConfig,
    observer: F,
) -> Result<RwhResult>
where
    F: FnMut(RoundProgress),
{
    if config.check_params {
        validate_edges(edges, config.weighted)?;
        config.validate()?;
    }

    let graph = GraphIndex::from_edges(edges, config.weighted);
    Span::current().record("nodes", graph.node_count());

    Ok(RandomWalkHierarchy::run_with_observer(&graph, config, observer))
}
