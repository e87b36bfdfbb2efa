// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Random Walk Hierarchy.
//!
//! Builds the biased transition operator, iterates it to its stationary
//! distribution and reduces that distribution to a single hierarchy score.

use crate::algo::GraphIndex;
use crate::algo::TransitionOperator;
use crate::algo::algorithms::Algorithm;
use crate::algo::algorithms::hierarchy::hierarchy_score;
use crate::algo::algorithms::power_iteration::{IterationConfig, PowerIteration, RoundProgress};
use crate::algo::ranking::{RankedNode, rank};
use rwh_common::{NodeId, RwhConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct RandomWalkHierarchy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RwhResult {
    /// Hierarchy score, 0 for a flat distribution.
    pub rwh: f64,
    /// Stationary densities, highest first.
    pub ranking: Vec<RankedNode>,
    pub rounds: usize,
    pub converged: bool,
    pub final_distance: Option<f64>,
}

impl RwhResult {
    fn empty() -> Self {
        Self {
            rwh: 0.0,
            ranking: Vec::new(),
            rounds: 0,
            converged: true,
            final_distance: None,
        }
    }

    /// Stationary density of a node, if it is part of the graph.
    pub fn density_of(&self, node: &NodeId) -> Option<f64> {
        self.ranking
            .iter()
            .find(|r| &r.node == node)
            .map(|r| r.density)
    }
}

impl RandomWalkHierarchy {
    pub fn run_with_observer<F>(graph: &GraphIndex, config: &RwhConfig, observer: F) -> RwhResult
    where
        F: FnMut(RoundProgress),
    {
        if graph.node_count() == 0 {
            return RwhResult::empty();
        }

        let operator = TransitionOperator::build(graph, config.alpha);
        let stationary =
            PowerIteration::run_with_observer(&operator, &IterationConfig::from(config), observer);

        if !stationary.converged {
            warn!(
                rounds = stationary.rounds,
                distance = ?stationary.final_distance,
                precision = config.precision,
                "Round cap reached before precision target"
            );
        }

        let rwh = hierarchy_score(&stationary.distribution);
        let ranking = rank(&stationary.distribution, graph.id_map());

        debug!(
            rwh,
            rounds = stationary.rounds,
            converged = stationary.converged,
            "Random walk hierarchy computed"
        );

        RwhResult {
            rwh,
            ranking,
            rounds: stationary.rounds,
            converged: stationary.converged,
            final_distance: stationary.final_distance,
        }
    }
}

impl Algorithm for RandomWalkHierarchy {
    type Config = RwhConfig;
    type Result = RwhResult;

    fn name() -> &'static str {
        "rwh"
    }

    fn run(graph: &GraphIndex, config: Self::Config) -> Self::Result {
        Self::run_with_observer(graph, &config, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_index;

    #[test]
    fn test_cycle_is_flat() {
        let graph = build_test_index(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let result = RandomWalkHierarchy::run(&graph, RwhConfig::default());

        assert!(result.converged);
        assert!(result.rwh < 1e-6);
        for r in &result.ranking {
            assert!((r.density - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_leaves_dominate() {
        let graph = build_test_index(&[("a", "b"), ("a", "c")]);
        let result = RandomWalkHierarchy::run(&graph, RwhConfig::default());

        let a = result.density_of(&NodeId::from("a")).unwrap();
        let b = result.density_of(&NodeId::from("b")).unwrap();
        let c = result.density_of(&NodeId::from("c")).unwrap();
        assert!(a < b && a < c);
        assert!((b - c).abs() < 1e-12);
        assert!((result.rwh - 0.5f64.sqrt()).abs() < 1e-6);

        // Equal densities fall back to first-seen order.
        assert_eq!(result.ranking[0].node, NodeId::from("b"));
        assert_eq!(result.ranking[1].node, NodeId::from("c"));
        assert_eq!(result.ranking[2].node, NodeId::from("a"));
    }

    #[test]
    fn test_empty_graph() {
        let result = RandomWalkHierarchy::run(&GraphIndex::default(), RwhConfig::default());
        assert_eq!(result, RwhResult::empty());
        assert_eq!(RandomWalkHierarchy::name(), "rwh");
    }
}
