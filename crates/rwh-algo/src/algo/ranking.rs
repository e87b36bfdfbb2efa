// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Ranking utilities.
//!
//! Densities are ordered descending; equal densities keep ascending slot
//! order, i.e. the order in which nodes first appeared in the link list.

use crate::algo::IdMap;
use rwh_common::NodeId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    pub node: NodeId,
    pub density: f64,
}

fn by_density_desc(a: (usize, f64), b: (usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}

/// Pair every density with its node identity, highest density first.
pub fn rank(distribution: &[f64], id_map: &IdMap) -> Vec<RankedNode> {
    let mut order: Vec<(usize, f64)> = distribution.iter().copied().enumerate().collect();
    order.sort_by(|&a, &b| by_density_desc(a, b));
    order
        .into_iter()
        .map(|(slot, density)| RankedNode {
            node: id_map.to_node_unchecked(slot as u32).clone(),
            density,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_map(names: &[&str]) -> IdMap {
        names.iter().map(|&n| NodeId::from(n)).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ids = id_map(&["a", "b", "c"]);
        let ranked = rank(&[0.2, 0.5, 0.3], &ids);
        let names: Vec<String> = ranked.iter().map(|r| r.node.to_string()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
        assert_eq!(ranked[0].density, 0.5);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ids = id_map(&["z", "y", "x", "w"]);
        let ranked = rank(&[0.1, 0.4, 0.1, 0.4], &ids);
        let names: Vec<String> = ranked.iter().map(|r| r.node.to_string()).collect();
        assert_eq!(names, vec!["y", "w", "z", "x"]);
    }
}
