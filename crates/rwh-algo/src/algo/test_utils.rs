// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::GraphIndex;
use rwh_common::Edge;

pub fn build_test_index(edges: &[(&str, &str)]) -> GraphIndex {
    let edges: Vec<Edge> = edges.iter().map(|&(s, t)| Edge::new(s, t)).collect();
    GraphIndex::from_edges(&edges, false)
}

pub fn build_weighted_test_index(edges: &[(&str, &str, f64)]) -> GraphIndex {
    let edges: Vec<Edge> = edges
        .iter()
        .map(|&(s, t, w)| Edge::weighted(s, t, w))
        .collect();
    GraphIndex::from_edges(&edges, true)
}
