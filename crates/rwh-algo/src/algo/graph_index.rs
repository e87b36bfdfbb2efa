// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Index - dense adjacency views built from a raw link list.
//!
//! A `GraphIndex` owns:
//! - the identity <-> slot mapping (slots assigned in first-seen order)
//! - an out view (source -> {target: weight})
//! - an in view (target -> {source: weight})
//!
//! Both views always have one entry per slot, possibly empty.

use crate::algo::IdMap;
use fxhash::FxHashMap;
use rwh_common::{Edge, NodeId};

/// Neighbor slot -> edge weight.
pub type NeighborWeights = FxHashMap<u32, f64>;

#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    pub(crate) id_map: IdMap,
    pub(crate) out_adj: Vec<NeighborWeights>,
    pub(crate) in_adj: Vec<NeighborWeights>,
}

impl GraphIndex {
    /// Build the index from an already validated edge list.
    ///
    /// When `weighted` is false every edge weighs 1.0. A repeated ordered
    /// pair overwrites the weight stored for it (last write wins).
    pub fn from_edges(edges: &[Edge], weighted: bool) -> Self {
        let mut index = Self {
            id_map: IdMap::with_capacity(edges.len()),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        };

        for edge in edges {
            let src = index.slot_for(&edge.source);
            let dst = index.slot_for(&edge.target);
            let weight = if weighted {
                edge.weight.unwrap_or(1.0)
            } else {
                1.0
            };

            index.out_adj[src as usize].insert(dst, weight);
            index.in_adj[dst as usize].insert(src, weight);
        }

        index
    }

    fn slot_for(&mut self, node: &NodeId) -> u32 {
        if let Some(slot) = self.id_map.to_slot(node) {
            return slot;
        }
        let slot = self.id_map.insert(node.clone());
        self.out_adj.push(NeighborWeights::default());
        self.in_adj.push(NeighborWeights::default());
        slot
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.id_map.len()
    }

    /// Number of distinct ordered (source, target) pairs.
    pub fn edge_count(&self) -> usize {
        self.out_adj.iter().map(|m| m.len()).sum()
    }

    /// Outbound neighbors of a node with their weights.
    #[inline]
    pub fn out_neighbors(&self, slot: u32) -> &NeighborWeights {
        &self.out_adj[slot as usize]
    }

    /// Inbound neighbors of a node with their weights.
    #[inline]
    pub fn in_neighbors(&self, slot: u32) -> &NeighborWeights {
        &self.in_adj[slot as usize]
    }

    /// Total weight leaving a node.
    pub fn out_weight_sum(&self, slot: u32) -> f64 {
        self.out_adj[slot as usize].values().sum()
    }

    /// Total weight entering a node.
    pub fn in_weight_sum(&self, slot: u32) -> f64 {
        self.in_adj[slot as usize].values().sum()
    }

    /// Weight of the edge `src -> dst`, if present.
    pub fn weight(&self, src: u32, dst: u32) -> Option<f64> {
        self.out_adj[src as usize].get(&dst).copied()
    }

    /// Map slot back to identity.
    #[inline]
    pub fn to_node(&self, slot: u32) -> &NodeId {
        self.id_map.to_node_unchecked(slot)
    }

    /// Map identity to slot.
    #[inline]
    pub fn to_slot(&self, node: &NodeId) -> Option<u32> {
        self.id_map.to_slot(node)
    }

    pub fn id_map(&self) -> &IdMap {
        &self.id_map
    }

    /// Drop the adjacency views, keeping only the identity mapping.
    pub fn into_id_map(self) -> IdMap {
        self.id_map
    }
}
