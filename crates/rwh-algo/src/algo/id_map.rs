// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between caller node identities and dense algorithm slots.
//!
//! The operator and the probability vector are indexed by dense integers
//! (0..N). Callers name nodes with arbitrary integers or labels. This module
//! provides the bidirectional mapping between the two.

use fxhash::FxHashMap;
use rwh_common::NodeId;

/// Bidirectional mapping between node identities and dense slots.
///
/// Slots are handed out in first-insertion order.
///
/// # Example
///
/// ```
/// use rwh_algo::algo::IdMap;
/// use rwh_common::NodeId;
///
/// let mut id_map = IdMap::new();
/// id_map.insert(NodeId::from("root"));  // slot 0
/// id_map.insert(NodeId::from(42));      // slot 1
///
/// assert_eq!(id_map.to_slot(&NodeId::from("root")), Some(0));
/// assert_eq!(id_map.to_node(1), Some(&NodeId::from(42)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    /// Dense slot -> identity
    slot_to_node: Vec<NodeId>,
    /// Identity -> dense slot
    node_to_slot: FxHashMap<NodeId, u32>,
}

impl IdMap {
    /// Create an empty ID map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ID map with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_node: Vec::with_capacity(capacity),
            node_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert an identity and return its slot.
    ///
    /// If the identity already exists, returns the existing slot.
    pub fn insert(&mut self, node: NodeId) -> u32 {
        if let Some(&slot) = self.node_to_slot.get(&node) {
            return slot;
        }

        let slot = self.slot_to_node.len() as u32;
        self.slot_to_node.push(node.clone());
        self.node_to_slot.insert(node, slot);
        slot
    }

    /// Get the slot for an identity.
    #[inline]
    pub fn to_slot(&self, node: &NodeId) -> Option<u32> {
        self.node_to_slot.get(node).copied()
    }

    /// Get the identity for a slot.
    #[inline]
    pub fn to_node(&self, slot: u32) -> Option<&NodeId> {
        self.slot_to_node.get(slot as usize)
    }

    /// Get the identity for a slot (panics if out of bounds).
    #[inline]
    pub fn to_node_unchecked(&self, slot: u32) -> &NodeId {
        &self.slot_to_node[slot as usize]
    }

    /// Number of mapped nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_node.len()
    }

    /// Whether the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_node.is_empty()
    }

    /// Check if an identity is in the map.
    #[inline]
    pub fn contains(&self, node: &NodeId) -> bool {
        self.node_to_slot.contains_key(node)
    }

    /// Iterate over all (slot, identity) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &NodeId)> + '_ {
        self.slot_to_node
            .iter()
            .enumerate()
            .map(|(slot, node)| (slot as u32, node))
    }
}

impl FromIterator<NodeId> for IdMap {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));

        for node in iter {
            map.insert(node);
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut map = IdMap::new();

        let a = NodeId::from("a");
        let b = NodeId::from(200);
        let c = NodeId::from("200");

        assert_eq!(map.insert(a.clone()), 0);
        assert_eq!(map.insert(b.clone()), 1);
        assert_eq!(map.insert(c.clone()), 2);

        // Duplicate insert returns same slot
        assert_eq!(map.insert(a.clone()), 0);
        assert_eq!(map.len(), 3);

        assert_eq!(map.to_slot(&a), Some(0));
        assert_eq!(map.to_slot(&b), Some(1));
        assert_eq!(map.to_slot(&c), Some(2));

        assert_eq!(map.to_node(0), Some(&a));
        assert_eq!(map.to_node(2), Some(&c));
        assert_eq!(map.to_node(3), None);
        assert!(!map.contains(&NodeId::from("missing")));
    }

    #[test]
    fn test_from_iter_keeps_first_seen_order() {
        let map: IdMap = ["x", "y", "x", "z"].into_iter().map(NodeId::from).collect();
        let order: Vec<String> = map.iter().map(|(_, n)| n.to_string()).collect();
        assert_eq!(order, vec!["x", "y", "z"]);
    }
}
