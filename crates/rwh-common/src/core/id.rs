// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-facing node identity.
///
/// Identities are compared for equality and hashed for map lookups only.
/// There is no `Ord` impl; ranking order comes from densities and dense slots.
#[derive(Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Text(String),
}

impl NodeId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeId::Int(v) => Some(*v),
            NodeId::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NodeId::Int(_) => None,
            NodeId::Text(s) => Some(s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(val: i64) -> Self {
        NodeId::Int(val)
    }
}

impl From<i32> for NodeId {
    fn from(val: i32) -> Self {
        NodeId::Int(val as i64)
    }
}

impl From<&str> for NodeId {
    fn from(val: &str) -> Self {
        NodeId::Text(val.to_string())
    }
}

impl From<String> for NodeId {
    fn from(val: String) -> Self {
        NodeId::Text(val)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(v) => write!(f, "NodeId({})", v),
            NodeId::Text(s) => write!(f, "NodeId({:?})", s),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(v) => write!(f, "{}", v),
            NodeId::Text(s) => f.write_str(s),
        }
    }
}

/// A directed link `source -> target`.
///
/// `weight` is `None` for unweighted input; the graph index substitutes 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: None,
        }
    }

    pub fn weighted(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: Some(weight),
        }
    }
}

impl<S: Into<NodeId>, T: Into<NodeId>> From<(S, T)> for Edge {
    fn from((source, target): (S, T)) -> Self {
        Edge::new(source, target)
    }
}

impl<S: Into<NodeId>, T: Into<NodeId>> From<(S, T, f64)> for Edge {
    fn from((source, target, weight): (S, T, f64)) -> Self {
        Edge::weighted(source, target, weight)
    }
}
