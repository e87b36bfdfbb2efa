// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and the random walk hierarchy pipeline.

use crate::algo::GraphIndex;

/// Core trait for graph algorithms over a [`GraphIndex`].
pub trait Algorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Result: Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute algorithm on an index.
    fn run(graph: &GraphIndex, config: Self::Config) -> Self::Result;
}

mod hierarchy;
pub use hierarchy::hierarchy_score;

mod power_iteration;
pub use power_iteration::{
    IterationConfig, PowerIteration, RoundProgress, Stationary, restart_mass,
};

mod rwh;
pub use rwh::{RandomWalkHierarchy, RwhResult};
