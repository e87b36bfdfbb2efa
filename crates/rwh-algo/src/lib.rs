// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    Algorithm, IterationConfig, PowerIteration, RandomWalkHierarchy, RoundProgress, RwhResult,
    Stationary, hierarchy_score,
};
pub use algo::procedures::{ProcedureSignature, ResultRow, RwhProcedure, ValueType};
pub use algo::ranking::{RankedNode, rank};
pub use algo::{GraphIndex, IdMap, TransitionOperator, compute, compute_with_observer};
pub use rwh_common::{Edge, NodeId, Result, RwhConfig, RwhError};
