// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
}

// Re-exports for convenience
pub use api::error::{Result, RwhError};
pub use config::RwhConfig;
pub use core::id::{Edge, NodeId};
