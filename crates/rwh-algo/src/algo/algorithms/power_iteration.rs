// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Power iteration with uniform restart injection.
//!
//! Each round reads the previous vector with `g = (e^(1/decay) - 1) / N`
//! added to every entry, applies the operator row by row, renormalizes to
//! unit mass and measures the L1 distance to the previous round.

use crate::algo::TransitionOperator;
use rayon::prelude::*;
use rwh_common::RwhConfig;
use tracing::{info, trace};

#[derive(Debug, Clone)]
pub struct IterationConfig {
    pub decay: f64,
    pub precision: f64,
    pub max_rounds: usize,
    pub verbose: bool,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            decay: 4.0,
            precision: 1e-7,
            max_rounds: 10_000,
            verbose: false,
        }
    }
}

impl From<&RwhConfig> for IterationConfig {
    fn from(config: &RwhConfig) -> Self {
        Self {
            decay: config.decay,
            precision: config.precision,
            max_rounds: config.max_rounds,
            verbose: config.verbose,
        }
    }
}

/// Progress event handed to observers once per round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundProgress {
    /// 1-based round number.
    pub round: usize,
    /// L1 distance between this round's vector and the previous one.
    pub distance: f64,
}

/// Outcome of a power iteration run.
#[derive(Debug, Clone)]
pub struct Stationary {
    /// Probability per slot, summing to 1.
    pub distribution: Vec<f64>,
    pub rounds: usize,
    /// Whether the precision target was met before the round cap.
    pub converged: bool,
    /// Distance measured in the last round; `None` if no round ran.
    pub final_distance: Option<f64>,
}

/// Restart mass injected per round across the whole graph.
pub fn restart_mass(decay: f64) -> f64 {
    (1.0 / decay).exp_m1()
}

pub struct PowerIteration;

impl PowerIteration {
    pub fn run(operator: &TransitionOperator, config: &IterationConfig) -> Stationary {
        Self::run_with_observer(operator, config, |_| {})
    }

    /// Iterate until the L1 distance drops to `precision` or `max_rounds`
    /// rounds have run, calling `observer` after every round.
    pub fn run_with_observer<F>(
        operator: &TransitionOperator,
        config: &IterationConfig,
        mut observer: F,
    ) -> Stationary
    where
        F: FnMut(RoundProgress),
    {
        let n = operator.dimension();
        if n == 0 {
            return Stationary {
                distribution: Vec::new(),
                rounds: 0,
                converged: true,
                final_distance: None,
            };
        }

        let injected = restart_mass(config.decay) / n as f64;

        let mut probs = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        let mut rounds = 0;
        let mut converged = false;
        let mut final_distance = None;

        while rounds < config.max_rounds {
            // Rows only read the frozen previous vector, so they can run in parallel.
            next.par_iter_mut().enumerate().for_each(|(row, value)| {
                let (cols, coefficients) = operator.row(row as u32);
                // `Sum for f64` starts at -0.0; rows without inflow must report +0.0.
                *value = cols
                    .iter()
                    .zip(coefficients)
                    .fold(0.0, |acc, (&col, &c)| {
                        acc + c * (probs[col as usize] + injected)
                    });
            });

            // Sequential reductions keep results bit-identical between runs.
            let total: f64 = next.iter().sum();
            if total > 0.0 {
                for value in next.iter_mut() {
                    *value /= total;
                }
            }

            let distance: f64 = probs
                .iter()
                .zip(next.iter())
                .map(|(a, b)| (a - b).abs())
                .sum();

            std::mem::swap(&mut probs, &mut next);
            rounds += 1;
            final_distance = Some(distance);

            if config.verbose {
                info!(round = rounds, distance, "Power iteration round");
            } else {
                trace!(round = rounds, distance, "Power iteration round");
            }
            observer(RoundProgress {
                round: rounds,
                distance,
            });

            if distance <= config.precision {
                converged = true;
                break;
            }
        }

        Stationary {
            distribution: probs,
            rounds,
            converged,
            final_distance,
        }
    }
}
