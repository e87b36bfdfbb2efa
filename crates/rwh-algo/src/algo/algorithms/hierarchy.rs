// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Hierarchy score of a stationary distribution.

/// `sqrt(N * sum(p^2) - 1)`.
///
/// Zero for a uniform distribution, approaching `sqrt(N - 1)` as the mass
/// concentrates on a single node. Rounding can leave the radicand slightly
/// below zero near the uniform case; it is clamped to 0. A NaN radicand
/// passes through so a broken distribution is not reported as flat.
pub fn hierarchy_score(distribution: &[f64]) -> f64 {
    let n = distribution.len();
    if n == 0 {
        return 0.0;
    }
    let sum_sq: f64 = distribution.iter().map(|p| p * p).sum();
    let radicand = n as f64 * sum_sq - 1.0;
    if radicand < 0.0 {
        0.0
    } else {
        radicand.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_zero() {
        assert_eq!(hierarchy_score(&[0.25; 4]), 0.0);
        assert!(hierarchy_score(&[1.0 / 3.0; 3]) < 1e-7);
        assert_eq!(hierarchy_score(&[]), 0.0);
    }

    #[test]
    fn test_concentrated_is_sqrt_n_minus_one() {
        let score = hierarchy_score(&[1.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((score - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_concentration() {
        // 3 * (0.25 + 0.25) - 1 = 0.5
        let score = hierarchy_score(&[0.0, 0.5, 0.5]);
        assert!((score - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_negative_radicand_clamped() {
        // Sums marginally below 1 push the radicand under zero.
        let p = [0.1 - 1e-12; 10];
        assert_eq!(hierarchy_score(&p), 0.0);
    }

    #[test]
    fn test_nan_distribution_stays_nan() {
        assert!(hierarchy_score(&[f64::NAN, 0.5]).is_nan());
    }
}
