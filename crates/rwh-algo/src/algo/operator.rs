// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Transition Operator - biased, column-stochastic walk matrix in CSR form.
//!
//! For an edge `i -> j` with weight `w(i,j)` the coefficient is
//!
//! ```text
//! c(i->j) = w(i,j) / in(j) * (w(i,j) / out(i))^alpha
//! ```
//!
//! where `in(j)` is the total weight entering `j` and `out(i)` the total
//! weight leaving `i`. The coefficient sits at row `j`, column `i`, so the
//! operator multiplies column probability vectors and mass moves along edge
//! direction. Any column whose coefficients sum to less than 1.0 receives the
//! missing mass on its diagonal.

use crate::algo::GraphIndex;
use tracing::debug;

/// Sparse operator entry: (row, column, coefficient).
type Triplet = (u32, u32, f64);

#[derive(Debug, Clone)]
pub struct TransitionOperator {
    dimension: usize,
    row_offsets: Vec<u32>, // [N+1] row -> entry start
    columns: Vec<u32>,     // [nnz] column of each entry, ascending within a row
    values: Vec<f64>,      // [nnz]
    patched_columns: usize,
}

impl TransitionOperator {
    /// Build the operator for `graph` with exponent `alpha`.
    pub fn build(graph: &GraphIndex, alpha: f64) -> Self {
        let n = graph.node_count();
        let in_sums: Vec<f64> = (0..n as u32).map(|v| graph.in_weight_sum(v)).collect();

        let mut triplets: Vec<Triplet> = Vec::with_capacity(graph.edge_count() + n);
        // Position of the (i, i) entry in `triplets`, if a self-edge produced one.
        let mut diagonal_at: Vec<Option<usize>> = vec![None; n];
        let mut column_sums = vec![0.0; n];

        for src in 0..n as u32 {
            let out_sum = graph.out_weight_sum(src);
            let mut targets: Vec<(u32, f64)> = graph
                .out_neighbors(src)
                .iter()
                .map(|(&dst, &w)| (dst, w))
                .collect();
            targets.sort_unstable_by_key(|&(dst, _)| dst);

            for (dst, w) in targets {
                let coefficient = edge_coefficient(w, in_sums[dst as usize], out_sum, alpha);
                if coefficient == 0.0 {
                    continue;
                }
                if dst == src {
                    diagonal_at[src as usize] = Some(triplets.len());
                }
                triplets.push((dst, src, coefficient));
                column_sums[src as usize] += coefficient;
            }
        }

        let mut patched_columns = 0;
        for (col, &sum) in column_sums.iter().enumerate() {
            if sum < 1.0 {
                let deficit = 1.0 - sum;
                match diagonal_at[col] {
                    Some(pos) => triplets[pos].2 += deficit,
                    None => triplets.push((col as u32, col as u32, deficit)),
                }
                patched_columns += 1;
            }
        }

        let (row_offsets, columns, values) = build_csr(n, triplets);

        debug!(
            nodes = n,
            nnz = values.len(),
            patched_columns,
            alpha,
            "Built transition operator"
        );

        Self {
            dimension: n,
            row_offsets,
            columns,
            values,
            patched_columns,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored entries, self-loop patches included.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Entries of a row as parallel (columns, coefficients) slices.
    #[inline]
    pub fn row(&self, row: u32) -> (&[u32], &[f64]) {
        let start = self.row_offsets[row as usize] as usize;
        let end = self.row_offsets[row as usize + 1] as usize;
        (&self.columns[start..end], &self.values[start..end])
    }

    /// Coefficient at (row, col); 0.0 when no entry is stored.
    pub fn get(&self, row: u32, col: u32) -> f64 {
        let (cols, vals) = self.row(row);
        cols.binary_search(&col).map_or(0.0, |pos| vals[pos])
    }

    /// Diagonal coefficient of a node.
    pub fn diagonal(&self, node: u32) -> f64 {
        self.get(node, node)
    }

    /// Sum of every column.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.dimension];
        for (&col, &val) in self.columns.iter().zip(&self.values) {
            sums[col as usize] += val;
        }
        sums
    }

    /// Number of columns that received a diagonal deficit patch.
    pub fn self_loop_patches(&self) -> usize {
        self.patched_columns
    }
}

fn edge_coefficient(weight: f64, in_sum: f64, out_sum: f64, alpha: f64) -> f64 {
    if weight <= 0.0 || in_sum <= 0.0 || out_sum <= 0.0 {
        return 0.0;
    }
    (weight / in_sum) * (weight / out_sum).powf(alpha)
}

/// Build CSR from (row, col, value) triplets.
fn build_csr(dimension: usize, mut triplets: Vec<Triplet>) -> (Vec<u32>, Vec<u32>, Vec<f64>) {
    if dimension == 0 {
        return (vec![0], Vec::new(), Vec::new());
    }

    triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));

    // Count entries per row
    let mut degrees = vec![0u32; dimension];
    for &(row, _, _) in &triplets {
        degrees[row as usize] += 1;
    }

    // Build offsets (prefix sum)
    let mut offsets = vec![0u32; dimension + 1];
    for i in 0..dimension {
        offsets[i + 1] = offsets[i] + degrees[i];
    }

    let (columns, values): (Vec<u32>, Vec<f64>) = triplets
        .into_iter()
        .map(|(_, col, val)| (col, val))
        .unzip();

    (offsets, columns, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_index, build_weighted_test_index};

    const EPS: f64 = 1e-12;

    #[test]
    fn test_build_csr() {
        let triplets = vec![(2, 0, 1.0), (0, 1, 0.5), (1, 2, 1.0), (0, 0, 0.5)];
        let (offsets, columns, values) = build_csr(3, triplets);

        assert_eq!(offsets, vec![0, 2, 3, 4]);
        // Row 0 has entries for columns 0 and 1
        assert_eq!(&columns[0..2], &[0, 1]);
        assert_eq!(&values[0..2], &[0.5, 0.5]);
        assert_eq!(&columns[2..3], &[2]);
        assert_eq!(&columns[3..4], &[0]);
    }

    #[test]
    fn test_cycle_is_permutation() {
        // a -> b -> c -> a
        let graph = build_test_index(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let op = TransitionOperator::build(&graph, 1.0);

        assert_eq!(op.nnz(), 3);
        assert_eq!(op.self_loop_patches(), 0);
        assert!((op.get(1, 0) - 1.0).abs() < EPS);
        assert!((op.get(2, 1) - 1.0).abs() < EPS);
        assert!((op.get(0, 2) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_star_sinks_get_full_patch() {
        // a -> b, a -> c
        let graph = build_test_index(&[("a", "b"), ("a", "c")]);
        let op = TransitionOperator::build(&graph, 1.0);

        // Each edge holds the whole in-weight of its target and half of a's budget.
        assert!((op.get(1, 0) - 0.5).abs() < EPS);
        assert!((op.get(2, 0) - 0.5).abs() < EPS);
        assert_eq!(op.diagonal(0), 0.0);
        assert!((op.diagonal(1) - 1.0).abs() < EPS);
        assert!((op.diagonal(2) - 1.0).abs() < EPS);
        assert_eq!(op.self_loop_patches(), 2);

        // Nothing flows into a.
        assert!(op.row(0).0.is_empty());
    }

    #[test]
    fn test_shared_target_leaves_deficit() {
        // a -> c, b -> c: c's in-weight is split, so each source keeps half.
        let graph = build_test_index(&[("a", "c"), ("b", "c")]);
        let op = TransitionOperator::build(&graph, 1.0);
        let (a, c, b) = (0, 1, 2);

        assert!((op.get(c, a) - 0.5).abs() < EPS);
        assert!((op.get(c, b) - 0.5).abs() < EPS);
        assert!((op.diagonal(a) - 0.5).abs() < EPS);
        assert!((op.diagonal(b) - 0.5).abs() < EPS);
        assert!((op.diagonal(c) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_alpha_and_weights() {
        // a -> b (3), a -> c (1); b and c have no other in-edges.
        let graph = build_weighted_test_index(&[("a", "b", 3.0), ("a", "c", 1.0)]);
        let op = TransitionOperator::build(&graph, 2.0);

        assert!((op.get(1, 0) - 0.5625).abs() < EPS);
        assert!((op.get(2, 0) - 0.0625).abs() < EPS);
        assert!((op.diagonal(0) - 0.375).abs() < EPS);
    }

    #[test]
    fn test_self_edge_patch_is_added_not_replaced() {
        // a -> a (1), a -> b (1); a's in-weight is only the self-edge.
        let graph = build_test_index(&[("a", "a"), ("a", "b")]);
        let op = TransitionOperator::build(&graph, 1.0);

        // c(a->a) = 1 * 0.5, c(a->b) = 1 * 0.5: column a already sums to 1.
        assert!((op.diagonal(0) - 0.5).abs() < EPS);

        let graph = build_test_index(&[("a", "a"), ("a", "b"), ("c", "b")]);
        let op = TransitionOperator::build(&graph, 1.0);
        // c(a->a) = 0.5, c(a->b) = 0.5 * 0.5 = 0.25, deficit 0.25 lands on the diagonal.
        assert!((op.diagonal(0) - 0.75).abs() < EPS);
        for sum in op.column_sums() {
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_weight_edges_contribute_nothing() {
        let graph = build_weighted_test_index(&[("a", "b", 0.0)]);
        let op = TransitionOperator::build(&graph, 1.0);
        assert_eq!(op.get(1, 0), 0.0);
        assert!((op.diagonal(0) - 1.0).abs() < EPS);
        assert!((op.diagonal(1) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_empty_operator() {
        let op = TransitionOperator::build(&GraphIndex::default(), 1.0);
        assert_eq!(op.dimension(), 0);
        assert_eq!(op.nnz(), 0);
        assert!(op.column_sums().is_empty());
    }
}
