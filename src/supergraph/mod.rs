//! supergraph/mod.rs
//! Minimum common supergraph construction on top of any subgraph engine
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use ndarray::Array2;

use crate::error::Result;
use crate::graph::Graph;
use crate::mcs::{CommonSubgraph, McsAlgorithm, Pair};

/// A common supergraph of both input graphs, built around a common subgraph:
/// the mapping lists the subgraph pairs first, then each unmatched
/// first-graph vertex (absent second side), then each unmatched second-graph
/// vertex (absent first side). The matrix embeds the subgraph block and the
/// cross edges copied from the original graphs, so both inputs appear as
/// induced subgraphs. Minimal exactly when the underlying subgraph is maximal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSupergraph {
    pub subgraph: CommonSubgraph,
    pub mapping: Vec<Pair>,
    pub matrix: Array2<u8>,
}

impl CommonSupergraph {
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Runs the engine once, then stitches the non-matched vertices of both
/// graphs onto the common-subgraph block. Purely derivational: cross edges
/// are read from the original adjacency matrices, never from the induced one.
pub fn compute(
    g1: &Graph,
    g2: &Graph,
    algorithm: &dyn McsAlgorithm,
) -> Result<CommonSupergraph> {
    let subgraph = algorithm.compute(g1, g2)?;

    let k = subgraph.len();
    let unmatched1 = subgraph.unmatched_g1();
    let unmatched2 = subgraph.unmatched_g2();
    let n = k + unmatched1.len() + unmatched2.len();

    let mut matrix = Array2::zeros((n, n));
    for i in 0..k {
        for j in 0..k {
            matrix[[i, j]] = subgraph.matrix[[i, j]];
        }
    }

    let mut mapping = subgraph.mapping.clone();

    // Unmatched first-graph vertices: edges to the block and to each other.
    let mcs_v1 = subgraph.g1_vertices();
    for (offset, &v) in unmatched1.iter().enumerate() {
        let row = k + offset;
        mapping.push(Pair::only_g1(v));
        for (mcs_index, &u) in mcs_v1.iter().enumerate() {
            if g1.has_edge(v, u) {
                matrix[[mcs_index, row]] = 1;
                matrix[[row, mcs_index]] = 1;
            }
        }
    }
    for i in 0..unmatched1.len() {
        for j in i + 1..unmatched1.len() {
            if g1.has_edge(unmatched1[i], unmatched1[j]) {
                matrix[[k + i, k + j]] = 1;
                matrix[[k + j, k + i]] = 1;
            }
        }
    }

    // Unmatched second-graph vertices, symmetric to the block above.
    let base = k + unmatched1.len();
    let mcs_v2 = subgraph.g2_vertices();
    for (offset, &v) in unmatched2.iter().enumerate() {
        let row = base + offset;
        mapping.push(Pair::only_g2(v));
        for (mcs_index, &u) in mcs_v2.iter().enumerate() {
            if g2.has_edge(v, u) {
                matrix[[mcs_index, row]] = 1;
                matrix[[row, mcs_index]] = 1;
            }
        }
    }
    for i in 0..unmatched2.len() {
        for j in i + 1..unmatched2.len() {
            if g2.has_edge(unmatched2[i], unmatched2[j]) {
                matrix[[base + i, base + j]] = 1;
                matrix[[base + j, base + i]] = 1;
            }
        }
    }

    Ok(CommonSupergraph { subgraph, mapping, matrix })
}
