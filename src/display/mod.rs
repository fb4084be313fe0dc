//! display/mod.rs
//! Text rendering of subgraph and supergraph results
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::fmt::Write;

use ndarray::Array2;

use crate::mcs::{CommonSubgraph, Pair};
use crate::supergraph::CommonSupergraph;

/// Renders a maximum-common-subgraph result. `swapped` indicates that
/// orchestration swapped the two input graphs to satisfy the heuristic
/// engine's ordering; the mapping table puts the values back under the
/// columns of the graphs as the user supplied them.
pub fn subgraph_report(mcs: &CommonSubgraph, swapped: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number of vertices in maximum common subgraph: {}", mcs.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "Adjacency list of the maximum common subgraph:");
    out.push_str(&adjacency_list(&mcs.matrix));
    let _ = writeln!(out);
    let _ = writeln!(out, "Vertex mapping table:");
    out.push_str(&mapping_table(&mcs.mapping, swapped));
    if let Some(genome) = &mcs.genome {
        let _ = writeln!(out);
        out.push_str(&genome_section(genome, mcs.n1()));
    }
    out
}

/// Renders a minimum-common-supergraph result; same sections as the subgraph
/// report, over the extended mapping and matrix.
pub fn supergraph_report(result: &CommonSupergraph, swapped: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Number of vertices in minimum common supergraph: {}",
        result.matrix.nrows()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Adjacency list of the minimum common supergraph:");
    out.push_str(&adjacency_list(&result.matrix));
    let _ = writeln!(out);
    let _ = writeln!(out, "Vertex mapping table:");
    out.push_str(&mapping_table(&result.mapping, swapped));
    if let Some(genome) = &result.subgraph.genome {
        let _ = writeln!(out);
        out.push_str(&genome_section(genome, result.subgraph.n1()));
    }
    out
}

/// One line per vertex with at least one edge: `v: neighbors...`.
fn adjacency_list(matrix: &Array2<u8>) -> String {
    let mut out = String::new();
    for i in 0..matrix.nrows() {
        let neighbors: Vec<String> = (0..matrix.ncols())
            .filter(|&j| matrix[[i, j]] == 1)
            .map(|j| j.to_string())
            .collect();
        if !neighbors.is_empty() {
            let _ = writeln!(out, "{}: {}", i, neighbors.join(" "));
        }
    }
    out
}

fn mapping_table(mapping: &[Pair], swapped: bool) -> String {
    let mut out = String::from(" idx |  G1 |  G2\n");
    for (i, pair) in mapping.iter().enumerate() {
        let (left, right) = if swapped { (pair.v2, pair.v1) } else { (pair.v1, pair.v2) };
        let _ = writeln!(out, "{:>4} | {:>3} | {:>3}", i, side(left), side(right));
    }
    out
}

fn side(vertex: Option<usize>) -> String {
    vertex.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn genome_section(genome: &[usize], n1: usize) -> String {
    let mut out = String::from(
        "Best found genome (vertex mapping before applying the reduction function):\n",
    );
    for (v1, v2) in genome.iter().take(n1).enumerate() {
        let _ = writeln!(out, "{v1}: {v2}");
    }
    out
}
