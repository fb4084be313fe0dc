//! mcs/mod.rs
//! Common result model shared by both search engines and the engine contract
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use ndarray::Array2;
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::graph::Graph;

/// One entry of a vertex mapping. `v1` is a vertex of the first graph, `v2`
/// of the second. A side is `None` only in supergraph mappings, where it means
/// the vertex exists in just one of the source graphs; subgraph mappings
/// always carry both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub v1: Option<usize>,
    pub v2: Option<usize>,
}

impl Pair {
    pub fn matched(v1: usize, v2: usize) -> Self {
        Pair { v1: Some(v1), v2: Some(v2) }
    }

    pub fn only_g1(v1: usize) -> Self {
        Pair { v1: Some(v1), v2: None }
    }

    pub fn only_g2(v2: usize) -> Self {
        Pair { v1: None, v2: Some(v2) }
    }
}

/// A common induced subgraph of two graphs: the vertex mapping (sorted by
/// `v1`, no vertex used twice on either side) together with the induced
/// adjacency matrix, which mirrors the first graph restricted to the mapped
/// vertices. Edges agree between mapped pairs by construction, so the matrix
/// equally describes the second graph's induced subgraph.
///
/// `genome` is the winning permutation when the result came from the genetic
/// engine, and absent for exact results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSubgraph {
    pub mapping: Vec<Pair>,
    pub matrix: Array2<u8>,
    pub genome: Option<Vec<usize>>,
    n1: usize,
    n2: usize,
}

impl CommonSubgraph {
    /// Builds the result from committed `(v1, v2)` matches. Sorts by `v1` and
    /// derives the induced matrix from the first graph.
    pub fn from_matches(
        g1: &Graph,
        n2: usize,
        mut matches: Vec<(usize, usize)>,
        genome: Option<Vec<usize>>,
    ) -> Self {
        matches.sort_by_key(|&(v1, _)| v1);

        let k = matches.len();
        let mut matrix = Array2::zeros((k, k));
        for i in 0..k {
            for j in 0..k {
                matrix[[i, j]] = g1.m[[matches[i].0, matches[j].0]];
            }
        }

        let mapping = matches.into_iter().map(|(v1, v2)| Pair::matched(v1, v2)).collect();
        CommonSubgraph { mapping, matrix, genome, n1: g1.n, n2 }
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn from_genetic(&self) -> bool {
        self.genome.is_some()
    }

    /// Vertex count of the first source graph.
    pub fn n1(&self) -> usize {
        self.n1
    }

    /// Vertex count of the second source graph.
    pub fn n2(&self) -> usize {
        self.n2
    }

    /// Mapped vertices of the first graph, in mapping order.
    pub fn g1_vertices(&self) -> Vec<usize> {
        self.mapping.iter().filter_map(|pair| pair.v1).collect()
    }

    /// Mapped vertices of the second graph, in mapping order.
    pub fn g2_vertices(&self) -> Vec<usize> {
        self.mapping.iter().filter_map(|pair| pair.v2).collect()
    }

    /// Vertices of the first graph absent from the mapping, ascending.
    pub fn unmatched_g1(&self) -> Vec<usize> {
        let used: FxHashSet<usize> = self.g1_vertices().into_iter().collect();
        (0..self.n1).filter(|v| !used.contains(v)).collect()
    }

    /// Vertices of the second graph absent from the mapping, ascending.
    pub fn unmatched_g2(&self) -> Vec<usize> {
        let used: FxHashSet<usize> = self.g2_vertices().into_iter().collect();
        (0..self.n2).filter(|v| !used.contains(v)).collect()
    }
}

/// The contract both engines implement and the supergraph builder consumes.
/// Callers pick an engine; nothing downstream depends on which one ran.
pub trait McsAlgorithm {
    fn compute(&self, g1: &Graph, g2: &Graph) -> Result<CommonSubgraph>;
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    fn case4() -> (Graph, Graph) {
        let g1 = Graph::from_edges(5, &[(0, 3), (0, 4), (1, 2), (1, 4), (2, 4)]).unwrap();
        let g2 = Graph::from_edges(
            6,
            &[
                (0, 1),
                (0, 2),
                (0, 4),
                (1, 3),
                (1, 5),
                (2, 3),
                (2, 4),
                (2, 5),
                (3, 5),
                (4, 5),
            ],
        )
        .unwrap();
        (g1, g2)
    }

    #[test]
    fn test_induced_matrix_mirrors_first_graph() {
        let (g1, g2) = case4();

        let mcs =
            CommonSubgraph::from_matches(&g1, g2.n, vec![(0, 1), (1, 2), (2, 4), (4, 0)], None);

        // Rows/columns follow g1 vertices 0, 1, 2, 4.
        assert_eq!(
            mcs.matrix,
            array![[0, 0, 0, 1], [0, 0, 1, 1], [0, 1, 0, 1], [1, 1, 1, 0]]
        );
    }

    #[test]
    fn test_mapping_is_sorted_by_v1() {
        let (g1, g2) = case4();

        let mcs =
            CommonSubgraph::from_matches(&g1, g2.n, vec![(4, 0), (0, 1), (2, 4), (1, 2)], None);

        assert_eq!(mcs.g1_vertices(), vec![0, 1, 2, 4]);
        assert_eq!(mcs.g2_vertices(), vec![1, 2, 4, 0]);
    }

    #[test]
    fn test_unmatched_g1() {
        let (g1, g2) = case4();
        let mcs =
            CommonSubgraph::from_matches(&g1, g2.n, vec![(0, 1), (1, 2), (2, 4), (4, 0)], None);

        assert_eq!(mcs.unmatched_g1(), vec![3]);
    }

    #[test]
    fn test_unmatched_g2() {
        let (g1, g2) = case4();
        let mcs =
            CommonSubgraph::from_matches(&g1, g2.n, vec![(0, 1), (1, 2), (2, 4), (4, 0)], None);

        assert_eq!(mcs.unmatched_g2(), vec![3, 5]);
    }

    #[test]
    fn test_genome_marks_heuristic_results() {
        let (g1, g2) = case4();

        let exact = CommonSubgraph::from_matches(&g1, g2.n, vec![(0, 1)], None);
        let heuristic =
            CommonSubgraph::from_matches(&g1, g2.n, vec![(0, 1)], Some(vec![1, 2, 4, 0, 3, 5]));

        assert!(!exact.from_genetic());
        assert!(heuristic.from_genetic());
    }
}
