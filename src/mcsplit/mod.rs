//! mcsplit/mod.rs
//! Exact maximum-common-subgraph search by branch and bound over label classes
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::mcs::{CommonSubgraph, McsAlgorithm};

/// The McSplit algorithm (McCreesh, Prosser, Trimble 2017). Vertices of the
/// first graph play the pattern role and are committed first; the search is
/// exhaustive, so the returned mapping is a true maximum.
pub struct McSplit;

impl McsAlgorithm for McSplit {
    fn compute(&self, g1: &Graph, g2: &Graph) -> Result<CommonSubgraph> {
        let initial = vec![LabelClass::new(
            g1,
            (0..g1.n).collect(),
            (0..g2.n).collect(),
        )];
        let mut best = Vec::new();
        search(g1, g2, initial, &mut Vec::new(), &mut best);
        debug!(size = best.len(), "exact search finished");
        Ok(CommonSubgraph::from_matches(g1, g2.n, best, None))
    }
}

/// A set of still-compatible candidate pairs: every vertex in `g` has the same
/// adjacency relation to each committed pair as every vertex in `h`. The
/// maximum-degree vertex of `g` is cached because it drives both class
/// selection (tie-break) and branch-vertex selection.
///
/// `g` is never empty: splits are discarded when either side empties, and the
/// leave-unmatched copy is only re-inserted with at least one vertex left.
struct LabelClass {
    g: Vec<usize>,
    h: Vec<usize>,
    max_degree_g: usize,
    max_degree_vertex_g: usize,
}

impl LabelClass {
    fn new(g1: &Graph, g: Vec<usize>, h: Vec<usize>) -> Self {
        let mut max_degree_g = g1.degree_of(g[0]);
        let mut max_degree_vertex_g = g[0];
        for &vertex in &g[1..] {
            let degree = g1.degree_of(vertex);
            if degree > max_degree_g {
                max_degree_g = degree;
                max_degree_vertex_g = vertex;
            }
        }
        LabelClass { g, h, max_degree_g, max_degree_vertex_g }
    }

    /// How many pairs this class can still contribute to a mapping.
    fn candidate_bound(&self) -> usize {
        self.g.len().min(self.h.len())
    }

    fn branch_size(&self) -> usize {
        self.g.len().max(self.h.len())
    }
}

/// Smallest `max(|G|, |H|)` first, tie-break on the largest-degree vertex in
/// `G`. Keeps the branching factor down; any choice would stay correct.
fn select_class(classes: &[LabelClass]) -> usize {
    let mut selected = 0;
    for i in 1..classes.len() {
        let size = classes[i].branch_size();
        let selected_size = classes[selected].branch_size();
        if size < selected_size
            || (size == selected_size && classes[i].max_degree_g > classes[selected].max_degree_g)
        {
            selected = i;
        }
    }
    selected
}

fn search(
    g1: &Graph,
    g2: &Graph,
    mut classes: Vec<LabelClass>,
    current: &mut Vec<(usize, usize)>,
    best: &mut Vec<(usize, usize)>,
) {
    if current.len() > best.len() {
        *best = current.clone();
    }

    let bound: usize =
        current.len() + classes.iter().map(LabelClass::candidate_bound).sum::<usize>();
    if bound <= best.len() {
        return;
    }

    let selected = select_class(&classes);
    let v = classes[selected].max_degree_vertex_g;

    // Branch 1: match v with every candidate w. Each branch gets its own
    // label-class snapshot, split against the committed pair: vertices keep
    // sharing a class only if they agree on adjacency to both v and w.
    for hi in 0..classes[selected].h.len() {
        let w = classes[selected].h[hi];
        let mut children = Vec::new();
        for class in &classes {
            let g_adjacent: Vec<usize> =
                class.g.iter().copied().filter(|&x| g1.has_edge(v, x)).collect();
            let h_adjacent: Vec<usize> =
                class.h.iter().copied().filter(|&x| g2.has_edge(w, x)).collect();
            if !g_adjacent.is_empty() && !h_adjacent.is_empty() {
                children.push(LabelClass::new(g1, g_adjacent, h_adjacent));
            }

            let g_rest: Vec<usize> =
                class.g.iter().copied().filter(|&x| x != v && !g1.has_edge(v, x)).collect();
            let h_rest: Vec<usize> =
                class.h.iter().copied().filter(|&x| x != w && !g2.has_edge(w, x)).collect();
            if !g_rest.is_empty() && !h_rest.is_empty() {
                children.push(LabelClass::new(g1, g_rest, h_rest));
            }
        }
        current.push((v, w));
        search(g1, g2, children, current, best);
        current.pop();
    }

    // Branch 2: leave v unmatched for good. The class survives without it
    // when other candidates remain.
    let LabelClass { g, h, .. } = classes.remove(selected);
    if g.len() > 1 {
        let g_without_v: Vec<usize> = g.into_iter().filter(|&x| x != v).collect();
        classes.push(LabelClass::new(g1, g_without_v, h));
    }
    if !classes.is_empty() {
        search(g1, g2, classes, current, best);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// True iff the mapping is a valid common induced subgraph mapping: no
    /// vertex reused on either side, and every vertex pair agrees on
    /// adjacency in both graphs.
    fn is_valid_mapping(g1: &Graph, g2: &Graph, mcs: &CommonSubgraph) -> bool {
        let v1s = mcs.g1_vertices();
        let v2s = mcs.g2_vertices();
        for i in 0..v1s.len() {
            for j in 0..v1s.len() {
                if i != j && (v1s[i] == v1s[j] || v2s[i] == v2s[j]) {
                    return false;
                }
                if g1.has_edge(v1s[i], v1s[j]) != g2.has_edge(v2s[i], v2s[j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Exhaustive reference: largest common induced subgraph by trying, for
    /// every pattern vertex in order, to skip it or match it with any unused
    /// target vertex consistent with the partial mapping.
    fn brute_force_mcs_size(g1: &Graph, g2: &Graph) -> usize {
        fn extend(
            g1: &Graph,
            g2: &Graph,
            i: usize,
            pairs: &mut Vec<(usize, usize)>,
            used: &mut Vec<bool>,
            best: &mut usize,
        ) {
            if i == g1.n {
                *best = (*best).max(pairs.len());
                return;
            }
            extend(g1, g2, i + 1, pairs, used, best);
            for w in 0..g2.n {
                if used[w] {
                    continue;
                }
                if pairs.iter().all(|&(a, b)| g1.has_edge(a, i) == g2.has_edge(b, w)) {
                    used[w] = true;
                    pairs.push((i, w));
                    extend(g1, g2, i + 1, pairs, used, best);
                    pairs.pop();
                    used[w] = false;
                }
            }
        }

        let mut best = 0;
        extend(g1, g2, 0, &mut Vec::new(), &mut vec![false; g2.n], &mut best);
        best
    }

    fn case1() -> (Graph, Graph) {
        let g1 = Graph::from_edges(
            8,
            &[(0, 1), (1, 2), (1, 3), (1, 7), (2, 3), (3, 4), (3, 6), (4, 5), (5, 6), (6, 7)],
        )
        .unwrap();
        let g2 = Graph::from_edges(
            8,
            &[(0, 1), (0, 7), (1, 2), (2, 3), (2, 6), (3, 4), (5, 6), (6, 7)],
        )
        .unwrap();
        (g1, g2)
    }

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
    fn test_finds_maximum_for_8_vertex_graphs() {
        let (g1, g2) = case1();

        let mcs = McSplit.compute(&g1, &g2).unwrap();

        assert_eq!(mcs.len(), 6);
        assert!(is_valid_mapping(&g1, &g2, &mcs));
        assert!(mcs.genome.is_none());
    }

    #[test]
    fn test_finds_maximum_for_mini_graphs() {
        let g1 = Graph::from_edges(2, &[(0, 1)]).unwrap();
        let g2 = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();

        let mcs = McSplit.compute(&g1, &g2).unwrap();

        assert_eq!(mcs.len(), 2);
        assert!(is_valid_mapping(&g1, &g2, &mcs));
    }

    #[test]
    fn test_documented_example_has_size_four() {
        let (g1, g2) = case4();

        let mcs = McSplit.compute(&g1, &g2).unwrap();

        assert_eq!(mcs.len(), 4);
        assert!(is_valid_mapping(&g1, &g2, &mcs));
    }

    #[test]
    fn test_order_of_arguments_does_not_change_size() {
        let g1 = Graph::from_edges(5, &[(0, 3), (0, 4), (1, 2), (1, 4), (2, 4)]).unwrap();
        let g2 = Graph::from_edges(
            6,
            &[(0, 1), (0, 4), (1, 3), (1, 5), (2, 3), (2, 5), (3, 5), (4, 5)],
        )
        .unwrap();

        let forward = McSplit.compute(&g1, &g2).unwrap();
        let backward = McSplit.compute(&g2, &g1).unwrap();

        assert_eq!(forward.len(), 5);
        assert_eq!(backward.len(), 5);
        assert!(is_valid_mapping(&g1, &g2, &forward));
        assert!(is_valid_mapping(&g2, &g1, &backward));
    }

    #[test]
    fn test_identical_graphs_map_completely() {
        let (g1, _) = case1();

        let mcs = McSplit.compute(&g1, &g1).unwrap();

        assert_eq!(mcs.len(), g1.n);
        assert!(is_valid_mapping(&g1, &g1, &mcs));
    }

    #[test]
    fn test_single_vertex_graphs() {
        let g1 = Graph::from_edges(1, &[]).unwrap();
        let g2 = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();

        let mcs = McSplit.compute(&g1, &g2).unwrap();

        assert_eq!(mcs.len(), 1);
    }

    #[test]
    fn test_matches_brute_force_on_small_graphs() {
        let cases = [
            (
                Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap(),
                Graph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap(),
            ),
            (
                Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap(),
                Graph::from_edges(5, &[(0, 1), (1, 2), (1, 3), (3, 4)]).unwrap(),
            ),
            (
                Graph::from_edges(5, &[(0, 3), (0, 4), (1, 2), (1, 4), (2, 4)]).unwrap(),
                Graph::from_edges(5, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)]).unwrap(),
            ),
            (
                Graph::from_edges(6, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5)]).unwrap(),
                Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)])
                    .unwrap(),
            ),
        ];

        for (g1, g2) in &cases {
            let mcs = McSplit.compute(g1, g2).unwrap();

            assert_eq!(mcs.len(), brute_force_mcs_size(g1, g2));
            assert!(is_valid_mapping(g1, g2, &mcs));
        }
    }
}
