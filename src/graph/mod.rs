//! graph/mod.rs
//! Adjacency-matrix graph model and its structural invariants
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use ndarray::Array2;

use crate::error::{Error, Result};

/// An undirected, unweighted, connected graph over vertices `0..n`.
///
/// The adjacency matrix is validated once at construction (square, entries
/// 0/1, zero diagonal, symmetric, connected) and never mutated afterwards, so
/// every computation downstream can trust the invariants without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub n: usize,
    pub m: Array2<u8>,
}

impl Graph {
    pub fn new(n: usize, m: Array2<u8>) -> Result<Self> {
        let graph = Graph { n, m };
        graph.validate_shape()?;
        graph.validate_entries()?;
        graph.validate_connected()?;
        Ok(graph)
    }

    /// Convenience constructor from an undirected edge list.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut m = Array2::zeros((n, n));
        for &(u, v) in edges {
            m[[u, v]] = 1;
            m[[v, u]] = 1;
        }
        Self::new(n, m)
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.m[[u, v]] == 1
    }

    pub fn degree_of(&self, vertex: usize) -> usize {
        self.m.row(vertex).iter().filter(|&&e| e == 1).count()
    }

    /// Undirected edges as `(u, v)` with `u < v`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for i in 0..self.n {
            for j in i + 1..self.n {
                if self.m[[i, j]] == 1 {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    pub fn num_edges(&self) -> usize {
        self.edges().len()
    }

    fn validate_shape(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::EmptyGraph);
        }
        let (rows, cols) = self.m.dim();
        if rows != self.n || cols != self.n {
            return Err(Error::MatrixShape { n: self.n, rows, cols });
        }
        Ok(())
    }

    fn validate_entries(&self) -> Result<()> {
        for i in 0..self.n {
            if self.m[[i, i]] != 0 {
                return Err(Error::SelfLoop(i));
            }
            for j in 0..self.n {
                let value = self.m[[i, j]];
                if value > 1 {
                    return Err(Error::NotBinary { i, j, value });
                }
                if j > i && self.m[[i, j]] != self.m[[j, i]] {
                    return Err(Error::NotSymmetric { i, j });
                }
            }
        }
        Ok(())
    }

    /// Every vertex must be reachable from vertex 0.
    fn validate_connected(&self) -> Result<()> {
        let mut visited = vec![false; self.n];
        let mut stack = vec![0];
        visited[0] = true;
        while let Some(v) = stack.pop() {
            for w in 0..self.n {
                if !visited[w] && self.m[[v, w]] == 1 {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }
        match visited.iter().position(|&seen| !seen) {
            Some(vertex) => Err(Error::Disconnected(vertex)),
            None => Ok(()),
        }
    }
}
