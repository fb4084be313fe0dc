//! error.rs
//! Error taxonomy shared by the whole crate
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before a search starts. Searches themselves
/// are deterministic and never fail: a `Graph` that passed construction and a
/// `GeneticConfig` that passed validation cannot produce an error later on.
#[derive(Error, Debug)]
pub enum Error {
    // Graph invariant violations, raised by `Graph::new`.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("adjacency matrix must be {n}x{n}, got {rows}x{cols}")]
    MatrixShape { n: usize, rows: usize, cols: usize },

    #[error("adjacency matrix entry [{i}][{j}] is {value}, graph must be unweighted (0 or 1)")]
    NotBinary { i: usize, j: usize, value: u8 },

    #[error("vertex {0} has an edge to itself, self loops are forbidden")]
    SelfLoop(usize),

    #[error("adjacency matrix is not symmetric, vertices {i} and {j} disagree")]
    NotSymmetric { i: usize, j: usize },

    #[error("graph must be connected, vertex {0} is unreachable from vertex 0")]
    Disconnected(usize),

    // Configuration errors, raised before any search work begins.
    #[error("invalid genetic configuration: {0}")]
    InvalidGeneticConfig(String),

    #[error("first graph ({n1} vertices) must not be bigger than second graph ({n2} vertices)")]
    PatternLargerThanTarget { n1: usize, n2: usize },

    // Input reading.
    #[error("error reading input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input: expected an integer, got {token:?}")]
    Parse { token: String },

    #[error("malformed input: file ended while reading {expected}")]
    TruncatedInput { expected: &'static str },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MatrixShape { n: 4, rows: 4, cols: 3 };
        assert!(err.to_string().contains("4x4"));

        let err = Error::Disconnected(7);
        assert!(err.to_string().contains("vertex 7"));

        let err = Error::PatternLargerThanTarget { n1: 6, n2: 5 };
        assert!(err.to_string().contains("6 vertices"));
    }
}
