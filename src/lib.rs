//! lib.rs
//! Maximum common subgraph and minimum common supergraph of two undirected,
//! unweighted, connected graphs, by exact branch-and-bound (McSplit) or a
//! tribal genetic heuristic
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html
// ================================================================================================
pub mod display;
pub mod error;
pub mod genetic;
pub mod graph;
pub mod input;
pub mod mcs;
pub mod mcsplit;
pub mod supergraph;
// ================================================================================================
pub use error::{Error, Result};
pub use genetic::{Genetic, GeneticConfig};
pub use graph::Graph;
pub use mcs::{CommonSubgraph, McsAlgorithm, Pair};
pub use mcsplit::McSplit;
pub use supergraph::CommonSupergraph;
// ================================================================================================
