//! input/mod.rs
//! Text input: two adjacency matrices separated by whitespace
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Reads an input file holding `n1`, an `n1 x n1` matrix, `n2`, an `n2 x n2`
/// matrix, all as integers separated by arbitrary whitespace. Both graphs are
/// fully validated before being returned.
pub fn read_file(path: impl AsRef<Path>) -> Result<(Graph, Graph)> {
    parse(&fs::read_to_string(path)?)
}

pub fn parse(text: &str) -> Result<(Graph, Graph)> {
    let mut tokens = text.split_whitespace();
    let g1 = parse_graph(&mut tokens)?;
    let g2 = parse_graph(&mut tokens)?;
    Ok((g1, g2))
}

fn parse_graph<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Graph> {
    let n: usize = next_value(tokens, "a vertex count")?;
    let mut m = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            m[[i, j]] = next_value(tokens, "an adjacency matrix entry")?;
        }
    }
    Graph::new(n, m)
}

fn next_value<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<T> {
    let token = tokens.next().ok_or(Error::TruncatedInput { expected })?;
    token.parse().map_err(|_| Error::Parse { token: token.to_string() })
}
