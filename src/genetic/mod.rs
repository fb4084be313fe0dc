//! genetic/mod.rs
//! Heuristic maximum-common-subgraph search by a tribal genetic algorithm
//! over pairwise-distance distortion
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

mod genome;

pub use genome::Genome;
use genome::Population;

use std::collections::VecDeque;

use ndarray::Array2;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::mcs::{CommonSubgraph, McsAlgorithm};

pub(crate) type DistanceMatrix = Array2<i64>;

/// Parameters of the genetic engine. The defaults are the reference values
/// from the paper the algorithm follows; `seed` feeds a fresh deterministic
/// random stream on every `compute` call, so identical inputs and seed always
/// reproduce identical output.
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    pub n_genomes: usize,
    pub n_generations: usize,
    /// Every `n_cb`-th generation the whole population is shuffled instead of
    /// shuffling within tribes only.
    pub n_cb: usize,
    pub n_tribes: usize,
    pub p_crossover: f64,
    pub p_mutation: f64,
    pub seed: u64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            n_genomes: 256,
            n_generations: 512,
            n_cb: 32,
            n_tribes: 4,
            p_crossover: 0.9,
            p_mutation: 0.5,
            seed: 13,
        }
    }
}

impl GeneticConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_genomes == 0 {
            return Err(invalid("population size must be at least 1"));
        }
        if self.n_generations == 0 {
            return Err(invalid("number of generations must be at least 1"));
        }
        if self.n_cb == 0 || self.n_cb >= self.n_generations {
            return Err(invalid(
                "global shuffle interval must be at least 1 and smaller than the number of generations",
            ));
        }
        if self.n_tribes == 0 {
            return Err(invalid("number of tribes must be at least 1"));
        }
        if self.n_genomes % self.n_tribes != 0 {
            return Err(invalid("population size must be divisible by the number of tribes"));
        }
        if (self.n_genomes / self.n_tribes) % 2 != 0 {
            return Err(invalid("tribe size must be even so tribes can be paired for crossover"));
        }
        for (name, p) in [("crossover", self.p_crossover), ("mutation", self.p_mutation)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(&format!(
                    "probability of {name} must be between 0 and 1, got {p}"
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidGeneticConfig(message.to_string())
}

/// Population-based heuristic. Fitness is the total distortion of pairwise
/// shortest-path distances under the candidate vertex mapping (lower is
/// better, 0 means a distance-preserving embedding of the whole first graph);
/// the winning genome is trimmed to the largest internally consistent mapping
/// by the reduction step. Requires the first graph to be no bigger than the
/// second.
pub struct Genetic {
    config: GeneticConfig,
}

impl Genetic {
    pub fn new(config: GeneticConfig) -> Result<Self> {
        config.validate()?;
        Ok(Genetic { config })
    }
}

impl McsAlgorithm for Genetic {
    fn compute(&self, g1: &Graph, g2: &Graph) -> Result<CommonSubgraph> {
        if g1.n > g2.n {
            return Err(Error::PatternLargerThanTarget { n1: g1.n, n2: g2.n });
        }

        let d1 = distance_matrix(g1);
        let d2 = distance_matrix(g2);
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        let mut population = Population::generate(
            self.config.n_genomes,
            g2.n,
            self.config.n_tribes,
            &d1,
            &d2,
            &mut rng,
        );
        let mut best = population.best().clone();
        let mut tribe_order: Vec<usize> = (0..population.tribe_size).collect();

        for generation in 0..self.config.n_generations {
            if generation % self.config.n_cb == 0 {
                population.shuffle_all(&mut rng);
            } else {
                population.shuffle_within_tribes(&mut rng);
            }

            for tribe in 0..self.config.n_tribes {
                tribe_order.shuffle(&mut rng);
                for i in (1..population.tribe_size).step_by(2) {
                    if rng.random::<f64>() > self.config.p_crossover {
                        continue;
                    }
                    let tribe_start = tribe * population.tribe_size;
                    let index1 = tribe_start + tribe_order[i - 1];
                    let index2 = tribe_start + tribe_order[i];
                    self.crossbreed(&mut population, index1, index2, &d1, &d2, &mut best);
                }
            }

            for genome in population.genomes.iter_mut() {
                if rng.random::<f64>() <= self.config.p_mutation {
                    genome.mutate(&d1, &d2, &mut rng);
                    if genome.score < best.score {
                        best = genome.clone();
                    }
                }
            }

            trace!(generation, best_score = best.score, "generation finished");
        }

        let matches = reduce(&d1, &d2, &best.genes);
        debug!(size = matches.len(), score = best.score, "heuristic search finished");
        Ok(CommonSubgraph::from_matches(g1, g2.n, matches, Some(best.genes)))
    }
}

impl Genetic {
    /// Crosses the genomes at the two slots and writes back the two
    /// lowest-score individuals of {parents, children}: the best of the four
    /// lands in the slot that held the lower score, the runner-up in the
    /// other. Parents survive when they outperform their children.
    fn crossbreed(
        &self,
        population: &mut Population,
        index1: usize,
        index2: usize,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
        best: &mut Genome,
    ) {
        let parent1 = &population.genomes[index1];
        let parent2 = &population.genomes[index2];
        let (slot_better, slot_worse) = if parent1.score <= parent2.score {
            (index1, index2)
        } else {
            (index2, index1)
        };

        let (child1, child2) = parent1.crossover(parent2, d1, d2);
        let mut four = vec![parent1.clone(), parent2.clone(), child1, child2];
        four.sort_by_key(|genome| genome.score);

        let mut winners = four.into_iter();
        let winner = winners.next().unwrap();
        let runner_up = winners.next().unwrap();

        if winner.score < best.score {
            *best = winner.clone();
        }
        population.genomes[slot_better] = winner;
        population.genomes[slot_worse] = runner_up;
    }
}

/// All-pairs shortest-path distances by breadth-first search from every
/// vertex. Rows are independent, so they are computed in parallel; the graphs
/// are connected, so every distance is finite and at most `n - 1`.
pub(crate) fn distance_matrix(g: &Graph) -> DistanceMatrix {
    let rows: Vec<Vec<i64>> =
        (0..g.n).into_par_iter().map(|source| bfs_distances(g, source)).collect();

    let mut d = Array2::zeros((g.n, g.n));
    for (i, row) in rows.into_iter().enumerate() {
        for (j, distance) in row.into_iter().enumerate() {
            d[[i, j]] = distance;
        }
    }
    d
}

fn bfs_distances(g: &Graph, source: usize) -> Vec<i64> {
    let mut distances = vec![-1; g.n];
    distances[source] = 0;
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        for w in 0..g.n {
            if g.m[[v, w]] == 1 && distances[w] < 0 {
                distances[w] = distances[v] + 1;
                queue.push_back(w);
            }
        }
    }
    distances
}

/// Total distortion of pairwise distances under the candidate mapping
/// `i -> genes[i]`. Only the first-graph prefix of the genome is read.
pub(crate) fn fitness(d1: &DistanceMatrix, d2: &DistanceMatrix, genes: &[usize]) -> i64 {
    let n1 = d1.nrows();
    let mut sum = 0;
    for i in 0..n1 {
        for j in 0..n1 {
            sum += (d1[[i, j]] - d2[[genes[i], genes[j]]]).abs();
        }
    }
    sum
}

/// Trims a possibly imperfect permutation down to the largest candidate
/// mapping with no pairwise distance mismatch. For every prefix length the
/// prefix is skipped outright, then the suffix is scanned greedily, skipping
/// any vertex whose inclusion would distort the window so far; the largest
/// surviving candidate across all prefixes wins.
pub(crate) fn reduce(
    d1: &DistanceMatrix,
    d2: &DistanceMatrix,
    genes: &[usize],
) -> Vec<(usize, usize)> {
    let n1 = d1.nrows();
    let mut skipped: Vec<i64> = vec![-1; n1];
    let mut best: Vec<(usize, usize)> = Vec::new();

    for skip in 0..n1.saturating_sub(1) {
        let round = skip as i64;
        for mark in skipped.iter_mut().take(skip) {
            *mark = round;
        }
        for i in skip..n1 {
            let mut distortion = 0;
            for j in skip..=i {
                if skipped[j] == round {
                    continue;
                }
                for k in skip..=i {
                    if skipped[k] == round {
                        continue;
                    }
                    distortion += (d1[[j, k]] - d2[[genes[j], genes[k]]]).abs();
                }
            }
            if distortion > 0 {
                skipped[i] = round;
            }
        }

        let candidate: Vec<(usize, usize)> =
            (0..n1).filter(|&i| skipped[i] < round).map(|i| (i, genes[i])).collect();
        if candidate.len() > best.len() {
            best = candidate;
        }
    }
    best
}
