//! genetic/genome.rs
//! Permutation genomes and the tribal population they live in
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use rand::Rng;
use rand::seq::SliceRandom;

use super::{DistanceMatrix, fitness};

/// A candidate solution: a permutation of `0..len` mapping vertex `i` of the
/// first graph to vertex `genes[i]` of the second. The genome spans the full
/// second-graph vertex range even though fitness only reads the first-graph
/// prefix; cycle crossover needs the complete permutation to stay closed.
///
/// `score` is the cached fitness of `genes` (lower is better) and is kept
/// consistent on every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    pub genes: Vec<usize>,
    pub score: i64,
}

impl Genome {
    pub(crate) fn with_score(genes: Vec<usize>, d1: &DistanceMatrix, d2: &DistanceMatrix) -> Self {
        let score = fitness(d1, d2, &genes);
        Genome { genes, score }
    }

    pub(crate) fn random<R: Rng>(
        len: usize,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
        rng: &mut R,
    ) -> Self {
        let mut genes: Vec<usize> = (0..len).collect();
        genes.shuffle(rng);
        Self::with_score(genes, d1, d2)
    }

    /// Hill-climbing point mutation: swap two distinct positions and keep the
    /// swap only when the score strictly decreases, otherwise roll it back.
    /// Equal-score swaps are discarded.
    pub(crate) fn mutate<R: Rng>(
        &mut self,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
        rng: &mut R,
    ) {
        if self.genes.len() < 2 {
            return;
        }
        let index1 = rng.random_range(0..self.genes.len());
        let mut index2 = rng.random_range(0..self.genes.len() - 1);
        if index2 == index1 {
            index2 += 1;
        }

        self.genes.swap(index1, index2);
        let new_score = fitness(d1, d2, &self.genes);
        if new_score < self.score {
            self.score = new_score;
        } else {
            self.genes.swap(index1, index2);
        }
    }

    /// Cycle crossover. Positions are partitioned into cycles by repeatedly
    /// hopping to where the other parent's value lives in this genome;
    /// even-numbered cycles keep this parent's values in the first child,
    /// odd-numbered cycles swap. Both children are therefore permutations of
    /// the same base set.
    pub(crate) fn crossover(
        &self,
        other: &Genome,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
    ) -> (Genome, Genome) {
        let n_genes = self.genes.len();

        // position[value] = index of value in self.genes, for O(1) cycle hops
        let mut position = vec![0; n_genes];
        for (i, &value) in self.genes.iter().enumerate() {
            position[value] = i;
        }

        let mut child1: Vec<Option<usize>> = vec![None; n_genes];
        let mut child2: Vec<Option<usize>> = vec![None; n_genes];
        let mut n_cycle = 0;
        for i in 0..n_genes {
            if child1[i].is_some() {
                continue;
            }
            let mut j = i;
            while child1[j].is_none() {
                if n_cycle % 2 == 0 {
                    child1[j] = Some(self.genes[j]);
                    child2[j] = Some(other.genes[j]);
                } else {
                    child1[j] = Some(other.genes[j]);
                    child2[j] = Some(self.genes[j]);
                }
                j = position[other.genes[j]];
            }
            n_cycle += 1;
        }

        let genes1 = child1.into_iter().map(|gene| gene.unwrap()).collect();
        let genes2 = child2.into_iter().map(|gene| gene.unwrap()).collect();
        (Self::with_score(genes1, d1, d2), Self::with_score(genes2, d1, d2))
    }
}

/// A fixed-size population split into contiguous equal-size tribes. Owned by
/// one engine run and rebuilt per call; crossover pairs up genomes within a
/// tribe, so the tribe size must be even.
pub(crate) struct Population {
    pub genomes: Vec<Genome>,
    pub tribe_size: usize,
}

impl Population {
    pub fn generate<R: Rng>(
        n_genomes: usize,
        genome_len: usize,
        n_tribes: usize,
        d1: &DistanceMatrix,
        d2: &DistanceMatrix,
        rng: &mut R,
    ) -> Self {
        let genomes = (0..n_genomes).map(|_| Genome::random(genome_len, d1, d2, rng)).collect();
        Population { genomes, tribe_size: n_genomes / n_tribes }
    }

    pub fn shuffle_all<R: Rng>(&mut self, rng: &mut R) {
        self.genomes.shuffle(rng);
    }

    pub fn shuffle_within_tribes<R: Rng>(&mut self, rng: &mut R) {
        for tribe in self.genomes.chunks_mut(self.tribe_size) {
            tribe.shuffle(rng);
        }
    }

    pub fn best(&self) -> &Genome {
        self.genomes.iter().min_by_key(|genome| genome.score).unwrap()
    }
}
