//! k-nearest-neighbor search and voting over a [`TrainingSet`].
//!
//! Neighbor order: ascending Euclidean distance, equal distances in training
//! table order (stable sort). Vote: most frequent label among the k nearest;
//! when several labels share the top count, the one whose closest member comes
//! first in neighbor order wins.

use crate::error::{Error, Result};
use crate::features::FeatureVector;
use crate::model::TrainingSet;
use serde::Serialize;

/// One training sample selected as a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Row of the sample in the training table
    pub index: usize,
    pub label: i32,
    pub distance: f32,
}

/// Voted label together with the neighbors that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: i32,
    pub neighbors: Vec<Neighbor>,
}

/// Check `k` against a table of `samples` rows: positive, odd, not larger than the table
pub fn validate_k(k: usize, samples: usize) -> Result<()> {
    if k == 0 || k % 2 == 0 || k > samples {
        return Err(Error::InvalidNeighborCount { k, samples });
    }
    Ok(())
}

/// Nearest-neighbor model; training is just taking ownership of the table.
#[derive(Debug, Clone)]
pub struct KNearest {
    samples: TrainingSet,
}

impl KNearest {
    pub fn train(samples: TrainingSet) -> Self {
        Self { samples }
    }

    pub fn training_set(&self) -> &TrainingSet {
        &self.samples
    }

    /// Find the k nearest samples and vote on a label
    pub fn find_nearest(&self, query: &FeatureVector, k: usize) -> Result<Prediction> {
        if self.samples.is_empty() {
            return Err(Error::EmptyModel);
        }
        validate_k(k, self.samples.len())?;

        let mut neighbors: Vec<Neighbor> = self
            .samples
            .samples()
            .iter()
            .enumerate()
            .map(|(index, sample)| Neighbor {
                index,
                label: sample.label,
                distance: query.distance(&sample.features),
            })
            .collect();

        // Stable: equal distances keep table order
        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);

        let label = vote(&neighbors).ok_or(Error::EmptyModel)?;
        Ok(Prediction { label, neighbors })
    }
}

/// Plurality vote over neighbors sorted nearest first.
///
/// Labels are tallied in order of first appearance, so on a tied count the
/// earlier entry (the nearest candidate) is kept.
fn vote(neighbors: &[Neighbor]) -> Option<i32> {
    let mut tally: Vec<(i32, usize)> = Vec::new();
    for neighbor in neighbors {
        match tally.iter_mut().find(|(label, _)| *label == neighbor.label) {
            Some((_, count)) => *count += 1,
            None => tally.push((neighbor.label, 1)),
        }
    }

    let mut best: Option<(i32, usize)> = None;
    for (label, count) in tally {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}
