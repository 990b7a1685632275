//! Gesture classifier: feature extraction, k-NN vote and gesture lookup
//!
//! Owns its training table explicitly; callers hold the classifier and pass it
//! by reference. All methods take `&self`, so one instance can serve several
//! hands (or threads) at once.

use crate::error::Result;
use crate::features::{extract_features, FeatureVector};
use crate::gesture::{GestureMap, Recognition};
use crate::hand::Hand;
use crate::knn::{validate_k, KNearest, Prediction};
use crate::model::TrainingSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Classifier settings, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Neighbors consulted per vote
    #[serde(default = "default_k")]
    pub k: usize,

    /// Training label to gesture mapping
    #[serde(default)]
    pub gestures: GestureMap,
}

fn default_k() -> usize {
    3
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            gestures: GestureMap::default(),
        }
    }
}

impl ClassifierConfig {
    /// Parse from JSON string; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub struct GestureClassifier {
    model: KNearest,
    config: ClassifierConfig,
}

impl GestureClassifier {
    /// Build a ready classifier over a loaded table.
    ///
    /// The configured `k` is checked against the table here. An empty table is
    /// accepted and reported as [`crate::Error::EmptyModel`] on first use.
    pub fn new(samples: TrainingSet, config: ClassifierConfig) -> Result<Self> {
        if !samples.is_empty() {
            validate_k(config.k, samples.len())?;
        }
        log::info!(
            "Gesture classifier ready: {} samples, labels {:?}, k = {}",
            samples.len(),
            samples.labels(),
            config.k
        );
        Ok(Self {
            model: KNearest::train(samples),
            config,
        })
    }

    pub fn from_csv(text: &str, config: ClassifierConfig) -> Result<Self> {
        Self::new(TrainingSet::from_csv(text)?, config)
    }

    pub fn load(path: impl AsRef<Path>, config: ClassifierConfig) -> Result<Self> {
        Self::new(TrainingSet::load(path)?, config)
    }

    /// Classifier over the bundled table with default settings
    pub fn bundled() -> Result<Self> {
        Self::new(TrainingSet::bundled()?, ClassifierConfig::default())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn training_set(&self) -> &TrainingSet {
        self.model.training_set()
    }

    /// Label voted by the `k` nearest samples
    pub fn classify(&self, vector: &[f32], k: usize) -> Result<i32> {
        Ok(self.find_nearest(vector, k)?.label)
    }

    /// Voted label plus the neighbors behind it
    pub fn find_nearest(&self, vector: &[f32], k: usize) -> Result<Prediction> {
        let query = FeatureVector::from_slice(vector)?;
        let prediction = self.model.find_nearest(&query, k)?;
        log::debug!(
            "k-NN vote: label {} from {:?}",
            prediction.label,
            prediction.neighbors
        );
        Ok(prediction)
    }

    /// Map a label to a gesture; unmapped labels are `Unknown`
    pub fn resolve(&self, label: i32) -> Recognition {
        self.config.gestures.resolve(label)
    }

    /// Neighbor vote for a hand using the configured `k`
    pub fn predict(&self, hand: &Hand) -> Result<Prediction> {
        let features = extract_features(hand)?;
        self.find_nearest(features.as_slice(), self.config.k)
    }

    /// Full pipeline for one hand: angles, vote, gesture lookup
    pub fn recognize(&self, hand: &Hand) -> Result<Recognition> {
        let prediction = self.predict(hand)?;
        Ok(self.resolve(prediction.label))
    }

    /// Recognize every hand of a frame independently, in input order
    pub fn recognize_all(&self, hands: &[Hand]) -> Vec<Result<Recognition>> {
        hands.iter().map(|hand| self.recognize(hand)).collect()
    }
}

impl std::fmt::Debug for GestureClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureClassifier")
            .field("samples", &self.model.training_set().len())
            .field("config", &self.config)
            .finish()
    }
}
