//! Rock-Paper-Scissors Hand Gesture Core
//!
//! Joint-angle features from 21 hand landmarks, classified by k-nearest
//! neighbors over a small labeled table. Compiles natively as a library and to
//! wasm32 with a wasm-bindgen session for browser hand trackers.

pub mod classifier;
mod dataset_format;
pub mod error;
pub mod features;
pub mod game;
pub mod gesture;
pub mod hand;
pub mod knn;
pub mod model;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod bridge;
        pub use bridge::GestureSession;
    }
}

pub use classifier::{ClassifierConfig, GestureClassifier};
pub use dataset_format::{COLUMN_COUNT, FEATURE_COUNT};
pub use error::{Error, Result};
pub use features::{extract_features, FeatureVector};
pub use game::{computer_move, judge, Outcome, Round};
pub use gesture::{Gesture, GestureMap, Recognition};
pub use glam::Vec3;
pub use hand::{Finger, Hand, Joint, Landmark};
pub use knn::{KNearest, Neighbor, Prediction};
pub use model::{TrainingSample, TrainingSet};
