//! Browser bridge - JS ↔ Rust communication
//!
//! The hand tracker runs in JavaScript and hands over each detected hand as a
//! flat `Float32Array` of 63 coordinates. Frames that can't be classified are
//! logged and reported as "no gesture"; the render loop decides what to draw.

use crate::classifier::{ClassifierConfig, GestureClassifier};
use crate::game::{computer_move, Round};
use crate::gesture::Gesture;
use crate::hand::Hand;
use crate::knn::Prediction;
use wasm_bindgen::prelude::*;

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Called automatically when the wasm module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// One game session: a loaded classifier and the computer's current move
#[wasm_bindgen]
pub struct GestureSession {
    classifier: GestureClassifier,
    computer: Gesture,
}

#[wasm_bindgen]
impl GestureSession {
    /// Create a session from CSV training rows and an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(training_csv: &str, config_json: Option<String>) -> Result<GestureSession, JsValue> {
        let config = match config_json {
            Some(json) => ClassifierConfig::from_json(&json).map_err(to_js)?,
            None => ClassifierConfig::default(),
        };
        let classifier = GestureClassifier::from_csv(training_csv, config).map_err(to_js)?;
        Self::with_classifier(classifier).map_err(to_js)
    }

    /// Create a session over the table bundled into the module
    pub fn bundled() -> Result<GestureSession, JsValue> {
        let classifier = GestureClassifier::bundled().map_err(to_js)?;
        Self::with_classifier(classifier).map_err(to_js)
    }

    /// Gesture name for one hand, or undefined when nothing is recognized
    pub fn recognize(&self, landmarks: &[f32]) -> Option<String> {
        self.recognize_frame(landmarks)
            .map(|gesture| gesture.name().to_string())
    }

    /// Voted label and neighbors for one hand
    pub fn predict(&self, landmarks: &[f32]) -> Result<JsValue, JsValue> {
        let prediction = self.predict_frame(landmarks).map_err(to_js)?;
        Ok(serde_wasm_bindgen::to_value(&prediction)?)
    }

    /// The computer's move for the current round
    #[wasm_bindgen(getter)]
    pub fn computer(&self) -> String {
        self.computer.name().to_string()
    }

    /// Draw a fresh computer move
    pub fn new_round(&mut self) -> Result<(), JsValue> {
        self.computer = computer_move().map_err(to_js)?;
        log::info!("Computer plays {}", self.computer);
        Ok(())
    }

    /// Play the current round with one hand; null when no gesture is recognized
    pub fn play(&self, landmarks: &[f32]) -> Result<JsValue, JsValue> {
        match self.recognize_frame(landmarks) {
            Some(user) => {
                let round = Round::play(user, self.computer);
                log::debug!("{} vs {}: {}", user, self.computer, round.headline());
                Ok(serde_wasm_bindgen::to_value(&round)?)
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Headline text for the current round, e.g. "Rock wins"
    pub fn headline(&self, landmarks: &[f32]) -> Option<String> {
        self.recognize_frame(landmarks)
            .map(|user| Round::play(user, self.computer).headline())
    }
}

impl GestureSession {
    fn with_classifier(classifier: GestureClassifier) -> crate::Result<Self> {
        Ok(Self {
            classifier,
            computer: computer_move()?,
        })
    }

    fn predict_frame(&self, landmarks: &[f32]) -> crate::Result<Prediction> {
        let hand = Hand::from_flat(landmarks)?;
        self.classifier.predict(&hand)
    }

    fn recognize_frame(&self, landmarks: &[f32]) -> Option<Gesture> {
        let result = Hand::from_flat(landmarks).and_then(|hand| self.classifier.recognize(&hand));
        match result {
            Ok(recognition) => recognition.gesture(),
            Err(e) => {
                log::warn!("Skipping hand: {}", e);
                None
            }
        }
    }
}
