//! Hand skeleton model
//!
//! - **Joint**: landmark identifiers in hand-tracker order
//! - **BONES**: static parent/child table spanning the skeleton
//! - **BONE_ANGLES**: pairs of adjacent bones whose angles form the features
//! - **Hand**: one validated set of 21 landmark positions

pub mod bones;
pub mod joint;
pub mod landmark;

pub use bones::*;
pub use joint::*;
pub use landmark::*;
