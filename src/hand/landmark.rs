use super::joint::Joint;
use crate::error::{Error, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One tracked point in normalized image coordinates.
///
/// `x` and `y` lie roughly in [0, 1]; `z` is depth relative to the wrist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Landmark> for Vec3 {
    fn from(lm: Landmark) -> Self {
        Vec3::new(lm.x, lm.y, lm.z)
    }
}

impl From<Vec3> for Landmark {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A detected hand: exactly 21 finite landmark positions.
///
/// Built once per frame by the tracker glue and dropped after classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    joints: [Vec3; Joint::COUNT],
}

impl Hand {
    /// Create a hand from landmark positions in tracker order
    pub fn new(joints: [Vec3; Joint::COUNT]) -> Result<Self> {
        if let Some(index) = joints.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "landmark {} has a non-finite coordinate",
                index
            )));
        }
        Ok(Self { joints })
    }

    /// Create from a tracker result of any length; anything but 21 points is rejected
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self> {
        let points: Vec<Vec3> = landmarks.iter().copied().map(Vec3::from).collect();
        Self::from_points(&points)
    }

    /// Create from a slice of positions
    pub fn from_points(points: &[Vec3]) -> Result<Self> {
        let joints: [Vec3; Joint::COUNT] = points.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "a hand needs {} landmarks, got {}",
                Joint::COUNT,
                points.len()
            ))
        })?;
        Self::new(joints)
    }

    /// Create from packed `x, y, z` triples as delivered by a JS `Float32Array`
    pub fn from_flat(coords: &[f32]) -> Result<Self> {
        if coords.len() != Joint::COUNT * 3 {
            return Err(Error::InvalidInput(format!(
                "a hand needs {} coordinates, got {}",
                Joint::COUNT * 3,
                coords.len()
            )));
        }
        let points: Vec<Vec3> = coords.chunks_exact(3).map(Vec3::from_slice).collect();
        Self::from_points(&points)
    }

    /// Position of a single landmark
    #[inline]
    pub fn joint(&self, joint: Joint) -> Vec3 {
        self.joints[joint.index()]
    }

    /// All positions in tracker order
    pub fn joints(&self) -> &[Vec3; Joint::COUNT] {
        &self.joints
    }

    /// Tracker-facing copy of the positions
    pub fn landmarks(&self) -> [Landmark; Joint::COUNT] {
        self.joints.map(Landmark::from)
    }

    /// Return a new hand with every landmark mapped through `f`
    pub fn map_joints(&self, f: impl Fn(Vec3) -> Vec3) -> Result<Self> {
        Self::new(self.joints.map(f))
    }
}
