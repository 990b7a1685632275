//! Joint-angle feature extraction
//!
//! Turns a hand's 21 landmark positions into 15 bend angles (degrees). Bones are
//! normalized before the dot product, so the features ignore hand size, position
//! and orientation.

use crate::dataset_format::FEATURE_COUNT;
use crate::error::{Error, Result};
use crate::hand::{Finger, Hand, BONES, BONE_ANGLES, BONE_COUNT};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Fixed-length angle vector in bone-angle table order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f32; FEATURE_COUNT]);

impl FeatureVector {
    /// Validate an arbitrary slice as a feature vector
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let values: [f32; FEATURE_COUNT] = values.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "a feature vector needs {} values, got {}",
                FEATURE_COUNT,
                values.len()
            ))
        })?;
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "feature {} is not finite",
                index
            )));
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// The three bends of one finger, base first
    pub fn finger(&self, finger: Finger) -> [f32; 3] {
        let start = finger as usize * 3;
        [self.0[start], self.0[start + 1], self.0[start + 2]]
    }

    /// Euclidean distance to another vector
    pub fn distance(&self, other: &FeatureVector) -> f32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }
}

/// Unit direction of every bone in table order.
///
/// Computed in double precision; a bone whose endpoints coincide has no
/// direction and is reported instead of producing NaN.
pub fn bone_directions(hand: &Hand) -> Result<[DVec3; BONE_COUNT]> {
    let mut directions = [DVec3::ZERO; BONE_COUNT];
    for (i, bone) in BONES.iter().enumerate() {
        let offset = hand.joint(bone.child).as_dvec3() - hand.joint(bone.parent).as_dvec3();
        directions[i] = offset
            .try_normalize()
            .ok_or(Error::DegenerateGeometry {
                bone: i,
                parent: bone.parent.index(),
                child: bone.child.index(),
            })?;
    }
    Ok(directions)
}

/// Angle in degrees between two unit vectors.
/// The dot product is clamped so rounding can't push `acos` out of its domain.
#[inline]
fn angle_between(a: DVec3, b: DVec3) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Extract the 15 joint angles of a hand
pub fn extract_features(hand: &Hand) -> Result<FeatureVector> {
    let directions = bone_directions(hand)?;

    let mut angles = [0.0f32; FEATURE_COUNT];
    for (out, pair) in angles.iter_mut().zip(BONE_ANGLES.iter()) {
        *out = angle_between(directions[pair.first], directions[pair.second]) as f32;
    }

    Ok(FeatureVector(angles))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::hand::Joint;
    use glam::{Quat, Vec3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Finger base positions relative to the wrist (thumb CMC, then MCPs)
    const BASES: [Vec3; Finger::COUNT] = [
        Vec3::new(-0.25, 0.25, 0.0),
        Vec3::new(-0.3, 1.0, 0.0),
        Vec3::new(-0.1, 1.05, 0.0),
        Vec3::new(0.1, 1.0, 0.0),
        Vec3::new(0.3, 0.9, 0.0),
    ];

    /// Segment lengths from base to tip
    const SEGMENTS: [[f32; 3]; Finger::COUNT] = [
        [0.35, 0.3, 0.25],
        [0.45, 0.3, 0.25],
        [0.5, 0.32, 0.26],
        [0.45, 0.3, 0.25],
        [0.35, 0.25, 0.22],
    ];

    pub const STRAIGHT: [f32; 3] = [5.0, 5.0, 5.0];
    pub const CURLED: [f32; 3] = [80.0, 100.0, 60.0];
    pub const THUMB_TUCKED: [f32; 3] = [30.0, 40.0, 40.0];

    /// Build a hand whose fingers bend by the given degrees at each joint.
    ///
    /// Each finger starts along the wrist-to-base direction and rotates in its
    /// own plane, so the extracted features equal the requested bends.
    pub fn synthetic_hand(bends: [[f32; 3]; Finger::COUNT]) -> Hand {
        let mut joints = [Vec3::ZERO; Joint::COUNT];
        for (f, finger) in Finger::ALL.iter().enumerate() {
            let chain = finger.joints();
            let mut direction = BASES[f].normalize();
            let axis = direction.cross(Vec3::Z).normalize();
            let mut position = BASES[f];
            joints[chain[0].index()] = position;

            for s in 0..3 {
                direction = Quat::from_axis_angle(axis, bends[f][s].to_radians()) * direction;
                position += direction * SEGMENTS[f][s];
                joints[chain[s + 1].index()] = position;
            }
        }
        Hand::new(joints).unwrap()
    }

    fn random_rigid_motion(rng: &mut StdRng) -> (Quat, Vec3) {
        let axis = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
        .try_normalize()
        .unwrap_or(Vec3::Y);
        let rotation = Quat::from_axis_angle(axis, rng.random_range(0.0..std::f32::consts::TAU));
        let translation = Vec3::new(
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
        );
        (rotation, translation)
    }

    fn random_bends(rng: &mut StdRng) -> [[f32; 3]; Finger::COUNT] {
        let mut bends = [[0.0; 3]; Finger::COUNT];
        for finger in bends.iter_mut() {
            for bend in finger.iter_mut() {
                *bend = rng.random_range(0.0..120.0);
            }
        }
        bends
    }

    #[test]
    fn test_features_recover_synthetic_bends() {
        let bends = [THUMB_TUCKED, CURLED, STRAIGHT, [10.0, 20.0, 30.0], CURLED];
        let features = extract_features(&synthetic_hand(bends)).unwrap();

        for (finger, expected) in Finger::ALL.iter().zip(bends.iter()) {
            let got = features.finger(*finger);
            for (g, e) in got.iter().zip(expected.iter()) {
                assert!((g - e).abs() < 1e-3, "{:?}: expected {}, got {}", finger, e, g);
            }
        }
    }

    #[test]
    fn test_straight_finger_has_zero_bends() {
        let bends = [THUMB_TUCKED, [0.0; 3], CURLED, CURLED, CURLED];
        let features = extract_features(&synthetic_hand(bends)).unwrap();

        for angle in features.finger(Finger::Index) {
            assert!(angle.abs() < 0.01, "straight index bent by {}", angle);
        }
    }

    #[test]
    fn test_colinear_fingers_are_flat() {
        // Each finger laid out on a single ray from the wrist
        let mut joints = [Vec3::ZERO; Joint::COUNT];
        for (f, finger) in Finger::ALL.iter().enumerate() {
            let ray = BASES[f].normalize();
            for (depth, joint) in finger.joints().iter().enumerate() {
                joints[joint.index()] = ray * (depth as f32 + 1.0) * 0.2;
            }
        }

        let features = extract_features(&Hand::new(joints).unwrap()).unwrap();
        for angle in features.as_slice() {
            assert!(angle.abs() < 0.01, "expected flat hand, got {}", angle);
        }
    }

    #[test]
    fn test_features_in_range_for_random_hands() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let joints: Vec<Vec3> = (0..Joint::COUNT)
                .map(|_| {
                    Vec3::new(
                        rng.random_range(0.0..1.0),
                        rng.random_range(0.0..1.0),
                        rng.random_range(-0.2..0.2),
                    )
                })
                .collect();
            let hand = Hand::from_points(&joints).unwrap();
            let features = extract_features(&hand).unwrap();

            assert_eq!(features.as_slice().len(), FEATURE_COUNT);
            for angle in features.as_slice() {
                assert!((0.0..=180.0).contains(angle), "angle {} out of range", angle);
            }
        }
    }

    #[test]
    fn test_rigid_motion_leaves_features_unchanged() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let hand = synthetic_hand(random_bends(&mut rng));
            let (rotation, translation) = random_rigid_motion(&mut rng);
            let moved = hand.map_joints(|p| rotation * p + translation).unwrap();

            let before = extract_features(&hand).unwrap();
            let after = extract_features(&moved).unwrap();
            for (a, b) in before.as_slice().iter().zip(after.as_slice()) {
                assert!((a - b).abs() < 0.1, "rigid motion changed angle {} -> {}", a, b);
            }
        }
    }

    #[test]
    fn test_scale_leaves_features_unchanged() {
        let hand = synthetic_hand([THUMB_TUCKED, STRAIGHT, STRAIGHT, CURLED, CURLED]);
        let scaled = hand.map_joints(|p| p * 0.2).unwrap();

        let before = extract_features(&hand).unwrap();
        let after = extract_features(&scaled).unwrap();
        for (a, b) in before.as_slice().iter().zip(after.as_slice()) {
            assert!((a - b).abs() < 0.01);
        }
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let hand = synthetic_hand([THUMB_TUCKED, CURLED, CURLED, CURLED, CURLED]);
        assert_eq!(extract_features(&hand).unwrap(), extract_features(&hand).unwrap());
    }

    #[test]
    fn test_zero_length_bone_is_reported() {
        let hand = synthetic_hand([THUMB_TUCKED, CURLED, CURLED, CURLED, CURLED]);
        let mut joints = *hand.joints();
        // Occluded middle DIP reported on top of its PIP
        joints[Joint::MiddleDip.index()] = joints[Joint::MiddlePip.index()];

        let err = extract_features(&Hand::new(joints).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateGeometry {
                bone: 10,
                parent: 10,
                child: 11
            }
        ));
    }

    #[test]
    fn test_feature_vector_from_slice_validates_shape() {
        assert!(FeatureVector::from_slice(&[0.0; FEATURE_COUNT]).is_ok());
        assert!(matches!(
            FeatureVector::from_slice(&[0.0; 14]),
            Err(Error::InvalidInput(_))
        ));

        let mut values = [1.0; FEATURE_COUNT];
        values[3] = f32::INFINITY;
        assert!(matches!(
            FeatureVector::from_slice(&values),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_feature_distance_is_euclidean() {
        let a = FeatureVector([0.0; FEATURE_COUNT]);
        let b = FeatureVector([2.0; FEATURE_COUNT]);
        let expected = (4.0f32 * FEATURE_COUNT as f32).sqrt();
        assert!((a.distance(&b) - expected).abs() < 1e-5);
    }
}
