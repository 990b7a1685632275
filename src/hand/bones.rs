use super::joint::Joint;
use crate::dataset_format::FEATURE_COUNT;
use static_assertions::const_assert;

/// Number of bones spanning the hand skeleton
pub const BONE_COUNT: usize = 20;

/// Static bone definition: the displacement `child - parent`
#[derive(Debug, Clone, Copy)]
pub struct BoneDef {
    pub parent: Joint,
    pub child: Joint,
}

const fn bone(parent: Joint, child: Joint) -> BoneDef {
    BoneDef { parent, child }
}

/// Wrist to each finger base, then successive finger segments.
/// Every finger contributes four consecutive entries.
pub const BONES: [BoneDef; BONE_COUNT] = [
    // Thumb
    bone(Joint::Wrist, Joint::ThumbCmc),
    bone(Joint::ThumbCmc, Joint::ThumbMcp),
    bone(Joint::ThumbMcp, Joint::ThumbIp),
    bone(Joint::ThumbIp, Joint::ThumbTip),
    // Index
    bone(Joint::Wrist, Joint::IndexMcp),
    bone(Joint::IndexMcp, Joint::IndexPip),
    bone(Joint::IndexPip, Joint::IndexDip),
    bone(Joint::IndexDip, Joint::IndexTip),
    // Middle
    bone(Joint::Wrist, Joint::MiddleMcp),
    bone(Joint::MiddleMcp, Joint::MiddlePip),
    bone(Joint::MiddlePip, Joint::MiddleDip),
    bone(Joint::MiddleDip, Joint::MiddleTip),
    // Ring
    bone(Joint::Wrist, Joint::RingMcp),
    bone(Joint::RingMcp, Joint::RingPip),
    bone(Joint::RingPip, Joint::RingDip),
    bone(Joint::RingDip, Joint::RingTip),
    // Pinky
    bone(Joint::Wrist, Joint::PinkyMcp),
    bone(Joint::PinkyMcp, Joint::PinkyPip),
    bone(Joint::PinkyPip, Joint::PinkyDip),
    bone(Joint::PinkyDip, Joint::PinkyTip),
];

/// Pair of bone indices whose angle is one feature
#[derive(Debug, Clone, Copy)]
pub struct AngleDef {
    pub first: usize,
    pub second: usize,
}

const fn angle(first: usize, second: usize) -> AngleDef {
    AngleDef { first, second }
}

/// Feature order: three bends per finger, thumb first.
pub const BONE_ANGLES: [AngleDef; FEATURE_COUNT] = [
    angle(0, 1),
    angle(1, 2),
    angle(2, 3),
    angle(4, 5),
    angle(5, 6),
    angle(6, 7),
    angle(8, 9),
    angle(9, 10),
    angle(10, 11),
    angle(12, 13),
    angle(13, 14),
    angle(14, 15),
    angle(16, 17),
    angle(17, 18),
    angle(18, 19),
];

/// Every angle pair must meet at a shared joint: the first bone ends where the second starts.
const fn angles_share_joints() -> bool {
    let mut i = 0;
    while i < FEATURE_COUNT {
        let AngleDef { first, second } = BONE_ANGLES[i];
        if first >= BONE_COUNT || second >= BONE_COUNT {
            return false;
        }
        if BONES[first].child as u8 != BONES[second].parent as u8 {
            return false;
        }
        i += 1;
    }
    true
}

/// Every landmark except the wrist is the child of exactly one bone.
const fn bones_cover_hand() -> bool {
    let mut seen = [false; Joint::COUNT];
    let mut i = 0;
    while i < BONE_COUNT {
        let child = BONES[i].child as usize;
        if child == 0 || seen[child] {
            return false;
        }
        seen[child] = true;
        i += 1;
    }
    true
}

const_assert!(angles_share_joints());
const_assert!(bones_cover_hand());
const_assert!(BONE_COUNT == Joint::COUNT - 1);
