/// Hand landmark identifier in hand-tracker order.
/// Wrist first, then each finger from base to tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Joint {
    // Root
    Wrist = 0,

    // Thumb chain
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,

    // Index finger chain
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,

    // Middle finger chain
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,

    // Ring finger chain
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,

    // Pinky chain
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl Joint {
    /// Total number of landmarks in a hand
    pub const COUNT: usize = 21;

    /// Convert to array index
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All joints in landmark order
    pub const ALL: [Joint; Self::COUNT] = [
        Joint::Wrist,
        Joint::ThumbCmc,
        Joint::ThumbMcp,
        Joint::ThumbIp,
        Joint::ThumbTip,
        Joint::IndexMcp,
        Joint::IndexPip,
        Joint::IndexDip,
        Joint::IndexTip,
        Joint::MiddleMcp,
        Joint::MiddlePip,
        Joint::MiddleDip,
        Joint::MiddleTip,
        Joint::RingMcp,
        Joint::RingPip,
        Joint::RingDip,
        Joint::RingTip,
        Joint::PinkyMcp,
        Joint::PinkyPip,
        Joint::PinkyDip,
        Joint::PinkyTip,
    ];
}

/// The five digits, each a chain of four landmarks hanging off the wrist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const COUNT: usize = 5;

    pub const ALL: [Finger; Self::COUNT] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Landmarks of this finger from base to tip
    pub const fn joints(self) -> [Joint; 4] {
        match self {
            Finger::Thumb => [Joint::ThumbCmc, Joint::ThumbMcp, Joint::ThumbIp, Joint::ThumbTip],
            Finger::Index => [Joint::IndexMcp, Joint::IndexPip, Joint::IndexDip, Joint::IndexTip],
            Finger::Middle => [
                Joint::MiddleMcp,
                Joint::MiddlePip,
                Joint::MiddleDip,
                Joint::MiddleTip,
            ],
            Finger::Ring => [Joint::RingMcp, Joint::RingPip, Joint::RingDip, Joint::RingTip],
            Finger::Pinky => [Joint::PinkyMcp, Joint::PinkyPip, Joint::PinkyDip, Joint::PinkyTip],
        }
    }
}
