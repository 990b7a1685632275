//! Rock-paper-scissors round rules

use crate::error::Result;
use crate::gesture::Gesture;
use serde::Serialize;

/// Who took the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Tie,
    UserWins,
    ComputerWins,
}

/// Decide a round between the player's gesture and the computer's
pub fn judge(user: Gesture, computer: Gesture) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if user.beats() == computer {
        Outcome::UserWins
    } else {
        Outcome::ComputerWins
    }
}

/// A finished round, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    pub user: Gesture,
    pub computer: Gesture,
    pub outcome: Outcome,
}

impl Round {
    pub fn play(user: Gesture, computer: Gesture) -> Self {
        Self {
            user,
            computer,
            outcome: judge(user, computer),
        }
    }

    /// Headline naming the winning gesture, e.g. "Rock wins"
    pub fn headline(&self) -> String {
        match self.outcome {
            Outcome::Tie => "Tie".to_string(),
            Outcome::UserWins => format!("{} wins", self.user.title()),
            Outcome::ComputerWins => format!("{} wins", self.computer.title()),
        }
    }
}

/// Pick the computer's gesture uniformly at random from the OS entropy source
pub fn computer_move() -> Result<Gesture> {
    let mut byte = [0u8; 1];
    // 0..=254 splits evenly into three; 255 is drawn again
    loop {
        getrandom::fill(&mut byte)?;
        if byte[0] < 255 {
            return Ok(Gesture::ALL[byte[0] as usize % Gesture::ALL.len()]);
        }
    }
}
