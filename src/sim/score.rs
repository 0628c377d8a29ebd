//! Hit counter and win detection

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u32,
    pub win_score: u32,
}

/// What a registered hit did to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    pub score: u32,
    /// This hit reached the win threshold
    pub won: bool,
}

impl Scoreboard {
    pub fn new(win_score: u32) -> Self {
        Self {
            score: 0,
            win_score: win_score.max(1),
        }
    }

    pub fn register_hit(&mut self) -> HitOutcome {
        self.score = self.score.saturating_add(1);
        HitOutcome {
            score: self.score,
            won: self.score >= self.win_score,
        }
    }

    /// Hits still needed to win
    pub fn remaining(&self) -> u32 {
        self.win_score.saturating_sub(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_exactly_at_threshold() {
        let mut board = Scoreboard::new(5);
        for expected in 1..5 {
            let outcome = board.register_hit();
            assert_eq!(outcome.score, expected);
            assert!(!outcome.won);
        }
        assert_eq!(board.remaining(), 1);
        let outcome = board.register_hit();
        assert_eq!(outcome.score, 5);
        assert!(outcome.won);
        assert_eq!(board.remaining(), 0);
    }

    #[test]
    fn test_zero_threshold_is_treated_as_one() {
        let mut board = Scoreboard::new(0);
        assert!(board.register_hit().won);
    }
}
