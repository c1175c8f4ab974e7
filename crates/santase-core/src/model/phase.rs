use core::fmt;
use serde::{Deserialize, Serialize};

/// Stage of a Santase round, which decides what a leading player may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// First trick of the round.
    Opening,
    /// Stock still holds more than two cards.
    MoreThanTwoCardsLeft,
    /// Stock holds exactly the last hidden card and the trump card.
    TwoCardsLeft,
    /// Stock exhausted or the game was closed.
    Final,
}

impl RoundPhase {
    pub const fn can_announce(self) -> bool {
        !matches!(self, RoundPhase::Opening)
    }

    pub const fn can_change_trump(self) -> bool {
        matches!(self, RoundPhase::MoreThanTwoCardsLeft)
    }

    pub const fn can_close(self) -> bool {
        matches!(self, RoundPhase::MoreThanTwoCardsLeft)
    }

    /// Must-follow rules apply once the stock is gone or the game is closed.
    pub const fn rules_enforced(self) -> bool {
        matches!(self, RoundPhase::Final)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoundPhase::Opening => "opening",
            RoundPhase::MoreThanTwoCardsLeft => "more_than_two_cards_left",
            RoundPhase::TwoCardsLeft => "two_cards_left",
            RoundPhase::Final => "final",
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
