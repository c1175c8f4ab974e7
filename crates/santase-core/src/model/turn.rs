use crate::model::card::Card;
use crate::model::phase::RoundPhase;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Read-only view of the round handed to a player for one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    pub trump_card: Card,
    pub phase: RoundPhase,
    /// Card led by the opponent; absent when the player leads the trick.
    #[serde(default)]
    pub first_played_card: Option<Card>,
    /// Filled in once the trick is complete, for end-of-trick notifications.
    #[serde(default)]
    pub second_played_card: Option<Card>,
    #[serde(default)]
    pub own_round_points: u16,
    #[serde(default)]
    pub opponent_round_points: u16,
}

impl TurnContext {
    pub const fn new(trump_card: Card, phase: RoundPhase) -> Self {
        Self {
            trump_card,
            phase,
            first_played_card: None,
            second_played_card: None,
            own_round_points: 0,
            opponent_round_points: 0,
        }
    }

    #[must_use]
    pub const fn following(mut self, first_played_card: Card) -> Self {
        self.first_played_card = Some(first_played_card);
        self
    }

    #[must_use]
    pub const fn with_points(mut self, own: u16, opponent: u16) -> Self {
        self.own_round_points = own;
        self.opponent_round_points = opponent;
        self
    }

    #[must_use]
    pub const fn completed(mut self, first: Card, second: Card) -> Self {
        self.first_played_card = Some(first);
        self.second_played_card = Some(second);
        self
    }

    pub const fn trump_suit(&self) -> Suit {
        self.trump_card.suit
    }

    pub const fn is_leading(&self) -> bool {
        self.first_played_card.is_none()
    }

    pub const fn rules_enforced(&self) -> bool {
        self.phase.rules_enforced()
    }
}
