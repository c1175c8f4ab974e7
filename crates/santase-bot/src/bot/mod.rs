mod announce;
mod inference;
mod play;
mod sure_win;
mod tracker;
mod turn;

pub use announce::try_announce;
pub use inference::possible_opponent_cards;
pub use play::PlayPlanner;
pub use sure_win::surely_wins;
pub use tracker::PlayedCardsTracker;
pub use turn::{Decision, DecisionError, TurnPlanner};

use santase_core::AppInfo;
use santase_core::model::card::Card;
use santase_core::model::card_set::CardSet;
use santase_core::model::hand::Hand;
use santase_core::model::suit::Suit;
use santase_core::model::turn::TurnContext;
use santase_core::rules::AnnounceValidator;
use std::cmp::Reverse;

/// Tunable thresholds of the rule-based player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotParams {
    /// Round points that end the round in the player's favour.
    pub winning_points: u16,
    /// Exact number of trumps in hand that triggers closing the game.
    pub close_game_trump_count: usize,
}

impl Default for BotParams {
    fn default() -> Self {
        Self {
            winning_points: AppInfo::winning_points(),
            close_game_trump_count: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotFeatures {
    decision_details: bool,
}

impl BotFeatures {
    pub const fn new(decision_details: bool) -> Self {
        Self { decision_details }
    }

    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub const fn decision_details(self) -> bool {
        self.decision_details
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let decision_details = read("SANTASE_DECISION_DETAILS")
            .map(|raw| matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON"))
            .unwrap_or(false);

        Self { decision_details }
    }
}

/// Inputs shared by every planner for a single decision.
#[derive(Clone, Copy)]
pub struct BotContext<'a> {
    pub turn: &'a TurnContext,
    pub hand: &'a Hand,
    pub played: CardSet,
    pub params: &'a BotParams,
    pub announcer: &'a dyn AnnounceValidator,
}

impl<'a> BotContext<'a> {
    pub fn new(
        turn: &'a TurnContext,
        hand: &'a Hand,
        played: CardSet,
        params: &'a BotParams,
        announcer: &'a dyn AnnounceValidator,
    ) -> Self {
        Self {
            turn,
            hand,
            played,
            params,
            announcer,
        }
    }

    pub fn trump_suit(&self) -> Suit {
        self.turn.trump_suit()
    }

    /// Cards of `suit` the opponent may still hold.
    pub fn opponent_cards(&self, suit: Suit) -> CardSet {
        possible_opponent_cards(self.hand.card_set(), self.played, None, suit)
    }
}

/// First card with the fewest points, in iteration order.
pub(crate) fn lowest_card<I>(cards: I) -> Option<Card>
where
    I: IntoIterator<Item = Card>,
{
    cards.into_iter().min_by_key(|card| card.points())
}

/// First card with the most points, in iteration order.
pub(crate) fn highest_card<I>(cards: I) -> Option<Card>
where
    I: IntoIterator<Item = Card>,
{
    cards.into_iter().min_by_key(|card| Reverse(card.points()))
}
