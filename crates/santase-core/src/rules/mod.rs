//! Collaborator contracts consumed by players, plus the standard Santase rules.
//!
//! Players never decide legality themselves: they ask an [`ActionValidator`]
//! which actions and cards are allowed and an [`AnnounceValidator`] whether a
//! card would announce a marriage.

mod standard;

pub use standard::StandardRules;

use crate::model::action::PlayerAction;
use crate::model::announce::Announce;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::turn::TurnContext;

pub trait ActionValidator {
    fn is_action_legal(&self, action: PlayerAction, context: &TurnContext, hand: &Hand) -> bool;

    /// Cards the player may play this turn. Order is preserved by callers for tie-breaks.
    fn legal_cards_to_play(&self, context: &TurnContext, hand: &Hand) -> Vec<Card>;
}

pub trait AnnounceValidator {
    fn possible_announce(&self, hand: &Hand, card: Card, trump_card: Card) -> Announce;
}
