mod smart;

pub use smart::SmartPlayer;

use crate::bot::DecisionError;
use santase_core::model::action::PlayerAction;
use santase_core::model::card::Card;
use santase_core::model::hand::Hand;
use santase_core::model::turn::TurnContext;

/// Notifications a game loop sends to a seated player.
pub trait Player {
    fn name(&self) -> &str;

    fn start_round(&mut self, _hand: &Hand, _trump_card: Card) {}

    /// Choose exactly one action for this turn.
    fn get_turn(
        &mut self,
        context: &TurnContext,
        hand: &Hand,
    ) -> Result<PlayerAction, DecisionError>;

    /// Called after both cards of a trick are on the table.
    fn end_turn(&mut self, context: &TurnContext);

    fn end_round(&mut self);

    fn end_game(&mut self, _won: bool) {}
}
