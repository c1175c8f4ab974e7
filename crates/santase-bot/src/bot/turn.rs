use super::{BotContext, PlayPlanner};
use santase_core::model::action::PlayerAction;
use santase_core::model::announce::Announce;
use santase_core::model::card::Card;
use santase_core::rules::ActionValidator;
use std::fmt;

/// A chosen action plus the tier of the policy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: PlayerAction,
    pub reason: &'static str,
}

impl Decision {
    pub const fn new(action: PlayerAction, reason: &'static str) -> Self {
        Self { action, reason }
    }

    pub const fn play(card: Card, reason: &'static str) -> Self {
        Self::new(PlayerAction::play(card), reason)
    }

    pub const fn announce(card: Card, announce: Announce, reason: &'static str) -> Self {
        Self::new(PlayerAction::play_with_announce(card, announce), reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// The legality provider reported no playable card.
    NoLegalCards,
    /// The tracker claims a card that is still in hand.
    PlayedCardInHand(Card),
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionError::NoLegalCards => write!(f, "no legal card to play"),
            DecisionError::PlayedCardInHand(card) => {
                write!(f, "{card} is both in hand and recorded as played")
            }
        }
    }
}

impl std::error::Error for DecisionError {}

pub struct TurnPlanner;

impl TurnPlanner {
    /// Trump exchange first, then closing the game, then card selection.
    pub fn decide(
        ctx: &BotContext<'_>,
        validator: &dyn ActionValidator,
    ) -> Result<Decision, DecisionError> {
        if let Some(card) = ctx.hand.card_set().intersection(ctx.played).iter().next() {
            return Err(DecisionError::PlayedCardInHand(card));
        }

        if validator.is_action_legal(PlayerAction::ChangeTrump, ctx.turn, ctx.hand) {
            return Ok(Decision::new(PlayerAction::ChangeTrump, "change_trump"));
        }

        if validator.is_action_legal(PlayerAction::CloseGame, ctx.turn, ctx.hand)
            && ctx.hand.count_suit(ctx.trump_suit()) == ctx.params.close_game_trump_count
        {
            return Ok(Decision::new(PlayerAction::CloseGame, "close_game"));
        }

        let legal = validator.legal_cards_to_play(ctx.turn, ctx.hand);
        let decision = PlayPlanner::choose(ctx, &legal).ok_or(DecisionError::NoLegalCards)?;
        debug_assert!(
            decision.action.card().is_none_or(|card| legal.contains(&card)),
            "planner chose a card outside the legal set"
        );
        Ok(decision)
    }
}
