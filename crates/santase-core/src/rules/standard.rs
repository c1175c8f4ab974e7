use super::{ActionValidator, AnnounceValidator};
use crate::model::action::PlayerAction;
use crate::model::announce::Announce;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::turn::TurnContext;

/// Standard two-player Santase rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl StandardRules {
    pub const fn new() -> Self {
        Self
    }

    fn can_change_trump(context: &TurnContext, hand: &Hand) -> bool {
        let trump_nine = Card::new(Rank::Nine, context.trump_suit());
        context.is_leading() && context.phase.can_change_trump() && hand.contains(trump_nine)
    }

    fn can_close(context: &TurnContext) -> bool {
        context.is_leading() && context.phase.can_close()
    }
}

impl ActionValidator for StandardRules {
    fn is_action_legal(&self, action: PlayerAction, context: &TurnContext, hand: &Hand) -> bool {
        match action {
            PlayerAction::ChangeTrump => Self::can_change_trump(context, hand),
            PlayerAction::CloseGame => Self::can_close(context),
            PlayerAction::PlayCard { card, announce } => {
                if !self.legal_cards_to_play(context, hand).contains(&card) {
                    return false;
                }
                if !announce.is_some() {
                    return true;
                }
                context.is_leading()
                    && context.phase.can_announce()
                    && self.possible_announce(hand, card, context.trump_card) == announce
            }
        }
    }

    fn legal_cards_to_play(&self, context: &TurnContext, hand: &Hand) -> Vec<Card> {
        let Some(led) = context.first_played_card else {
            return hand.cards().to_vec();
        };
        if !context.rules_enforced() {
            return hand.cards().to_vec();
        }

        let same_suit: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|card| card.suit == led.suit)
            .collect();
        if !same_suit.is_empty() {
            let higher: Vec<Card> = same_suit
                .iter()
                .copied()
                .filter(|card| card.points() > led.points())
                .collect();
            return if higher.is_empty() { same_suit } else { higher };
        }

        let trumps: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|card| card.suit == context.trump_suit())
            .collect();
        if !trumps.is_empty() {
            return trumps;
        }

        hand.cards().to_vec()
    }
}

impl AnnounceValidator for StandardRules {
    fn possible_announce(&self, hand: &Hand, card: Card, trump_card: Card) -> Announce {
        let Some(partner) = card.marriage_partner() else {
            return Announce::None;
        };
        if !hand.contains(partner) {
            return Announce::None;
        }
        if card.suit == trump_card.suit {
            Announce::Forty
        } else {
            Announce::Twenty
        }
    }
}
