use crate::model::announce::Announce;
use crate::model::card::Card;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerAction {
    ChangeTrump,
    CloseGame,
    PlayCard {
        card: Card,
        #[serde(default)]
        announce: Announce,
    },
}

impl PlayerAction {
    pub const fn play(card: Card) -> Self {
        PlayerAction::PlayCard {
            card,
            announce: Announce::None,
        }
    }

    pub const fn play_with_announce(card: Card, announce: Announce) -> Self {
        PlayerAction::PlayCard { card, announce }
    }

    pub const fn card(&self) -> Option<Card> {
        match self {
            PlayerAction::PlayCard { card, .. } => Some(*card),
            PlayerAction::ChangeTrump | PlayerAction::CloseGame => None,
        }
    }

    pub const fn announce(&self) -> Announce {
        match self {
            PlayerAction::PlayCard { announce, .. } => *announce,
            PlayerAction::ChangeTrump | PlayerAction::CloseGame => Announce::None,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::ChangeTrump => f.write_str("change trump"),
            PlayerAction::CloseGame => f.write_str("close game"),
            PlayerAction::PlayCard {
                card,
                announce: Announce::None,
            } => write!(f, "play {card}"),
            PlayerAction::PlayCard { card, announce } => {
                write!(f, "play {card} announcing {announce}")
            }
        }
    }
}
