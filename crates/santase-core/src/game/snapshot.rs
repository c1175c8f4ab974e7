use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::hand::Hand;
use crate::model::turn::TurnContext;
use serde::{Deserialize, Serialize};

/// Everything a player saw when it made one decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnSnapshot {
    pub hand: Hand,
    pub context: TurnContext,
    #[serde(default)]
    pub played: Vec<Card>,
}

impl TurnSnapshot {
    pub fn capture(hand: &Hand, context: &TurnContext, played: CardSet) -> Self {
        TurnSnapshot {
            hand: hand.clone(),
            context: *context,
            played: played.iter().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
