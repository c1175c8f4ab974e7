use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const COUNT: usize = 24;

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn points(self) -> u8 {
        self.rank.points()
    }

    /// Dense identifier in `0..24`, grouped by suit.
    pub const fn to_id(self) -> u8 {
        (self.suit.index() * Rank::ORDERED.len() + self.rank.index()) as u8
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        let id = id as usize;
        let suit = match Suit::from_index(id / Rank::ORDERED.len()) {
            Some(suit) => suit,
            None => return None,
        };
        match Rank::from_index(id % Rank::ORDERED.len()) {
            Some(rank) => Some(Self::new(rank, suit)),
            None => None,
        }
    }

    /// The other half of a marriage, if this card can take part in one.
    pub const fn marriage_partner(self) -> Option<Card> {
        match self.rank {
            Rank::Queen => Some(Card::new(Rank::King, self.suit)),
            Rank::King => Some(Card::new(Rank::Queen, self.suit)),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardParseError {
    Empty,
    UnknownRank(String),
    UnknownSuit(char),
}

impl fmt::Display for CardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardParseError::Empty => write!(f, "card notation is empty"),
            CardParseError::UnknownRank(rank) => write!(f, "unknown rank '{rank}'"),
            CardParseError::UnknownSuit(suit) => write!(f, "unknown suit '{suit}'"),
        }
    }
}

impl std::error::Error for CardParseError {}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let suit_symbol = trimmed.chars().last().ok_or(CardParseError::Empty)?;
        let rank_text = &trimmed[..trimmed.len() - suit_symbol.len_utf8()];
        let suit = Suit::from_symbol(suit_symbol).ok_or(CardParseError::UnknownSuit(suit_symbol))?;
        let rank = Rank::from_symbol(rank_text)
            .ok_or_else(|| CardParseError::UnknownRank(rank_text.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}
