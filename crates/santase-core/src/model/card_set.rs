use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use std::cmp::Reverse;
use std::fmt;

/// Immutable set of Santase cards backed by a 24-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet(u32);

impl CardSet {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self((1 << Card::COUNT) - 1);

    pub fn of_suit(suit: Suit) -> Self {
        Rank::ORDERED
            .iter()
            .map(|&rank| Card::new(rank, suit))
            .collect()
    }

    pub const fn contains(self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    #[must_use]
    pub const fn with(self, card: Card) -> Self {
        Self(self.0 | Self::bit(card))
    }

    #[must_use]
    pub const fn without(self, card: Card) -> Self {
        Self(self.0 & !Self::bit(card))
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub fn in_suit(self, suit: Suit) -> Self {
        self.intersection(Self::of_suit(suit))
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cards in ascending id order (suit, then rank).
    pub fn iter(self) -> impl Iterator<Item = Card> {
        (0..Card::COUNT as u8)
            .filter(move |&id| self.0 & (1 << id) != 0)
            .filter_map(Card::from_id)
    }

    /// Card with the most points; the lowest id wins ties.
    pub fn highest(self) -> Option<Card> {
        self.iter().min_by_key(|card| Reverse(card.points()))
    }

    const fn bit(card: Card) -> u32 {
        1 << card.to_id()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, CardSet::with)
    }
}

impl<'a> FromIterator<&'a Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|card| card.to_string())).finish()
    }
}
