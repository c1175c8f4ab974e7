use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(Card::COUNT);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals the opening position: six cards to each side, then the face-up trump card.
    pub fn deal_opening(&self) -> Option<OpeningDeal> {
        let cards = &self.cards;
        if cards.len() < 13 {
            return None;
        }
        // Three cards to each side, twice.
        let mut first = Vec::with_capacity(6);
        let mut second = Vec::with_capacity(6);
        for (block, chunk) in cards[..12].chunks(3).enumerate() {
            if block % 2 == 0 {
                first.extend_from_slice(chunk);
            } else {
                second.extend_from_slice(chunk);
            }
        }
        Some(OpeningDeal {
            first_hand: first,
            second_hand: second,
            trump_card: cards[12],
            stock: cards[13..].to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningDeal {
    pub first_hand: Vec<Card>,
    pub second_hand: Vec<Card>,
    pub trump_card: Card,
    pub stock: Vec<Card>,
}
