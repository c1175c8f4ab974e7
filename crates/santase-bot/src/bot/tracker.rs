use santase_core::model::card::Card;
use santase_core::model::card_set::CardSet;
use tracing::{Level, event};

/// Cards played by either side during the current round.
#[derive(Debug, Clone, Default)]
pub struct PlayedCardsTracker {
    played: CardSet,
    tricks: u8,
}

impl PlayedCardsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_trick(&mut self, first: Card, second: Card) {
        self.played = self.played.with(first).with(second);
        self.tricks = self.tricks.saturating_add(1);
        event!(
            target: "santase_bot::tracker",
            Level::DEBUG,
            first = %first,
            second = %second,
            tricks = self.tricks,
            played = self.played.len(),
        );
    }

    pub fn reset_round(&mut self) {
        event!(
            target: "santase_bot::tracker",
            Level::DEBUG,
            tricks = self.tricks,
            "round reset"
        );
        self.played = CardSet::EMPTY;
        self.tricks = 0;
    }

    pub fn played(&self) -> CardSet {
        self.played
    }

    pub fn is_played(&self, card: Card) -> bool {
        self.played.contains(card)
    }

    pub fn tricks_recorded(&self) -> u8 {
        self.tricks
    }
}

#[cfg(test)]
mod tests {
    use super::PlayedCardsTracker;
    use santase_core::model::card::Card;
    use santase_core::model::rank::Rank;
    use santase_core::model::suit::Suit;

    #[test]
    fn records_both_cards_of_a_trick() {
        let mut tracker = PlayedCardsTracker::new();
        let first = Card::new(Rank::Ace, Suit::Clubs);
        let second = Card::new(Rank::Nine, Suit::Clubs);
        tracker.record_trick(first, second);
        assert!(tracker.is_played(first));
        assert!(tracker.is_played(second));
        assert_eq!(tracker.played().len(), 2);
        assert_eq!(tracker.tricks_recorded(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = PlayedCardsTracker::new();
        tracker.record_trick(Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::Ten, Suit::Hearts));
        tracker.reset_round();
        assert!(tracker.played().is_empty());
        assert_eq!(tracker.tricks_recorded(), 0);
    }
}
