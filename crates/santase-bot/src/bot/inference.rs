use santase_core::model::card::Card;
use santase_core::model::card_set::CardSet;
use santase_core::model::suit::Suit;

/// Cards of `suit` the opponent could still be holding.
///
/// Pure elimination over the full deck: a card qualifies unless it is ours,
/// already played, or the `excluded` probe card. No card is weighted above
/// another.
pub fn possible_opponent_cards(
    my_cards: CardSet,
    played: CardSet,
    excluded: Option<Card>,
    suit: Suit,
) -> CardSet {
    let candidates = CardSet::of_suit(suit).difference(my_cards.union(played));
    match excluded {
        Some(card) => candidates.without(card),
        None => candidates,
    }
}
