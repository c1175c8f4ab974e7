use super::inference::possible_opponent_cards;
use santase_core::model::card::Card;
use santase_core::model::card_set::CardSet;
use santase_core::model::hand::Hand;
use santase_core::model::suit::Suit;

/// Our highest card in `suit`, if nothing the opponent could hold beats it.
///
/// The guarantee is pure deduction from seen cards: either the opponent can
/// neither follow the suit nor trump it, or its best possible card in the suit
/// is worth less than ours.
pub fn surely_wins(
    suit: Suit,
    hand: &Hand,
    played: CardSet,
    opponent_has_trump: bool,
) -> Option<Card> {
    let mine = hand.card_set();
    let best = mine.in_suit(suit).highest()?;
    let opponent_best = possible_opponent_cards(mine, played, None, suit).highest();

    match opponent_best {
        None if !opponent_has_trump => Some(best),
        Some(theirs) if theirs.points() < best.points() => Some(best),
        _ => None,
    }
}
