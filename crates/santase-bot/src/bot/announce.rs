use santase_core::model::announce::Announce;
use santase_core::model::card::Card;
use santase_core::model::hand::Hand;
use santase_core::model::rank::Rank;
use santase_core::rules::AnnounceValidator;

/// Finds a Queen whose play announces a marriage, preferring forty over twenty.
///
/// The first qualifying Queen in `legal` order wins.
pub fn try_announce(
    legal: &[Card],
    hand: &Hand,
    trump_card: Card,
    validator: &dyn AnnounceValidator,
) -> Option<(Card, Announce)> {
    [Announce::Forty, Announce::Twenty]
        .into_iter()
        .find_map(|wanted| {
            legal
                .iter()
                .copied()
                .filter(|card| card.rank == Rank::Queen)
                .find(|&card| validator.possible_announce(hand, card, trump_card) == wanted)
                .map(|card| (card, wanted))
        })
}
