use super::sure_win::surely_wins;
use super::turn::Decision;
use super::{BotContext, highest_card, lowest_card, try_announce};
use santase_core::model::announce::Announce;
use santase_core::model::card::Card;
use santase_core::model::hand::Hand;
use santase_core::model::rank::Rank;
use santase_core::model::suit::Suit;
use std::iter;

type Strategy = fn(&BotContext<'_>, &[Card]) -> Option<Decision>;

/// Indexed by `[rules_enforced][leading]`.
const STRATEGIES: [[Strategy; 2]; 2] = [
    [follow_without_rules, lead_without_rules],
    [follow_with_rules, lead_with_rules],
];

pub struct PlayPlanner;

impl PlayPlanner {
    /// Picks one of `legal`; `None` only when `legal` is empty.
    pub fn choose(ctx: &BotContext<'_>, legal: &[Card]) -> Option<Decision> {
        if legal.is_empty() {
            return None;
        }
        let rules = usize::from(ctx.turn.rules_enforced());
        let leading = usize::from(ctx.turn.is_leading());
        STRATEGIES[rules][leading](ctx, legal)
    }
}

fn lead_without_rules(ctx: &BotContext<'_>, legal: &[Card]) -> Option<Decision> {
    if let Some(decision) = announce(ctx, legal) {
        return Some(decision);
    }

    let trump = ctx.trump_suit();
    let opponent_best_trump = ctx.opponent_cards(trump).highest();
    if let Some(best_trump) = highest_card(in_suit(legal, trump)) {
        let reaches_target = ctx
            .turn
            .own_round_points
            .saturating_add(u16::from(best_trump.points()))
            >= ctx.params.winning_points;
        let outranks =
            opponent_best_trump.is_none_or(|theirs| best_trump.points() > theirs.points());
        if reaches_target && outranks {
            return Some(Decision::play(best_trump, "trump_to_finish_round"));
        }
    }

    if let Some(card) = lowest_card(outside_suit(legal, trump)) {
        return Some(Decision::play(card, "lowest_non_trump"));
    }

    highest_card(legal.iter().copied()).map(|card| Decision::play(card, "highest_trump"))
}

fn lead_with_rules(ctx: &BotContext<'_>, legal: &[Card]) -> Option<Decision> {
    let trump = ctx.trump_suit();
    let opponent_has_trump = !ctx.opponent_cards(trump).is_empty();

    let sure_winner = iter::once(trump)
        .chain(Suit::ALL)
        .filter_map(|suit| surely_wins(suit, ctx.hand, ctx.played, opponent_has_trump))
        .find(|card| legal.contains(card));
    if let Some(card) = sure_winner {
        return Some(Decision::play(card, "sure_win"));
    }

    if let Some(decision) = announce(ctx, legal) {
        return Some(decision);
    }

    if let Some(card) = lowest_card(outside_suit(legal, trump)) {
        return Some(Decision::play(card, "lowest_non_trump"));
    }

    lowest_card(legal.iter().copied()).map(|card| Decision::play(card, "lowest_remaining"))
}

fn follow_without_rules(ctx: &BotContext<'_>, legal: &[Card]) -> Option<Decision> {
    let Some(led) = ctx.turn.first_played_card else {
        return lead_without_rules(ctx, legal);
    };

    // Only the strongest beating card is considered; a split marriage drops to the fallbacks.
    if let Some(card) = highest_beating(legal, led) {
        if !splits_marriage(card, ctx.hand) {
            return Some(Decision::play(card, "beat_led_card"));
        }
    }

    if matches!(led.rank, Rank::Ace | Rank::Ten) {
        if let Some(card) = trump_defense(ctx, legal) {
            return Some(Decision::play(card, "trump_high_lead"));
        }
    }

    lowest_card(legal.iter().copied()).map(|card| Decision::play(card, "lowest_remaining"))
}

fn follow_with_rules(ctx: &BotContext<'_>, legal: &[Card]) -> Option<Decision> {
    let Some(led) = ctx.turn.first_played_card else {
        return lead_with_rules(ctx, legal);
    };

    if let Some(card) = highest_beating(legal, led) {
        return Some(Decision::play(card, "beat_led_card"));
    }

    if let Some(card) = lowest_card(in_suit(legal, ctx.trump_suit())) {
        return Some(Decision::play(card, "lowest_trump"));
    }

    lowest_card(legal.iter().copied()).map(|card| Decision::play(card, "lowest_remaining"))
}

/// The Queen is still played during the opening trick, just without the announcement.
fn announce(ctx: &BotContext<'_>, legal: &[Card]) -> Option<Decision> {
    let (card, announce) = try_announce(legal, ctx.hand, ctx.turn.trump_card, ctx.announcer)?;
    let announce = if ctx.turn.phase.can_announce() {
        announce
    } else {
        Announce::None
    };
    Some(Decision::announce(card, announce, "announce_marriage"))
}

/// Cheap trumps worth spending on an Ace or Ten, in priority order.
fn trump_defense(ctx: &BotContext<'_>, legal: &[Card]) -> Option<Card> {
    let trump = ctx.trump_suit();
    let legal_trump = |rank: Rank| {
        let card = Card::new(rank, trump);
        legal.contains(&card).then_some(card)
    };
    let played = |rank: Rank| ctx.played.contains(Card::new(rank, trump));

    legal_trump(Rank::Jack)
        .or_else(|| {
            (ctx.turn.trump_card.rank == Rank::Jack)
                .then(|| legal_trump(Rank::Nine))
                .flatten()
        })
        .or_else(|| played(Rank::King).then(|| legal_trump(Rank::Queen)).flatten())
        .or_else(|| played(Rank::Queen).then(|| legal_trump(Rank::King)).flatten())
}

fn highest_beating(legal: &[Card], led: Card) -> Option<Card> {
    highest_card(
        legal
            .iter()
            .copied()
            .filter(|card| card.suit == led.suit && card.points() > led.points()),
    )
}

/// Playing half of a marriage still held in hand.
fn splits_marriage(card: Card, hand: &Hand) -> bool {
    card.marriage_partner()
        .is_some_and(|partner| hand.contains(partner))
}

fn in_suit(legal: &[Card], suit: Suit) -> impl Iterator<Item = Card> + '_ {
    legal.iter().copied().filter(move |card| card.suit == suit)
}

fn outside_suit(legal: &[Card], suit: Suit) -> impl Iterator<Item = Card> + '_ {
    legal.iter().copied().filter(move |card| card.suit != suit)
}

#[cfg(test)]
mod tests {
    use super::PlayPlanner;
    use crate::bot::{BotContext, BotParams, Decision};
    use santase_core::model::action::PlayerAction;
    use santase_core::model::announce::Announce;
    use santase_core::model::card::Card;
    use santase_core::model::card_set::CardSet;
    use santase_core::model::hand::Hand;
    use santase_core::model::phase::RoundPhase;
    use santase_core::model::rank::Rank;
    use santase_core::model::suit::Suit;
    use santase_core::model::turn::TurnContext;
    use santase_core::rules::{ActionValidator, StandardRules};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn choose(turn: &TurnContext, hand: &Hand, played: &[Card]) -> Decision {
        let params = BotParams::default();
        let played: CardSet = played.iter().collect();
        let ctx = BotContext::new(turn, hand, played, &params, &StandardRules);
        let legal = StandardRules.legal_cards_to_play(turn, hand);
        PlayPlanner::choose(&ctx, &legal).expect("hand is not empty")
    }

    fn open(trump: Card) -> TurnContext {
        TurnContext::new(trump, RoundPhase::MoreThanTwoCardsLeft)
    }

    fn last(trump: Card) -> TurnContext {
        TurnContext::new(trump, RoundPhase::Final)
    }

    #[test]
    fn empty_legal_set_yields_nothing() {
        let params = BotParams::default();
        let hand = Hand::new();
        let turn = open(card(Rank::Nine, Suit::Spades));
        let ctx = BotContext::new(&turn, &hand, CardSet::EMPTY, &params, &StandardRules);
        assert_eq!(PlayPlanner::choose(&ctx, &[]), None);
    }

    // Leading, rules not enforced.

    #[test]
    fn lead_free_announces_twenty_before_anything_else() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Queen, Suit::Hearts),
            card(Rank::King, Suit::Hearts),
        ]);
        let decision = choose(&open(card(Rank::Ten, Suit::Spades)), &hand, &[]);
        assert_eq!(
            decision.action,
            PlayerAction::play_with_announce(card(Rank::Queen, Suit::Hearts), Announce::Twenty)
        );
        assert_eq!(decision.reason, "announce_marriage");
    }

    #[test]
    fn opening_trick_plays_the_queen_without_announcing() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Queen, Suit::Hearts),
            card(Rank::King, Suit::Hearts),
        ]);
        let turn = TurnContext::new(card(Rank::Ten, Suit::Spades), RoundPhase::Opening);
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Queen, Suit::Hearts)));
        assert_eq!(decision.reason, "announce_marriage");
    }

    #[test]
    fn lead_free_cashes_trump_that_reaches_target() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Ace, Suit::Spades),
        ]);
        let turn = open(card(Rank::Jack, Suit::Spades)).with_points(55, 20);
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn lead_free_cashes_low_trump_once_all_other_trumps_fell() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Nine, Suit::Spades),
        ]);
        let played = [
            card(Rank::Jack, Suit::Spades),
            card(Rank::Queen, Suit::Spades),
            card(Rank::King, Suit::Spades),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Ace, Suit::Spades),
        ];
        let turn = open(card(Rank::Jack, Suit::Spades)).with_points(66, 30);
        let decision = choose(&turn, &hand, &played);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Nine, Suit::Spades)));
        assert_eq!(decision.reason, "trump_to_finish_round");
    }

    #[test]
    fn lead_free_saturates_huge_round_points() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Ace, Suit::Spades),
        ]);
        let turn = open(card(Rank::Nine, Suit::Spades)).with_points(u16::MAX, 0);
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Ace, Suit::Spades)));
        assert_eq!(decision.reason, "trump_to_finish_round");
    }

    #[test]
    fn lead_free_keeps_trump_when_target_is_far() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Ace, Suit::Spades),
        ]);
        let turn = open(card(Rank::Jack, Suit::Spades)).with_points(54, 20);
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Nine, Suit::Clubs)));
        assert_eq!(decision.reason, "lowest_non_trump");
    }

    #[test]
    fn lead_free_keeps_trump_when_opponent_may_beat_it() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Ten, Suit::Spades),
        ]);
        let turn = open(card(Rank::Jack, Suit::Spades)).with_points(60, 20);
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Nine, Suit::Clubs)));
    }

    #[test]
    fn lead_free_plays_highest_when_only_trumps_remain() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Spades),
            card(Rank::King, Suit::Spades),
        ]);
        let turn = open(card(Rank::Jack, Suit::Spades));
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::King, Suit::Spades)));
        assert_eq!(decision.reason, "highest_trump");
    }

    // Leading, rules enforced.

    #[test]
    fn lead_ruled_plays_unbeatable_side_ace() {
        let hand = Hand::with_cards(vec![
            card(Rank::Jack, Suit::Spades),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Ace, Suit::Clubs),
        ]);
        let decision = choose(&last(card(Rank::Ten, Suit::Hearts)), &hand, &[]);
        assert_eq!(decision.reason, "sure_win");
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Ace, Suit::Clubs)));
    }

    #[test]
    fn lead_ruled_prefers_trump_once_opponent_has_none() {
        let hand = Hand::with_cards(vec![
            card(Rank::Jack, Suit::Spades),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Ace, Suit::Clubs),
        ]);
        let played = [
            card(Rank::Queen, Suit::Spades),
            card(Rank::King, Suit::Spades),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Ace, Suit::Spades),
        ];
        let decision = choose(&last(card(Rank::Queen, Suit::Spades)), &hand, &played);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Jack, Suit::Spades)));
        assert_eq!(decision.reason, "sure_win");
    }

    #[test]
    fn lead_ruled_scans_suits_in_enumeration_order() {
        let hand = Hand::with_cards(vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ace, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
        ]);
        let decision = choose(&last(card(Rank::Jack, Suit::Spades)), &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Ace, Suit::Diamonds)));
    }

    #[test]
    fn lead_ruled_announces_without_sure_winner() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Queen, Suit::Diamonds),
            card(Rank::King, Suit::Diamonds),
        ]);
        let decision = choose(&last(card(Rank::Jack, Suit::Diamonds)), &hand, &[]);
        assert_eq!(
            decision.action,
            PlayerAction::play_with_announce(card(Rank::Queen, Suit::Diamonds), Announce::Forty)
        );
    }

    #[test]
    fn lead_ruled_falls_back_to_lowest_non_trump() {
        let hand = Hand::with_cards(vec![
            card(Rank::King, Suit::Clubs),
            card(Rank::Jack, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
        ]);
        let decision = choose(&last(card(Rank::Ten, Suit::Diamonds)), &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Jack, Suit::Hearts)));
        assert_eq!(decision.reason, "lowest_non_trump");
    }

    #[test]
    fn lead_ruled_plays_lowest_trump_when_nothing_is_safe() {
        let hand = Hand::with_cards(vec![
            card(Rank::Queen, Suit::Spades),
            card(Rank::Nine, Suit::Spades),
        ]);
        let decision = choose(&last(card(Rank::Jack, Suit::Spades)), &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Nine, Suit::Spades)));
        assert_eq!(decision.reason, "lowest_remaining");
    }

    // Following, rules not enforced.

    #[test]
    fn follow_free_beats_led_card_with_highest() {
        let hand = Hand::with_cards(vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
        ]);
        let turn = open(card(Rank::Nine, Suit::Spades)).following(card(Rank::King, Suit::Clubs));
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Ace, Suit::Clubs)));
    }

    #[test]
    fn follow_free_never_splits_own_marriage() {
        let hand = Hand::with_cards(vec![
            card(Rank::Queen, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
        ]);
        let turn = open(card(Rank::Nine, Suit::Spades)).following(card(Rank::Jack, Suit::Clubs));
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Nine, Suit::Hearts)));
        assert_eq!(decision.reason, "lowest_remaining");
    }

    #[test]
    fn follow_free_trumps_an_ace_with_the_jack() {
        let hand = Hand::with_cards(vec![
            card(Rank::Jack, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
        ]);
        let turn = open(card(Rank::Ten, Suit::Spades)).following(card(Rank::Ace, Suit::Clubs));
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Jack, Suit::Spades)));
        assert_eq!(decision.reason, "trump_high_lead");
    }

    #[test]
    fn follow_free_uses_trump_nine_only_under_jack_trump_card() {
        let hand = Hand::with_cards(vec![
            card(Rank::Nine, Suit::Spades),
            card(Rank::Jack, Suit::Hearts),
        ]);
        let under_jack =
            open(card(Rank::Jack, Suit::Spades)).following(card(Rank::Ten, Suit::Clubs));
        let decision = choose(&under_jack, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Nine, Suit::Spades)));
        assert_eq!(decision.reason, "trump_high_lead");

        let under_ace =
            open(card(Rank::Ace, Suit::Spades)).following(card(Rank::Ten, Suit::Clubs));
        let decision = choose(&under_ace, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Nine, Suit::Spades)));
        assert_eq!(decision.reason, "lowest_remaining");
    }

    #[test]
    fn follow_free_spends_trump_queen_after_king_fell() {
        let hand = Hand::with_cards(vec![
            card(Rank::Queen, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
        ]);
        let turn = open(card(Rank::Ace, Suit::Spades)).following(card(Rank::Ace, Suit::Diamonds));
        let played = [card(Rank::King, Suit::Spades), card(Rank::Nine, Suit::Clubs)];
        assert_eq!(
            choose(&turn, &hand, &played).action,
            PlayerAction::play(card(Rank::Queen, Suit::Spades))
        );
        assert_eq!(
            choose(&turn, &hand, &[]).action,
            PlayerAction::play(card(Rank::Nine, Suit::Hearts))
        );
    }

    #[test]
    fn follow_free_spends_trump_king_after_queen_fell() {
        let hand = Hand::with_cards(vec![
            card(Rank::King, Suit::Spades),
            card(Rank::Jack, Suit::Hearts),
        ]);
        let turn = open(card(Rank::Ace, Suit::Spades)).following(card(Rank::Ten, Suit::Diamonds));
        let played = [card(Rank::Queen, Suit::Spades), card(Rank::Nine, Suit::Clubs)];
        assert_eq!(
            choose(&turn, &hand, &played).action,
            PlayerAction::play(card(Rank::King, Suit::Spades))
        );
    }

    #[test]
    fn follow_free_ducks_low_leads() {
        let hand = Hand::with_cards(vec![
            card(Rank::Jack, Suit::Spades),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
        ]);
        let turn = open(card(Rank::Ace, Suit::Spades)).following(card(Rank::King, Suit::Clubs));
        assert_eq!(
            choose(&turn, &hand, &[]).action,
            PlayerAction::play(card(Rank::Nine, Suit::Diamonds))
        );
    }

    // Following, rules enforced.

    #[test]
    fn follow_ruled_beats_even_when_splitting_marriage() {
        let hand = Hand::with_cards(vec![
            card(Rank::Queen, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
        ]);
        let turn = last(card(Rank::Nine, Suit::Spades)).following(card(Rank::Jack, Suit::Clubs));
        assert_eq!(
            choose(&turn, &hand, &[]).action,
            PlayerAction::play(card(Rank::King, Suit::Clubs))
        );
    }

    #[test]
    fn follow_ruled_trumps_with_lowest_when_void() {
        let hand = Hand::with_cards(vec![
            card(Rank::Ace, Suit::Spades),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
        ]);
        let turn = last(card(Rank::Nine, Suit::Spades)).following(card(Rank::Ten, Suit::Clubs));
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Jack, Suit::Spades)));
        assert_eq!(decision.reason, "lowest_trump");
    }

    #[test]
    fn follow_ruled_discards_lowest_when_it_cannot_win() {
        let hand = Hand::with_cards(vec![
            card(Rank::King, Suit::Hearts),
            card(Rank::Jack, Suit::Diamonds),
        ]);
        let turn = last(card(Rank::Nine, Suit::Spades)).following(card(Rank::Ten, Suit::Clubs));
        let decision = choose(&turn, &hand, &[]);
        assert_eq!(decision.action, PlayerAction::play(card(Rank::Jack, Suit::Diamonds)));
        assert_eq!(decision.reason, "lowest_remaining");
    }
}
