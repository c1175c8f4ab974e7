use super::Player;
use crate::bot::{
    BotContext, BotFeatures, BotParams, Decision, DecisionError, PlayedCardsTracker, TurnPlanner,
};
use santase_core::game::snapshot::TurnSnapshot;
use santase_core::model::action::PlayerAction;
use santase_core::model::card::Card;
use santase_core::model::card_set::CardSet;
use santase_core::model::hand::Hand;
use santase_core::model::turn::TurnContext;
use santase_core::rules::{ActionValidator, AnnounceValidator, StandardRules};
use tracing::{Level, event};

/// Rule-based Santase player that deduces the opponent's hand from seen cards.
pub struct SmartPlayer<R = StandardRules> {
    rules: R,
    tracker: PlayedCardsTracker,
    params: BotParams,
    features: BotFeatures,
}

impl SmartPlayer<StandardRules> {
    pub fn standard() -> Self {
        Self::new(StandardRules::new())
    }
}

impl Default for SmartPlayer<StandardRules> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<R> SmartPlayer<R>
where
    R: ActionValidator + AnnounceValidator,
{
    pub fn new(rules: R) -> Self {
        Self {
            rules,
            tracker: PlayedCardsTracker::new(),
            params: BotParams::default(),
            features: BotFeatures::from_env(),
        }
    }

    pub fn with_params(mut self, params: BotParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_features(mut self, features: BotFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn params(&self) -> &BotParams {
        &self.params
    }

    pub fn played_cards(&self) -> CardSet {
        self.tracker.played()
    }

    pub fn tracker(&self) -> &PlayedCardsTracker {
        &self.tracker
    }

    pub fn record_trick(&mut self, first: Card, second: Card) {
        self.tracker.record_trick(first, second);
    }

    pub fn reset_round(&mut self) {
        self.tracker.reset_round();
    }

    /// Decision plus the policy tier that produced it.
    pub fn try_decide(
        &self,
        context: &TurnContext,
        hand: &Hand,
    ) -> Result<Decision, DecisionError> {
        let ctx = BotContext::new(context, hand, self.tracker.played(), &self.params, &self.rules);
        let result = TurnPlanner::decide(&ctx, &self.rules);
        match &result {
            Ok(decision) => self.log_decision(context, hand, decision),
            Err(err) => event!(
                target: "santase_bot::play",
                Level::WARN,
                error = %err,
                hand_size = hand.len(),
                "no decision possible"
            ),
        }
        result
    }

    fn log_decision(&self, context: &TurnContext, hand: &Hand, decision: &Decision) {
        if self.features.decision_details() && tracing::enabled!(Level::DEBUG) {
            match TurnSnapshot::capture(hand, context, self.tracker.played()).to_json() {
                Ok(snapshot) => event!(
                    target: "santase_bot::play",
                    Level::DEBUG,
                    reason = decision.reason,
                    snapshot = %snapshot,
                ),
                Err(err) => event!(
                    target: "santase_bot::play",
                    Level::DEBUG,
                    error = %err,
                    "snapshot unavailable"
                ),
            }
        }

        if !tracing::enabled!(Level::INFO) {
            return;
        }

        let hand_preview = hand
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(",");

        event!(
            target: "santase_bot::play",
            Level::INFO,
            phase = %context.phase,
            trump = %context.trump_card,
            leading = context.is_leading(),
            rules_enforced = context.rules_enforced(),
            led = ?context.first_played_card.map(|card| card.to_string()),
            own_points = context.own_round_points,
            hand = %hand_preview,
            played = self.tracker.played().len(),
            chosen = %decision.action,
            announce_points = decision.action.announce().points(),
            reason = decision.reason,
        );
    }
}

impl<R> Player for SmartPlayer<R>
where
    R: ActionValidator + AnnounceValidator,
{
    fn name(&self) -> &str {
        "Smart Player"
    }

    fn start_round(&mut self, hand: &Hand, trump_card: Card) {
        event!(
            target: "santase_bot::tracker",
            Level::DEBUG,
            hand_size = hand.len(),
            trump = %trump_card,
            "round started"
        );
    }

    fn get_turn(
        &mut self,
        context: &TurnContext,
        hand: &Hand,
    ) -> Result<PlayerAction, DecisionError> {
        self.try_decide(context, hand).map(|decision| decision.action)
    }

    fn end_turn(&mut self, context: &TurnContext) {
        match (context.first_played_card, context.second_played_card) {
            (Some(first), Some(second)) => self.tracker.record_trick(first, second),
            (first, second) => event!(
                target: "santase_bot::tracker",
                Level::WARN,
                first = ?first.map(|card| card.to_string()),
                second = ?second.map(|card| card.to_string()),
                "incomplete trick ignored"
            ),
        }
    }

    fn end_round(&mut self) {
        self.tracker.reset_round();
    }

    fn end_game(&mut self, won: bool) {
        event!(target: "santase_bot::play", Level::DEBUG, won, "game finished");
    }
}
