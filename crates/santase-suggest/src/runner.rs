use santase_bot::{BotFeatures, DecisionError, Player, SmartPlayer};
use santase_core::model::action::PlayerAction;
use santase_core::model::card::Card;
use santase_core::model::deck::Deck;
use santase_core::model::phase::RoundPhase;
use santase_core::model::turn::TurnContext;
use santase_core::rules::{ActionValidator, StandardRules};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{LoggingConfig, Scenario};

/// The engine's answer for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub action: PlayerAction,
    pub reason: &'static str,
    pub legal_cards: Vec<Card>,
    pub played_cards: Vec<Card>,
}

impl Suggestion {
    pub fn render_text(&self) -> String {
        format!(
            "action: {}\nreason: {}\nlegal:  {}\nplayed: {}\n",
            self.action,
            self.reason,
            join_cards(&self.legal_cards),
            join_cards(&self.played_cards),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A seeded opening position together with the engine's first move.
#[derive(Debug, Clone)]
pub struct DealtPosition {
    pub scenario: Scenario,
    pub suggestion: Suggestion,
}

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("engine could not decide: {0}")]
    Decision(#[from] DecisionError),
    #[error("deck holds too few cards for an opening deal")]
    IncompleteDeal,
}

/// Replays the scenario's completed tricks through a fresh engine, then asks it for a move.
pub fn suggest(scenario: &Scenario, features: BotFeatures) -> Result<Suggestion, SuggestError> {
    let rules = StandardRules::new();
    let mut player = SmartPlayer::new(rules).with_features(features);
    let hand = scenario.hand();

    player.start_round(&hand, scenario.trump_card);
    for [first, second] in &scenario.history {
        let completed = TurnContext::new(scenario.trump_card, scenario.phase)
            .completed(*first, *second);
        player.end_turn(&completed);
    }

    let context = scenario.turn_context();
    let decision = player.try_decide(&context, &hand)?;
    let legal_cards = rules.legal_cards_to_play(&context, &hand);
    let played_cards = player.played_cards().iter().collect();

    event!(
        target: "santase_suggest::runner",
        Level::DEBUG,
        history = scenario.history.len(),
        legal = legal_cards.len(),
        "scenario evaluated"
    );

    Ok(Suggestion {
        action: decision.action,
        reason: decision.reason,
        legal_cards,
        played_cards,
    })
}

/// Deals a seeded opening position and lets the engine lead the first trick.
pub fn deal(seed: u64, features: BotFeatures) -> Result<DealtPosition, SuggestError> {
    let opening = Deck::shuffled_with_seed(seed)
        .deal_opening()
        .ok_or(SuggestError::IncompleteDeal)?;

    let scenario = Scenario {
        trump_card: opening.trump_card,
        phase: RoundPhase::Opening,
        hand: opening.first_hand,
        led_card: None,
        own_points: 0,
        opponent_points: 0,
        history: Vec::new(),
        logging: LoggingConfig::default(),
    };
    let suggestion = suggest(&scenario, features)?;

    event!(
        target: "santase_suggest::runner",
        Level::INFO,
        seed,
        trump = %scenario.trump_card,
        chosen = %suggestion.action,
        "opening dealt"
    );

    Ok(DealtPosition {
        scenario,
        suggestion,
    })
}

fn join_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
