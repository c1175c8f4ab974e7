pub mod bot;
pub mod policy;

pub use bot::{
    BotContext, BotFeatures, BotParams, Decision, DecisionError, PlayPlanner, PlayedCardsTracker,
    TurnPlanner, possible_opponent_cards, surely_wins, try_announce,
};
pub use policy::{Player, SmartPlayer};
