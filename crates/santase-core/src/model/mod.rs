pub mod action;
pub mod announce;
pub mod card;
pub mod card_set;
pub mod deck;
pub mod hand;
pub mod phase;
pub mod rank;
pub mod suit;
pub mod turn;
