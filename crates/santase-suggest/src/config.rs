use santase_core::model::card::Card;
use santase_core::model::hand::Hand;
use santase_core::model::phase::RoundPhase;
use santase_core::model::turn::TurnContext;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const MAX_HAND_SIZE: usize = 6;
/// Every card point of the deck plus four marriages, one of them in trumps.
const MAX_ROUND_POINTS: u16 = 120 + 3 * 20 + 40;

/// A single decision point loaded from YAML or JSON.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Scenario {
    pub trump_card: Card,
    pub phase: RoundPhase,
    pub hand: Vec<Card>,
    /// Card the opponent led; omit when we lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_card: Option<Card>,
    #[serde(default)]
    pub own_points: u16,
    #[serde(default)]
    pub opponent_points: u16,
    /// Completed tricks of the round so far, oldest first.
    #[serde(default)]
    pub history: Vec<[Card; 2]>,
    #[serde(default, skip_serializing)]
    pub logging: LoggingConfig,
}

impl Scenario {
    /// Load a scenario from disk; `.json` files are parsed as JSON, everything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ScenarioError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut scenario: Scenario = if is_json {
            serde_json::from_reader(reader).map_err(|source| ScenarioError::ParseJson {
                source,
                path: path_buf.clone(),
            })?
        } else {
            serde_yaml::from_reader(reader).map_err(|source| ScenarioError::Parse {
                source,
                path: path_buf.clone(),
            })?
        };
        scenario.validate().map_err(|source| ScenarioError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(scenario)
    }

    /// Validate the scenario without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.logging.normalize();

        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown tracing level '{}'", self.logging.tracing_level),
            });
        }

        for (field, points) in [
            ("own_points", self.own_points),
            ("opponent_points", self.opponent_points),
        ] {
            if points > MAX_ROUND_POINTS {
                return Err(ValidationError::InvalidField {
                    field: field.to_string(),
                    message: format!("a round never exceeds {MAX_ROUND_POINTS} points"),
                });
            }
        }

        if self.hand.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "hand".to_string(),
                message: "hand must hold at least one card".to_string(),
            });
        }

        if self.hand.len() > MAX_HAND_SIZE {
            return Err(ValidationError::InvalidField {
                field: "hand".to_string(),
                message: format!("hand holds at most {MAX_HAND_SIZE} cards"),
            });
        }

        if self.phase == RoundPhase::Opening && !self.history.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "history".to_string(),
                message: "history must be empty during the opening trick".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let tracked = self
            .hand
            .iter()
            .map(|card| ("hand", card))
            .chain(self.led_card.iter().map(|card| ("led_card", card)))
            .chain(self.history.iter().flatten().map(|card| ("history", card)));
        for (field, card) in tracked {
            if !seen.insert(*card) {
                return Err(ValidationError::InvalidField {
                    field: field.to_string(),
                    message: format!("card {card} appears more than once"),
                });
            }
        }

        Ok(())
    }

    pub fn hand(&self) -> Hand {
        Hand::with_cards(self.hand.clone())
    }

    pub fn turn_context(&self) -> TurnContext {
        let context = TurnContext::new(self.trump_card, self.phase)
            .with_points(self.own_points, self.opponent_points);
        match self.led_card {
            Some(card) => context.following(card),
            None => context,
        }
    }
}

/// Logging configuration defaults to plain-text INFO logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub decision_details: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
            json: false,
            decision_details: false,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

/// Errors surfaced when loading scenario files.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse scenario {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("failed to parse scenario {path:?}: {source}")]
    ParseJson {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("invalid scenario in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ScenarioError {
    pub fn path(&self) -> &Path {
        match self {
            ScenarioError::Read { path, .. }
            | ScenarioError::Parse { path, .. }
            | ScenarioError::ParseJson { path, .. }
            | ScenarioError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
