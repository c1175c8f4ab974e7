use core::fmt;
use serde::{Deserialize, Serialize};

/// Marriage announcement attached to a played Queen or King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Announce {
    #[default]
    None,
    Twenty,
    Forty,
}

impl Announce {
    pub const fn points(self) -> u16 {
        match self {
            Announce::None => 0,
            Announce::Twenty => 20,
            Announce::Forty => 40,
        }
    }

    pub const fn is_some(self) -> bool {
        !matches!(self, Announce::None)
    }
}

impl fmt::Display for Announce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Announce::None => f.write_str("none"),
            Announce::Twenty => f.write_str("20"),
            Announce::Forty => f.write_str("40"),
        }
    }
}
