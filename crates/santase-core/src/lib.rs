#![deny(warnings)]
pub mod game;
pub mod model;
pub mod rules;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "santase"
    }

    /// Points a player must reach to take the round.
    pub const fn winning_points() -> u16 {
        66
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
