use {
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// How the token list is presented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, ValueEnum, Default,
)]
pub enum ViewMode {
    #[strum(to_string = "List")]
    #[default]
    List,
    #[strum(to_string = "Grid")]
    Grid,
}

impl ViewMode {
    /// The list view ticks in bursts, the card grid jitters per card.
    pub fn default_simulation(&self) -> SimulationMode {
        match self {
            ViewMode::List => SimulationMode::Burst,
            ViewMode::Grid => SimulationMode::Jitter,
        }
    }
}

/// Which perturbation schedule drives the fake market.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, ValueEnum, Default,
)]
pub enum SimulationMode {
    /// Fixed period, 1-3 random records per tick.
    #[strum(to_string = "Burst")]
    #[default]
    Burst,
    /// Every record on its own 1-8s timer.
    #[strum(to_string = "Jitter")]
    Jitter,
}

/// Where the initial token list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ValueEnum, Default)]
pub enum SourceKind {
    #[strum(to_string = "Synthetic")]
    #[default]
    Synthetic,
    #[strum(to_string = "Remote Index")]
    Remote,
}
