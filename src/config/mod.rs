//! Configuration module for the ticker application.

// Can all be private now because we have a public re-export.
mod debug;
mod flash;
mod persistence;
mod simulation;
mod source;
mod types;

// Re-export commonly used items
pub use debug::DF;
pub use flash::{FLASH, FlashConfig, PulseTrack};
pub use persistence::PERSISTENCE;
pub use simulation::{DriftLimits, PerturbationProfile, SIMULATION, ScheduleConfig};
pub use source::{SOURCE, SyntheticRanges};
pub use types::{SimulationMode, SourceKind, ViewMode};
