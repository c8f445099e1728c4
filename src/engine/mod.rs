mod perturb;
mod schedule;
mod state;
mod ticker;

pub use ticker::TickerEngine;
pub use perturb::perturb;
pub use schedule::PerturbationSchedule;
pub(crate) use state::TrackedToken;
