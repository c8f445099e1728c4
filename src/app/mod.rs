mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, DetailsWindow, LoadingState, RunningState};

pub use root::App;
