use poll_promise::Promise;

use crate::{
    data::{SourceError, TokenDetails},
    utils::AppInstant,
};

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Loading(LoadingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

#[derive(Clone)]
pub(crate) struct LoadingState {
    pub(crate) started: AppInstant,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            started: AppInstant::now(),
        }
    }
}

/// The open details window. `request` is only set for tokens that came from the remote index.
pub(crate) struct DetailsWindow {
    pub(crate) id: String,
    pub(crate) request: Option<Promise<Result<TokenDetails, SourceError>>>,
}
