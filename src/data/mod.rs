mod error;
mod loader;
mod provider;
mod remote;
mod synthetic;

pub use {
    error::SourceError,
    loader::{LoadedTokens, build_source, load_tokens, spawn_detail_fetch, spawn_token_load},
    provider::TokenSource,
    remote::{RemoteIndexSource, TokenDetails},
    synthetic::SyntheticSource,
};
