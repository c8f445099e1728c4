// Runs the token source on a background thread before the ticker starts (the UI polls for the result)

use {
    poll_promise::Promise,
    std::{
        sync::{
            Arc,
            mpsc::{self, Receiver},
        },
        thread,
    },
    tokio::runtime::Runtime,
};

use crate::{
    SourceArgs,
    config::SourceKind,
    data::{RemoteIndexSource, SourceError, SyntheticSource, TokenDetails, TokenSource},
    models::TokenRecord,
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// What the loader thread hands back to the UI.
#[derive(Debug, Clone)]
pub struct LoadedTokens {
    pub tokens: Vec<TokenRecord>,
    pub source: &'static str,
    pub elapsed_ms: u128,
}

pub fn build_source(args: &SourceArgs) -> Box<dyn TokenSource> {
    match args.source {
        SourceKind::Synthetic => Box::new(SyntheticSource::new(args.seed)),
        SourceKind::Remote => Box::new(
            RemoteIndexSource::new(args.index_url.clone(), args.detail_url.clone())
                .with_seed(args.seed),
        ),
    }
}

/// Load `count` tokens. Failures are logged and degrade to an empty list.
pub async fn load_tokens(source: &dyn TokenSource, count: usize) -> Vec<TokenRecord> {
    match source.load(count).await {
        Ok(tokens) => {
            #[cfg(debug_assertions)]
            if DF.log_source {
                log::info!("Loaded {} tokens from {} source", tokens.len(), source.name());
            }
            tokens
        }
        Err(e) => {
            log::warn!("{} source failed ({}); continuing with an empty list", source.name(), e);
            Vec::new()
        }
    }
}

/// Spawn the loader thread. The receiver yields exactly one `LoadedTokens`.
pub fn spawn_token_load(args: SourceArgs) -> Receiver<LoadedTokens> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let start = AppInstant::now();
        let source = build_source(&args);
        let tokens = match Runtime::new() {
            Ok(rt) => rt.block_on(load_tokens(source.as_ref(), args.count)),
            Err(e) => {
                log::error!("Failed to create runtime for token load: {}", e);
                Vec::new()
            }
        };
        let _ = tx.send(LoadedTokens {
            tokens,
            source: source.name(),
            elapsed_ms: start.elapsed().as_millis(),
        });
    });

    rx
}

/// Fetch one detail record on its own thread. Failures are logged before they reach the UI.
pub fn spawn_detail_fetch(
    source: Arc<RemoteIndexSource>,
    id: String,
) -> Promise<Result<TokenDetails, SourceError>> {
    Promise::spawn_thread("token_details", move || {
        let result = Runtime::new()
            .map_err(|e| SourceError::Fetch(format!("runtime: {}", e)))
            .and_then(|rt| rt.block_on(source.fetch_details(&id)));
        if let Err(e) = &result {
            log::warn!("Details for {} unavailable: {}", id, e);
        }
        result
    })
}
