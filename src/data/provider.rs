use async_trait::async_trait;

use crate::{data::SourceError, models::TokenRecord};

/// Abstract interface for producing the initial token list.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Produce `count` records (fewer only if the upstream has fewer).
    async fn load(&self, count: usize) -> Result<Vec<TokenRecord>, SourceError>;

    /// Short label for logs and the status bar.
    fn name(&self) -> &'static str;
}
