use thiserror::Error;

/// Everything a token source can fail with. Callers log these and carry on with an empty list.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Non-success HTTP status, or the request never completed.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The body was not the shape we expected.
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Parse(err.to_string())
        } else {
            SourceError::Fetch(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}
