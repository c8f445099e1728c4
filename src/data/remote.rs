use {
    async_trait::async_trait,
    rand::{SeedableRng, rngs::StdRng},
    reqwest::Client,
    serde::{Deserialize, Deserializer, de},
    serde_json::Value,
    std::collections::HashSet,
};

use crate::{
    data::{SourceError, SyntheticSource, TokenSource},
    models::{TokenInfo, TokenRecord},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// One entry of the index mapping. Field names vary between index versions.
#[derive(Debug, Deserialize)]
struct IndexEntry {
    #[serde(alias = "assetName", alias = "asset_name", alias = "asset")]
    name: String,
    #[serde(alias = "identifier", alias = "assetId", alias = "asset_id")]
    id: String,
    #[serde(deserialize_with = "deserialize_supply")]
    supply: u64,
}

impl From<IndexEntry> for TokenInfo {
    fn from(entry: IndexEntry) -> Self {
        TokenInfo {
            id: entry.id,
            name: entry.name,
            supply: entry.supply,
        }
    }
}

/// Body of the per-identifier detail endpoint. Only `leaves` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDetails {
    pub leaves: Value,
}

impl TokenDetails {
    /// Number of leaves when the field is an array or a count.
    pub fn leaf_count(&self) -> Option<u64> {
        match &self.leaves {
            Value::Array(items) => Some(items.len() as u64),
            Value::Number(n) => n.as_u64(),
            Value::Object(map) => Some(map.len() as u64),
            _ => None,
        }
    }
}

/// Reads the public asset index once and projects it into `TokenInfo`.
pub struct RemoteIndexSource {
    client: Client,
    index_url: String,
    detail_base_url: String,
    seed: Option<u64>,
}

impl RemoteIndexSource {
    pub fn new(index_url: impl Into<String>, detail_base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            index_url: index_url.into(),
            detail_base_url: detail_base_url.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// First `count` index entries, in index order.
    pub async fn try_get_tokens(&self, count: usize) -> Result<Vec<TokenInfo>, SourceError> {
        log::debug!("Fetching token index from {}", self.index_url);

        let response = self.client.get(&self.index_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Fetch(format!(
                "index {} returned {}",
                self.index_url, status
            )));
        }

        let body: Value = response.json().await?;
        project_index(body, count)
    }

    /// Same as `try_get_tokens` but never fails: errors are logged and give an empty list.
    pub async fn get_tokens(&self, count: usize) -> Vec<TokenInfo> {
        match self.try_get_tokens(count).await {
            Ok(infos) => infos,
            Err(e) => {
                log::warn!("Token index unavailable, showing nothing: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_details(&self, id: &str) -> Result<TokenDetails, SourceError> {
        let url = format!("{}/{}", self.detail_base_url.trim_end_matches('/'), id);

        #[cfg(debug_assertions)]
        if DF.log_details {
            log::info!("Fetching details for {} from {}", id, url);
        }

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Fetch(format!("{} returned {}", url, status)));
        }
        let body: Value = response.json().await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[async_trait]
impl TokenSource for RemoteIndexSource {
    async fn load(&self, count: usize) -> Result<Vec<TokenRecord>, SourceError> {
        let infos = self.try_get_tokens(count).await?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(infos
            .into_iter()
            .map(|info| SyntheticSource::expand(info, &mut rng))
            .collect())
    }

    fn name(&self) -> &'static str {
        "remote index"
    }
}

/// Project the index mapping into at most `count` infos, preserving key order.
pub(crate) fn project_index(body: Value, count: usize) -> Result<Vec<TokenInfo>, SourceError> {
    let Value::Object(entries) = body else {
        return Err(SourceError::Parse(
            "index body is not a mapping of entries".to_string(),
        ));
    };

    let mut seen = HashSet::new();
    let mut infos = Vec::with_capacity(count.min(entries.len()));
    for (key, raw) in entries {
        if infos.len() == count {
            break;
        }
        let entry: IndexEntry = serde_json::from_value(raw)
            .map_err(|e| SourceError::Parse(format!("entry {}: {}", key, e)))?;
        if !seen.insert(entry.id.clone()) {
            log::warn!("Skipping duplicate index id {} (key {})", entry.id, key);
            continue;
        }
        infos.push(entry.into());
    }
    Ok(infos)
}

fn deserialize_supply<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let from_float = |f: f64| -> Result<u64, D::Error> {
        if f.is_finite() && f >= 0.0 && f <= u64::MAX as f64 {
            Ok(f.round() as u64)
        } else {
            Err(de::Error::custom(format!("supply out of range: {}", f)))
        }
    };

    match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_u64() {
            Some(v) => Ok(v),
            None => from_float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => {
            let s = s.trim().replace('_', "");
            match s.parse::<u64>() {
                Ok(v) => Ok(v),
                Err(_) => from_float(s.parse::<f64>().map_err(<D::Error as de::Error>::custom)?),
            }
        }
        other => Err(de::Error::custom(format!(
            "supply must be a number, got {}",
            other
        ))),
    }
}
