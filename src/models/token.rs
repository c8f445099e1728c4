use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// One simulated market ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    pub market_cap: f64,
    /// Epoch milliseconds of the last mutation.
    pub last_update: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply: Option<u64>,
}

/// Reduced projection of a `TokenRecord`, as served by the remote index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub id: String,
    pub name: String,
    pub supply: u64,
}

/// The values whose change triggers a highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSnapshot {
    pub price: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
}

impl TokenRecord {
    pub fn info(&self) -> TokenInfo {
        TokenInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            supply: self.supply.unwrap_or_default(),
        }
    }

    pub fn values(&self) -> ValueSnapshot {
        ValueSnapshot {
            price: self.price,
            volume_24h: self.volume_24h,
            market_cap: self.market_cap,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.change_24h > 0.0
    }

    /// True when every numeric field is a real number.
    pub fn is_finite(&self) -> bool {
        self.price.is_finite()
            && self.change_24h.is_finite()
            && self.volume_24h.is_finite()
            && self.market_cap.is_finite()
    }
}

impl fmt::Display for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) ${:.5} {:+.2}%",
            self.symbol, self.name, self.price, self.change_24h
        )
    }
}
