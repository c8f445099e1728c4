use {
    async_trait::async_trait,
    rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom},
    std::{collections::HashSet, time::Duration},
    uuid::Builder,
};

use crate::{
    config::SOURCE,
    data::{SourceError, TokenSource},
    models::{TokenInfo, TokenRecord},
    utils::{now_timestamp_ms, round_to},
};

/// Fabricates plausible-looking tokens client-side.
pub struct SyntheticSource {
    delay: Duration,
    seed: Option<u64>,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self {
            delay: SOURCE.simulated_delay,
            seed: None,
        }
    }
}

impl SyntheticSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// `count` fresh records with pairwise-unique ids.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<TokenRecord> {
        let now_ms = now_timestamp_ms();
        let mut seen = HashSet::with_capacity(count);
        let mut tokens = Vec::with_capacity(count);
        while tokens.len() < count {
            let token = Self::generate_one(rng, now_ms);
            // ids must stay unique within one list
            if seen.insert(token.id.clone()) {
                tokens.push(token);
            }
        }
        tokens
    }

    pub fn generate_one<R: Rng + ?Sized>(rng: &mut R, now_ms: i64) -> TokenRecord {
        let mut token = Self::market_fields(rng, now_ms);
        token.id = random_id(rng);
        token.name = random_name(rng);
        token.supply = Some(rng.gen_range(SOURCE.ranges.supply));
        token
    }

    /// Fill in market fields for an index entry. Keeps its id, name and supply.
    pub fn expand<R: Rng + ?Sized>(info: TokenInfo, rng: &mut R) -> TokenRecord {
        let mut token = Self::market_fields(rng, now_timestamp_ms());
        token.symbol = symbol_from_name(&info.name).unwrap_or(token.symbol);
        token.id = info.id;
        token.name = info.name;
        token.supply = Some(info.supply);
        token
    }

    fn market_fields<R: Rng + ?Sized>(rng: &mut R, now_ms: i64) -> TokenRecord {
        let ranges = &SOURCE.ranges;
        let price = round_to(rng.gen_range(SOURCE.ranges.price), ranges.price_decimals)
            .max(*ranges.price.start());
        TokenRecord {
            id: String::new(),
            name: String::new(),
            symbol: random_symbol(rng, ranges.symbol_len),
            price,
            change_24h: round_to(rng.gen_range(SOURCE.ranges.change_pct), ranges.money_decimals),
            volume_24h: round_to(rng.gen_range(SOURCE.ranges.volume), ranges.money_decimals),
            market_cap: round_to(rng.gen_range(SOURCE.ranges.market_cap), ranges.money_decimals),
            last_update: now_ms,
            supply: None,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl TokenSource for SyntheticSource {
    async fn load(&self, count: usize) -> Result<Vec<TokenRecord>, SourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let mut rng = self.rng();
        Ok(Self::generate(count, &mut rng))
    }

    fn name(&self) -> &'static str {
        "synthetic"
    }
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.r#gen();
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = SOURCE.name_prefixes.choose(rng).copied().unwrap_or("Acme");
    let suffix = SOURCE.name_suffixes.choose(rng).copied().unwrap_or("Labs");
    format!("{} {}{}", prefix, suffix, SOURCE.name_tag)
}

fn random_symbol<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
}

/// Ticker from the capitals (or leading letters) of an index name, e.g. "Wrapped Ether" -> "WE".
fn symbol_from_name(name: &str) -> Option<String> {
    let capitals: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_ascii_alphabetic()))
        .map(|c| c.to_ascii_uppercase())
        .take(SOURCE.ranges.symbol_len + 1)
        .collect();
    if capitals.is_empty() {
        return None;
    }
    if capitals.len() >= 2 {
        return Some(capitals);
    }
    let letters: String = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(SOURCE.ranges.symbol_len)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    Some(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_fields_are_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for token in SyntheticSource::generate(500, &mut rng) {
            assert!(token.price > 0.0 && token.price <= 1000.0, "{}", token);
            assert!(token.volume_24h >= 0.0);
            assert!(token.market_cap >= 0.0);
            assert!(token.change_24h >= -100.0);
            assert!((-50.0..=50.0).contains(&token.change_24h));
            let supply = token.supply.unwrap();
            assert!((1_000_000..=1_000_000_000).contains(&supply));
            assert_eq!(token.symbol.len(), 3);
            assert!(token.symbol.chars().all(|c| c.is_ascii_uppercase()));
            assert!(token.name.ends_with("Coin"));
            assert!(token.is_finite());
        }
    }

    #[test]
    fn generates_exactly_n_unique_ids() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [0, 1, 3, 20, 257] {
            let tokens = SyntheticSource::generate(n, &mut rng);
            assert_eq!(tokens.len(), n);
            let ids: HashSet<_> = tokens.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids.len(), n);
        }
    }

    #[test]
    fn two_calls_differ() {
        let mut rng = StdRng::from_entropy();
        let a = SyntheticSource::generate(20, &mut rng);
        let b = SyntheticSource::generate(20, &mut rng);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
        assert!(a.iter().zip(&b).all(|(x, y)| x.id != y.id));
    }

    #[test]
    fn same_seed_same_tokens_apart_from_timestamp() {
        let mut a = SyntheticSource::generate(5, &mut StdRng::seed_from_u64(3));
        let mut b = SyntheticSource::generate(5, &mut StdRng::seed_from_u64(3));
        a.iter_mut().chain(b.iter_mut()).for_each(|t| t.last_update = 0);
        assert_eq!(a, b);
    }

    #[test]
    fn expand_keeps_index_identity() {
        let info = TokenInfo {
            id: "asset-42".to_string(),
            name: "Wrapped Ether".to_string(),
            supply: 123_456,
        };
        let token = SyntheticSource::expand(info, &mut StdRng::seed_from_u64(1));
        assert_eq!(token.id, "asset-42");
        assert_eq!(token.name, "Wrapped Ether");
        assert_eq!(token.supply, Some(123_456));
        assert_eq!(token.symbol, "WE");
        assert!(token.price > 0.0);
    }

    #[test]
    fn symbol_from_single_word_uses_leading_letters() {
        assert_eq!(symbol_from_name("bitcoin").as_deref(), Some("BIT"));
        assert_eq!(symbol_from_name("  ").as_deref(), None);
        assert_eq!(symbol_from_name("Big Fat Juicy Meme Token").as_deref(), Some("BFJM"));
    }

    #[tokio::test]
    async fn load_honours_count_without_delay() {
        let source = SyntheticSource::new(Some(9)).with_delay(Duration::ZERO);
        let tokens = source.load(4).await.unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(source.name(), "synthetic");
    }
}
