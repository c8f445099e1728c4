use {
    anyhow::{Result, bail},
    clap::Parser,
    pump_ticker::{
        SimulationMode, SourceArgs, TickerEngine,
        config::SIMULATION,
        data::{build_source, load_tokens},
        utils::{AppInstant, format_change, format_money, format_price, now_timestamp_ms},
    },
    std::collections::HashMap,
    tabled::{Table, Tabled, settings::Style},
};

/// Load a token list, let the fake market run for a while, print where it ended up.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct SnapshotArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of burst ticks to run before printing
    #[arg(long, default_value_t = 10)]
    ticks: u32,
}

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "Token")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h Change")]
    change: String,
    #[tabled(rename = "24h Volume")]
    volume: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
    #[tabled(rename = "Moves")]
    moves: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = SnapshotArgs::parse();
    if args.source.count == 0 {
        bail!("--count must be at least 1");
    }

    let source = build_source(&args.source);
    log::info!("🚀 Loading {} tokens from {} source", args.source.count, source.name());
    let tokens = load_tokens(source.as_ref(), args.source.count).await;
    if tokens.is_empty() {
        log::warn!("No tokens");
        return Ok(());
    }

    // Synthetic clock: one burst period per tick, wall clock advanced to match.
    let start = AppInstant::now();
    let start_ms = now_timestamp_ms();
    let period = SIMULATION.schedule.burst_period;
    let mut engine = TickerEngine::new(tokens, SimulationMode::Burst, start, args.source.seed);
    let mut moves: HashMap<String, u32> = HashMap::new();

    for tick in 1..=args.ticks {
        let now = start + period * tick;
        let now_ms = start_ms + (period * tick).as_millis() as i64;
        for id in engine.tick_at(now, now_ms) {
            *moves.entry(id).or_default() += 1;
        }
    }

    let rows: Vec<SnapshotRow> = engine
        .tokens()
        .map(|t| SnapshotRow {
            symbol: t.symbol.clone(),
            name: t.name.clone(),
            price: format_price(t.price),
            change: format_change(t.change_24h),
            volume: format_money(t.volume_24h),
            market_cap: format_money(t.market_cap),
            moves: moves.get(&t.id).copied().unwrap_or(0),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    log::info!(
        "{} ticks, {} mutations across {} tokens",
        args.ticks,
        engine.mutation_count(),
        engine.len()
    );

    Ok(())
}
