//! Exact expected-value strategy tables for five-card draw video poker.
//!
//! Every dealt hand is reduced to a canonical key, every one of its 32 hold
//! options is scored by exhaustive enumeration of the draw, and the resulting
//! table is upserted into a persistent store, once per pay schedule.
pub mod cards;
pub mod evaluation;
pub mod export;
pub mod paytable;
pub mod sink;
pub mod strategy;

#[cfg(feature = "server")]
pub mod solver;

#[cfg(feature = "database")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payout multiplier of a final hand, in coins returned per coin wagered.
pub type Payout = u32;
/// Expected values of hold decisions.
pub type Utility = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ENUMERATION SIZES
// ============================================================================
/// Number of unordered five-card deals from a 52-card deck.
pub const N_DEALS: usize = 2_598_960;
/// Number of distinct canonical keys over all deals.
pub const N_CANONICAL: usize = 204_087;
/// Number of deals up to relabeling of suits.
pub const N_ISOMORPHIC: usize = 134_459;
/// Number of hold options per deal (every subset of five positions).
pub const N_HOLDS: usize = 32;
/// Cards per hand.
pub const HAND_SIZE: usize = 5;
/// Cards left in the deck after the deal.
pub const STUB_SIZE: usize = 47;

// ============================================================================
// SOLVER PARALLELISM
// Contiguous chunks of the hand space, one blocking worker per chunk.
// ============================================================================
/// Upper bound on concurrent workers regardless of available cores.
pub const MAX_WORKERS: usize = 8;
/// Records per upsert batch.
pub const BATCH_SIZE: usize = 100;
/// Batches buffered between workers and the coordinator.
pub const CHANNEL_CAPACITY: usize = 64;
/// Upserts allowed in flight before workers are made to wait.
pub const MAX_INFLIGHT: usize = 16;

// ============================================================================
// PERSISTENCE
// ============================================================================
/// Attempts per batch before the run is declared failed.
pub const UPSERT_ATTEMPTS: usize = 5;
/// Base delay of the exponential backoff between attempts.
pub const UPSERT_BACKOFF: std::time::Duration = std::time::Duration::from_millis(250);
/// Decimal places kept for persisted expected values.
pub const EV_DECIMALS: i32 = 6;
/// Format version written into exported bundles.
pub const EXPORT_VERSION: u16 = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Minimum interval between progress log messages.
pub const PROGRESS_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Register Ctrl+C handling. The first signal trips the interrupt so workers
/// stop between hands and in-flight uploads drain; a second exits immediately.
#[cfg(feature = "server")]
pub fn brb(interrupt: solver::Interrupt) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("graceful interrupt received, draining in-flight uploads");
            interrupt.trip();
        }
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(130);
        }
    });
}
