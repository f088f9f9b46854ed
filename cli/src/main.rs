//! Portal lifecycle simulator CLI
//!
//! Runs the lifecycle engine against the demo dataset (or an empty
//! store), pacing ticks in real time, and prints a per-tick activity
//! line plus a final summary. Intended for demos and manual testing;
//! the engine itself never sleeps.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use portal_lifecycle_core::{seed, Scheduler, SchedulerConfig, SystemClock};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "portal-sim", about = "Business portal lifecycle simulator")]
struct Args {
    /// Number of ticks to run
    #[arg(long, default_value_t = 30)]
    ticks: usize,

    /// Scheduling period in milliseconds
    #[arg(long, default_value_t = 1_000)]
    period_ms: u64,

    /// Start from an empty store instead of the demo dataset
    #[arg(long)]
    empty: bool,

    /// Write a state snapshot (JSON) to this path after the run
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let config = if args.empty {
        SchedulerConfig {
            tick_period_ms: args.period_ms,
            ..Default::default()
        }
    } else {
        SchedulerConfig {
            tick_period_ms: args.period_ms,
            quotes: seed::quotes(),
            orders: seed::orders(),
            invoices: seed::invoices(),
        }
    };

    let mut scheduler = Scheduler::new(config, Box::new(SystemClock))
        .context("scheduler configuration rejected")?;

    tracing::info!(
        ticks = args.ticks,
        period_ms = scheduler.tick_period_ms(),
        quotes = scheduler.store().num_quotes(),
        orders = scheduler.store().num_orders(),
        invoices = scheduler.store().num_invoices(),
        "simulation starting"
    );

    for _ in 0..args.ticks {
        let result = scheduler.tick()?;
        if result.quotes_advanced > 0 || result.orders_advanced > 0 || result.conversions > 0 {
            println!(
                "tick {:>4}: {} quote(s) advanced, {} order(s) advanced, {} conversion(s)",
                result.tick, result.quotes_advanced, result.orders_advanced, result.conversions
            );
        }
        thread::sleep(Duration::from_millis(scheduler.tick_period_ms()));
    }

    let converted = scheduler.event_log().events_of_type("QuoteConverted").len();
    println!(
        "done: {} ticks, {} quotes, {} orders, {} invoices ({} converted), invoiced total {}p",
        scheduler.ticks_completed(),
        scheduler.store().num_quotes(),
        scheduler.store().num_orders(),
        scheduler.store().num_invoices(),
        converted,
        scheduler.store().invoiced_total(),
    );

    if let Some(path) = args.snapshot_out {
        let snapshot = scheduler.snapshot()?;
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("snapshot written to {}", path.display());
    }

    Ok(())
}
