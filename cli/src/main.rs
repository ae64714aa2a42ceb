//! Coal-pile fire calendar for the terminal.
//!
//! ```text
//! coalcal [CONFIG] [YYYY-MM] [DAY]
//! coalcal [CONFIG] warehouses [WAREHOUSE_ID]
//! ```
//!
//! Without a month the current local month is shown.  A failed fetch is
//! reported but the calendar still renders, with estimated statuses for
//! days that lack records.

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use coalcal_common::config::{self, Config};
use coalcal_common::month::MonthKey;
use coalcal_engine::client::HttpDataSource;
use coalcal_engine::fallback::{FallbackPolicy, RandomFallback, SeededFallback};
use coalcal_engine::FireCalendar;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);

    // ── load config ──────────────────────────────────────────────────
    let config = load_config(args.next())?;
    let source = HttpDataSource::from_config(&config).context("Cannot create HTTP client")?;

    match args.next().as_deref() {
        Some("warehouses") => {
            let list = source
                .fetch_warehouses()
                .await
                .context("Cannot fetch warehouses")?;
            match args.next() {
                Some(id) => {
                    let id: i64 = id
                        .parse()
                        .with_context(|| format!("Invalid warehouse id {id:?}"))?;
                    print!("{}", render::piles(&list, id));
                }
                None => print!("{}", render::warehouses(&list)),
            }
        }
        month_arg => {
            let month = match month_arg {
                Some(s) => s
                    .parse::<MonthKey>()
                    .with_context(|| format!("Invalid month {s:?}"))?,
                None => MonthKey::current(),
            };
            let day = args
                .next()
                .map(|d| d.parse::<u32>().with_context(|| format!("Invalid day {d:?}")))
                .transpose()?;
            show_month(source, &config, month, day).await;
        }
    }

    Ok(())
}

/// Explicit path must exist; the default path may be absent.
fn load_config(arg: Option<String>) -> Result<Config> {
    match arg {
        Some(path) => config::load(&PathBuf::from(path)).context("Config load failed"),
        None => {
            let path = PathBuf::from(Config::default_path());
            if path.exists() {
                config::load(&path).context("Config load failed")
            } else {
                info!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
        }
    }
}

async fn show_month(source: HttpDataSource, config: &Config, month: MonthKey, day: Option<u32>) {
    let fallback: Arc<dyn FallbackPolicy> = match config.fallback_seed {
        Some(seed) => Arc::new(SeededFallback::new(seed)),
        None => Arc::new(RandomFallback::from_os_rng()),
    };
    let calendar = FireCalendar::new(source, month, fallback);
    calendar.show(month).await;

    let index = calendar.day_index();
    print!("{}", render::month(&index, config.week_start));
    print!("{}", render::legend(&index));
    for failure in calendar.store().errors() {
        eprintln!("{failure}");
    }
    if let Some(day) = day {
        println!();
        print!("{}", render::day_detail(&index, day));
    }
}
