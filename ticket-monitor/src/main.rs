use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_monitor::config::MonitorConfig;
use ticket_monitor::leftticket::{QueryClient, QueryConfig, TicketQuery};
use ticket_monitor::monitor::{Monitor, print_stamped};
use ticket_monitor::stations::StationTable;

/// Poll 12306 left-ticket availability for one route and date.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (TOML)
    #[arg(long, short = 'c', value_name = "FILE", default_value = "monitor.toml")]
    config: PathBuf,

    /// Station feed file (the 12306 station_name.js payload)
    #[arg(long, value_name = "FILE", default_value = "stations.txt")]
    stations: PathBuf,

    /// Query once, print the report, and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reports go to stdout; logging stays on stderr so the two streams
    // can be piped apart.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = MonitorConfig::load(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;

    let stations = StationTable::load(&args.stations)
        .with_context(|| format!("loading station table {}", args.stations.display()))?;
    tracing::info!("loaded {} stations", stations.len());

    // Fail fast on a name the feed does not know; a silently empty
    // telecode would query the wrong route forever.
    let Some(from) = stations.code(&config.from) else {
        bail!("unknown boarding station {:?}", config.from);
    };
    let Some(to) = stations.code(&config.to) else {
        bail!("unknown alighting station {:?}", config.to);
    };

    tracing::info!(
        "watching {} ({from}) to {} ({to}) on {}, every {}s",
        config.from,
        config.to,
        config.date,
        config.interval_secs
    );

    let client = QueryClient::new(QueryConfig::new())?;
    let monitor = Monitor::new(
        client,
        config.criteria,
        TicketQuery::new(from, to, config.date),
        Duration::from_secs(config.interval_secs),
    );

    if args.once {
        let report = monitor.run_once().await?;
        print_stamped(&report);
        return Ok(());
    }

    monitor.run().await;
    Ok(())
}
