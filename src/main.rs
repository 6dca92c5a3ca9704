use anyhow::{Context, Result};
use clap::Parser;
use jellyfin_nowplaying::{
    HostConfig, HttpFetcher, Measure, MeasureHost, PrimaryMeasure, ScopeId, UnitHandle,
    UnitIdentity,
};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// nowplaying - poll a Jellyfin server and print now-playing fields
#[derive(Parser, Debug)]
#[command(name = "nowplaying")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host configuration file (defaults to the per-user config.json)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run a single poll cycle and exit
    #[arg(long = "once")]
    once: bool,

    /// Override the polling period from the configuration
    #[arg(short = 'i', long = "interval-ms", value_name = "MS")]
    interval_ms: Option<u64>,

    /// List the field kinds accepted by PlayerType
    #[arg(short = 'l', long = "list-fields")]
    list_fields: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// A created measure and the label it prints under
struct Slot {
    label: String,
    handle: UnitHandle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if cli.list_fields {
        list_fields();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => HostConfig::load_from_path(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => HostConfig::load()?,
    };
    if config.scopes.is_empty() {
        warn!("No measures configured");
    }

    let mut host = MeasureHost::with_http(Duration::from_secs(config.timeout_secs));
    let slots = create_measures(&mut host, &config)?;

    let interval = Duration::from_millis(cli.interval_ms.unwrap_or(config.update_interval_ms));
    info!("Polling {} measures every {:?}", slots.len(), interval);

    loop {
        for slot in &slots {
            let value = host.update(slot.handle)?;
            let text = host.read_text(slot.handle)?.unwrap_or_default();
            println!("{} = {} | {}", slot.label, value, text);
        }

        if cli.once {
            break;
        }
        std::thread::sleep(interval);
    }

    for slot in slots {
        if let Err(e) = host.destroy(slot.handle) {
            error!("Failed to destroy {}: {}", slot.label, e);
        }
    }
    Ok(())
}

/// Create every configured measure, then reload them all so secondaries
/// resolve regardless of declaration order
fn create_measures(host: &mut MeasureHost, config: &HostConfig) -> Result<Vec<Slot>> {
    let mut slots = Vec::new();
    for scope in &config.scopes {
        for entry in &scope.measures {
            let handle = host.create(ScopeId::new(&scope.name), &entry.name, &entry.options);
            slots.push((
                Slot {
                    label: format!("{}/{}", scope.name, entry.name),
                    handle,
                },
                &entry.options,
            ));
        }
    }

    for (slot, options) in &slots {
        host.reload(slot.handle, options)?;
    }
    Ok(slots.into_iter().map(|(slot, _)| slot).collect())
}

fn list_fields() {
    let measure = PrimaryMeasure::new(
        UnitIdentity::new(ScopeId::new("cli"), "list"),
        Arc::new(HttpFetcher::default()),
    );
    let meta = measure.metadata();
    let fields = measure.fields();

    println!("{} - {}", meta.name, meta.description);
    println!("Available fields ({}):", fields.len());
    println!();
    for field in fields {
        println!("  {:<10} {:<12} {:?}", field.id, field.name, field.field_type);
        println!("             {}", field.description);
    }
}
