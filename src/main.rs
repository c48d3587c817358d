use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, error, info, warn};
use serde::Serialize;
use simtelemetry::config::{query_defaults, set_query_defaults, AppConfig};
use simtelemetry::{
    resolve, source_info, source_options, stream_channel, ChannelOption, FieldChange, Query,
    QueryEditor, RecordingHost, Source, FALLBACK_SOURCE,
};
use simtelemetry_sources::{options_for_id, SourceInfo};
use std::path::PathBuf;

/// simtelemetry - resolve and edit racing simulation telemetry queries
#[derive(Parser, Debug)]
#[command(name = "simtelemetry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the per-user one
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List telemetry sources
    Sources,

    /// List the channels offered for a source
    Channels {
        /// Source id, e.g. acc or iRacing
        source: String,
    },

    /// Fill a query with defaults and show its channel options
    Resolve {
        /// Query as JSON
        #[arg(short = 'q', long = "query", value_name = "JSON", default_value = "{}")]
        query: String,

        /// JSON file with query defaults (overrides the configured defaults)
        #[arg(long = "defaults", value_name = "FILE")]
        defaults: Option<PathBuf>,
    },

    /// Apply field changes to a query and show the host callbacks they cause
    Edit {
        /// Starting query as JSON
        #[arg(short = 'q', long = "query", value_name = "JSON", default_value = "{}")]
        query: String,

        /// Field assignment, e.g. source=acc or withStreaming=true (repeatable)
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE", required = true)]
        changes: Vec<FieldChange>,
    },

    /// Show or update the configured query defaults
    Defaults {
        /// Field assignment to store in the defaults (repeatable)
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        changes: Vec<FieldChange>,
    },
}

#[derive(Serialize)]
struct Resolved<'a> {
    query: &'a Query,
    source: SourceInfo,
    telemetry_listed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream_channel: Option<String>,
    options: &'a [ChannelOption],
}

#[derive(Serialize)]
struct Edited<'a> {
    events: &'a [simtelemetry::HostEvent],
    query: &'a Query,
}

fn main() {
    let cli = Cli::parse();

    // Allow RUST_LOG to override CLI setting
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting simtelemetry v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Sources => list_sources(),
        Command::Channels { source } => list_channels(&source),
        Command::Resolve { query, defaults } => {
            let config = load_config(cli.config.as_ref())?;
            let defaults = match defaults {
                Some(path) => read_query_file(&path)?,
                None => configured_defaults(&config, cli.config.is_some()),
            };
            resolve_query(&parse_query(&query)?, &defaults, &config.datasource_uid)
        }
        Command::Edit { query, changes } => edit_query(parse_query(&query)?, &changes),
        Command::Defaults { changes } => update_defaults(cli.config.as_ref(), &changes),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) if path.exists() => AppConfig::load_from_path(path),
        Some(path) => {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(AppConfig::default())
        }
        // The per-user file is optional; a broken one must not stop resolution
        None => Ok(AppConfig::load_or_warn()),
    }
}

/// Defaults from an explicit config file, or the cached per-user ones
fn configured_defaults(config: &AppConfig, explicit: bool) -> Query {
    if explicit {
        config.defaults.clone()
    } else {
        query_defaults()
    }
}

fn parse_query(json: &str) -> Result<Query> {
    serde_json::from_str(json).context("query must be a JSON object")
}

fn read_query_file(path: &PathBuf) -> Result<Query> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading defaults {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing defaults {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn list_sources() -> Result<()> {
    for option in source_options() {
        let info = Source::from_id(option.value).map(source_info);
        let transport = match info.map(|i| i.transport) {
            Some(t) if t.requires_windows() => "shared memory (Windows)",
            Some(_) => "udp",
            None => "",
        };
        println!("{:<22} {:<28} {}", option.value, option.label, transport);
    }
    Ok(())
}

fn list_channels(source: &str) -> Result<()> {
    if Source::from_id(source).is_none() {
        eprintln!(
            "Unknown source '{}', showing {} channels",
            source,
            FALLBACK_SOURCE.label()
        );
    }

    for option in options_for_id(Some(source)) {
        println!("{:<28} {}", option.value, option.label);
    }
    Ok(())
}

fn resolve_query(raw: &Query, defaults: &Query, datasource_uid: &str) -> Result<()> {
    let resolution = resolve(raw, defaults);
    if !resolution.telemetry_is_listed() {
        debug!(
            "Telemetry {:?} is not offered by {}",
            resolution.query.telemetry, resolution.source
        );
    }

    print_json(&Resolved {
        query: &resolution.query,
        source: source_info(resolution.source),
        telemetry_listed: resolution.telemetry_is_listed(),
        stream_channel: stream_channel(&resolution, datasource_uid),
        options: resolution.options,
    })
}

fn edit_query(query: Query, changes: &[FieldChange]) -> Result<()> {
    let mut host = RecordingHost::new(query);
    let mut editor = QueryEditor::new(&mut host);

    for change in changes {
        // RecordingHost cannot fail
        if let Err(never) = editor.apply(change) {
            match never {}
        }
    }

    let (query, events) = host.into_parts();
    print_json(&Edited {
        events: &events,
        query: &query,
    })
}

fn update_defaults(config_path: Option<&PathBuf>, changes: &[FieldChange]) -> Result<()> {
    let mut config = load_config(config_path)?;
    let mut defaults = configured_defaults(&config, config_path.is_some());

    if changes.is_empty() {
        return print_json(&defaults);
    }

    for change in changes {
        defaults = change.apply_to(&defaults);
    }

    match config_path {
        Some(path) => {
            config.defaults = defaults.clone();
            config.save_to_path(path)?;
            info!("Saved query defaults to {}", path.display());
        }
        None => set_query_defaults(defaults.clone())?,
    }

    print_json(&defaults)
}
