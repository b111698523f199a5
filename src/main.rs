use anyhow::{bail, Result};
use clap::Parser;
use coursekit::global_registry;
use log::info;

/// coursekit - inspect the platform's interactive widget registry
#[derive(Parser, Debug, Clone)]
#[command(name = "coursekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List registered widget ids and names
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Dump a widget descriptor as pretty JSON (e.g., --dump LogicProof)
    #[arg(long = "dump", value_name = "WIDGET_ID")]
    dump: Option<String>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
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

    let registry = global_registry();
    info!("Loaded {} widget(s)", registry.len());

    if let Some(id) = cli.dump.as_deref() {
        let Some(descriptor) = registry.get(id) else {
            bail!("Unknown widget: {id}");
        };
        println!("{}", serde_json::to_string_pretty(descriptor)?);
    }

    // Listing is the default action when no dump was requested
    if cli.list || cli.dump.is_none() {
        for id in registry.list_ids() {
            let descriptor = registry.get(id).expect("listed id is registered");
            println!("{:<20} {} [{}]", id, descriptor.name, descriptor.category);
        }
    }
    Ok(())
}
