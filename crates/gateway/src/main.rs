//! Gateway CLI
//!
//! Inspect the attribute catalog and the resources declared in a model file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gateway::catalog::{self, AttributeCatalog};
use gateway::config::GatewayConfig;
use gateway::device::DeviceSummary;
use gateway::resource::Resource;

/// Gateway resource model tool
#[derive(Parser, Debug)]
#[command(name = "gateway")]
#[command(about = "Inspect the gateway attribute catalog and resources", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered attribute
    Catalog {
        /// Model file with extra attributes
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a key by suffix match
    Lookup {
        /// Key such as `lights/1/state/bri`
        key: String,

        /// Model file with extra attributes
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Build the configured resources and print them as JSON
    Dump {
        /// Model file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print the merged view of one device
    Device {
        /// Unique id or unique id prefix
        uniqueid: String,

        /// Model file
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gateway=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Catalog { config, json } => {
            let (catalog, _) = load(config.as_deref())?;
            if json {
                let descriptors: Vec<_> = catalog.iter().collect();
                println!("{}", serde_json::to_string_pretty(&descriptors)?);
            } else {
                for descriptor in catalog.iter() {
                    println!("{descriptor}");
                }
            }
        }
        Command::Lookup { key, config } => {
            let (catalog, _) = load(config.as_deref())?;
            match catalog.lookup(&key) {
                Some(descriptor) => println!("{descriptor}"),
                None => bail!("no attribute matches {key}"),
            }
        }
        Command::Dump { config } => {
            let (catalog, config) = load(Some(config.as_path()))?;
            let resources = config.build_resources(catalog)?;
            let dumped: Vec<_> = resources.iter().map(dump_resource).collect();
            println!("{}", serde_json::to_string_pretty(&dumped)?);
        }
        Command::Device { uniqueid, config } => {
            let (catalog, config) = load(Some(config.as_path()))?;
            let resources = config.build_resources(catalog)?;
            let summary = DeviceSummary::collect(&uniqueid, &resources);
            if summary.sub.is_empty() {
                bail!("no resource with unique id {uniqueid}");
            }
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Load the model file (if any) and freeze the process-wide catalog with its attributes
fn load(path: Option<&Path>) -> Result<(&'static AttributeCatalog, GatewayConfig)> {
    let config = match path {
        Some(path) => GatewayConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => GatewayConfig::default(),
    };

    let catalog = catalog::init_with(config.descriptors()?)?;
    info!("Catalog ready with {} attributes", catalog.len());
    Ok((catalog, config))
}

fn dump_resource(resource: &Resource) -> serde_json::Value {
    serde_json::json!({
        "prefix": resource.prefix(),
        "items": resource.to_json(),
    })
}
