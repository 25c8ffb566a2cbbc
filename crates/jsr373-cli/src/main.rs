mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsr373_types::{Config, TypeRegistry};

#[derive(Parser, Debug)]
#[command(name = "jsr373", version, about = "Inspect the JSR-373 managed object types")]
struct Args {
    /// Config file (defaults to ~/.jsr373/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL for template help links; overrides config and environment
    #[arg(long)]
    base_url: Option<String>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered type with its parents
    Types,
    /// Show the template of one type, by name or path
    Template { name: String },
    /// Build an instance of a type with its default values
    Instance {
        /// Type name or path
        type_name: String,
        /// Instance name
        name: String,
        /// Attribute override, `name=value`
        #[arg(long = "set", value_name = "NAME=VALUE")]
        overrides: Vec<String>,
    },
    /// Help links for every type
    Links,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(args.base_url.clone())
        .validated()?;
    tracing::debug!("Using base URL {}", config.base_url);

    let registry = TypeRegistry::initialize().context("failed to initialize the type registry")?;
    registry
        .bind_templates(&config.base_url)
        .context("failed to build type templates")?;

    let output = match args.command {
        Command::Types => commands::list_types(registry),
        Command::Template { name } => commands::show_template(registry, &name)?,
        Command::Instance {
            type_name,
            name,
            overrides,
        } => commands::build_instance(registry, &type_name, &name, &overrides)?,
        Command::Links => commands::links(registry)?,
    };

    let rendered = if config.pretty && !args.compact {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);
    Ok(())
}
