//! Route localization inspector.
//!
//! Loads a route manifest (routes plus translations), applies the
//! translations and prints the resulting table in match order.
//!
//! ```text
//! route-localization --manifest routes.toml [--config localization.toml] [--format json]
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use route_localization::config::{load_config, load_manifest};
use route_localization::manifest::build_route_table;
use route_localization::observability::init_logging;
use route_localization::RouteTable;

#[derive(Parser)]
#[command(name = "route-localization")]
#[command(about = "Apply route translations and print the localized route table", long_about = None)]
struct Cli {
    /// Route manifest (TOML) with routes and translations.
    #[arg(short, long)]
    manifest: PathBuf,

    /// Localization settings (TOML), overriding the manifest's own.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level for this crate (e.g. debug).
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let manifest = load_manifest(&cli.manifest)?;
    let config = cli.config.as_deref().map(load_config).transpose()?;

    tracing::info!(
        manifest = %cli.manifest.display(),
        routes = manifest.routes.len(),
        translations = manifest.translations.len(),
        "Manifest loaded"
    );

    let table = build_route_table(&manifest, config.as_ref())?;

    match cli.format {
        Format::Text => print_text(&table),
        Format::Json => {
            let entries: Vec<_> = table.iter().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

fn print_text(table: &RouteTable) {
    for entry in table.iter() {
        let route = &entry.route;
        let indent = if route.translation_root().is_some() { "  " } else { "" };
        let name = table
            .name_of(entry.id)
            .map(|n| format!(" ({})", n))
            .unwrap_or_default();
        println!("{}{:>4} {}{}", indent, entry.id.to_string(), route, name);
    }
}
