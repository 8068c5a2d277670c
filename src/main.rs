//! Recipe table renderer
//!
//! Renders the ingredient tables of one or more recipe JSON files in every
//! unit system, as markdown or JSON (`COOKBOOK_OUTPUT`).

use std::path::PathBuf;

use cookbook_units::build_info;
use cookbook_units::config::{Config, OutputFormat};
use cookbook_units::models::Recipe;
use cookbook_units::tools::{render_recipe, render_text};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so rendered output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cookbook_units=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner("render_recipe");

    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("Usage: render_recipe <recipe.json>...");
        std::process::exit(2);
    }

    let config = Config::from_env();

    for path in &paths {
        tracing::info!("Rendering {}", path.display());
        let recipe = Recipe::from_path(path)?;
        let rendered = render_recipe(&recipe)?;

        match config.output_format {
            OutputFormat::Text => println!("{}", render_text(&rendered)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
        }
    }

    Ok(())
}
