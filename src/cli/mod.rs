pub mod types;
pub mod logging;

use std::fs;

use clap::Parser;
use serde_json::json;

use crate::config::{self, TocSettings};
use crate::entity::{Entity, InMemorySource};
use crate::generator::GenerationEngine;
use crate::toc::render_html;
use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    match execute(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: &types::Cli) -> BoxResult<String> {
    let content = fs::read_to_string(&cli.entity)?;
    let entity: Entity = serde_json::from_str(&content)?;

    let settings = match &cli.settings {
        Some(path) => config::load_settings(path)?,
        None => TocSettings::default(),
    };

    let mut engine = GenerationEngine::new(InMemorySource::new());
    let toc = engine.generate(&entity, &settings, !cli.no_cache)?;

    log::info!(
        "Generated {} headings for {}",
        toc.headings().len(),
        toc.root_key()
    );

    match cli.format {
        types::OutputFormat::Html => Ok(render_html(&toc, cli.base_url.as_deref())),
        types::OutputFormat::Json => {
            let output = json!({
                "root": toc.root_key(),
                "is_relative": toc.is_relative(),
                "outline": toc.to_outline(),
                "rewrites": toc.rewrites(),
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}
