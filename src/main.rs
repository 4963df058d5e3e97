//! glazing-project - CLI tool to turn a technical visit into a glass project.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use glazing_core::{classify, generate_project, validate_visit};

mod input;

/// Turn a technical visit record into a glass cutting project.
#[derive(Parser, Debug)]
#[command(name = "glazing-project")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input visit record (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output project file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Shop configuration overriding the default tolerances (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the parsed visit and chosen template as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = input::load_config(args.config.as_deref())?;

    info!("Processing: {}", args.input.display());

    let visit = input::read_visit(&args.input)?;
    let template = classify(&visit);

    info!("Template: {} ({})", template, template.model_label());

    // Validate
    let validation = validate_visit(&visit, template, &config);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Debug output
    if args.debug {
        let dump = serde_json::json!({
            "visit": visit,
            "templateId": template,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let project = generate_project(&visit, &config)?;

    for alert in &project.alerts {
        warn!("Alert: {}", alert);
    }

    let output_path = args
        .output
        .unwrap_or_else(|| input::default_output_path(&args.input));

    let json = serde_json::to_string_pretty(&project)?;
    std::fs::write(&output_path, json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(
        "Generated {} piece(s), {:.2} m2 of glass: {}",
        project.pieces.len(),
        project.glass_area(),
        output_path.display()
    );

    Ok(())
}
