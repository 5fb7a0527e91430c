mod config;
mod error;
mod models;
mod registry;
mod render;
mod routes;
mod snippets;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::DocsConfig;
use models::{DocumentationBundle, EndpointPage};
use registry::Registry;
use routes::Page;
use snippets::SampleGenerator;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vorlie-docs")]
#[command(about = "Vorlie API reference: endpoint registry and request examples")]
struct Cli {
    /// Registry JSON file to use instead of the built-in one
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Origin used in generated request examples
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sidebar: endpoints grouped by category
    List,
    /// Render a page by endpoint id or site path (e.g. /api-reference/get-users)
    Show { target: String },
    /// Print the generated request examples for one endpoint
    Examples {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Check registry invariants
    Validate,
    /// Write every endpoint with its examples as one JSON document
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DocsConfig::resolve(cli.registry, cli.base_url);

    let registry = match &config.registry_path {
        Some(path) => Registry::load(path)
            .with_context(|| format!("Failed to load registry from {}", path.display()))?,
        None => Registry::builtin().context("Built-in registry is malformed")?,
    };
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| registry.base_url().to_string());
    let generator = SampleGenerator::new(base_url);
    if registry.is_empty() {
        tracing::warn!("Registry has no endpoints");
    }
    tracing::info!(
        endpoints = registry.len(),
        base_url = generator.base_url(),
        "Registry ready"
    );

    match cli.command {
        Commands::List => {
            print!("{}", render::sidebar(registry.title(), &registry.navigation()));
        }
        Commands::Show { target } => {
            let page = if target.starts_with('/') {
                routes::resolve(&registry, &target)
            } else {
                registry.get(&target).map_or(Page::NotFound, Page::Endpoint)
            };

            match page {
                Page::Introduction => {
                    print!("{}", render::introduction(registry.title(), generator.base_url()))
                }
                Page::Authentication => print!("{}", render::authentication(generator.base_url())),
                Page::Endpoint(endpoint) => {
                    let samples = generator.generate(endpoint);
                    print!("{}", render::endpoint_page(endpoint, &samples));
                }
                Page::NotFound => {
                    print!("{}", render::not_found(&target));
                    return Ok(ExitCode::from(2));
                }
            }
        }
        Commands::Examples { id, json } => {
            let endpoint = match registry.lookup(&id) {
                Ok(endpoint) => endpoint,
                Err(err) => {
                    tracing::warn!("{}", err);
                    print!("{}", render::not_found(&routes::route_for(&id)));
                    return Ok(ExitCode::from(2));
                }
            };

            let samples = generator.generate(endpoint);
            if json {
                println!("{}", serde_json::to_string_pretty(&samples)?);
            } else {
                for sample in &samples {
                    println!("# {} ({})\n{}\n", sample.label, sample.language, sample.code);
                }
            }
        }
        Commands::Validate => {
            let report = registry.validate();
            if report.is_clean() {
                println!("Registry OK: {} endpoints", registry.len());
            } else {
                for violation in &report.violations {
                    println!("{}", violation);
                }
                println!("{} violation(s) found", report.violations.len());
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Export { output } => {
            let bundle = DocumentationBundle {
                title: registry.title().to_string(),
                base_url: generator.base_url().to_string(),
                endpoints: registry
                    .endpoints()
                    .map(|endpoint| EndpointPage {
                        route: routes::route_for(&endpoint.id),
                        endpoint: endpoint.clone(),
                        samples: generator.generate(endpoint),
                    })
                    .collect(),
                generated_at: chrono::Utc::now(),
            };
            let json = serde_json::to_string_pretty(&bundle)?;

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Documentation saved to: {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
