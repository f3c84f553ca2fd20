use std::{
    io::Read,
    path::Path,
};

use color_eyre::eyre::{Context, Result};
use strata_optimizations::Optimizer;
use strata_traversal::Traversal;
use tracing::info;

use args::Args;
use config::{load_config, Config};

pub mod args;
pub mod config;

pub fn load_traversal(path: Option<&Path>) -> Result<Traversal> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read traversal: {}", path.display()))?,
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read traversal from stdin")?;
            content
        }
    };

    serde_json::from_str(&content).context("failed to parse traversal")
}

fn create_optimizer(args: &Args) -> Result<Optimizer> {
    if args.no_optimizations {
        return Ok(Optimizer::empty());
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    config.optimizer()
}

/// Optimizes the traversal `args` point to, and renders the result.
pub fn run(args: &Args) -> Result<String> {
    let optimizer = create_optimizer(args)?;
    let traversal = load_traversal(args.traversal.as_deref())?;

    info!(
        steps = traversal.len(),
        optimizations = ?optimizer.names().collect::<Vec<_>>(),
        "Optimizing traversal"
    );
    let optimized = optimizer.optimize(traversal.clone());

    if args.json {
        return serde_json::to_string_pretty(&optimized).context("serialize traversal");
    }

    Ok(format!("Traversal:\n{traversal}\nOptimized:\n{optimized}"))
}
