use std::collections::BTreeSet;
use std::path::Path;

use color_eyre::eyre::{bail, Context, Result};
use serde::Deserialize;
use strata_optimizations::Optimizer;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Names of optimizations to skip, e.g. "range_by_is_count".
    #[serde(default)]
    pub disabled_optimizations: BTreeSet<String>,
}

impl Config {
    pub fn optimizer(&self) -> Result<Optimizer> {
        let optimizer = Optimizer::default();
        let known: BTreeSet<_> = optimizer.names().collect();

        for name in &self.disabled_optimizations {
            if !known.contains(name.as_str()) {
                bail!("unknown optimization '{name}', expected one of: {known:?}");
            }
        }

        Ok(optimizer.without(&self.disabled_optimizations))
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}
