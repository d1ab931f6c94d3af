use anyhow::Context;
use sla_core::{config::SlaConfig, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing SLA config in: {}", root.display());

    let config_path = paths::config_path(root);
    if config_path.exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        return Ok(());
    }

    SlaConfig::default()
        .save(root)
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("  created: {}", paths::CONFIG_FILE);
    Ok(())
}
