use crate::output::{print_json, print_table};
use anyhow::Context;
use chrono::{DateTime, Utc};
use sla_core::breach::{build_breach_table, BreachRecord};
use sla_core::config::SlaConfig;
use sla_core::types::EntityKind;
use std::path::Path;

pub fn run(
    root: &Path,
    file: &Path,
    now: Option<DateTime<Utc>>,
    overdue_only: bool,
    entity: Option<EntityKind>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = SlaConfig::load_or_default(root).context("failed to load config")?;
    if overdue_only {
        config.include_at_risk = false;
    }

    let mut records = load_records(file)?;
    if let Some(kind) = entity {
        records.retain(|r| r.entity == kind);
    }
    let now = now.unwrap_or_else(Utc::now);
    tracing::debug!(count = records.len(), now = %now, "loaded breach records");

    let table = build_breach_table(&records, now, &config);

    if json {
        print_json(&table)?;
        return Ok(());
    }

    if table.rows.is_empty() {
        println!("No SLA breaches.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| {
            vec![
                r.entity.to_string(),
                r.entity_id.clone(),
                r.name.clone(),
                r.sla_kind.label().to_string(),
                r.owner.clone().unwrap_or_else(|| "-".to_string()),
                r.status.to_string(),
                r.timer.text.clone(),
            ]
        })
        .collect();
    print_table(
        &["ENTITY", "ID", "NAME", "SLA", "OWNER", "STATUS", "TIMER"],
        &rows,
    );
    println!();
    println!("{} overdue, {} at risk", table.overdue, table.at_risk);
    Ok(())
}

fn load_records(file: &Path) -> anyhow::Result<Vec<BreachRecord>> {
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let is_json = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let records = if is_json {
        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse {} as JSON", file.display()))?
    } else {
        serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse {} as YAML", file.display()))?
    };
    Ok(records)
}
