use crate::classifier::classify;
use crate::config::SlaConfig;
use crate::timer::{format_remaining_minutes, hours_until, minutes_until, SlaTimer};
use crate::types::{EntityKind, SlaKind, SlaStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BreachRecord (input)
// ---------------------------------------------------------------------------

/// One tracked deadline, as exported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachRecord {
    pub entity: EntityKind,
    pub entity_id: String,
    pub name: String,
    pub sla_kind: SlaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub due_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// BreachRow / BreachTable (output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachRow {
    pub entity: EntityKind,
    pub entity_id: String,
    pub name: String,
    pub sla_kind: SlaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub due_at: DateTime<Utc>,
    pub status: SlaStatus,
    pub remaining_minutes: i64,
    pub timer: SlaTimer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreachTable {
    pub rows: Vec<BreachRow>,
    pub overdue: usize,
    pub at_risk: usize,
}

/// Build the breach table for `records` as of `now`.
///
/// Completed records are dropped. Rows are ordered most overdue first, ties
/// broken by entity id.
pub fn build_breach_table(
    records: &[BreachRecord],
    now: DateTime<Utc>,
    config: &SlaConfig,
) -> BreachTable {
    let mut rows: Vec<BreachRow> = records
        .iter()
        .filter(|r| r.completed_at.is_none())
        .filter_map(|r| {
            let hours = hours_until(r.due_at, now);
            let status = classify(Some(hours), SlaStatus::Ok, config.warning_threshold_hours);
            let keep = match status {
                SlaStatus::Overdue => true,
                SlaStatus::Warning => config.include_at_risk,
                _ => false,
            };
            if !keep {
                return None;
            }
            let remaining_minutes = minutes_until(r.due_at, now);
            Some(BreachRow {
                entity: r.entity,
                entity_id: r.entity_id.clone(),
                name: r.name.clone(),
                sla_kind: r.sla_kind,
                owner: r.owner.clone(),
                due_at: r.due_at,
                status,
                remaining_minutes,
                timer: format_remaining_minutes(Some(remaining_minutes)),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        a.due_at
            .cmp(&b.due_at)
            .then_with(|| a.entity_id.cmp(&b.entity_id))
    });

    let overdue = rows.iter().filter(|r| r.status == SlaStatus::Overdue).count();
    let at_risk = rows.len() - overdue;
    BreachTable {
        rows,
        overdue,
        at_risk,
    }
}
