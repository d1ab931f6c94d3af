use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SlaStatus
// ---------------------------------------------------------------------------

/// Coarse SLA state reported by the backend for a lead, client or case.
///
/// Deserialization is lenient: any unrecognized tag lands in [`SlaStatus::NoSla`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SlaStatus {
    Ok,
    Warning,
    Overdue,
    Completed,
    NotStarted,
    NoSla,
}

impl SlaStatus {
    pub fn all() -> &'static [SlaStatus] {
        &[
            SlaStatus::Ok,
            SlaStatus::Warning,
            SlaStatus::Overdue,
            SlaStatus::Completed,
            SlaStatus::NotStarted,
            SlaStatus::NoSla,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlaStatus::Ok => "ok",
            SlaStatus::Warning => "warning",
            SlaStatus::Overdue => "overdue",
            SlaStatus::Completed => "completed",
            SlaStatus::NotStarted => "not_started",
            SlaStatus::NoSla => "no_sla",
        }
    }

    /// Statuses that carry no running clock, so no duration accompanies them.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SlaStatus::Completed | SlaStatus::NotStarted | SlaStatus::NoSla
        )
    }

    /// Parse a backend tag, falling back to `NoSla` for anything unknown.
    pub fn parse_lenient(s: &str) -> SlaStatus {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        normalized.parse().unwrap_or(SlaStatus::NoSla)
    }
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SlaStatus {
    type Err = crate::error::SlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(SlaStatus::Ok),
            "warning" => Ok(SlaStatus::Warning),
            "overdue" => Ok(SlaStatus::Overdue),
            "completed" => Ok(SlaStatus::Completed),
            "not_started" => Ok(SlaStatus::NotStarted),
            "no_sla" => Ok(SlaStatus::NoSla),
            _ => Err(crate::error::SlaError::InvalidStatus(s.to_string())),
        }
    }
}

impl From<String> for SlaStatus {
    fn from(s: String) -> Self {
        SlaStatus::parse_lenient(&s)
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Lead,
    Client,
    Case,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Lead => "lead",
            EntityKind::Client => "client",
            EntityKind::Case => "case",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = crate::error::SlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(EntityKind::Lead),
            "client" => Ok(EntityKind::Client),
            "case" => Ok(EntityKind::Case),
            _ => Err(crate::error::SlaError::InvalidEntity(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SlaKind
// ---------------------------------------------------------------------------

/// Which deadline a record is tracked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaKind {
    FirstContact,
    CaseCreation,
    StageTransition,
}

impl SlaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SlaKind::FirstContact => "first_contact",
            SlaKind::CaseCreation => "case_creation",
            SlaKind::StageTransition => "stage_transition",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlaKind::FirstContact => "First contact",
            SlaKind::CaseCreation => "Case creation",
            SlaKind::StageTransition => "Stage transition",
        }
    }
}

impl fmt::Display for SlaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_from_str() {
        for &status in SlaStatus::all() {
            let parsed: SlaStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "breached".parse::<SlaStatus>().unwrap_err();
        assert!(err.to_string().contains("breached"));
    }

    #[test]
    fn lenient_parse_normalizes_and_defaults() {
        assert_eq!(SlaStatus::parse_lenient(" Not-Started "), SlaStatus::NotStarted);
        assert_eq!(SlaStatus::parse_lenient("OVERDUE"), SlaStatus::Overdue);
        assert_eq!(SlaStatus::parse_lenient("no sla"), SlaStatus::NoSla);
        assert_eq!(SlaStatus::parse_lenient("paused"), SlaStatus::NoSla);
        assert_eq!(SlaStatus::parse_lenient(""), SlaStatus::NoSla);
    }

    #[test]
    fn unknown_status_deserializes_as_no_sla() {
        let parsed: SlaStatus = serde_json::from_str("\"escalated\"").unwrap();
        assert_eq!(parsed, SlaStatus::NoSla);
        let parsed: SlaStatus = serde_yaml::from_str("warning").unwrap();
        assert_eq!(parsed, SlaStatus::Warning);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&SlaStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
    }

    #[test]
    fn terminal_statuses() {
        assert!(SlaStatus::Completed.is_terminal());
        assert!(SlaStatus::NotStarted.is_terminal());
        assert!(SlaStatus::NoSla.is_terminal());
        assert!(!SlaStatus::Ok.is_terminal());
        assert!(!SlaStatus::Warning.is_terminal());
        assert!(!SlaStatus::Overdue.is_terminal());
    }

    #[test]
    fn entity_kind_parse() {
        assert_eq!("case".parse::<EntityKind>().unwrap(), EntityKind::Case);
        assert!("deal".parse::<EntityKind>().is_err());
    }

    #[test]
    fn sla_kind_yaml() {
        let kind: SlaKind = serde_yaml::from_str("stage_transition").unwrap();
        assert_eq!(kind, SlaKind::StageTransition);
        assert_eq!(kind.label(), "Stage transition");
    }
}
