use crate::types::SlaStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Clock,
    AlertTriangle,
    AlertCircle,
    CheckCircle,
    Minus,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Clock => "clock",
            Icon::AlertTriangle => "alert_triangle",
            Icon::AlertCircle => "alert_circle",
            Icon::CheckCircle => "check_circle",
            Icon::Minus => "minus",
        }
    }
}

/// Style tokens a presentation layer resolves into its own classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaStyle {
    pub text: Tone,
    pub background: Tone,
    pub icon: Icon,
}

pub fn style_for(status: SlaStatus) -> SlaStyle {
    let (tone, icon) = match status {
        SlaStatus::Ok => (Tone::Success, Icon::Clock),
        SlaStatus::Warning => (Tone::Warning, Icon::AlertTriangle),
        SlaStatus::Overdue => (Tone::Danger, Icon::AlertCircle),
        SlaStatus::Completed => (Tone::Success, Icon::CheckCircle),
        SlaStatus::NotStarted | SlaStatus::NoSla => (Tone::Neutral, Icon::Minus),
    };
    SlaStyle {
        text: tone,
        background: tone,
        icon,
    }
}

/// Look up style for a raw backend tag; unknown tags use the `no_sla` bucket.
pub fn style_for_str(status: &str) -> SlaStyle {
    style_for(SlaStatus::parse_lenient(status))
}
