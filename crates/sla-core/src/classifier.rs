use crate::config::SlaConfig;
use crate::duration::format_duration;
use crate::style::{style_for, SlaStyle};
use crate::types::SlaStatus;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Decide the display category for a running SLA.
///
/// Terminal tags (`completed`, `not_started`, `no_sla`) pass through, as does
/// any tag without a duration. Otherwise the sign and size of `hours` pick
/// between `overdue`, `warning` and `ok`.
pub fn classify(
    hours: Option<f64>,
    status: SlaStatus,
    warning_threshold_hours: f64,
) -> SlaStatus {
    if status.is_terminal() {
        return status;
    }
    match hours.filter(|h| h.is_finite()) {
        None => status,
        Some(h) if h < 0.0 => SlaStatus::Overdue,
        Some(h) if h <= warning_threshold_hours => SlaStatus::Warning,
        Some(_) => SlaStatus::Ok,
    }
}

// ---------------------------------------------------------------------------
// CountdownSize
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl CountdownSize {
    pub fn as_str(self) -> &'static str {
        match self {
            CountdownSize::Sm => "sm",
            CountdownSize::Md => "md",
            CountdownSize::Lg => "lg",
        }
    }
}

impl std::str::FromStr for CountdownSize {
    type Err = crate::error::SlaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(CountdownSize::Sm),
            "md" => Ok(CountdownSize::Md),
            "lg" => Ok(CountdownSize::Lg),
            _ => Err(crate::error::SlaError::InvalidInput(format!(
                "unknown countdown size '{s}' (expected sm, md or lg)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Countdown
// ---------------------------------------------------------------------------

/// Everything a countdown badge needs to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    pub status: SlaStatus,
    pub text: String,
    pub is_overdue: bool,
    pub style: SlaStyle,
    pub size: CountdownSize,
}

impl Countdown {
    pub fn new(hours: Option<f64>, status: SlaStatus, config: &SlaConfig) -> Self {
        let status = classify(hours, status, config.warning_threshold_hours);
        Countdown {
            status,
            text: format_duration(hours, status),
            is_overdue: status == SlaStatus::Overdue,
            style: style_for(status),
            size: CountdownSize::default(),
        }
    }

    pub fn with_size(mut self, size: CountdownSize) -> Self {
        self.size = size;
        self
    }
}
