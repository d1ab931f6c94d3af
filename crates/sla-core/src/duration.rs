use crate::types::SlaStatus;

/// Format a signed hour count for display next to an SLA badge.
///
/// Positive values are time remaining, negative values are time overdue.
/// `Completed` wins over any duration. Non-finite hours count as absent.
pub fn format_duration(hours: Option<f64>, status: SlaStatus) -> String {
    if status == SlaStatus::Completed {
        return "Completed".to_string();
    }

    let Some(h) = hours.filter(|h| h.is_finite()) else {
        return match status {
            SlaStatus::NotStarted => "Not started".to_string(),
            SlaStatus::NoSla => "No SLA".to_string(),
            _ => "-".to_string(),
        };
    };

    if h >= 0.0 {
        if h < 1.0 {
            format!("{}m remaining", round_half_up(h * 60.0))
        } else {
            format!("{}h remaining", round_half_up(h))
        }
    } else {
        let overdue = h.abs();
        if overdue >= 24.0 {
            format!("{}d overdue", (overdue / 24.0).floor() as i64)
        } else {
            format!("{}h overdue", round_half_up(overdue))
        }
    }
}

/// Round a non-negative value to the nearest integer, halves going up.
fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}
