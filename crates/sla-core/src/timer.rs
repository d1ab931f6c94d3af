use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SlaTimer
// ---------------------------------------------------------------------------

/// Text shown in list views for a signed minute count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaTimer {
    pub text: String,
    pub is_overdue: bool,
}

/// Format signed remaining minutes; negative means overdue.
pub fn format_remaining_minutes(minutes: Option<i64>) -> SlaTimer {
    let Some(minutes) = minutes else {
        return SlaTimer {
            text: "No SLA".to_string(),
            is_overdue: false,
        };
    };

    let is_overdue = minutes < 0;
    let abs_minutes = minutes.unsigned_abs();

    let body = if abs_minutes < 60 {
        format!("{abs_minutes} min")
    } else {
        let hours = abs_minutes / 60;
        let mins = abs_minutes % 60;
        if hours < 24 {
            let mut body = plural(hours, "hr", "hrs");
            if mins > 0 {
                body.push_str(&format!(" {mins} min"));
            }
            body
        } else {
            let days = hours / 24;
            let remaining_hours = hours % 24;
            let mut body = plural(days, "day", "days");
            if remaining_hours > 0 {
                body.push_str(&format!(" {remaining_hours} hr"));
            }
            body
        }
    };

    let text = if is_overdue {
        format!("Overdue {body}")
    } else {
        format!("{body} left")
    };
    SlaTimer { text, is_overdue }
}

fn plural(n: u64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

// ---------------------------------------------------------------------------
// Deadline helpers
// ---------------------------------------------------------------------------

/// Whole minutes from `now` until `due_at`, rounded toward the past.
///
/// Any instant past the deadline is at least one minute overdue, so the sign
/// always agrees with [`hours_until`].
pub fn minutes_until(due_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (due_at - now).num_seconds().div_euclid(60)
}

/// Fractional hours from `now` until `due_at`.
pub fn hours_until(due_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (due_at - now).num_seconds() as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timer(text: &str, is_overdue: bool) -> SlaTimer {
        SlaTimer {
            text: text.to_string(),
            is_overdue,
        }
    }

    #[test]
    fn absent_is_no_sla() {
        assert_eq!(format_remaining_minutes(None), timer("No SLA", false));
    }

    #[test]
    fn minutes_only() {
        assert_eq!(format_remaining_minutes(Some(9)), timer("9 min left", false));
        assert_eq!(format_remaining_minutes(Some(-9)), timer("Overdue 9 min", true));
        assert_eq!(format_remaining_minutes(Some(0)), timer("0 min left", false));
        assert_eq!(format_remaining_minutes(Some(59)), timer("59 min left", false));
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_remaining_minutes(Some(60)), timer("1 hr left", false));
        assert_eq!(
            format_remaining_minutes(Some(90)),
            timer("1 hr 30 min left", false)
        );
        assert_eq!(format_remaining_minutes(Some(-120)), timer("Overdue 2 hrs", true));
        assert_eq!(
            format_remaining_minutes(Some(23 * 60 + 59)),
            timer("23 hrs 59 min left", false)
        );
    }

    #[test]
    fn days_and_hours() {
        assert_eq!(
            format_remaining_minutes(Some(-1500)),
            timer("Overdue 1 day 1 hr", true)
        );
        assert_eq!(format_remaining_minutes(Some(1440)), timer("1 day left", false));
        assert_eq!(
            format_remaining_minutes(Some(3 * 1440 + 5 * 60 + 59)),
            timer("3 days 5 hr left", false)
        );
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let t = format_remaining_minutes(Some(i64::MIN));
        assert!(t.is_overdue);
        assert!(t.text.starts_with("Overdue "));
        assert!(t.text.contains("days"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(format_remaining_minutes(Some(-9))).unwrap();
        assert_eq!(json["text"], "Overdue 9 min");
        assert_eq!(json["isOverdue"], true);
    }

    #[test]
    fn deadline_helpers() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2026, 3, 1, 13, 30, 0).unwrap();
        assert_eq!(minutes_until(due, now), 90);
        assert_eq!(minutes_until(now, due), -90);
        assert!((hours_until(due, now) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_minutes_round_toward_the_past() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(minutes_until(now - chrono::Duration::seconds(30), now), -1);
        assert_eq!(minutes_until(now + chrono::Duration::seconds(30), now), 0);
        assert_eq!(minutes_until(now + chrono::Duration::seconds(119), now), 1);
        assert_eq!(minutes_until(now - chrono::Duration::seconds(61), now), -2);
        assert_eq!(minutes_until(now, now), 0);
    }
}
