use proptest::prelude::*;
use sla_core::classifier::classify;
use sla_core::duration::format_duration;
use sla_core::style::{style_for, style_for_str};
use sla_core::timer::format_remaining_minutes;
use sla_core::types::SlaStatus;

fn any_status() -> impl Strategy<Value = SlaStatus> {
    prop::sample::select(SlaStatus::all().to_vec())
}

proptest! {
    #[test]
    fn prop_format_duration_is_idempotent(
        hours in prop::option::of(-10_000.0f64..10_000.0),
        status in any_status(),
    ) {
        prop_assert_eq!(format_duration(hours, status), format_duration(hours, status));
    }

    #[test]
    fn prop_format_duration_suffix_follows_sign(h in -10_000.0f64..10_000.0) {
        let text = format_duration(Some(h), SlaStatus::Ok);
        if h >= 0.0 {
            prop_assert!(text.ends_with(" remaining"), "{}", text);
        } else {
            prop_assert!(text.ends_with(" overdue"), "{}", text);
        }
    }

    #[test]
    fn prop_completed_always_wins(hours in prop::option::of(any::<f64>())) {
        prop_assert_eq!(format_duration(hours, SlaStatus::Completed), "Completed");
    }

    #[test]
    fn prop_format_duration_total_over_any_f64(h in any::<f64>(), status in any_status()) {
        let text = format_duration(Some(h), status);
        prop_assert!(!text.is_empty());
    }

    #[test]
    fn prop_format_remaining_minutes_is_idempotent(minutes in prop::option::of(any::<i64>())) {
        prop_assert_eq!(
            format_remaining_minutes(minutes),
            format_remaining_minutes(minutes)
        );
    }

    #[test]
    fn prop_overdue_flag_matches_sign(minutes in any::<i64>()) {
        let timer = format_remaining_minutes(Some(minutes));
        prop_assert_eq!(timer.is_overdue, minutes < 0);
        if timer.is_overdue {
            prop_assert!(timer.text.starts_with("Overdue "));
        } else {
            prop_assert!(timer.text.ends_with(" left"));
        }
    }

    #[test]
    fn prop_timer_is_symmetric_in_magnitude(minutes in 1i64..1_000_000) {
        let left = format_remaining_minutes(Some(minutes)).text;
        let overdue = format_remaining_minutes(Some(-minutes)).text;
        let left_body = left.strip_suffix(" left").unwrap();
        let overdue_body = overdue.strip_prefix("Overdue ").unwrap();
        prop_assert_eq!(left_body, overdue_body);
    }

    #[test]
    fn prop_classify_never_invents_terminal(
        hours in prop::option::of(-1_000.0f64..1_000.0),
        status in any_status(),
        threshold in 0.0f64..48.0,
    ) {
        let classified = classify(hours, status, threshold);
        if status.is_terminal() {
            prop_assert_eq!(classified, status);
        } else {
            prop_assert!(!classified.is_terminal());
        }
    }

    #[test]
    fn prop_style_for_str_matches_lenient_parse(tag in "[a-z]{3,12}") {
        let style = style_for_str(&tag);
        let expected = style_for(SlaStatus::parse_lenient(&tag));
        prop_assert_eq!(style, expected);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(format_duration(None, SlaStatus::Completed), "Completed");
    assert_eq!(format_duration(Some(5.0), SlaStatus::Completed), "Completed");
    assert_eq!(format_duration(None, SlaStatus::NotStarted), "Not started");
    assert_eq!(format_duration(None, SlaStatus::NoSla), "No SLA");
    assert_eq!(format_duration(None, SlaStatus::Ok), "-");
    assert_eq!(format_duration(Some(0.5), SlaStatus::Ok), "30m remaining");
    assert_eq!(format_duration(Some(2.0), SlaStatus::Ok), "2h remaining");
    assert_eq!(format_duration(Some(-5.0), SlaStatus::Overdue), "5h overdue");
    assert_eq!(format_duration(Some(-30.0), SlaStatus::Overdue), "1d overdue");

    let t = format_remaining_minutes(None);
    assert_eq!((t.text.as_str(), t.is_overdue), ("No SLA", false));
    let t = format_remaining_minutes(Some(9));
    assert_eq!((t.text.as_str(), t.is_overdue), ("9 min left", false));
    let t = format_remaining_minutes(Some(-9));
    assert_eq!((t.text.as_str(), t.is_overdue), ("Overdue 9 min", true));
    let t = format_remaining_minutes(Some(90));
    assert_eq!((t.text.as_str(), t.is_overdue), ("1 hr 30 min left", false));
    let t = format_remaining_minutes(Some(-1500));
    assert_eq!((t.text.as_str(), t.is_overdue), ("Overdue 1 day 1 hr", true));
}
