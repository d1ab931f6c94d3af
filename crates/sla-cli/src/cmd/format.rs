use crate::output::print_json;
use anyhow::Context;
use sla_core::classifier::{Countdown, CountdownSize};
use sla_core::config::SlaConfig;
use sla_core::duration::format_duration;
use sla_core::style::{style_for, SlaStyle};
use sla_core::timer::format_remaining_minutes;
use sla_core::types::SlaStatus;
use std::path::Path;

// ---------------------------------------------------------------------------
// duration
// ---------------------------------------------------------------------------

pub fn duration(hours: Option<f64>, status: &str, json: bool) -> anyhow::Result<()> {
    let status = SlaStatus::parse_lenient(status);
    let text = format_duration(hours, status);

    if json {
        let value = serde_json::json!({
            "hours": hours,
            "status": status,
            "text": text,
        });
        print_json(&value)?;
    } else {
        println!("{text}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// timer
// ---------------------------------------------------------------------------

pub fn timer(minutes: Option<i64>, json: bool) -> anyhow::Result<()> {
    let timer = format_remaining_minutes(minutes);
    if json {
        print_json(&timer)?;
    } else {
        println!("{}", timer.text);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

pub fn classify(
    root: &Path,
    hours: Option<f64>,
    status: &str,
    size: &str,
    json: bool,
) -> anyhow::Result<()> {
    let config = SlaConfig::load_or_default(root).context("failed to load config")?;
    let size: CountdownSize = size.parse()?;
    let reported = SlaStatus::parse_lenient(status);
    let countdown = Countdown::new(hours, reported, &config).with_size(size);
    tracing::debug!(
        reported = %reported,
        classified = %countdown.status,
        threshold = config.warning_threshold_hours,
        "classified countdown"
    );

    if json {
        print_json(&countdown)?;
        return Ok(());
    }

    println!("Status: {}", countdown.status);
    println!("Text:   {}", countdown.text);
    println!("Style:  {}", style_display(&countdown.style));
    println!("Size:   {}", countdown.size.as_str());
    Ok(())
}

// ---------------------------------------------------------------------------
// style
// ---------------------------------------------------------------------------

pub fn style(status: &str, json: bool) -> anyhow::Result<()> {
    let status = SlaStatus::parse_lenient(status);
    let style = style_for(status);
    if json {
        let value = serde_json::json!({
            "status": status,
            "text": style.text,
            "background": style.background,
            "icon": style.icon,
        });
        print_json(&value)?;
    } else {
        println!("{status}: {}", style_display(&style));
    }
    Ok(())
}

fn style_display(style: &SlaStyle) -> String {
    format!(
        "text={} background={} icon={}",
        style.text.as_str(),
        style.background.as_str(),
        style.icon.as_str()
    )
}
