//! Terminal rendering of reports.

use crate::error::Result;
use crate::models::{ResolvedReport, RiskLevel};
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Colours a risk tier: Low green, Medium yellow, High red.
pub fn colored_risk(level: RiskLevel) -> ColoredString {
    let label = level.to_string();
    match level {
        RiskLevel::Low => label.green().bold(),
        RiskLevel::Medium => label.yellow().bold(),
        RiskLevel::High => label.red().bold(),
    }
}

/// Renders a report as a two-column table.
pub fn report_table(report: &ResolvedReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Value"]);

    table.add_row(vec!["City".to_string(), report.query.to_string()]);
    table.add_row(vec![
        "Coordinates".to_string(),
        format!(
            "{:.4}, {:.4}",
            report.coordinates.latitude, report.coordinates.longitude
        ),
    ]);
    table.add_row(vec![
        "AQI".to_string(),
        format!("{} ({})", report.reading.aqi, report.reading.source),
    ]);
    table.add_row(vec!["PM2.5".to_string(), format!("{:.1} µg/m³", report.reading.pm2_5)]);
    table.add_row(vec!["PM10".to_string(), format!("{:.1} µg/m³", report.reading.pm10)]);
    table.add_row(vec![
        "Risk".to_string(),
        colored_risk(report.assessment.level).to_string(),
    ]);
    table.add_row(vec!["Advice".to_string(), report.assessment.message.to_string()]);
    table.add_row(vec!["Last updated".to_string(), report.last_updated.clone()]);
    table
}

/// Starts a spinner shown while a lookup is in flight.
pub fn lookup_spinner(city: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Resolving air quality for {}...", city));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
