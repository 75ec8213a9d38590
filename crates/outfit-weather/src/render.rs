//! Plain-text output for a report, or for a failed request.

use crate::recommend::round_half_up;
use crate::types::OutfitReport;

const PLACEHOLDER: &str = "—";

pub fn render_report(report: &OutfitReport) -> String {
    let stats = &report.stats;
    let rec = &report.recommendation;

    [
        report.place.name.clone(),
        format!(
            "High: {}°C  Low: {}°C",
            round_half_up(stats.high),
            round_half_up(stats.low)
        ),
        format!(
            "Precipitation chance (max hourly): {}%",
            round_half_up(stats.max_precipitation)
        ),
        format!("Max wind: {} m/s", round_half_up(stats.max_wind)),
        format!("{} {}", rec.icon.glyph(), rec.label),
        format!("{} (preference: {})", rec.reasoning, report.preference),
    ]
    .join("\n")
}

/// Failure state: the message plus placeholders, never partial figures.
pub fn render_failure(message: &str) -> String {
    [
        "Error".to_string(),
        message.to_string(),
        PLACEHOLDER.to_string(),
        PLACEHOLDER.to_string(),
        PLACEHOLDER.to_string(),
    ]
    .join("\n")
}
