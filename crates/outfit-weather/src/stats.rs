//! Reduce an hourly series to the stats of its first calendar day.
//!
//! "Today" is the date of the first sample, in the series' own local time.
//! Later days in the series are ignored.

use crate::error::StatsError;
use crate::types::{DailyStats, HourlySeries};

/// Extract high/low temperature and the precipitation/wind maxima for the
/// day of `series.time[0]`.
///
/// Precipitation and wind entries that are absent are skipped, never
/// treated as zero. When a day has no usable entries the maximum is 0.
/// A NaN or infinite temperature on that day makes the data incomplete.
pub fn extract(series: &HourlySeries) -> Result<DailyStats, StatsError> {
    let (times, temperatures) = match (&series.time, &series.temperature) {
        (Some(t), Some(v)) => (t, v),
        (None, _) => return Err(StatsError::IncompleteData("missing time".into())),
        (_, None) => return Err(StatsError::IncompleteData("missing temperature".into())),
    };

    let Some(first) = times.first() else {
        return Err(StatsError::IncompleteData("empty time series".into()));
    };

    if times.len() != temperatures.len() {
        return Err(StatsError::IncompleteData(format!(
            "{} timestamps but {} temperatures",
            times.len(),
            temperatures.len()
        )));
    }

    let day = first.date();

    let mut high = f64::NEG_INFINITY;
    let mut low = f64::INFINITY;
    let mut samples = 0usize;
    let mut max_precipitation: Option<f64> = None;
    let mut max_wind: Option<f64> = None;

    for (i, (time, &temperature)) in times.iter().zip(temperatures).enumerate() {
        if time.date() != day {
            continue;
        }

        if !temperature.is_finite() {
            return Err(StatsError::IncompleteData(format!(
                "temperature at {} is not a number",
                time
            )));
        }

        samples += 1;
        high = high.max(temperature);
        low = low.min(temperature);

        if let Some(p) = optional_sample(series.precipitation_probability.as_deref(), i) {
            max_precipitation = Some(max_precipitation.map_or(p, |m| m.max(p)));
        }
        if let Some(w) = optional_sample(series.wind_speed.as_deref(), i) {
            max_wind = Some(max_wind.map_or(w, |m| m.max(w)));
        }
    }

    if samples == 0 {
        return Err(StatsError::NoDataForDay(day));
    }

    tracing::debug!(
        "Daily stats for {}: {} samples, high {:.1}, low {:.1}",
        day,
        samples,
        high,
        low
    );

    Ok(DailyStats {
        high,
        low,
        max_precipitation: max_precipitation.unwrap_or(0.0),
        max_wind: max_wind.unwrap_or(0.0),
    })
}

/// Entry `i` of an optional array. A missing array, a short array, or a null
/// entry all read as absent.
fn optional_sample(values: Option<&[Option<f64>]>, i: usize) -> Option<f64> {
    values?.get(i).copied().flatten()
}
