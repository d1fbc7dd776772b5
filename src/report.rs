//! Plain-text readouts for the presentation side: stats, A-B analysis and
//! cursor placement messages.

use crate::config::MeasureConfig;
use crate::processing::region::AnalysisResult;
use crate::processing::statistics::GlobalStats;
use crate::processing::time_format::{format_time, TimeUnit};
use crate::state::cursor::{Cursor, CursorState};
use crate::state::session::Session;

/// Format a count with `,` thousands separators.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_amplitude(value: f64, config: &MeasureConfig) -> String {
    format!("{:.*} {}", config.value_precision, value, config.amplitude_unit)
}

pub fn global_line(stats: Option<&GlobalStats>, config: &MeasureConfig) -> String {
    match stats {
        Some(s) => format!(
            "Points: {} | Overall Avg: {} | Overall Max: {}",
            format_count(s.count),
            format_amplitude(s.average, config),
            format_amplitude(s.max, config)
        ),
        None => "Global Statistics: N/A".to_string(),
    }
}

pub fn analysis_line(analysis: Option<&AnalysisResult>, config: &MeasureConfig) -> String {
    match analysis {
        Some(r) => format!(
            "Analysis (A-B): Δt: {} | Points: {} | Avg: {} | Max: {}",
            r.time_delta_formatted,
            format_count(r.count),
            format_amplitude(r.average, config),
            format_amplitude(r.max, config)
        ),
        None => "Analysis (A-B): Cursors A and B not defined".to_string(),
    }
}

/// Message shown after a placement, with the time in the current axis format.
pub fn cursor_line(cursor: &Cursor, session: &Session) -> String {
    let axis = session.axis_format();
    format!(
        "Cursor {} set at {} ({})",
        cursor.label,
        axis.format(cursor.time),
        format_amplitude(cursor.amplitude, session.config())
    )
}

/// Hover readout for a single sample.
pub fn sample_line(time: f64, amplitude: f64, config: &MeasureConfig) -> String {
    format!(
        "T: {} | {}",
        format_time(time, TimeUnit::Seconds, 6),
        format_amplitude(amplitude, config)
    )
}

/// Multi-line summary of the whole session.
pub fn session_report(session: &Session) -> String {
    let config = session.config();
    let mut out = String::new();
    out.push_str("Analysis Information:\n");
    let axis = session.axis_format();
    out.push_str(&format!(
        "Axis: {}, {} decimals\n",
        axis.axis_title(),
        axis.precision
    ));
    out.push_str(&format!("Global: {}\n", global_line(session.global_stats(), config)));
    if let Some(stats) = session.global_stats() {
        out.push_str(&format!(
            "  Min: {}\n  Max: {}\n  Avg: {}\n",
            format_amplitude(stats.min, config),
            format_amplitude(stats.max, config),
            format_amplitude(stats.average, config)
        ));
    }
    for cursor in [session.cursors().a(), session.cursors().b()].into_iter().flatten() {
        out.push_str(&cursor_line(cursor, session));
        out.push('\n');
    }
    if session.cursor_state() == CursorState::HasA {
        out.push_str("Waiting for Cursor B...\n");
    }
    out.push_str(&analysis_line(session.analysis(), config));
    out.push('\n');
    out
}
