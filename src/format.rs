//! pt-BR display formatting for dates, times and grades.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Placeholder for a missing or unreadable value.
pub const EMPTY: &str = "-";

enum Parsed {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

// Timestamps keep their own offset: "2025-03-14T23:30:00-03:00" is the 14th.
fn parse(raw: &str) -> Option<Parsed> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Parsed::DateTime(dt.naive_local()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Parsed::DateTime(dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Parsed::Date(date));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .ok()
        .map(Parsed::Time)
}

/// "2025-03-14T10:00:00Z" → "14/03/2025"
pub fn format_date(iso: Option<&str>) -> String {
    match iso.and_then(parse) {
        Some(Parsed::Date(date)) => date.format("%d/%m/%Y").to_string(),
        Some(Parsed::DateTime(dt)) => dt.format("%d/%m/%Y").to_string(),
        _ => EMPTY.to_string(),
    }
}

/// "2025-03-14T10:05:00Z" → "10:05". Also accepts a bare "HH:MM".
pub fn format_time(iso: Option<&str>) -> String {
    match iso.and_then(parse) {
        Some(Parsed::DateTime(dt)) => dt.format("%H:%M").to_string(),
        Some(Parsed::Time(time)) => time.format("%H:%M").to_string(),
        _ => EMPTY.to_string(),
    }
}

/// 8.5 → "8,5"
pub fn format_grade(grade: Option<f64>) -> String {
    match grade {
        Some(n) if n.is_finite() => format!("{:.1}", n).replace('.', ","),
        _ => EMPTY.to_string(),
    }
}
