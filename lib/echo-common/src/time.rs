use std::time::Duration;

use chrono::Utc;

/// Formats "now" as ISO-8601 with microsecond precision and a trailing `Z`,
/// e.g. `2024-09-11T15:51:05.809722Z`.
pub fn now_iso8601() -> String {
    format!("{}Z", Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f"))
}

/// Renders a duration the way a human would read it off a log line: the
/// smallest unit that keeps the number in a sensible range, three decimal
/// places, never empty.
pub fn format_duration(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        format!("{:.3}\u{b5}s", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.3}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.3}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ends_with_z_and_has_micros() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'));
        assert!(ts.contains('.'));
        assert_eq!(ts.len(), "2024-09-11T15:51:05.809722Z".len());
    }

    #[test]
    fn duration_picks_sensible_units() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
        assert_eq!(format_duration(Duration::from_micros(250)), "250.000\u{b5}s");
        assert_eq!(format_duration(Duration::from_millis(12)), "12.000ms");
        assert_eq!(format_duration(Duration::from_secs(2)), "2.000s");
    }

    #[test]
    fn duration_is_never_empty() {
        assert!(!format_duration(Duration::ZERO).is_empty());
    }
}
