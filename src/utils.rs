//! Formatting helpers shared by the playback surfaces.

/// Formatter for view and like counters, supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct NumberFormat(fn(u64) -> String);

impl NumberFormat {
    pub fn new(format: fn(u64) -> String) -> Self {
        Self(format)
    }

    pub fn format(&self, value: u64) -> String {
        (self.0)(value)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self(format_count)
    }
}

impl From<fn(u64) -> String> for NumberFormat {
    fn from(format: fn(u64) -> String) -> Self {
        Self(format)
    }
}

// Swapping the formatter alone never re-renders a row.
impl PartialEq for NumberFormat {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Format a playback time in seconds as `m:ss`.
/// Non-finite and negative values render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Compact view/like counter: `999`, `1.2K`, `3.4M`, `1.0B`.
pub fn format_count(value: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];
    for (scale, suffix) in UNITS {
        if value >= scale {
            return format!("{:.1}{suffix}", value as f64 / scale as f64);
        }
    }
    value.to_string()
}

/// Width of the progress fill, in percent. Zero when the duration is unusable.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / duration * 100.0).clamp(0.0, 100.0)
}
