use std::time::Duration;

/// Monotonic clock that also works on wasm targets.
pub type AppInstant = web_time::Instant;

pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        return format!("{}ms", ms);
    }
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }
    let mins = d.as_secs() / 60;
    format!("{}m {}s", mins, d.as_secs() % 60)
}
