use std::time::{Duration, SystemTime};

pub fn format_distance(meters: u32) -> String {
    format!("{meters}m")
}

pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn format_age(elapsed: Duration) -> String {
    const HOUR: u64 = 60 * 60;
    const DAY: u64 = 24 * HOUR;

    let secs = elapsed.as_secs();
    if secs < HOUR {
        return "Just now".to_owned();
    }
    if secs < DAY {
        return format!("{}h ago", secs / HOUR);
    }

    let days = secs / DAY;
    if days < 7 {
        format!("{days}d ago")
    } else {
        format!("{}w ago", days / 7)
    }
}

pub fn format_since(then: SystemTime, now: SystemTime) -> String {
    format_age(now.duration_since(then).unwrap_or_default())
}
