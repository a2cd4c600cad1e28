use chrono::{DateTime, Utc};

/// Age of an issue as shown in the issue list, e.g. `"3d ago"`.
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    relative_time_from(dt, &Utc::now())
}

/// Like [`relative_time`], measured against a fixed `now`.
pub fn relative_time_from(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let age = now.signed_duration_since(dt);

    // Clock skew can put fresh issues slightly in the future
    if age.num_minutes() < 1 {
        return "just now".to_string();
    }

    let units = [
        (age.num_days() / 365, "y"),
        (age.num_days() / 30, "mo"),
        (age.num_days(), "d"),
        (age.num_hours(), "h"),
        (age.num_minutes(), "m"),
    ];

    units
        .iter()
        .find(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n}{unit} ago"))
        .unwrap_or_else(|| "just now".to_string())
}
