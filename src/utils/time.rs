use chrono::{DateTime, Duration, Local};

/// Get the default search window: today through `days` ahead, exclusive
pub fn upcoming_date_range(now: &DateTime<Local>, days: i64) -> (String, String) {
    let today = now.date_naive();

    let last = today
        .checked_add_signed(Duration::days(days))
        .unwrap_or(today);

    // Format dates as YYYY-MM-DD
    let start_date = today.format("%Y-%m-%d").to_string();
    let end_date = last.format("%Y-%m-%d").to_string();

    (start_date, end_date)
}
