use chrono::NaiveDate;

/// Label a forecast date relative to `today`: "Today", "Yesterday", or the
/// short English weekday name.
///
/// Works on calendar dates only, so the day difference is always a whole
/// number regardless of daylight-saving changes.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    match today.signed_duration_since(date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => date.format("%a").to_string(),
    }
}
