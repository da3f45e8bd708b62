//! Workday clock math.
//!
//! A day runs 9:00 to 17:00 and is represented as a progress fraction in
//! [0, 1]. The clock only advances while the player is Working or
//! Slacking; the caller decides when to call [`advance`].

/// In-game hour the day starts at
pub const DAY_START_HOUR: f32 = 9.0;
/// In-game hour the day ends at
pub const DAY_END_HOUR: f32 = 17.0;
/// Real seconds of clock-advancing time per full day
pub const DAY_LENGTH_SECONDS: f32 = 480.0;
/// Days to survive for overall victory
pub const TOTAL_DAYS: u32 = 5;

/// Advance day progress by `dt` seconds of clock-advancing time.
pub fn advance(progress: f32, dt: f32) -> f32 {
    progress + dt / DAY_LENGTH_SECONDS
}

pub fn is_day_complete(progress: f32) -> bool {
    progress >= 1.0
}

/// In-game hour of day for a progress fraction (clamped to the workday).
pub fn hour_of_day(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    DAY_START_HOUR + p * (DAY_END_HOUR - DAY_START_HOUR)
}

/// HUD clock label, e.g. "9:30 AM" or "4:45 PM".
pub fn clock_label(progress: f32) -> String {
    let hour = hour_of_day(progress);
    let total_minutes = (hour * 60.0).floor() as u32;
    let h24 = total_minutes / 60;
    let minutes = total_minutes % 60;
    let (h12, suffix) = match h24 {
        0 => (12, "AM"),
        1..=11 => (h24, "AM"),
        12 => (12, "PM"),
        _ => (h24 - 12, "PM"),
    };
    format!("{}:{:02} {}", h12, minutes, suffix)
}
