//! Taskbar clock formatting.

use chrono::{Local, Timelike};

/// 12-hour clock without a leading zero, the retro taskbar way.
pub fn format_clock(hour: u32, minute: u32) -> String {
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, meridiem)
}

/// Sample the wall clock for the taskbar.
pub fn sample_clock() -> String {
    let now = Local::now();
    format_clock(now.hour(), now.minute())
}
