//! Time-of-day greeting shown once when the widget loads.

use chrono::{Local, Timelike};
use sanvii_core::Context;

/// Greeting for the given local hour (0-23).
///
/// Buckets: before 12 morning, 12-16 afternoon, 17-20 evening, 21 onward
/// late night.
pub fn time_of_day_greeting(hour: u32, ctx: &Context) -> String {
    let owner = &ctx.owner_name;
    if hour < 12 {
        format!("Good morning, {}! Ready to crush it today? 💪", owner)
    } else if hour < 17 {
        format!("Good afternoon, {}! How can I help? 🌟", owner)
    } else if hour < 21 {
        format!("Good evening, {}! Need anything? ✨", owner)
    } else {
        format!("Burning the midnight oil, {}? I'm here! 🌙", owner)
    }
}

/// Greeting for right now.
pub fn load_greeting(ctx: &Context) -> String {
    time_of_day_greeting(Local::now().hour(), ctx)
}
