//! Literal placeholder substitution for rule content templates.
//!
//! Only the fixed token set below is recognized; anything else is left
//! in place untouched.

use chrono::{Datelike, Timelike};

use crate::lexicon::platform_display;
use crate::types::RequestContext;

/// Substitute recognized placeholders verbatim.
pub fn render(content: &str, ctx: &RequestContext) -> String {
    let now = &ctx.now;

    let mut out = content.to_string();
    out = out.replace("{current_time.hour}", &now.hour().to_string());
    out = out.replace("{current_time.minute}", &now.minute().to_string());
    // Monday = 0, matching the weekday index used everywhere else
    out = out.replace(
        "{current_time.weekday()}",
        &now.weekday().num_days_from_monday().to_string(),
    );
    out = out.replace(
        "{current_time.strftime(\"%H:%M\")}",
        &now.format("%H:%M").to_string(),
    );
    out = out.replace(
        "{current_time.strftime(\"%Y-%m-%d\")}",
        &now.format("%Y-%m-%d").to_string(),
    );
    out = out.replace("{platform_name}", platform_display(&ctx.platform_name));
    if let Some(message_type) = ctx.message_type {
        out = out.replace("{message_type}", message_type.as_str());
    }
    out
}
