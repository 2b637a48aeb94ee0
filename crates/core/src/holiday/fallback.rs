//! Hand-coded fixed and floating holiday rules, used when the generic
//! source has nothing for a date.
//!
//! The branch chain below is order-sensitive: once a date matches a
//! block, later blocks are never consulted, even if the country gate of
//! the matched block fails. Easter is deliberately approximated as any
//! Sunday between Mar 22 and Apr 25 rather than the true computus.

use chrono::{Datelike, NaiveDate, Weekday};

const NEW_YEAR_COUNTRIES: &[&str] = &[
    "US", "GB", "JP", "DE", "FR", "CA", "AU", "IT", "ES", "KR", "RU", "BR", "IN", "MX", "ZA",
];
const VALENTINE_COUNTRIES: &[&str] = &["US", "GB", "FR", "DE", "CA", "AU", "JP", "KR"];
const LABOR_DAY_COUNTRIES: &[&str] = &["FR", "DE", "RU", "BR", "IT", "ES"];
const HALLOWEEN_COUNTRIES: &[&str] = &["US", "GB", "CA", "AU"];
const EASTER_COUNTRIES: &[&str] = &["US", "GB", "DE", "FR", "CA", "AU", "IT", "ES", "BR", "MX"];
const MOTHERS_DAY_COUNTRIES: &[&str] = &["US", "GB", "CA", "AU", "DE", "JP"];
const FATHERS_DAY_COUNTRIES: &[&str] = &["US", "GB", "CA", "JP"];

/// Fallback holiday name for a date/country pair, if any rule fires.
pub fn lookup(date: NaiveDate, country_code: &str) -> Option<&'static str> {
    let month = date.month();
    let day = date.day();
    let weekday = date.weekday();

    if month == 1 && day == 1 {
        gated(NEW_YEAR_COUNTRIES, country_code, "元旦")
    } else if month == 2 && day == 14 {
        gated(VALENTINE_COUNTRIES, country_code, "情人节")
    } else if month == 5 && day == 1 {
        gated(LABOR_DAY_COUNTRIES, country_code, "劳动节")
    } else if month == 7 && day == 1 {
        gated(&["CA"], country_code, "加拿大日")
    } else if month == 7 && day == 4 {
        gated(&["US"], country_code, "美国独立日")
    } else if month == 7 && day == 14 {
        gated(&["FR"], country_code, "法国国庆日")
    } else if month == 10 && day == 31 {
        gated(HALLOWEEN_COUNTRIES, country_code, "万圣节")
    } else if weekday == Weekday::Sun && in_easter_window(month, day) {
        gated(EASTER_COUNTRIES, country_code, "复活节")
    } else if month == 11 && weekday == Weekday::Thu && (22..=28).contains(&day) {
        gated(&["US"], country_code, "感恩节")
    } else if month == 10 && weekday == Weekday::Mon && (8..=14).contains(&day) {
        gated(&["CA"], country_code, "加拿大感恩节")
    } else if month == 5 && weekday == Weekday::Sun && (8..=14).contains(&day) {
        gated(MOTHERS_DAY_COUNTRIES, country_code, "母亲节")
    } else if month == 6 && weekday == Weekday::Sun && (15..=21).contains(&day) {
        gated(FATHERS_DAY_COUNTRIES, country_code, "父亲节")
    } else {
        None
    }
}

fn gated(allowed: &[&str], country_code: &str, name: &'static str) -> Option<&'static str> {
    allowed.contains(&country_code).then_some(name)
}

/// Mar 22 through Apr 25, inclusive.
fn in_easter_window(month: u32, day: u32) -> bool {
    (month == 3 && day >= 22) || (month == 4 && day <= 25)
}
