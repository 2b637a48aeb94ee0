//! Holiday and workday resolution across an ordered list of countries.
//!
//! The home country consults the precise domestic calendar (make-up
//! workday semantics); every other code goes through the generic
//! international source, backfilled by the hand-coded fallback table.
//! Lookup failures never propagate: a failing country is logged and
//! simply contributes nothing.

pub mod fallback;
pub mod source;

pub use source::{
    DomesticCalendar, InternationalCalendar, SourceError, TableDomesticCalendar,
    TableInternationalCalendar,
};

use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use chrono_tz::Tz;

use crate::config::Verbosity;
use crate::lexicon::{WEEKDAY_NAMES, country_display};
use crate::types::{HolidayDetection, WorkdayStatus};

/// The one country code served by the domestic calendar.
pub const HOME_COUNTRY: &str = "CN";

/// One resolution request: a calendar date and the configured countries.
#[derive(Debug, Clone)]
pub struct HolidayQuery {
    pub date: NaiveDate,
    pub countries: Vec<String>,
}

/// Resolve detections and the (at most one) authoritative workday status.
/// Detection order follows country input order; duplicates are kept.
pub fn resolve(
    query: &HolidayQuery,
    domestic: Option<&dyn DomesticCalendar>,
    international: Option<&dyn InternationalCalendar>,
    verbosity: &Verbosity,
) -> (Vec<HolidayDetection>, Option<WorkdayStatus>) {
    let mut detections = Vec::new();
    let mut workday_status: Option<WorkdayStatus> = None;

    for code in &query.countries {
        if code == HOME_COUNTRY {
            let Some(calendar) = domestic else {
                continue;
            };
            match check_domestic(calendar, query.date) {
                Ok((detection, status)) => {
                    if let Some(d) = detection {
                        verbosity.debug(&format!("domestic holiday detected: {}", d.holiday_name));
                        detections.push(d);
                    }
                    if workday_status.is_none() {
                        workday_status = Some(status);
                    }
                }
                Err(e) => {
                    verbosity.warning(&format!("domestic holiday check failed: {e}"));
                }
            }
        } else {
            match check_international(international, code, query.date) {
                Ok(Some(name)) => {
                    verbosity.debug(&format!("{code} holiday detected: {name}"));
                    detections.push(HolidayDetection {
                        country_label: country_display(code).to_string(),
                        holiday_name: name,
                    });
                }
                Ok(None) => {}
                Err(SourceError::UnknownCountry(code)) => {
                    verbosity.error(&format!(
                        "unsupported country code: {code}, check holiday_country config"
                    ));
                }
                Err(e) => {
                    verbosity.warning(&format!("{code} holiday check failed: {e}"));
                }
            }
        }
    }

    (detections, workday_status)
}

/// Full section text: weekday name, holiday detections or workday status,
/// and the time-of-day bucket. Joined with ", ".
pub fn describe(
    now: &DateTime<Tz>,
    countries: &[String],
    domestic: Option<&dyn DomesticCalendar>,
    international: Option<&dyn InternationalCalendar>,
    verbosity: &Verbosity,
) -> String {
    let weekday_index = now.weekday().num_days_from_monday() as usize;
    let mut parts = vec![WEEKDAY_NAMES[weekday_index].to_string()];

    let query = HolidayQuery {
        date: now.date_naive(),
        countries: countries.to_vec(),
    };
    let (detections, workday_status) = resolve(&query, domestic, international, verbosity);

    if detections.is_empty() {
        // No domestic input: naive weekend rule by weekday index.
        let status = workday_status.unwrap_or(if weekday_index >= 5 {
            WorkdayStatus::Weekend
        } else {
            WorkdayStatus::Workday
        });
        parts.push(status.as_str().to_string());
    } else {
        parts.push("节假日".to_string());
        parts.extend(detections.iter().map(HolidayDetection::render));
    }

    parts.push(time_bucket(now.hour()).to_string());
    parts.join(", ")
}

fn check_domestic(
    calendar: &dyn DomesticCalendar,
    date: NaiveDate,
) -> Result<(Option<HolidayDetection>, WorkdayStatus), SourceError> {
    let is_holiday = calendar.is_holiday(date)?;
    let is_workday = calendar.is_workday(date)?;

    let detection = if is_holiday {
        let name = calendar
            .holiday_detail(date)?
            .unwrap_or_else(|| "法定节假日".to_string());
        Some(HolidayDetection {
            country_label: "中国".to_string(),
            holiday_name: name,
        })
    } else {
        None
    };

    let weekend_index = date.weekday().num_days_from_monday() >= 5;
    let status = if is_workday {
        if weekend_index {
            WorkdayStatus::MakeupWorkday
        } else {
            WorkdayStatus::Workday
        }
    } else {
        WorkdayStatus::Weekend
    };

    Ok((detection, status))
}

/// Generic source first; the fallback table fires only when that source
/// has nothing for the date (or is absent entirely).
fn check_international(
    international: Option<&dyn InternationalCalendar>,
    code: &str,
    date: NaiveDate,
) -> Result<Option<String>, SourceError> {
    if let Some(calendar) = international {
        if let Some(name) = calendar.lookup(code, date)? {
            return Ok(Some(name));
        }
    }
    Ok(fallback::lookup(date, code).map(str::to_string))
}

/// Half-open time-of-day buckets on the local hour.
pub fn time_bucket(hour: u32) -> &'static str {
    match hour {
        5..12 => "上午",
        12..14 => "中午",
        14..18 => "下午",
        18..22 => "晚上",
        _ => "深夜",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, Verbosity};
    use chrono::TimeZone;
    use chrono_tz::Asia::Shanghai;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quiet() -> Verbosity {
        Verbosity(LogLevel::Error)
    }

    fn countries(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn time_buckets_are_half_open() {
        assert_eq!(time_bucket(4), "深夜");
        assert_eq!(time_bucket(5), "上午");
        assert_eq!(time_bucket(11), "上午");
        assert_eq!(time_bucket(12), "中午");
        assert_eq!(time_bucket(13), "中午");
        assert_eq!(time_bucket(14), "下午");
        assert_eq!(time_bucket(17), "下午");
        assert_eq!(time_bucket(18), "晚上");
        assert_eq!(time_bucket(21), "晚上");
        assert_eq!(time_bucket(22), "深夜");
        assert_eq!(time_bucket(0), "深夜");
    }

    #[test]
    fn domestic_holiday_detection() {
        let cal = TableDomesticCalendar::new().with_holiday(date(2024, 1, 1), "元旦");
        let query = HolidayQuery {
            date: date(2024, 1, 1),
            countries: countries(&["CN"]),
        };
        let (detections, status) = resolve(&query, Some(&cal), None, &quiet());
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].render(), "中国:元旦");
        // Jan 1 2024 is a Monday but a statutory holiday → not a workday
        assert_eq!(status, Some(WorkdayStatus::Weekend));
    }

    #[test]
    fn domestic_makeup_workday_status() {
        // 2024-02-04 is a Sunday scheduled as a make-up workday
        let cal = TableDomesticCalendar::new().with_makeup_workday(date(2024, 2, 4));
        let query = HolidayQuery {
            date: date(2024, 2, 4),
            countries: countries(&["CN"]),
        };
        let (detections, status) = resolve(&query, Some(&cal), None, &quiet());
        assert!(detections.is_empty());
        assert_eq!(status, Some(WorkdayStatus::MakeupWorkday));
    }

    #[test]
    fn fallback_fires_when_generic_source_is_empty() {
        let cal = TableInternationalCalendar::new().with_country("US");
        let query = HolidayQuery {
            date: date(2024, 2, 14),
            countries: countries(&["US"]),
        };
        let (detections, _) = resolve(&query, None, Some(&cal), &quiet());
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].render(), "美国:情人节");
    }

    #[test]
    fn generic_source_suppresses_fallback() {
        let cal = TableInternationalCalendar::new().with_holiday(
            "US",
            date(2024, 2, 14),
            "Valentine's Day",
        );
        let query = HolidayQuery {
            date: date(2024, 2, 14),
            countries: countries(&["US"]),
        };
        let (detections, _) = resolve(&query, None, Some(&cal), &quiet());
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].render(), "美国:Valentine's Day");
    }

    #[test]
    fn unknown_country_is_skipped_without_aborting() {
        let cal = TableInternationalCalendar::new().with_holiday(
            "JP",
            date(2024, 1, 1),
            "元日",
        );
        let query = HolidayQuery {
            date: date(2024, 1, 1),
            countries: countries(&["XX", "JP"]),
        };
        let (detections, _) = resolve(&query, None, Some(&cal), &quiet());
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].render(), "日本:元日");
    }

    #[test]
    fn detection_order_follows_country_order() {
        let cal = TableInternationalCalendar::new()
            .with_holiday("JP", date(2024, 1, 1), "元日")
            .with_holiday("US", date(2024, 1, 1), "New Year's Day");
        let query = HolidayQuery {
            date: date(2024, 1, 1),
            countries: countries(&["JP", "US"]),
        };
        let (detections, _) = resolve(&query, None, Some(&cal), &quiet());
        let rendered: Vec<String> = detections.iter().map(HolidayDetection::render).collect();
        assert_eq!(rendered, vec!["日本:元日", "美国:New Year's Day"]);
    }

    #[test]
    fn describe_with_holiday() {
        let cal = TableDomesticCalendar::new().with_holiday(date(2024, 1, 1), "元旦");
        // Monday 2024-01-01 09:30 local
        let now = Shanghai.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        let text = describe(&now, &countries(&["CN"]), Some(&cal), None, &quiet());
        assert_eq!(text, "周一, 节假日, 中国:元旦, 上午");
    }

    #[test]
    fn describe_naive_weekend_without_sources() {
        // 2024-01-06 is a Saturday
        let now = Shanghai.with_ymd_and_hms(2024, 1, 6, 23, 0, 0).unwrap();
        let text = describe(&now, &countries(&["CN"]), None, None, &quiet());
        assert_eq!(text, "周六, 周末, 深夜");
    }

    #[test]
    fn describe_naive_workday_without_sources() {
        // 2024-01-03 is a Wednesday
        let now = Shanghai.with_ymd_and_hms(2024, 1, 3, 15, 0, 0).unwrap();
        let text = describe(&now, &countries(&[]), None, None, &quiet());
        assert_eq!(text, "周三, 工作日, 下午");
    }
}
