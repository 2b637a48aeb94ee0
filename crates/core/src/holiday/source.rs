use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Calendar lookup failure. UnknownCountry is distinguishable from an
/// ordinary lookup failure so the resolver can log it at error level.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported country code: {0}")]
    UnknownCountry(String),
    #[error("calendar lookup failed: {0}")]
    Lookup(String),
}

/// Authoritative calendar for the home country, with make-up-workday
/// semantics. `is_workday` and `is_holiday` are independent predicates.
pub trait DomesticCalendar: Send + Sync {
    fn is_holiday(&self, date: NaiveDate) -> Result<bool, SourceError>;
    fn is_workday(&self, date: NaiveDate) -> Result<bool, SourceError>;
    /// Display name for a holiday date, when known.
    fn holiday_detail(&self, date: NaiveDate) -> Result<Option<String>, SourceError>;
}

/// Generic per-country holiday names, no workday semantics.
pub trait InternationalCalendar: Send + Sync {
    /// Holiday name for the date, None when the date is ordinary.
    /// Unknown country codes must fail with `SourceError::UnknownCountry`.
    fn lookup(&self, country_code: &str, date: NaiveDate) -> Result<Option<String>, SourceError>;
}

/// In-memory domestic calendar: a holiday map plus the set of weekend
/// dates scheduled as working days.
#[derive(Debug, Default, Clone)]
pub struct TableDomesticCalendar {
    holidays: HashMap<NaiveDate, String>,
    makeup_workdays: HashSet<NaiveDate>,
}

impl TableDomesticCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holiday(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.holidays.insert(date, name.into());
        self
    }

    pub fn with_makeup_workday(mut self, date: NaiveDate) -> Self {
        self.makeup_workdays.insert(date);
        self
    }
}

impl DomesticCalendar for TableDomesticCalendar {
    fn is_holiday(&self, date: NaiveDate) -> Result<bool, SourceError> {
        Ok(self.holidays.contains_key(&date))
    }

    fn is_workday(&self, date: NaiveDate) -> Result<bool, SourceError> {
        if self.holidays.contains_key(&date) {
            return Ok(false);
        }
        if self.makeup_workdays.contains(&date) {
            return Ok(true);
        }
        Ok(date.weekday().num_days_from_monday() < 5)
    }

    fn holiday_detail(&self, date: NaiveDate) -> Result<Option<String>, SourceError> {
        Ok(self.holidays.get(&date).cloned())
    }
}

/// In-memory international calendar keyed by country code. Codes not in
/// the table are unsupported, matching the upstream library behaviour.
#[derive(Debug, Default, Clone)]
pub struct TableInternationalCalendar {
    countries: HashMap<String, HashMap<NaiveDate, String>>,
}

impl TableInternationalCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a country as supported, with or without entries.
    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.countries.entry(code.into()).or_default();
        self
    }

    pub fn with_holiday(
        mut self,
        code: impl Into<String>,
        date: NaiveDate,
        name: impl Into<String>,
    ) -> Self {
        self.countries
            .entry(code.into())
            .or_default()
            .insert(date, name.into());
        self
    }
}

impl InternationalCalendar for TableInternationalCalendar {
    fn lookup(&self, country_code: &str, date: NaiveDate) -> Result<Option<String>, SourceError> {
        let table = self
            .countries
            .get(country_code)
            .ok_or_else(|| SourceError::UnknownCountry(country_code.to_string()))?;
        Ok(table.get(&date).cloned())
    }
}
