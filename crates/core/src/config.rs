use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::PerceptionRule;

/// Default country list when `holiday_country` is missing or malformed.
pub const DEFAULT_COUNTRIES: [&str; 3] = ["CN", "US", "JP"];

/// Default timezone when the configured one fails to parse.
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

/// Verbosity levels for the perceptor's own log gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LogLevel::parse(&raw).unwrap_or_else(|| {
            tracing::warn!(level = %raw, "unknown log level, falling back to INFO");
            LogLevel::Info
        }))
    }
}

/// Additional verbosity gate on top of the tracing subscriber's own filter.
/// Messages below the configured level are dropped before emission.
#[derive(Debug, Clone, Copy)]
pub struct Verbosity(pub LogLevel);

impl Verbosity {
    fn passes(&self, level: LogLevel) -> bool {
        level >= self.0
    }

    pub fn debug(&self, msg: &str) {
        if self.passes(LogLevel::Debug) {
            tracing::debug!("{msg}");
        }
    }

    pub fn info(&self, msg: &str) {
        if self.passes(LogLevel::Info) {
            tracing::info!("{msg}");
        }
    }

    pub fn warning(&self, msg: &str) {
        if self.passes(LogLevel::Warning) {
            tracing::warn!("{msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.passes(LogLevel::Error) {
            tracing::error!("{msg}");
        }
    }
}

/// All perception parameters. Read-only after construction; every field
/// has a usable default so a partial (or empty) config still works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentioCfg {
    /// IANA timezone name; invalid values fall back to Asia/Shanghai.
    pub timezone: String,
    pub enable_holiday_perception: bool,
    pub enable_platform_perception: bool,
    /// Accepts a single string or a list of country codes.
    #[serde(deserialize_with = "string_or_list")]
    pub holiday_country: Vec<String>,
    pub enable_custom_perception: bool,
    pub custom_perception_rules: Vec<PerceptionRule>,
    pub enable_emotion_perception: bool,
    /// Only "rule_based" is implemented; anything else falls back to it.
    pub emotion_method: String,
    pub enable_tone_perception: bool,
    pub log_level: LogLevel,
    pub enable_detailed_logging: bool,
}

impl Default for SentioCfg {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.into(),
            enable_holiday_perception: true,
            enable_platform_perception: true,
            holiday_country: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            enable_custom_perception: false,
            custom_perception_rules: Vec::new(),
            enable_emotion_perception: true,
            emotion_method: "rule_based".into(),
            enable_tone_perception: true,
            log_level: LogLevel::Info,
            enable_detailed_logging: true,
        }
    }
}

impl SentioCfg {
    /// Parse from a JSON value; a malformed document yields the defaults
    /// with an error trace rather than failing construction.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::error!(error = %e, "invalid perception config, using defaults");
                Self::default()
            }
        }
    }
}

/// Normalize the string-or-list country shape into one canonical list.
/// A bare string becomes a single-element list; any non-string entries or
/// non-list shapes map to the documented default.
fn string_or_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let countries = match value {
        Value::String(s) => vec![s],
        Value::Array(items) => {
            let codes: Vec<String> = items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            if codes.len() != items.len() {
                tracing::warn!("non-string entries in holiday_country were dropped");
            }
            codes
        }
        other => {
            tracing::warn!(
                shape = %other,
                "unsupported holiday_country shape, using default country list"
            );
            DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect()
        }
    };
    Ok(countries)
}
