//! Recognized condition shapes for custom perception rules.
//!
//! Deliberately not an expression language: three shapes are matched by
//! pattern extraction and everything else evaluates to false, so
//! user-supplied strings can never execute anything.

use std::sync::LazyLock;

use chrono::Timelike;
use regex::Regex;

use crate::types::RequestContext;

static HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"current_time\.hour\s*([<>=!]+)\s*(\d+)").unwrap());
static PLATFORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"platform_name\s*[=!]+\s*['"]([^'"]+)['"]"#).unwrap());
static MESSAGE_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"message_type\s*[=!]+\s*['"]([^'"]+)['"]"#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
}

impl CmpOp {
    fn parse(op: &str) -> Option<Self> {
        match op {
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            "==" | "=" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            _ => None,
        }
    }

    fn apply(self, lhs: u32, rhs: u32) -> bool {
        match self {
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
        }
    }
}

/// Parsed condition. Anything that fails extraction lands on
/// `Unrecognized`, which always evaluates to false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    HourCompare(CmpOp, u32),
    PlatformEquals(String),
    MessageTypeEquals(String),
    Unrecognized,
}

impl Condition {
    /// Probe the three recognized shapes in fixed order: hour comparison,
    /// platform equality, message-type equality.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();

        if lower.contains("current_time") && lower.contains("hour") {
            if let Some(caps) = HOUR_RE.captures(raw) {
                let op = CmpOp::parse(&caps[1]);
                let hour = caps[2].parse::<u32>().ok();
                if let (Some(op), Some(hour)) = (op, hour) {
                    return Self::HourCompare(op, hour);
                }
            }
        }

        if lower.contains("platform_name") {
            if let Some(caps) = PLATFORM_RE.captures(raw) {
                return Self::PlatformEquals(caps[1].to_string());
            }
        }

        if lower.contains("message_type") {
            if let Some(caps) = MESSAGE_TYPE_RE.captures(raw) {
                return Self::MessageTypeEquals(caps[1].to_string());
            }
        }

        Self::Unrecognized
    }

    /// Evaluate against the request context. Fail-closed: `Unrecognized`
    /// is false, and a message-type condition without a message type is false.
    pub fn evaluate(&self, ctx: &RequestContext) -> bool {
        match self {
            Self::HourCompare(op, target) => op.apply(ctx.now.hour(), *target),
            Self::PlatformEquals(target) => ctx.platform_name == *target,
            Self::MessageTypeEquals(target) => ctx
                .message_type
                .map(|mt| mt.as_str() == target)
                .unwrap_or(false),
            Self::Unrecognized => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageType;
    use chrono::TimeZone;
    use chrono_tz::Asia::Shanghai;

    fn ctx(hour: u32) -> RequestContext {
        RequestContext {
            now: Shanghai.with_ymd_and_hms(2024, 6, 1, hour, 5, 0).unwrap(),
            platform_name: "telegram".into(),
            message_type: Some(MessageType::GroupMessage),
        }
    }

    #[test]
    fn hour_comparisons() {
        let cond = Condition::parse("current_time.hour >= 18");
        assert_eq!(cond, Condition::HourCompare(CmpOp::Ge, 18));
        assert!(cond.evaluate(&ctx(20)));
        assert!(cond.evaluate(&ctx(18)));
        assert!(!cond.evaluate(&ctx(10)));
    }

    #[test]
    fn hour_all_operators() {
        assert!(Condition::parse("current_time.hour > 8").evaluate(&ctx(9)));
        assert!(Condition::parse("current_time.hour < 8").evaluate(&ctx(7)));
        assert!(Condition::parse("current_time.hour <= 8").evaluate(&ctx(8)));
        assert!(Condition::parse("current_time.hour == 8").evaluate(&ctx(8)));
        assert!(Condition::parse("current_time.hour = 8").evaluate(&ctx(8)));
        assert!(Condition::parse("current_time.hour != 8").evaluate(&ctx(9)));
    }

    #[test]
    fn platform_equality() {
        let cond = Condition::parse(r#"platform_name == "telegram""#);
        assert_eq!(cond, Condition::PlatformEquals("telegram".into()));
        assert!(cond.evaluate(&ctx(12)));

        let other = Condition::parse(r#"platform_name == 'discord'"#);
        assert!(!other.evaluate(&ctx(12)));
    }

    #[test]
    fn message_type_equality() {
        let cond = Condition::parse(r#"message_type == "GroupMessage""#);
        assert_eq!(cond, Condition::MessageTypeEquals("GroupMessage".into()));
        assert!(cond.evaluate(&ctx(12)));

        let mut no_type = ctx(12);
        no_type.message_type = None;
        assert!(!cond.evaluate(&no_type));
    }

    #[test]
    fn malformed_conditions_fail_closed() {
        for raw in [
            "",
            "import os; os.system('rm -rf /')",
            "current_time.hour >> 5",
            "current_time.hour >= ",
            "platform_name == telegram", // unquoted literal
            "random text",
        ] {
            let cond = Condition::parse(raw);
            assert_eq!(cond, Condition::Unrecognized, "input: {raw}");
            assert!(!cond.evaluate(&ctx(12)));
        }
    }

    #[test]
    fn hour_shape_takes_precedence() {
        // both shapes present: hour wins per probe order
        let cond = Condition::parse(r#"current_time.hour >= 6 and platform_name == "telegram""#);
        assert_eq!(cond, Condition::HourCompare(CmpOp::Ge, 6));
    }
}
