use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conversation scope of an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    /// Group / channel conversation.
    GroupMessage,
    /// One-on-one conversation.
    FriendMessage,
    /// Anything else (system notices, temp sessions).
    OtherMessage,
}

impl MessageType {
    /// Canonical string form, used by rule conditions and `{message_type}` templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GroupMessage => "GroupMessage",
            Self::FriendMessage => "FriendMessage",
            Self::OtherMessage => "OtherMessage",
        }
    }
}

/// One content segment of an inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Image,
    Voice,
    Audio,
    Video,
}

/// Inbound message event as delivered by the host framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    pub id: Uuid,
    /// Platform identifier as reported by the host (e.g. "telegram", "aiocqhttp").
    pub platform_name: String,
    pub message_type: Option<MessageType>,
    pub segments: Vec<Segment>,
}

impl MessageEvent {
    pub fn new(
        platform_name: impl Into<String>,
        message_type: Option<MessageType>,
        segments: Vec<Segment>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform_name: platform_name.into(),
            message_type,
            segments,
        }
    }

    /// Plain-text message with a single text segment.
    pub fn text_message(
        platform_name: impl Into<String>,
        message_type: Option<MessageType>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            platform_name,
            message_type,
            vec![Segment::Text { text: text.into() }],
        )
    }

    /// All text segments concatenated, or None if the message carries no text.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .segments
            .iter()
            .filter_map(|seg| match seg {
                Segment::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// First text segment, for log summaries.
    pub fn first_text(&self) -> Option<&str> {
        self.segments.iter().find_map(|seg| match seg {
            Segment::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Outbound LLM request owned by the host framework.
/// The annotation pass prepends to `prompt`; nothing else is touched.
#[derive(Debug, Clone, Default)]
pub struct ProviderRequest {
    pub prompt: String,
}

impl ProviderRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// One holiday hit for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDetection {
    pub country_label: String,
    pub holiday_name: String,
}

impl HolidayDetection {
    pub fn render(&self) -> String {
        format!("{}:{}", self.country_label, self.holiday_name)
    }
}

/// Workday status for the query date. Suppressed from output when any
/// holiday detection exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkdayStatus {
    Workday,
    Weekend,
    /// Weekend date scheduled as a working day by the domestic calendar.
    MakeupWorkday,
}

impl WorkdayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workday => "工作日",
            Self::Weekend => "周末",
            Self::MakeupWorkday => "调休工作日",
        }
    }
}

/// Emotion labels produced by the rule-based classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Angry,
    Sad,
    Surprised,
    Fearful,
    Neutral,
}

impl Emotion {
    /// Fixed label set, in scoreboard order. Neutral last so that exact
    /// ties between non-neutral labels keep the earlier label.
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Angry,
        Emotion::Sad,
        Emotion::Surprised,
        Emotion::Fearful,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "开心",
            Self::Angry => "生气",
            Self::Sad => "难过",
            Self::Surprised => "惊讶",
            Self::Fearful => "害怕",
            Self::Neutral => "平静",
        }
    }
}

/// Tone labels, including the two compound forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Question,
    Exclamation,
    Statement,
    /// Both signals strong, question score >= exclamation score.
    QuestionExclamation,
    /// Both signals strong, exclamation score larger.
    ExclamationQuestion,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "疑问",
            Self::Exclamation => "感叹",
            Self::Statement => "陈述",
            Self::QuestionExclamation => "疑问感叹",
            Self::ExclamationQuestion => "感叹疑问",
        }
    }
}

/// User-defined perception rule, supplied via configuration.
/// `condition` and `content` stay optional so a malformed rule skips
/// with a warning instead of failing the whole config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerceptionRule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl PerceptionRule {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }
}

/// Per-invocation evaluation context for conditions and templates.
/// Built once per annotation pass, discarded after.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub now: DateTime<Tz>,
    pub platform_name: String,
    pub message_type: Option<MessageType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_text_concatenates_text_segments() {
        let event = MessageEvent::new(
            "telegram",
            Some(MessageType::FriendMessage),
            vec![
                Segment::Text { text: "你好".into() },
                Segment::Image,
                Segment::Text { text: "world".into() },
            ],
        );
        assert_eq!(event.text().as_deref(), Some("你好 world"));
        assert_eq!(event.first_text(), Some("你好"));
    }

    #[test]
    fn message_without_text_yields_none() {
        let event = MessageEvent::new("discord", None, vec![Segment::Image, Segment::Voice]);
        assert!(event.text().is_none());
        assert!(event.first_text().is_none());
    }

    #[test]
    fn workday_status_labels() {
        assert_eq!(WorkdayStatus::Workday.as_str(), "工作日");
        assert_eq!(WorkdayStatus::Weekend.as_str(), "周末");
        assert_eq!(WorkdayStatus::MakeupWorkday.as_str(), "调休工作日");
    }

    #[test]
    fn rule_name_defaults_to_unknown() {
        let rule: PerceptionRule = serde_json::from_str(r#"{"condition": "x"}"#).unwrap();
        assert_eq!(rule.name(), "unknown");
        assert!(rule.enabled);
        assert!(rule.content.is_none());
    }

    #[test]
    fn detection_render() {
        let d = HolidayDetection {
            country_label: "中国".into(),
            holiday_name: "元旦".into(),
        };
        assert_eq!(d.render(), "中国:元旦");
    }
}
