//! Perception assembly — the one entry point the host framework calls.
//!
//! Builds the bracketed annotation from the enabled sections (time,
//! holiday, platform, custom rules, emotion/tone) and prepends it to the
//! outgoing prompt. Every section degrades to omission on failure;
//! nothing here can fail the request.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::classify::{emotion, tone};
use crate::config::{DEFAULT_TIMEZONE, SentioCfg, Verbosity};
use crate::holiday::{self, DomesticCalendar, InternationalCalendar};
use crate::lexicon::platform_display;
use crate::rules;
use crate::types::{MessageEvent, MessageType, ProviderRequest, RequestContext, Segment};

/// Separator between top-level annotation sections.
const SECTION_SEPARATOR: &str = " | ";

/// Max characters of message text quoted in the detailed log line.
const SUMMARY_LIMIT: usize = 50;

pub struct Perceptor {
    cfg: SentioCfg,
    tz: Tz,
    verbosity: Verbosity,
    domestic: Option<Box<dyn DomesticCalendar>>,
    international: Option<Box<dyn InternationalCalendar>>,
}

impl Perceptor {
    /// Build a perceptor from config and the (optionally absent) calendar
    /// sources. Construction never fails: bad settings fall back with a log.
    pub fn new(
        mut cfg: SentioCfg,
        domestic: Option<Box<dyn DomesticCalendar>>,
        international: Option<Box<dyn InternationalCalendar>>,
    ) -> Self {
        let verbosity = Verbosity(cfg.log_level);

        let tz = match cfg.timezone.parse::<Tz>() {
            Ok(tz) => {
                verbosity.debug(&format!("timezone set: {}", cfg.timezone));
                tz
            }
            Err(_) => {
                verbosity.error(&format!(
                    "invalid timezone '{}', falling back to {DEFAULT_TIMEZONE}",
                    cfg.timezone
                ));
                cfg.timezone = DEFAULT_TIMEZONE.into();
                chrono_tz::Asia::Shanghai
            }
        };

        if cfg.enable_emotion_perception && cfg.emotion_method != "rule_based" {
            verbosity.warning(&format!(
                "unknown emotion method '{}', falling back to rule_based",
                cfg.emotion_method
            ));
            cfg.emotion_method = "rule_based".into();
        }

        let perceptor = Self {
            cfg,
            tz,
            verbosity,
            domestic,
            international,
        };
        perceptor.log_startup();
        perceptor
    }

    fn log_startup(&self) {
        let cfg = &self.cfg;
        let country_display = if cfg.holiday_country.len() > 3 {
            format!(
                "{}...等{}个国家",
                cfg.holiday_country[..3].join(", "),
                cfg.holiday_country.len()
            )
        } else {
            cfg.holiday_country.join(", ")
        };
        let custom_status = if cfg.enable_custom_perception {
            format!("enabled ({} rules)", cfg.custom_perception_rules.len())
        } else {
            "disabled".to_string()
        };
        self.verbosity.info(&format!(
            "perceptor loaded | timezone: {} | holiday: {} (countries: [{country_display}], \
             domestic source: {}, international source: {}) | platform: {} | custom: {custom_status} | \
             emotion: {} | tone: {} | detailed logging: {} | log level: {}",
            cfg.timezone,
            cfg.enable_holiday_perception,
            if self.domestic.is_some() { "available" } else { "absent" },
            if self.international.is_some() { "available" } else { "absent" },
            cfg.enable_platform_perception,
            cfg.enable_emotion_perception,
            cfg.enable_tone_perception,
            cfg.enable_detailed_logging,
            cfg.log_level.as_str(),
        ));
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Annotate with the current wall clock in the configured timezone.
    pub fn annotate_now(&self, event: &MessageEvent, req: &mut ProviderRequest) {
        self.annotate(event, req, Utc::now().with_timezone(&self.tz));
    }

    /// One synchronous assembly pass: build the perception text and
    /// prepend `"[<text>]\n"` to the prompt. Time is injected so repeated
    /// calls with the same inputs are byte-identical.
    pub fn annotate(&self, event: &MessageEvent, req: &mut ProviderRequest, now: DateTime<Tz>) {
        self.verbosity.debug("processing LLM request");
        self.verbosity
            .debug(&format!("current time: {}", now.format("%Y-%m-%d %H:%M:%S")));

        let mut parts = vec![format!("发送时间: {}", now.format("%Y-%m-%d %H:%M:%S"))];

        let holiday_info = self.holiday_info(&now);
        if !holiday_info.is_empty() {
            self.verbosity.debug(&format!("holiday info: {holiday_info}"));
            parts.push(holiday_info);
        }

        let platform_info = self.platform_info(event);
        if !platform_info.is_empty() {
            self.verbosity.debug(&format!("platform info: {platform_info}"));
            parts.push(platform_info);
        }

        let ctx = RequestContext {
            now,
            platform_name: event.platform_name.clone(),
            message_type: event.message_type,
        };
        let custom_info = self.custom_info(&ctx);
        if !custom_info.is_empty() {
            self.verbosity.debug(&format!("custom info: {custom_info}"));
            parts.push(custom_info);
        }

        let emotion_info = self.emotion_info(event);
        if !emotion_info.is_empty() {
            self.verbosity.debug(&format!("emotion info: {emotion_info}"));
            parts.push(emotion_info);
        }

        let perception_text = parts.join(SECTION_SEPARATOR);

        let original_length = req.prompt.len();
        req.prompt = format!("[{perception_text}]\n{}", req.prompt);
        let new_length = req.prompt.len();

        self.log_detailed(&now, event, &perception_text);
        self.verbosity
            .info(&format!("perception added: {perception_text}"));
        self.verbosity.debug(&format!(
            "prompt length: {original_length} -> {new_length} (+{})",
            new_length - original_length
        ));
    }

    fn holiday_info(&self, now: &DateTime<Tz>) -> String {
        if !self.cfg.enable_holiday_perception {
            return String::new();
        }
        holiday::describe(
            now,
            &self.cfg.holiday_country,
            self.domestic.as_deref(),
            self.international.as_deref(),
            &self.verbosity,
        )
    }

    fn platform_info(&self, event: &MessageEvent) -> String {
        if !self.cfg.enable_platform_perception {
            return String::new();
        }

        let mut parts = vec![format!("平台: {}", platform_display(&event.platform_name))];

        match event.message_type {
            Some(MessageType::GroupMessage) => parts.push("群聊".to_string()),
            Some(MessageType::FriendMessage) => parts.push("私聊".to_string()),
            _ => {}
        }

        let has_image = event.segments.iter().any(|s| matches!(s, Segment::Image));
        let has_audio = event
            .segments
            .iter()
            .any(|s| matches!(s, Segment::Voice | Segment::Audio));
        let has_video = event.segments.iter().any(|s| matches!(s, Segment::Video));
        if has_image {
            parts.push("含图片".to_string());
        }
        if has_audio {
            parts.push("含语音".to_string());
        }
        if has_video {
            parts.push("含视频".to_string());
        }

        parts.join(", ")
    }

    fn custom_info(&self, ctx: &RequestContext) -> String {
        if !self.cfg.enable_custom_perception || self.cfg.custom_perception_rules.is_empty() {
            return String::new();
        }
        rules::evaluate(&self.cfg.custom_perception_rules, ctx, &self.verbosity)
    }

    fn emotion_info(&self, event: &MessageEvent) -> String {
        if !self.cfg.enable_emotion_perception && !self.cfg.enable_tone_perception {
            return String::new();
        }
        // No text segments → nothing to classify, omit the section.
        let Some(text) = event.text() else {
            return String::new();
        };

        let mut parts = Vec::new();
        if self.cfg.enable_emotion_perception {
            parts.push(format!("情绪: {}", emotion::classify(&text).as_str()));
        }
        if self.cfg.enable_tone_perception {
            parts.push(format!("语气: {}", tone::classify(&text).as_str()));
        }
        parts.join(", ")
    }

    fn log_detailed(&self, now: &DateTime<Tz>, event: &MessageEvent, perception_text: &str) {
        if !self.cfg.enable_detailed_logging {
            return;
        }

        let message_type = event
            .message_type
            .map(|mt| mt.as_str())
            .unwrap_or("unknown");
        let mut fields = vec![
            format!("time: {}", now.format("%Y-%m-%d %H:%M:%S")),
            format!("platform: {}", platform_display(&event.platform_name)),
            format!("message type: {message_type}"),
            format!("perception: {perception_text}"),
        ];

        if let Some(text) = event.first_text() {
            let summary: String = text.chars().take(SUMMARY_LIMIT).collect();
            let suffix = if text.chars().count() > SUMMARY_LIMIT {
                "..."
            } else {
                ""
            };
            if !summary.is_empty() {
                fields.push(format!("message summary: {summary}{suffix}"));
            }
        }

        self.verbosity.debug(&fields.join(" | "));
    }
}
