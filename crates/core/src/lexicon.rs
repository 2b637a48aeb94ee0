//! Static lexicon tables — process-wide, immutable, no logic.

use crate::types::Emotion;

/// Weekday display names, Monday first (chrono `num_days_from_monday` order).
pub const WEEKDAY_NAMES: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

/// Platform identifier → display name.
pub const PLATFORM_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("aiocqhttp", "QQ"),
    ("telegram", "Telegram"),
    ("discord", "Discord"),
    ("weixin_official_account", "微信公众号"),
    ("wecom", "企业微信"),
    ("wecom_ai_bot", "企业微信AI机器人"),
    ("satori", "Satori"),
    ("misskey", "Misskey"),
];

/// Display name for a platform identifier; unmapped platforms keep the raw name.
pub fn platform_display(name: &str) -> &str {
    PLATFORM_DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == name)
        .map(|(_, display)| *display)
        .unwrap_or(name)
}

/// ISO country code → display name, for holiday detections.
pub const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("US", "美国"),
    ("GB", "英国"),
    ("JP", "日本"),
    ("DE", "德国"),
    ("FR", "法国"),
    ("CA", "加拿大"),
    ("AU", "澳大利亚"),
    ("IT", "意大利"),
    ("ES", "西班牙"),
    ("KR", "韩国"),
    ("RU", "俄罗斯"),
    ("BR", "巴西"),
    ("IN", "印度"),
    ("MX", "墨西哥"),
    ("ZA", "南非"),
];

/// Display name for a country code; unmapped codes keep the raw code.
pub fn country_display(code: &str) -> &str {
    COUNTRY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, display)| *display)
        .unwrap_or(code)
}

/// Emotion → keyword lexicon. Single-character keywords go through the
/// CJK boundary rule in the matcher.
pub const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Happy,
        &[
            "开心", "高兴", "快乐", "哈哈", "嘻嘻", "笑死", "太好了", "棒", "爽", "开森",
            "happy", "great", "awesome", "lol", "nice",
        ],
    ),
    (
        Emotion::Angry,
        &[
            "生气", "气死", "愤怒", "讨厌", "烦死", "可恶", "火大", "滚",
            "angry", "furious", "hate", "annoying",
        ],
    ),
    (
        Emotion::Sad,
        &[
            "难过", "伤心", "委屈", "失望", "呜呜", "心碎", "想哭", "哭", "唉",
            "sad", "cry", "upset", "depressed",
        ],
    ),
    (
        Emotion::Surprised,
        &[
            "惊讶", "震惊", "天哪", "居然", "竟然", "没想到", "不会吧",
            "wow", "omg", "unbelievable",
        ],
    ),
    (
        Emotion::Fearful,
        &[
            "害怕", "恐怖", "吓死", "担心", "紧张", "不敢", "慌",
            "scared", "afraid", "worried", "terrified",
        ],
    ),
    (
        Emotion::Neutral,
        &["嗯", "哦", "好的", "知道了", "ok", "okay"],
    ),
];

/// Emoji → emotion. Scanned in table order; only the first hit scores.
pub const EMOJI_EMOTIONS: &[(&str, Emotion)] = &[
    ("😊", Emotion::Happy),
    ("😄", Emotion::Happy),
    ("🤣", Emotion::Happy),
    ("🥰", Emotion::Happy),
    ("😁", Emotion::Happy),
    ("😡", Emotion::Angry),
    ("🤬", Emotion::Angry),
    ("💢", Emotion::Angry),
    ("😭", Emotion::Sad),
    ("😢", Emotion::Sad),
    ("💔", Emotion::Sad),
    ("😱", Emotion::Surprised),
    ("😲", Emotion::Surprised),
    ("🤯", Emotion::Surprised),
    ("😨", Emotion::Fearful),
    ("😰", Emotion::Fearful),
    ("😳", Emotion::Fearful),
];

/// Question-tone keywords, also used for sentence boundary bonuses.
pub const QUESTION_WORDS: &[&str] = &[
    "吗", "呢", "为什么", "怎么", "什么", "哪里", "哪个", "谁", "难道", "多少", "是否", "能不能",
    "what", "why", "how", "when", "where", "who", "which",
];

/// Exclamation-tone keywords, also used for sentence boundary bonuses.
pub const EXCLAMATION_WORDS: &[&str] = &[
    "太", "真是", "简直", "绝了", "天哪", "哇", "啊", "呀", "竟然",
    "wow", "amazing", "incredible", "unbelievable",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_display_maps_known_and_passes_through_unknown() {
        assert_eq!(platform_display("telegram"), "Telegram");
        assert_eq!(platform_display("aiocqhttp"), "QQ");
        assert_eq!(platform_display("matrix"), "matrix");
    }

    #[test]
    fn country_display_maps_known_and_passes_through_unknown() {
        assert_eq!(country_display("US"), "美国");
        assert_eq!(country_display("JP"), "日本");
        assert_eq!(country_display("XX"), "XX");
    }

    #[test]
    fn every_emotion_has_keywords() {
        for emotion in crate::types::Emotion::ALL {
            assert!(
                EMOTION_KEYWORDS.iter().any(|(e, kws)| *e == emotion && !kws.is_empty()),
                "missing keywords for {emotion:?}"
            );
        }
    }
}
