use crate::lexicon::{EMOJI_EMOTIONS, EMOTION_KEYWORDS};
use crate::matcher::contains_word;
use crate::types::Emotion;

/// Bonus added for the first (and only the first) emoji hit.
const EMOJI_BONUS: f32 = 2.0;

/// A winning label below this score collapses to neutral.
const SCORE_THRESHOLD: f32 = 0.5;

/// Classify the emotion of a message text.
///
/// Scores each label from emoji and keyword hits, then picks the strictly
/// highest score. Exact ties prefer any non-neutral label; a winner below
/// the threshold collapses to neutral.
pub fn classify(text: &str) -> Emotion {
    if text.trim().is_empty() {
        return Emotion::Neutral;
    }

    let mut scores = [0.0f32; Emotion::ALL.len()];

    // Emoji pass: first table-order hit scores, then stop.
    for (emoji, emotion) in EMOJI_EMOTIONS {
        if text.contains(emoji) {
            scores[index_of(*emotion)] += EMOJI_BONUS;
            break;
        }
    }

    // Keyword pass: every keyword of every label is checked, no early exit.
    for (emotion, keywords) in EMOTION_KEYWORDS {
        let idx = index_of(*emotion);
        for keyword in *keywords {
            if contains_word(text, keyword) {
                scores[idx] += 1.0;
            }
        }
    }

    let mut winner = Emotion::ALL[0];
    let mut best = scores[0];
    for (i, &emotion) in Emotion::ALL.iter().enumerate().skip(1) {
        let score = scores[i];
        // Strict improvement wins; on exact tie only a non-neutral label
        // may displace neutral.
        if score > best || (score == best && winner == Emotion::Neutral && emotion != Emotion::Neutral)
        {
            winner = emotion;
            best = score;
        }
    }

    if best < SCORE_THRESHOLD {
        winner = Emotion::Neutral;
    }

    tracing::debug!(emotion = winner.as_str(), score = best, "emotion classified");
    winner
}

fn index_of(emotion: Emotion) -> usize {
    Emotion::ALL
        .iter()
        .position(|e| *e == emotion)
        .unwrap_or(Emotion::ALL.len() - 1)
}
