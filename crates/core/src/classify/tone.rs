use crate::lexicon::{EXCLAMATION_WORDS, QUESTION_WORDS};
use crate::matcher::contains_word;
use crate::types::Tone;

/// Weight per question/exclamation mark.
const MARK_WEIGHT: f32 = 2.0;

/// Sentence-ending punctuation, ASCII and full-width.
const SENTENCE_ENDS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Classify the tone of a message text.
///
/// Combines punctuation counts, keyword hits and sentence-boundary bonuses;
/// when both question and exclamation signals are independently strong the
/// result is a compound label ordered by the larger score.
pub fn classify(text: &str) -> Tone {
    if text.trim().is_empty() {
        return Tone::Statement;
    }

    let question_marks = text.chars().filter(|c| *c == '?' || *c == '？').count();
    let exclamation_marks = text.chars().filter(|c| *c == '!' || *c == '！').count();

    let mut question = MARK_WEIGHT * question_marks as f32;
    let mut exclamation = MARK_WEIGHT * exclamation_marks as f32;

    for word in QUESTION_WORDS {
        if contains_word(text, word) {
            question += 1.0;
        }
    }
    for word in EXCLAMATION_WORDS {
        if contains_word(text, word) {
            exclamation += 1.0;
        }
    }

    let sentences: Vec<&str> = text
        .split(SENTENCE_ENDS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(first) = sentences.first() {
        let first = first.to_lowercase();
        if QUESTION_WORDS.iter().any(|w| first.starts_with(w)) {
            question += 2.0;
        }
        if EXCLAMATION_WORDS.iter().any(|w| first.starts_with(w)) {
            exclamation += 2.0;
        }
    }
    if let Some(last) = sentences.last() {
        let last = last.to_lowercase();
        if QUESTION_WORDS.iter().any(|w| last.ends_with(w)) {
            question += 1.0;
        }
        if EXCLAMATION_WORDS.iter().any(|w| last.ends_with(w)) {
            exclamation += 1.0;
        }
    }

    // Compound override: both signals independently significant.
    let compound = (question >= 2.0 && exclamation >= 2.0)
        || (question >= 3.0 && exclamation >= 1.0)
        || (exclamation >= 3.0 && question >= 1.0);
    let tone = if compound {
        if exclamation > question {
            Tone::ExclamationQuestion
        } else {
            Tone::QuestionExclamation
        }
    } else if question > exclamation && question > 0.0 {
        Tone::Question
    } else if exclamation > question && exclamation > 0.0 {
        Tone::Exclamation
    } else if question > 0.0 {
        // question == exclamation, both weak; question-first ordering
        Tone::Question
    } else {
        Tone::Statement
    };

    tracing::debug!(
        tone = tone.as_str(),
        question_score = question,
        exclamation_score = exclamation,
        "tone classified"
    );
    tone
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_statement() {
        assert_eq!(classify(""), Tone::Statement);
        assert_eq!(classify("  \n"), Tone::Statement);
    }

    #[test]
    fn plain_text_is_statement() {
        assert_eq!(classify("今天下雨了"), Tone::Statement);
    }

    #[test]
    fn question_marks_win() {
        assert_eq!(classify("在吗?"), Tone::Question);
        assert_eq!(classify("去哪里？"), Tone::Question);
    }

    #[test]
    fn exclamation_marks_win() {
        assert_eq!(classify("快跑!"), Tone::Exclamation);
        assert_eq!(classify("冲！"), Tone::Exclamation);
    }

    #[test]
    fn keyword_only_question() {
        // "为什么" hits the lexicon without any punctuation
        assert_eq!(classify("为什么这样"), Tone::Question);
    }

    #[test]
    fn two_of_each_mark_is_compound() {
        // 2 question marks (4.0) and 2 exclamation marks (4.0), nothing else:
        // compound with tie → question-first ordering
        assert_eq!(classify("x?? yy!!"), Tone::QuestionExclamation);
    }

    #[test]
    fn compound_orders_by_larger_score() {
        // 1 question mark (2.0) vs 2 exclamation marks (4.0)
        assert_eq!(classify("x? y!!"), Tone::ExclamationQuestion);
        // 2 question marks vs 1 exclamation mark
        assert_eq!(classify("x?? y!"), Tone::QuestionExclamation);
    }

    #[test]
    fn full_width_marks_count() {
        assert_eq!(classify("真的吗？！"), Tone::QuestionExclamation);
    }

    #[test]
    fn leading_question_word_bonus() {
        // no punctuation; "什么" keyword (+1) plus first-sentence bonus (+2)
        assert_eq!(classify("什么情况"), Tone::Question);
    }
}
