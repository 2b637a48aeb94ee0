//! Keyword containment with a boundary rule for single-character keywords.
//!
//! A one-character keyword like "哭" must not match inside an unrelated
//! multi-character CJK word, so it only counts when the neighbouring
//! characters are non-CJK (or the string boundary). Longer keywords use
//! plain substring containment.

/// Case-insensitive keyword containment test. Pure function.
pub fn contains_word(haystack: &str, keyword: &str) -> bool {
    let hay = haystack.to_lowercase();
    let kw = keyword.to_lowercase();

    let mut chars = kw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(single), None) => single_char_match(&hay, single),
        _ => hay.contains(&kw),
    }
}

/// Single-character match with non-CJK boundary on both sides.
fn single_char_match(hay: &str, target: char) -> bool {
    let chars: Vec<char> = hay.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != target {
            continue;
        }
        let before_ok = i == 0 || !is_cjk(chars[i - 1]);
        let after_ok = i + 1 == chars.len() || !is_cjk(chars[i + 1]);
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

/// CJK ranges: unified ideographs (+ ext A), kana, hangul syllables.
fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{3040}'..='\u{30FF}'
            | '\u{AC00}'..='\u{D7AF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_char_is_plain_substring() {
        assert!(contains_word("今天很开心啊", "开心"));
        assert!(contains_word("I am HAPPY today", "happy"));
        assert!(!contains_word("平静的一天", "开心"));
    }

    #[test]
    fn single_char_rejected_inside_cjk_word() {
        // "好" embedded between CJK characters must not match
        assert!(!contains_word("你好吗", "好"));
        assert!(!contains_word("你好", "好"));
    }

    #[test]
    fn single_char_accepted_at_boundary() {
        assert!(contains_word("好", "好"));
        assert!(contains_word("好!", "好"));
        assert!(contains_word("abc好def", "好"));
        assert!(contains_word("真的, 哭 了", "哭"));
    }

    #[test]
    fn single_char_multiple_occurrences() {
        // first occurrence embedded, second at a boundary
        assert!(contains_word("别大哭了, 哭!", "哭"));
        assert!(!contains_word("别大哭了", "哭"));
    }

    #[test]
    fn empty_keyword_never_matches() {
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn case_insensitive() {
        assert!(contains_word("WOW that is Great", "great"));
    }
}
