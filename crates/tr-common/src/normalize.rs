use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static RE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Matching form shared by every matcher: NFKC, lowercase, trimmed,
/// internal whitespace collapsed to single spaces.
pub fn normalize_text(text: &str) -> String {
    let folded: String = text.nfkc().collect::<String>().to_lowercase();
    RE_WHITESPACE.replace_all(folded.trim(), " ").into_owned()
}

/// `normalize_text` plus a trailing `s` stripped from every word, so
/// "operations managers" and "operation manager" compare equal.
pub fn depluralize(text: &str) -> String {
    normalize_text(text)
        .split(' ')
        .map(|word| {
            if word.len() > 1 {
                word.strip_suffix('s').unwrap_or(word)
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Either string contains the other. Empty strings never match.
pub fn mutual_contains(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// `term` occurs in `text` with no letter or digit directly on either side.
pub fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    text.match_indices(term).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + term.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Needles this short only count as whole words ("sap" must not fire inside "sapient").
pub const SHORT_NEEDLE_LEN: usize = 3;

/// Substring test for longer needles, whole-word test for short ones.
pub fn mentions(text: &str, needle: &str) -> bool {
    if needle.chars().count() <= SHORT_NEEDLE_LEN {
        contains_term(text, needle)
    } else {
        text.contains(needle)
    }
}

/// Splits into lowercase word tokens on anything that is not a letter or digit.
pub fn tokenize(text: &str) -> Vec<String> {
    RE_NON_WORD
        .split(&normalize_text(text))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// "fleet manager" -> "Fleet Manager"
pub fn title_case(text: &str) -> String {
    normalize_text(text)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
