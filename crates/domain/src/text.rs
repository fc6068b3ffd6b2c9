//! Plain-text utilities for content generation and review.
//!
//! All functions operate on characters (not bytes) so multi-byte input
//! never panics on a slice boundary.

use regex::Regex;

/// Truncate to `max_len` characters, cutting back to the last word
/// boundary when possible and appending `...`.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len).collect();
    match truncated.rfind(' ') {
        Some(pos) if pos > 0 => format!("{}...", &truncated[..pos]),
        _ => format!("{}...", truncated),
    }
}

/// URL-safe slug: lowercase, strip punctuation, collapse separators to `-`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = Regex::new(r"[^A-Za-z0-9_\s-]")
        .expect("slug strip regex")
        .replace_all(lowered.trim(), "");
    let collapsed = Regex::new(r"[\s_-]+")
        .expect("slug collapse regex")
        .replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Extract the first `count` sentences (terminated by `.`, `!` or `?`).
pub fn extract_sentences(text: &str, count: usize) -> String {
    let re = Regex::new(r"[^.!?]+[.!?]+").expect("sentence regex");
    let joined: Vec<&str> = re.find_iter(text).take(count).map(|m| m.as_str()).collect();
    joined.join(" ").trim().to_string()
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Originality guard: true if any `min_length`-char span of `text1`
/// (whitespace-normalized, lowercased) appears verbatim in `text2`.
pub fn has_verbatim_match(text1: &str, text2: &str, min_length: usize) -> bool {
    let n1 = normalize_ws(text1);
    let n2 = normalize_ws(text2);

    let boundaries: Vec<usize> = n1.char_indices().map(|(i, _)| i).collect();
    let total = boundaries.len();
    if total < min_length {
        return false;
    }
    for start in 0..=(total - min_length) {
        let begin = boundaries[start];
        let end = if start + min_length < total {
            boundaries[start + min_length]
        } else {
            n1.len()
        };
        if n2.contains(&n1[begin..end]) {
            return true;
        }
    }
    false
}

/// Character-presence similarity percentage between two texts.
///
/// Not an edit distance: each character of the shorter text scores if it
/// occurs anywhere in the longer one. Cheap signal for near-duplicate
/// detection, nothing more.
pub fn similarity(text1: &str, text2: &str) -> f64 {
    let normalize = |s: &str| -> String {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
    };
    let s1 = normalize(text1);
    let s2 = normalize(text2);

    let (longer, shorter) = if s1.chars().count() > s2.chars().count() {
        (&s1, &s2)
    } else {
        (&s2, &s1)
    };

    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 100.0;
    }

    let matches = shorter.chars().filter(|c| longer.contains(*c)).count();
    matches as f64 / longer_len as f64 * 100.0
}

/// Remove markup tags, leaving text content.
pub fn strip_html(html: &str) -> String {
    Regex::new(r"<[^>]*>")
        .expect("tag strip regex")
        .replace_all(html, "")
        .to_string()
}

const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "of", "on", "or", "the", "to", "with",
];

/// Headline-style capitalization: every word upper-cased except minor
/// words, which stay lowercase unless they lead the title.
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index == 0 || !MINOR_WORDS.contains(&word) {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an integer with thousands separators: 1234567 -> "1,234,567".
pub fn format_number(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if num < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Excerpt: strip markup, keep the first two sentences, truncate.
pub fn excerpt(text: &str, max_length: usize) -> String {
    let stripped = strip_html(text);
    let first_sentences = extract_sentences(&stripped, 2);
    truncate(&first_sentences, max_length)
}
