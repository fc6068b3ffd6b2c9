//! SEO / AIO / GEO keyword expansion.
//!
//! Deterministic generators: given a topic and a region they expand into
//! keyword variations, local-search phrases, AI-Overview questions,
//! entities, and hashtags. Every function is pure: same input, same
//! output, same order.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Full keyword expansion for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSet {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub local: Vec<String>,
    pub entities: Vec<String>,
    pub questions: Vec<String>,
}

/// Modifiers applied to a base phrase, in output order.
const MODIFIERS: &[&str] = &[
    "best",
    "top",
    "guide",
    "how to",
    "tips",
    "solutions",
    "services",
    "company",
];

/// Default hashtag cap when the caller has no opinion.
pub const DEFAULT_HASHTAG_MAX: usize = 10;

/// Cap on extracted entities.
const MAX_ENTITIES: usize = 25;

/// Base phrase plus each modifier as prefix then suffix: 17 variants.
pub fn keyword_variations(base: &str) -> Vec<String> {
    let mut variations = vec![base.to_string()];
    for modifier in MODIFIERS {
        variations.push(format!("{modifier} {base}"));
        variations.push(format!("{base} {modifier}"));
    }
    variations
}

/// Local-search phrases for a topic in a "City, State" region.
///
/// Only the part before the first comma is used as the city.
pub fn local_keywords(topic: &str, region: &str) -> Vec<String> {
    let city = region.split(',').next().unwrap_or("").trim();

    vec![
        format!("{topic} {city}"),
        format!("{topic} near me"),
        format!("{topic} in {city}"),
        format!("best {topic} {city}"),
        format!("local {topic}"),
        format!("{city} {topic} services"),
        format!("{city} {topic} company"),
    ]
}

/// Question phrasings AI-generated search summaries tend to surface.
pub fn aio_questions(topic: &str) -> Vec<String> {
    vec![
        format!("What is {topic}?"),
        format!("How does {topic} work?"),
        format!("Why is {topic} important?"),
        format!("When should you use {topic}?"),
        format!("What are the benefits of {topic}?"),
        format!("How much does {topic} cost?"),
        format!("What are the best {topic} solutions?"),
        format!("How to choose {topic}?"),
    ]
}

/// Capitalized-word runs treated as entities: first-seen order, deduped,
/// capped at 25. A heuristic, not named-entity recognition.
pub fn extract_entities(text: &str) -> Vec<String> {
    let re = Regex::new(r"[A-Z][a-z]+(?:\s[A-Z][a-z]+)*").expect("entity regex");
    let mut seen = Vec::new();
    for m in re.find_iter(text) {
        let candidate = m.as_str();
        if !seen.iter().any(|s| s == candidate) {
            seen.push(candidate.to_string());
            if seen.len() == MAX_ENTITIES {
                break;
            }
        }
    }
    seen
}

/// Percentage of the text's words occupied by exact occurrences of the
/// keyword's word sequence. Case-insensitive, no stemming.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let lowered_text = text.to_lowercase();
    let lowered_keyword = keyword.to_lowercase();
    let words: Vec<&str> = lowered_text.split_whitespace().collect();
    let keyword_words: Vec<&str> = lowered_keyword.split_whitespace().collect();

    if words.is_empty() || keyword_words.is_empty() || keyword_words.len() > words.len() {
        return 0.0;
    }

    let mut count = 0;
    for window in words.windows(keyword_words.len()) {
        if window == keyword_words.as_slice() {
            count += 1;
        }
    }

    count as f64 / words.len() as f64 * 100.0
}

/// Hashtags from keywords: strip punctuation and whitespace, prefix `#`,
/// keep only tags of 3..=29 characters, de-duplicate preserving
/// first-seen order, cap at `max_count`.
pub fn generate_hashtags(keywords: &[String], max_count: usize) -> Vec<String> {
    let mut hashtags: Vec<String> = Vec::new();
    for keyword in keywords {
        let cleaned: String = keyword
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        let tag = format!("#{cleaned}");
        let len = tag.chars().count();
        if len > 2 && len < 30 && !hashtags.contains(&tag) {
            hashtags.push(tag);
            if hashtags.len() == max_count {
                break;
            }
        }
    }
    hashtags
}

/// Assemble the full keyword set for a topic.
pub fn build_keyword_set(topic: &str, region: &str, additional: &[String]) -> KeywordSet {
    let mut primary = vec![topic.to_string()];
    primary.extend(additional.iter().cloned());

    KeywordSet {
        primary,
        secondary: keyword_variations(topic),
        local: local_keywords(topic, region),
        entities: extract_entities(topic),
        questions: aio_questions(topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variations_count_and_order() {
        let v = keyword_variations("hvac repair");
        assert_eq!(v.len(), 17);
        assert_eq!(v[0], "hvac repair");
        assert_eq!(v[1], "best hvac repair");
        assert_eq!(v[2], "hvac repair best");
        assert_eq!(v[15], "company hvac repair");
        assert_eq!(v[16], "hvac repair company");
    }

    #[test]
    fn local_keywords_use_city_before_comma() {
        let local = local_keywords("plumbing", "Austin, TX");
        assert_eq!(local.len(), 7);
        assert_eq!(local[0], "plumbing Austin");
        assert_eq!(local[2], "plumbing in Austin");
        assert_eq!(local[6], "Austin plumbing company");
    }

    #[test]
    fn aio_questions_substitute_topic() {
        let questions = aio_questions("solar panels");
        assert_eq!(questions.len(), 8);
        assert_eq!(questions[0], "What is solar panels?");
        assert_eq!(questions[7], "How to choose solar panels?");
    }

    #[test]
    fn entities_first_seen_deduped() {
        let entities = extract_entities("Acme Corp hired Jane Doe. Acme Corp grew.");
        assert_eq!(entities, vec!["Acme Corp", "Jane Doe"]);
    }

    #[test]
    fn entities_capped_at_25() {
        let text = ('A'..='Z')
            .map(|c| format!("{c}lpha{c}"))
            .collect::<Vec<_>>()
            .join(" lowercase ");
        assert!(extract_entities(&text).len() <= 25);
    }

    #[test]
    fn density_exact_word_sequence() {
        let d = keyword_density("the cat sat on the mat the cat ran", "cat");
        assert!((d - 2.0 / 9.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn density_multi_word_keyword() {
        let d = keyword_density("big data tools for big data teams", "big data");
        assert!((d - 2.0 / 7.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn density_empty_text_is_zero() {
        assert_eq!(keyword_density("", "cat"), 0.0);
        assert_eq!(keyword_density("some text", ""), 0.0);
    }

    #[test]
    fn hashtags_strip_and_filter() {
        let keywords = vec![
            "HVAC Pro!".to_string(),
            "AI & ML".to_string(),
            "x".to_string(),
        ];
        assert_eq!(
            generate_hashtags(&keywords, DEFAULT_HASHTAG_MAX),
            vec!["#HVACPro", "#AIML"]
        );
    }

    #[test]
    fn hashtags_dedupe_before_cap() {
        let keywords = vec![
            "rust lang".to_string(),
            "Rust Lang".to_string(),
            "rustlang".to_string(),
        ];
        // "Rust Lang" collapses to a distinct tag; the exact duplicate of
        // an earlier tag would be dropped without consuming the cap.
        let tags = generate_hashtags(&keywords, 2);
        assert_eq!(tags, vec!["#rustlang", "#RustLang"]);
    }

    #[test]
    fn keyword_set_assembles_all_parts() {
        let set = build_keyword_set(
            "HVAC Repair",
            "Denver, CO",
            &["furnace service".to_string()],
        );
        assert_eq!(set.primary, vec!["HVAC Repair", "furnace service"]);
        assert_eq!(set.secondary.len(), 17);
        assert_eq!(set.local.len(), 7);
        assert_eq!(set.questions.len(), 8);
        assert_eq!(set.entities, vec!["Repair"]);
    }
}
