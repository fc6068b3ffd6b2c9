//! Seed-content briefs.
//!
//! Turns already-extracted seed text (fetching and DOM stripping happen
//! upstream) into a compact brief the generation system can write from:
//! bullet points, number-bearing statements with a best-effort date, and
//! entities. Also the originality guard that keeps generated output from
//! quoting its seeds verbatim.

use regex::Regex;
use serde::{Deserialize, Serialize};

use ck_domain::text::has_verbatim_match;
use ck_keywords::extract_entities;

/// A number-bearing statement lifted from seed text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedStat {
    pub statement: String,
    pub source: Option<String>,
    pub date: Option<String>,
}

/// Compact working brief for one seed source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedBrief {
    pub title: Option<String>,
    pub url: Option<String>,
    pub text: String,
    pub bullets: Vec<String>,
    pub stats: Vec<SeedStat>,
    pub entities: Vec<String>,
}

const MAX_SENTENCES: usize = 50;
const MAX_BULLETS: usize = 10;
const MAX_STATS: usize = 6;

/// Minimum verbatim span (after whitespace normalization) treated as a
/// copy of the seed.
pub const ORIGINALITY_SPAN: usize = 75;

/// Build a brief from seed text. Deterministic and heuristic throughout:
/// sentence boundaries are punctuation splits, dates are pattern matches.
pub fn quick_brief(seed_text: &str, url: Option<&str>) -> SeedBrief {
    let sentences: Vec<&str> = seed_text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > 20)
        .take(MAX_SENTENCES)
        .collect();

    let bullets = sentences
        .iter()
        .take(MAX_BULLETS)
        .map(|s| s.to_string())
        .collect();

    let stats = sentences
        .iter()
        .filter(|s| s.chars().any(|c| c.is_ascii_digit()))
        .take(MAX_STATS)
        .map(|s| SeedStat {
            statement: s.to_string(),
            source: url.map(str::to_string),
            date: extract_date(s),
        })
        .collect();

    SeedBrief {
        title: None,
        url: url.map(str::to_string),
        text: seed_text.to_string(),
        bullets,
        stats,
        entities: extract_entities(seed_text),
    }
}

/// Best-effort date capture: "Month Day, Year" first, then a bare year.
pub fn extract_date(text: &str) -> Option<String> {
    let patterns = [
        r"\b[A-Z][a-z]+\s+\d{1,2},?\s+\d{4}\b", // Month Day, Year
        r"\b20\d{2}\b",                         // 20xx year
        r"\b\d{4}\b",                           // any year
    ];
    for pattern in patterns {
        let re = Regex::new(pattern).expect("date regex");
        if let Some(m) = re.find(text) {
            return Some(m.as_str().to_string());
        }
    }
    None
}

/// Merge several briefs into one working set.
pub fn combine_briefs(briefs: &[SeedBrief]) -> SeedBrief {
    let mut entities: Vec<String> = Vec::new();
    for brief in briefs {
        for entity in &brief.entities {
            if !entities.contains(entity) {
                entities.push(entity.clone());
                if entities.len() == 30 {
                    break;
                }
            }
        }
        if entities.len() == 30 {
            break;
        }
    }

    SeedBrief {
        title: None,
        url: briefs.first().and_then(|b| b.url.clone()),
        text: briefs
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"),
        bullets: briefs
            .iter()
            .flat_map(|b| b.bullets.iter().cloned())
            .take(15)
            .collect(),
        stats: briefs
            .iter()
            .flat_map(|b| b.stats.iter().cloned())
            .take(10)
            .collect(),
        entities,
    }
}

/// Originality guard: false when the generated text carries any
/// [`ORIGINALITY_SPAN`]-char span verbatim from the seed.
pub fn enforce_originality(generated: &str, seed: &str) -> bool {
    if has_verbatim_match(generated, seed, ORIGINALITY_SPAN) {
        tracing::warn!("originality check failed: verbatim match detected");
        return false;
    }
    true
}
