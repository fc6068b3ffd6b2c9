//! Heuristic fact derivation from rendered markup.
//!
//! Regex inspection, not a parser: it can under- or over-count on
//! malformed input. Callers who need precision supply [`ContentFacts`]
//! to [`evaluate_content`](crate::evaluate_content) directly; this path
//! exists for quick review-screen scoring of already-rendered output.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checks::{evaluate_content, ContentFacts};
use crate::report::QualityReport;
use ck_domain::text::strip_html;

/// Metadata accompanying raw markup. Missing fields evaluate as empty,
/// which the corresponding checks then flag.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MarkupMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Derive [`ContentFacts`] from markup and run the standard rule battery.
pub fn evaluate_rendered_markup(html: &str, metadata: &MarkupMetadata) -> QualityReport {
    let has_h1 = Regex::new(r"<h1[^>]*>").expect("h1 regex").is_match(html);
    let has_h2 = Regex::new(r"<h2[^>]*>").expect("h2 regex").is_match(html);
    let has_faq = Regex::new(r"(?i)faq").expect("faq regex").is_match(html);
    let has_json_ld = Regex::new(r#"<script[^>]*type="application/ld\+json""#)
        .expect("json-ld regex")
        .is_match(html);
    let has_canonical = Regex::new(r#"<link[^>]*rel="canonical""#)
        .expect("canonical regex")
        .is_match(html);
    let has_og_tags = Regex::new(r#"<meta[^>]*property="og:"#)
        .expect("og regex")
        .is_match(html);

    let image_count = Regex::new(r"<img").expect("img regex").find_iter(html).count();
    let alt_count = Regex::new(r#"alt=""#).expect("alt regex").find_iter(html).count();
    let has_alt_texts = image_count > 0 && alt_count == image_count;

    let internal_links = Regex::new(r#"<a[^>]*href="/[^"]*""#)
        .expect("internal link regex")
        .find_iter(html)
        .count();
    let external_links = Regex::new(r#"<a[^>]*href="https?://[^"]*""#)
        .expect("external link regex")
        .find_iter(html)
        .count();

    evaluate_content(&ContentFacts {
        title: metadata.title.clone().unwrap_or_default(),
        description: metadata.description.clone().unwrap_or_default(),
        body: strip_html(html),
        keywords: metadata.keywords.clone().unwrap_or_default(),
        has_h1,
        has_h2,
        has_faq,
        has_json_ld,
        has_canonical,
        has_og_tags,
        image_count,
        has_alt_texts,
        internal_links,
        external_links,
    })
}
