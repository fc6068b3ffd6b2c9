//! The fixed rule battery over structured content facts.
//!
//! Check order is stable because the dashboard displays results in
//! evaluation order; it has no effect on scoring.

use serde::{Deserialize, Serialize};

use crate::report::{Category, QualityReport, Status, ValidationResult};
use ck_domain::text::word_count;
use ck_keywords::keyword_density;

/// Structured description of a content asset. Every field is required;
/// defaulting belongs to the caller, not the validator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFacts {
    pub title: String,
    pub description: String,
    /// Full body text, markup already stripped.
    pub body: String,
    /// First entry is the primary keyword for density scoring.
    pub keywords: Vec<String>,
    pub has_h1: bool,
    pub has_h2: bool,
    #[serde(rename = "hasFAQ")]
    pub has_faq: bool,
    pub has_json_ld: bool,
    pub has_canonical: bool,
    pub has_og_tags: bool,
    pub image_count: usize,
    pub has_alt_texts: bool,
    pub internal_links: usize,
    pub external_links: usize,
}

struct LengthCheck {
    valid: bool,
    length: usize,
    recommendation: Option<&'static str>,
}

/// Title is fine up to 60 chars, tolerated to 70, rejected beyond.
fn check_title(title: &str) -> LengthCheck {
    let length = title.chars().count();
    if length <= 60 {
        LengthCheck {
            valid: true,
            length,
            recommendation: None,
        }
    } else if length <= 70 {
        LengthCheck {
            valid: true,
            length,
            recommendation: Some("Consider shortening slightly"),
        }
    } else {
        LengthCheck {
            valid: false,
            length,
            recommendation: Some("Title too long - max 70 chars"),
        }
    }
}

/// Meta description must land in the 120–160 char window.
fn check_description(description: &str) -> LengthCheck {
    let length = description.chars().count();
    if (120..=160).contains(&length) {
        LengthCheck {
            valid: true,
            length,
            recommendation: None,
        }
    } else if length < 120 {
        LengthCheck {
            valid: false,
            length,
            recommendation: Some("Too short - aim for 120-160 chars"),
        }
    } else {
        LengthCheck {
            valid: false,
            length,
            recommendation: Some("Too long - max 160 chars"),
        }
    }
}

fn pass_fail(ok: bool) -> (Status, u8) {
    if ok {
        (Status::Pass, 10)
    } else {
        (Status::Fail, 0)
    }
}

fn pass_warn(ok: bool) -> (Status, u8) {
    if ok {
        (Status::Pass, 10)
    } else {
        (Status::Warn, 5)
    }
}

/// Evaluate the full rule battery and aggregate into a report.
///
/// Runs 13 checks, or 14 when a primary keyword is available. Never fails
/// for well-formed input.
pub fn evaluate_content(content: &ContentFacts) -> QualityReport {
    let mut results = Vec::with_capacity(14);

    let title = check_title(&content.title);
    results.push(ValidationResult {
        category: Category::Seo,
        item: "Title Length".to_string(),
        status: if title.valid { Status::Pass } else { Status::Fail },
        message: title
            .recommendation
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} chars - optimal", title.length)),
        score: if title.valid { 10 } else { 0 },
    });

    let desc = check_description(&content.description);
    results.push(ValidationResult {
        category: Category::Seo,
        item: "Meta Description".to_string(),
        status: if desc.valid { Status::Pass } else { Status::Fail },
        message: desc
            .recommendation
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} chars - optimal", desc.length)),
        score: if desc.valid { 10 } else { 0 },
    });

    // The 800-1500 pass window, the 800-1200 message, and the score that
    // stays 10 above 1500 reproduce the original rule set as-is.
    let words = word_count(&content.body);
    results.push(ValidationResult {
        category: Category::Content,
        item: "Word Count".to_string(),
        status: if (800..=1500).contains(&words) {
            Status::Pass
        } else {
            Status::Warn
        },
        message: format!("{words} words (target: 800-1200)"),
        score: if words >= 800 { 10 } else { 5 },
    });

    if let Some(primary) = content.keywords.first() {
        let density = keyword_density(&content.body, primary);
        let in_range = (1.0..=2.5).contains(&density);
        let (status, score) = pass_warn(in_range);
        results.push(ValidationResult {
            category: Category::Seo,
            item: "Keyword Density".to_string(),
            status,
            message: format!("{density:.2}% for \"{primary}\" (target: 1-2%)"),
            score,
        });
    }

    let (status, score) = pass_fail(content.has_h1);
    results.push(ValidationResult {
        category: Category::Structure,
        item: "H1 Tag".to_string(),
        status,
        message: if content.has_h1 { "H1 present" } else { "Missing H1" }.to_string(),
        score,
    });

    let (status, score) = pass_warn(content.has_h2);
    results.push(ValidationResult {
        category: Category::Structure,
        item: "H2 Tags".to_string(),
        status,
        message: if content.has_h2 { "H2 tags present" } else { "No H2 tags" }.to_string(),
        score,
    });

    let (status, score) = pass_warn(content.has_faq);
    results.push(ValidationResult {
        category: Category::Aio,
        item: "FAQ Section".to_string(),
        status,
        message: if content.has_faq {
            "FAQ section present"
        } else {
            "Add FAQ for AIO optimization"
        }
        .to_string(),
        score,
    });

    let (status, score) = pass_fail(content.has_json_ld);
    results.push(ValidationResult {
        category: Category::Aio,
        item: "JSON-LD Schema".to_string(),
        status,
        message: if content.has_json_ld {
            "Structured data present"
        } else {
            "Missing JSON-LD schema"
        }
        .to_string(),
        score,
    });

    let (status, score) = pass_fail(content.has_canonical);
    results.push(ValidationResult {
        category: Category::Technical,
        item: "Canonical URL".to_string(),
        status,
        message: if content.has_canonical {
            "Canonical set"
        } else {
            "Missing canonical"
        }
        .to_string(),
        score,
    });

    let (status, score) = pass_warn(content.has_og_tags);
    results.push(ValidationResult {
        category: Category::Technical,
        item: "Open Graph Tags".to_string(),
        status,
        message: if content.has_og_tags {
            "OG tags present"
        } else {
            "Missing social meta tags"
        }
        .to_string(),
        score,
    });

    let (status, score) = pass_warn(content.image_count > 0);
    results.push(ValidationResult {
        category: Category::Content,
        item: "Images".to_string(),
        status,
        message: format!("{} images", content.image_count),
        score,
    });

    let (status, score) = pass_fail(content.has_alt_texts);
    results.push(ValidationResult {
        category: Category::Accessibility,
        item: "Alt Texts".to_string(),
        status,
        message: if content.has_alt_texts {
            "All images have alt text"
        } else {
            "Missing alt texts"
        }
        .to_string(),
        score,
    });

    let (status, score) = pass_warn(content.internal_links >= 2);
    results.push(ValidationResult {
        category: Category::Seo,
        item: "Internal Links".to_string(),
        status,
        message: format!("{} internal links (min 2 recommended)", content.internal_links),
        score,
    });

    let (status, score) = pass_warn(content.external_links >= 1);
    results.push(ValidationResult {
        category: Category::Seo,
        item: "External Links".to_string(),
        status,
        message: format!("{} external links", content.external_links),
        score,
    });

    QualityReport::from_results(results)
}
