//! Quality report model: one result per rule, aggregated to a 0-100 score.

use serde::{Deserialize, Serialize};

/// Which aspect of the content a rule inspects.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "SEO")]
    Seo,
    Content,
    Structure,
    #[serde(rename = "AIO")]
    Aio,
    Technical,
    Accessibility,
}

/// Outcome of one rule evaluation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

/// A single rule evaluation. Created once, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub category: Category,
    pub item: String,
    pub status: Status,
    pub message: String,
    /// Rule weight contribution, 0..=10.
    pub score: u8,
}

/// Pass/warn/fail counts across a report.
///
/// Invariant: `passes + warnings + failures == results.len()`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub passes: usize,
    pub warnings: usize,
    pub failures: usize,
}

/// Aggregated validation report. `results` keeps evaluation order; the
/// dashboard renders them as listed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    /// `round(100 × Σscore / (10 × results.len()))`.
    pub overall_score: u8,
    pub results: Vec<ValidationResult>,
    pub summary: Summary,
}

impl QualityReport {
    /// Aggregate rule results into a report. Order is preserved.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let passes = results.iter().filter(|r| r.status == Status::Pass).count();
        let warnings = results.iter().filter(|r| r.status == Status::Warn).count();
        let failures = results.iter().filter(|r| r.status == Status::Fail).count();

        let total: u32 = results.iter().map(|r| u32::from(r.score)).sum();
        let max = results.len() as u32 * 10;
        let overall_score = if max == 0 {
            0
        } else {
            (f64::from(total) / f64::from(max) * 100.0).round() as u8
        };

        Self {
            overall_score,
            results,
            summary: Summary {
                passes,
                warnings,
                failures,
            },
        }
    }
}
