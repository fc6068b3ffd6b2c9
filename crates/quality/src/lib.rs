//! Content quality validation for SEO and AIO.
//!
//! Two entry points produce the same [`QualityReport`]:
//! - [`evaluate_content`], the primary contract, over structured
//!   [`ContentFacts`] supplied by the caller;
//! - [`evaluate_rendered_markup`], a lower-confidence path that derives
//!   the same facts from raw markup with regex heuristics first.
//!
//! Both are total for well-formed input: out-of-range metrics lower the
//! score, they never error.

pub mod checks;
pub mod markup;
pub mod report;

pub use checks::{evaluate_content, ContentFacts};
pub use markup::{evaluate_rendered_markup, MarkupMetadata};
pub use report::{Category, QualityReport, Status, Summary, ValidationResult};
