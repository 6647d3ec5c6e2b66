//! Role classification: score every job category against the posting title,
//! fall back to the description only when the title matched nothing, and
//! break ties by priority rank.

use tracing::debug;

use crate::catalog::{Catalog, JobCategory};
use crate::normalize::Normalizer;

/// Weight per distinct keyword matched in the title pass.
pub const TITLE_WEIGHT: u32 = 10;
/// Weight per distinct keyword matched in the description fallback pass.
pub const DESCRIPTION_WEIGHT: u32 = 1;
/// Sentinel returned when no category matched at all.
pub const OTHER: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Winning job-category name, or [`OTHER`].
    pub category: String,
    /// The winning score, kept for diagnostics and tests. 0 for [`OTHER`].
    pub score: u32,
}

/// Stateless classifier over one posting. Holds only shared read-only
/// references, so it is cheap to build per call.
pub struct Classifier<'a> {
    catalog: &'a Catalog,
    normalizer: &'a dyn Normalizer,
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a Catalog, normalizer: &'a dyn Normalizer) -> Self {
        Classifier {
            catalog,
            normalizer,
        }
    }

    /// Classify one posting. The title is raw and goes through the
    /// normalizer; the description must already be normalized. Missing
    /// input degrades to empty text, never to an error.
    pub fn classify(
        &self,
        raw_title: Option<&str>,
        normalized_description: Option<&str>,
    ) -> Classification {
        let title = raw_title
            .map(|t| self.normalizer.normalize(t))
            .unwrap_or_default();

        let categories = self.catalog.job_categories();
        let mut scores = vec![0u32; categories.len()];

        score_pass(categories, &title, TITLE_WEIGHT, &mut scores);

        if scores.iter().all(|&s| s == 0) {
            let description = normalized_description.unwrap_or("");
            debug!(title = %title, "title pass empty, falling back to description");
            score_pass(categories, description, DESCRIPTION_WEIGHT, &mut scores);
        }

        // Categories are stored in ascending rank order; replacing the best
        // only on a strictly greater score hands ties to the lowest rank.
        let mut best_idx = 0;
        for (idx, &score) in scores.iter().enumerate() {
            if score > scores[best_idx] {
                best_idx = idx;
            }
        }

        if scores[best_idx] == 0 {
            return Classification {
                category: OTHER.to_string(),
                score: 0,
            };
        }

        Classification {
            category: categories[best_idx].name().to_string(),
            score: scores[best_idx],
        }
    }
}

/// Add `weight` per distinct keyword contained in `text`. Each keyword
/// contributes at most once no matter how often it occurs.
fn score_pass(categories: &[JobCategory], text: &str, weight: u32, scores: &mut [u32]) {
    if text.is_empty() {
        return;
    }
    for (idx, category) in categories.iter().enumerate() {
        for keyword in category.keywords() {
            if text.contains(keyword.as_str()) {
                scores[idx] += weight;
            }
        }
    }
}

// ── Tests ──
