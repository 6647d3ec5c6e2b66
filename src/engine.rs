//! Composition root: wires the catalog into the classifier and the skill
//! extractor and exposes one per-posting call.

use crate::catalog::Catalog;
use crate::classify::{Classification, Classifier};
use crate::normalize::Normalizer;
use crate::skills::SkillExtractor;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Raw per-posting text as handed over by the ingestion pipeline. The
/// description is expected in normalized form; the title is raw.
#[derive(Debug, Clone, Default)]
pub struct Posting {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Per-posting output: one role category plus the extracted skill list.
/// The caller merges this into its own record alongside company, salary,
/// URL and city fields, which this crate never touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyAnalysis {
    /// Job-category name, or [`crate::OTHER`].
    pub category: String,
    /// Winning classification score, for diagnostics.
    pub category_score: u32,
    /// Distinct skill terms in catalog output order.
    pub skills: Vec<String>,
}

impl VacancyAnalysis {
    /// Flat `", "`-joined skill list for tabular export.
    pub fn skills_joined(&self) -> String {
        self.skills.join(", ")
    }
}

/// Owns the validated catalog and the external normalizer. Safe to share
/// across threads: every call is pure over read-only state.
pub struct Engine {
    catalog: Catalog,
    normalizer: Box<dyn Normalizer>,
}

impl Engine {
    pub fn new(catalog: Catalog, normalizer: Box<dyn Normalizer>) -> Self {
        Engine {
            catalog,
            normalizer,
        }
    }

    /// Engine over the builtin hh.ru dictionaries.
    pub fn with_builtin(normalizer: Box<dyn Normalizer>) -> Self {
        Engine::new(Catalog::builtin().clone(), normalizer)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classify one posting and extract its skills. The title is raw and
    /// is normalized through the configured normalizer; the description
    /// must already be normalized. Missing fields degrade to empty text.
    pub fn process(
        &self,
        raw_title: Option<&str>,
        normalized_description: Option<&str>,
    ) -> VacancyAnalysis {
        let Classification { category, score } = Classifier::new(&self.catalog, self.normalizer.as_ref())
            .classify(raw_title, normalized_description);
        let extraction =
            SkillExtractor::new(&self.catalog).extract(normalized_description.unwrap_or(""));

        VacancyAnalysis {
            category,
            category_score: score,
            skills: extraction.terms,
        }
    }

    /// Process a batch of postings; output order matches input order.
    #[cfg(feature = "rayon")]
    pub fn process_batch(&self, postings: &[Posting]) -> Vec<VacancyAnalysis> {
        postings
            .par_iter()
            .map(|p| self.process(p.title.as_deref(), p.description.as_deref()))
            .collect()
    }

    /// Process a batch of postings; output order matches input order.
    #[cfg(not(feature = "rayon"))]
    pub fn process_batch(&self, postings: &[Posting]) -> Vec<VacancyAnalysis> {
        postings
            .iter()
            .map(|p| self.process(p.title.as_deref(), p.description.as_deref()))
            .collect()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogConfig, JobCategoryConfig, SkillCategory, SkillGroupConfig};
    use crate::classify::OTHER;
    use std::sync::Arc;

    fn test_engine() -> Engine {
        let catalog = Catalog::new(CatalogConfig {
            job_categories: vec![
                JobCategoryConfig {
                    name: "QA".into(),
                    rank: 0,
                    keywords: vec!["qa".into(), "тест".into()],
                },
                JobCategoryConfig {
                    name: "Software Development".into(),
                    rank: 1,
                    keywords: vec!["backend".into(), "developer".into()],
                },
            ],
            skill_groups: vec![
                SkillGroupConfig {
                    category: SkillCategory::Languages,
                    terms: vec!["python".into(), "c++".into()],
                },
                SkillGroupConfig {
                    category: SkillCategory::Databases,
                    terms: vec!["sql".into()],
                },
            ],
        })
        .unwrap();
        Engine::new(
            catalog,
            Box::new(|s: &str| s.to_lowercase().replace(['-', '/'], " ")),
        )
    }

    #[test]
    fn process_combines_classification_and_extraction() {
        let engine = test_engine();
        let result = engine.process(Some("Backend developer"), Some("python sql опыт"));
        assert_eq!(result.category, "Software Development");
        assert_eq!(result.category_score, 20);
        assert_eq!(result.skills, ["python", "sql"]);
        assert_eq!(result.skills_joined(), "python, sql");
    }

    #[test]
    fn missing_fields_produce_other_and_no_skills() {
        let engine = test_engine();
        let result = engine.process(None, None);
        assert_eq!(result.category, OTHER);
        assert_eq!(result.category_score, 0);
        assert!(result.skills.is_empty());
    }

    #[test]
    fn batch_preserves_input_order() {
        let engine = test_engine();
        let postings = vec![
            Posting {
                title: Some("QA engineer".into()),
                description: None,
            },
            Posting {
                title: Some("Backend developer".into()),
                description: Some("python".into()),
            },
            Posting::default(),
        ];
        let results = engine.process_batch(&postings);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].category, "QA");
        assert_eq!(results[1].category, "Software Development");
        assert_eq!(results[2].category, OTHER);
    }

    #[test]
    fn concurrent_calls_agree() {
        let engine = Arc::new(test_engine());
        let expected = engine.process(Some("Backend developer"), Some("python sql c++"));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                let expected = expected.clone();
                std::thread::spawn(move || {
                    let got = engine.process(Some("Backend developer"), Some("python sql c++"));
                    assert_eq!(got, expected);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
