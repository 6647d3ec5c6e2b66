//! Deterministic classification of job postings into role categories and
//! extraction of recognized technology terms from posting text.
//!
//! The crate is a pure library boundary: callers feed it normalized
//! (lowercased, punctuation-folded, lemmatized) text produced by an external
//! normalizer, and get back one role category plus an ordered, deduplicated
//! skill list per posting. There is no network, file, or CLI surface here.
//!
//! ```
//! use hh_classifier::{Engine, Passthrough};
//!
//! let engine = Engine::with_builtin(Box::new(Passthrough));
//! let result = engine.process(Some("python backend developer"), None);
//! assert_eq!(result.category, "Software Development");
//! ```

pub mod catalog;
pub mod classify;
mod data;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod skills;

pub use catalog::{Catalog, CatalogConfig, JobCategory, SkillCategory};
pub use classify::{Classification, Classifier, OTHER};
pub use engine::{Engine, Posting, VacancyAnalysis};
pub use error::CatalogError;
pub use normalize::{Normalizer, Passthrough};
pub use skills::{Extraction, SkillExtractor};
