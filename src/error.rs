use thiserror::Error;

use crate::catalog::SkillCategory;

/// Catalog defects detected at construction time. The engine refuses to
/// start on any of these rather than silently classifying everything as
/// "Other" or extracting nothing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog defines no job categories")]
    NoJobCategories,

    #[error("catalog defines no skill terms")]
    NoSkillTerms,

    #[error("priority rank {rank} is assigned more than once (second holder: {category:?})")]
    DuplicateRank { rank: u32, category: String },

    #[error("job category {0:?} is defined more than once")]
    DuplicateCategoryName(String),

    #[error("job category {category:?} has no keywords")]
    NoKeywords { category: String },

    #[error("job category {category:?} contains a blank keyword")]
    BlankKeyword { category: String },

    #[error("skill group {category} contains a blank term")]
    BlankSkillTerm { category: SkillCategory },

    #[error("skill term {term:?} listed twice under {category}")]
    DuplicateSkillTerm {
        category: SkillCategory,
        term: String,
    },

    #[error("cannot build match rule for skill term {term:?}")]
    BadSkillTerm {
        term: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid catalog json")]
    Json(#[from] serde_json::Error),
}
