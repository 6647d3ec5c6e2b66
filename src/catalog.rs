//! Immutable keyword catalogs: job categories with priority ranks, and
//! skill terms grouped into ordered categories. Built once at process
//! start, validated up front, then shared read-only by every call.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data;
use crate::error::CatalogError;

/// Grouping bucket for extracted skills. The declared order here is the
/// output order of extraction results and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Infrastructure,
    Tools,
    Methodologies,
    Security,
    DataEngineering,
    IndustrialIt,
    BusinessAnalytics,
    EngineeringSoftware,
    AiMl,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 12] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Infrastructure,
        SkillCategory::Tools,
        SkillCategory::Methodologies,
        SkillCategory::Security,
        SkillCategory::DataEngineering,
        SkillCategory::IndustrialIt,
        SkillCategory::BusinessAnalytics,
        SkillCategory::EngineeringSoftware,
        SkillCategory::AiMl,
    ];

    /// Position in the fixed output order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Databases => "Databases",
            SkillCategory::Infrastructure => "Infrastructure",
            SkillCategory::Tools => "Tools",
            SkillCategory::Methodologies => "Methodologies",
            SkillCategory::Security => "Security",
            SkillCategory::DataEngineering => "Data Engineering",
            SkillCategory::IndustrialIt => "Industrial IT",
            SkillCategory::BusinessAnalytics => "Business Analytics",
            SkillCategory::EngineeringSoftware => "Engineering Software",
            SkillCategory::AiMl => "AI/ML",
        };
        f.write_str(name)
    }
}

/// Serde-facing catalog shape. Keyword phrases and skill terms must already
/// be lowercase; they are matched against normalizer output verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub job_categories: Vec<JobCategoryConfig>,
    pub skill_groups: Vec<SkillGroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCategoryConfig {
    pub name: String,
    /// Unique tie-break rank; lower ranks are checked and preferred first.
    pub rank: u32,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroupConfig {
    pub category: SkillCategory,
    pub terms: Vec<String>,
}

/// One job category as held by a validated catalog.
#[derive(Debug, Clone)]
pub struct JobCategory {
    name: String,
    rank: u32,
    keywords: Vec<String>,
}

impl JobCategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// A skill term with its precompiled match rule.
#[derive(Debug, Clone)]
pub(crate) struct SkillPattern {
    pub(crate) term: String,
    pub(crate) category: SkillCategory,
    pub(crate) rule: Regex,
}

/// Validated, immutable catalog pair. Job categories are stored in
/// ascending rank order; skill patterns are stored in scan order
/// (longest term first).
#[derive(Debug, Clone)]
pub struct Catalog {
    job_categories: Vec<JobCategory>,
    skill_patterns: Vec<SkillPattern>,
}

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(data::builtin_config()).expect("builtin catalog is valid"));

impl Catalog {
    /// Validate a config and build the catalog. Any structural defect is
    /// rejected here, once, instead of surfacing later as bogus output.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        if config.job_categories.is_empty() {
            return Err(CatalogError::NoJobCategories);
        }

        if let Some(dup) = config.job_categories.iter().duplicates_by(|c| c.rank).next() {
            return Err(CatalogError::DuplicateRank {
                rank: dup.rank,
                category: dup.name.clone(),
            });
        }
        if let Some(dup) = config
            .job_categories
            .iter()
            .duplicates_by(|c| c.name.clone())
            .next()
        {
            return Err(CatalogError::DuplicateCategoryName(dup.name.clone()));
        }

        for cat in &config.job_categories {
            if cat.keywords.is_empty() {
                return Err(CatalogError::NoKeywords {
                    category: cat.name.clone(),
                });
            }
            if cat.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(CatalogError::BlankKeyword {
                    category: cat.name.clone(),
                });
            }
        }

        let mut job_categories: Vec<JobCategory> = config
            .job_categories
            .into_iter()
            .map(|c| JobCategory {
                name: c.name,
                rank: c.rank,
                keywords: c.keywords,
            })
            .collect();
        job_categories.sort_by_key(|c| c.rank);

        let mut skill_patterns = Vec::new();
        for group in &config.skill_groups {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in &group.terms {
                if term.trim().is_empty() {
                    return Err(CatalogError::BlankSkillTerm {
                        category: group.category,
                    });
                }
                if !seen.insert(term.as_str()) {
                    return Err(CatalogError::DuplicateSkillTerm {
                        category: group.category,
                        term: term.clone(),
                    });
                }
                let rule = compile_rule(term).map_err(|source| CatalogError::BadSkillTerm {
                    term: term.clone(),
                    source,
                })?;
                skill_patterns.push(SkillPattern {
                    term: term.clone(),
                    category: group.category,
                    rule,
                });
            }
        }
        if skill_patterns.is_empty() {
            return Err(CatalogError::NoSkillTerms);
        }

        // Longest term first so "c++" is tried before "c"; ties broken by
        // term then category index to keep the scan fully deterministic.
        skill_patterns.sort_by(|a, b| {
            b.term
                .chars()
                .count()
                .cmp(&a.term.chars().count())
                .then_with(|| a.term.cmp(&b.term))
                .then_with(|| a.category.index().cmp(&b.category.index()))
        });

        debug!(
            job_categories = job_categories.len(),
            skill_terms = skill_patterns.len(),
            "catalog validated"
        );

        Ok(Catalog {
            job_categories,
            skill_patterns,
        })
    }

    /// Parse a catalog from its JSON representation and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    /// The default catalog: the hh.ru dictionaries shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Job categories in ascending rank order.
    pub fn job_categories(&self) -> &[JobCategory] {
        &self.job_categories
    }

    pub(crate) fn skill_patterns(&self) -> &[SkillPattern] {
        &self.skill_patterns
    }

    pub fn skill_term_count(&self) -> usize {
        self.skill_patterns.len()
    }
}

/// Build the match rule for one skill term.
///
/// Symbol-bearing terms ("c++", ".net", "ci/cd") get a rule that tolerates
/// optional whitespace between every character, so a spaced-out "c + +"
/// still matches. Plain terms get a whole-token rule; `\b` in the regex
/// crate is Unicode-aware, so Cyrillic terms bound correctly too.
fn compile_rule(term: &str) -> Result<Regex, regex::Error> {
    let has_symbol = term
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let pattern = if has_symbol {
        let mut p = String::new();
        for (i, c) in term.chars().enumerate() {
            if i > 0 {
                p.push_str(r"\s*");
            }
            p.push_str(&regex::escape(&c.to_string()));
        }
        p
    } else {
        format!(r"\b{}\b", regex::escape(term))
    };

    Regex::new(&pattern)
}

// ── Tests ──
