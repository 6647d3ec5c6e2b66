//! Skill extraction: longest-match-first scan over normalized text with
//! span consumption, so a matched region can never contribute a second,
//! shorter match.

use std::collections::HashSet;

use regex::Regex;

use crate::catalog::{Catalog, SkillCategory};

/// Ordered, deduplicated skill terms extracted from one document:
/// grouped by [`SkillCategory`] in enum order, alphabetical within a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub terms: Vec<String>,
}

impl Extraction {
    /// Flat `", "`-joined form for tabular storage.
    pub fn joined(&self) -> String {
        self.terms.join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Stateless extractor over one document; holds only a shared read-only
/// catalog reference.
pub struct SkillExtractor<'a> {
    catalog: &'a Catalog,
}

impl<'a> SkillExtractor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        SkillExtractor { catalog }
    }

    /// Scan `normalized_text` for catalog terms. Candidates are tried
    /// longest-first (precomputed order in the catalog); each match
    /// consumes its span so shorter or overlapping candidates cannot
    /// re-match it. Consumed spans are tracked as intervals over the
    /// original text instead of rewriting a working string.
    pub fn extract(&self, normalized_text: &str) -> Extraction {
        if normalized_text.is_empty() {
            return Extraction::default();
        }

        let mut consumed: Vec<(usize, usize)> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); SkillCategory::ALL.len()];

        for pattern in self.catalog.skill_patterns() {
            // The same term can appear under several categories; the first
            // (longest-first, deterministic) hit owns it.
            if seen.contains(pattern.term.as_str()) {
                continue;
            }
            if let Some(span) = first_free_match(&pattern.rule, normalized_text, &consumed) {
                consumed.push(span);
                seen.insert(&pattern.term);
                buckets[pattern.category.index()].push(&pattern.term);
            }
        }

        let mut terms = Vec::new();
        for category in SkillCategory::ALL {
            let bucket = &mut buckets[category.index()];
            bucket.sort_unstable();
            terms.extend(bucket.iter().map(|t| (*t).to_string()));
        }

        Extraction { terms }
    }
}

/// First match of `rule` in `text` that does not overlap any consumed span.
fn first_free_match(rule: &Regex, text: &str, consumed: &[(usize, usize)]) -> Option<(usize, usize)> {
    rule.find_iter(text)
        .map(|m| (m.start(), m.end()))
        .find(|&(start, end)| {
            !consumed
                .iter()
                .any(|&(c_start, c_end)| start < c_end && c_start < end)
        })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogConfig, JobCategoryConfig, SkillGroupConfig};

    fn catalog(groups: &[(SkillCategory, &[&str])]) -> Catalog {
        Catalog::new(CatalogConfig {
            job_categories: vec![JobCategoryConfig {
                name: "QA".into(),
                rank: 0,
                keywords: vec!["qa".into()],
            }],
            skill_groups: groups
                .iter()
                .map(|(category, terms)| SkillGroupConfig {
                    category: *category,
                    terms: terms.iter().map(|t| (*t).to_string()).collect(),
                })
                .collect(),
        })
        .unwrap()
    }

    #[test]
    fn empty_text_yields_empty_result() {
        let catalog = catalog(&[(SkillCategory::Languages, &["python"])]);
        let extraction = SkillExtractor::new(&catalog).extract("");
        assert!(extraction.is_empty());
        assert_eq!(extraction.joined(), "");
    }

    #[test]
    fn longer_term_wins_over_its_prefix() {
        let catalog = catalog(&[(SkillCategory::Languages, &["c", "c++"])]);
        let extraction = SkillExtractor::new(&catalog).extract("c++ developer");
        assert_eq!(extraction.terms, ["c++"]);
    }

    #[test]
    fn matched_span_suppresses_shorter_candidates() {
        let catalog = catalog(&[(SkillCategory::Languages, &["javascript", "js", "java"])]);
        let extraction = SkillExtractor::new(&catalog).extract("javascript developer");
        assert_eq!(extraction.terms, ["javascript"]);
    }

    #[test]
    fn separate_occurrences_still_match() {
        let catalog = catalog(&[(SkillCategory::Languages, &["javascript", "java"])]);
        let extraction = SkillExtractor::new(&catalog).extract("javascript and java developer");
        assert_eq!(extraction.terms, ["java", "javascript"]);
    }

    #[test]
    fn no_whole_word_match_inside_longer_words() {
        let catalog = catalog(&[(SkillCategory::Languages, &["go", "r"])]);
        let extraction = SkillExtractor::new(&catalog).extract("mongodb for developers");
        assert!(extraction.is_empty());
    }

    #[test]
    fn symbol_terms_match_with_interior_spacing() {
        let catalog = catalog(&[(SkillCategory::Languages, &["c++"])]);
        let extraction = SkillExtractor::new(&catalog).extract("знание c + + обязательно");
        assert_eq!(extraction.terms, ["c++"]);
    }

    #[test]
    fn repeated_phrase_is_reported_once() {
        let catalog = catalog(&[(SkillCategory::Languages, &["python"])]);
        let extraction = SkillExtractor::new(&catalog).extract("python python python");
        assert_eq!(extraction.terms, ["python"]);
    }

    #[test]
    fn cross_category_duplicate_is_reported_once() {
        let catalog = catalog(&[
            (SkillCategory::Infrastructure, &["linux"]),
            (SkillCategory::Tools, &["linux"]),
        ]);
        let extraction = SkillExtractor::new(&catalog).extract("linux server and linux desktop");
        assert_eq!(extraction.terms, ["linux"]);
    }

    #[test]
    fn output_groups_by_category_then_alphabetically() {
        let catalog = catalog(&[
            (SkillCategory::Languages, &["python"]),
            (SkillCategory::Databases, &["sql"]),
            (SkillCategory::Infrastructure, &["docker", "kubernetes"]),
        ]);
        let extraction = SkillExtractor::new(&catalog).extract("python sql docker kubernetes");
        assert_eq!(extraction.terms, ["python", "sql", "docker", "kubernetes"]);
    }

    #[test]
    fn alphabetical_sort_is_byte_order() {
        // '#' sorts before '+', so c# comes first within Languages.
        let catalog = catalog(&[(SkillCategory::Languages, &["c++", "c#"])]);
        let extraction = SkillExtractor::new(&catalog).extract("c++ c# developer");
        assert_eq!(extraction.terms, ["c#", "c++"]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let catalog = catalog(&[
            (SkillCategory::Languages, &["python", "go"]),
            (SkillCategory::Tools, &["git"]),
        ]);
        let extractor = SkillExtractor::new(&catalog);
        let a = extractor.extract("python go git");
        let b = extractor.extract("python go git");
        assert_eq!(a, b);
    }

    #[test]
    fn cyrillic_terms_extract_with_word_bounds() {
        let catalog = catalog(&[(SkillCategory::IndustrialIt, &["асутп", "scada"])]);
        let extraction = SkillExtractor::new(&catalog).extract("инженер асутп и scada система");
        assert_eq!(extraction.terms, ["асутп", "scada"]);
    }
}
