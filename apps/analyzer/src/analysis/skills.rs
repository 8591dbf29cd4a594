//! Skill Extractor: the capitalized-word heuristic.
//!
//! Any token made of one uppercase ASCII letter followed by one or more letters
//! counts as a skill. Multi-word terms are not recognized: "Machine Learning"
//! yields `Machine` and `Learning`. Proper nouns and sentence-initial words are
//! known false positives.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static CAPITALIZED_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-zA-Z]+\b").expect("valid skill regex"));

/// Deduplicated set of extracted skill tokens. Iterates in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn is_subset(&self, other: &SkillSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Returns every distinct capitalized word in `text`.
pub fn extract_skills(text: &str) -> SkillSet {
    CAPITALIZED_WORD_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_capitalized_words() {
        let skills = extract_skills("Seeking a Python Developer with AWS and Docker skills");
        let expected: SkillSet = ["Python", "Developer", "AWS", "Docker", "Seeking"]
            .into_iter()
            .collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_single_capital_letters_are_ignored() {
        let skills = extract_skills("I know C and R");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_multi_word_terms_split() {
        let skills = extract_skills("Machine Learning");
        assert!(skills.contains("Machine"));
        assert!(skills.contains("Learning"));
        assert!(!skills.contains("Machine Learning"));
    }

    #[test]
    fn test_lowercase_start_not_extracted() {
        let skills = extract_skills("python docker iOS");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = extract_skills("Rust Rust Rust, Go and Rust");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Worked with Kubernetes, Terraform and Kubernetes operators at Acme.";
        let once = extract_skills(text);
        let joined = once.iter().collect::<Vec<_>>().join(" ");
        assert_eq!(extract_skills(&joined), once);
        assert_eq!(extract_skills(text), once);
    }

    #[test]
    fn test_intersection_and_subset() {
        let a = extract_skills("Python Docker Rust");
        let b = extract_skills("Python Docker Kafka");
        let both = a.intersection(&b);
        assert_eq!(both.to_vec(), vec!["Docker".to_string(), "Python".to_string()]);
        assert!(both.is_subset(&a));
        assert!(both.is_subset(&b));
    }
}
