//! Gap Analyzer: required company/role skills missing from the résumé.

use crate::analysis::skills::SkillSet;
use crate::reference;

/// Shown when the company/role pair has no configured skill list.
pub const NO_DATA_MESSAGE: &str = "No data found for this company-position combination.";

#[derive(Debug, Clone, PartialEq)]
pub enum GapReport {
    /// Company or role was not selected.
    Skipped,
    /// No (or an empty) required-skill list for the pair.
    NoData,
    /// Required skills absent from the résumé, in table order.
    Missing(Vec<String>),
}

impl GapReport {
    /// Lines for display: the missing skills, the sentinel, or nothing.
    pub fn lines(&self) -> Vec<String> {
        match self {
            GapReport::Skipped => vec![],
            GapReport::NoData => vec![NO_DATA_MESSAGE.to_string()],
            GapReport::Missing(skills) => skills.clone(),
        }
    }
}

/// Looks up the pair in the static table and lists required skills the résumé lacks.
///
/// Membership is exact token membership, so phrase skills such as
/// "System Design" never match the single-word skill set.
pub fn analyze_gaps(company: Option<&str>, role: Option<&str>, resume: &SkillSet) -> GapReport {
    let (company, role) = match (non_blank(company), non_blank(role)) {
        (Some(c), Some(r)) => (c, r),
        _ => return GapReport::Skipped,
    };

    match reference::required_skills(company, role) {
        Some(required) if !required.is_empty() => GapReport::Missing(
            required
                .iter()
                .filter(|skill| !resume.contains(skill))
                .map(|skill| skill.to_string())
                .collect(),
        ),
        _ => GapReport::NoData,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
