//! Matcher/Scorer: overlap between résumé and job-description skill sets.

use crate::analysis::skills::SkillSet;

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matched_skills: SkillSet,
    /// Percentage of job-description skills present in the résumé, 0 – 100, two decimals.
    pub score: f64,
}

impl MatchResult {
    /// Score as shown to users: whole numbers keep one decimal (`50.0`).
    pub fn display_score(&self) -> String {
        format_score(self.score)
    }
}

/// `matched = R ∩ J`, `score = round(100 × |matched| / |J|, 2)`.
/// An empty job-description set scores 0 whatever the résumé contains.
pub fn match_skills(resume: &SkillSet, job_description: &SkillSet) -> MatchResult {
    let matched_skills = resume.intersection(job_description);
    debug_assert!(matched_skills.is_subset(resume) && matched_skills.is_subset(job_description));

    let score = if job_description.is_empty() {
        0.0
    } else {
        round_2(100.0 * matched_skills.len() as f64 / job_description.len() as f64)
    };

    MatchResult {
        matched_skills,
        score,
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}
