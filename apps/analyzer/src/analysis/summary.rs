use crate::analysis::matching::format_score;
use crate::analysis::skills::SkillSet;

/// Builds the one-sentence personalized summary shown on the result page and in the report.
pub fn compose_summary(
    job_role: &str,
    company: &str,
    score: f64,
    matched: &SkillSet,
    grammar_errors: usize,
) -> String {
    let strengths = matched.iter().collect::<Vec<_>>().join(", ");
    format!(
        "Based on your resume and the selected {job_role} position at {company}, \
         you have a skill match score of {}%. You demonstrate strengths in {strengths}. \
         We recommend improving grammatical correctness, as {grammar_errors} issues were detected.",
        format_score(score)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_embeds_all_fields() {
        let matched: SkillSet = ["Python", "Docker"].into_iter().collect();
        let summary = compose_summary("Software Engineer", "Google", 50.0, &matched, 3);
        assert_eq!(
            summary,
            "Based on your resume and the selected Software Engineer position at Google, \
             you have a skill match score of 50.0%. You demonstrate strengths in Docker, Python. \
             We recommend improving grammatical correctness, as 3 issues were detected."
        );
    }

    #[test]
    fn test_summary_with_no_matches_or_selection() {
        let summary = compose_summary("", "", 0.0, &SkillSet::default(), 0);
        assert!(summary.contains("score of 0.0%"));
        assert!(summary.contains("strengths in ."));
        assert!(summary.contains("as 0 issues"));
    }
}
