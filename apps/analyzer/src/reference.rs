//! Compiled-in reference data: canned job descriptions and the company/role
//! required-skill table. Neither is editable at runtime.

/// Used when the form has no description and the role has no canned one.
pub const NO_DESCRIPTION: &str = "No description available for this role.";

/// Canned job descriptions keyed by role, in form display order.
pub const JOB_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Software Engineer",
        "We are looking for a Software Engineer skilled in Python, Django, web development, and teamwork.",
    ),
    (
        "Data Scientist",
        "Join our data team to build machine learning models, perform data analysis, and create visualizations.",
    ),
    (
        "Frontend Developer",
        "Seeking a creative Frontend Developer skilled in HTML, CSS, JavaScript, React, and UI/UX design.",
    ),
    (
        "Backend Developer",
        "Looking for a Backend Developer experienced with Flask, Node.js, SQL databases, and API integration.",
    ),
    (
        "AI Engineer",
        "Hiring an AI Engineer to develop NLP models, recommendation systems, and AI-driven solutions.",
    ),
];

/// Company → role → required skills (ordered).
pub const COMPANY_SKILLS: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Google",
        &[
            (
                "Software Engineer",
                &["Python", "Data Structures", "System Design", "Cloud Computing", "Machine Learning"],
            ),
            (
                "Data Scientist",
                &["Machine Learning", "Statistics", "Python", "TensorFlow", "BigQuery"],
            ),
        ],
    ),
    (
        "Microsoft",
        &[
            (
                "Software Engineer",
                &["Azure", "C#", "Cloud Computing", "Problem Solving", "System Design"],
            ),
            (
                "Data Scientist",
                &["Azure ML", "Data Analysis", "Power BI", "Python", "Statistics"],
            ),
        ],
    ),
    (
        "Amazon",
        &[
            (
                "Software Engineer",
                &["AWS", "Java", "Leadership Principles", "Data Structures", "System Design"],
            ),
            (
                "Data Scientist",
                &["AWS", "Data Pipelines", "Machine Learning", "Python", "Big Data"],
            ),
        ],
    ),
];

/// Company names offered on the form.
pub fn companies() -> Vec<&'static str> {
    COMPANY_SKILLS.iter().map(|(company, _)| *company).collect()
}

/// Job roles offered on the form.
pub fn job_roles() -> Vec<&'static str> {
    JOB_DESCRIPTIONS.iter().map(|(role, _)| *role).collect()
}

pub fn job_description_for(role: &str) -> Option<&'static str> {
    JOB_DESCRIPTIONS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, description)| *description)
}

/// Required skills for a company/role pair, or `None` when the pair is not configured.
pub fn required_skills(company: &str, role: &str) -> Option<&'static [&'static str]> {
    COMPANY_SKILLS
        .iter()
        .find(|(c, _)| *c == company)
        .and_then(|(_, roles)| roles.iter().find(|(r, _)| *r == role))
        .map(|(_, skills)| *skills)
}

/// Picks the description to analyze: the submitted text if it has content,
/// otherwise the canned one for the role.
pub fn resolve_job_description(submitted: &str, role: &str) -> String {
    if submitted.trim().is_empty() {
        job_description_for(role).unwrap_or(NO_DESCRIPTION).to_string()
    } else {
        submitted.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_skills_known_pair() {
        let skills = required_skills("Google", "Software Engineer").unwrap();
        assert_eq!(skills[0], "Python");
        assert_eq!(skills.len(), 5);
    }

    #[test]
    fn test_required_skills_unknown_pair() {
        assert!(required_skills("Google", "AI Engineer").is_none());
        assert!(required_skills("Initech", "Software Engineer").is_none());
    }

    #[test]
    fn test_every_table_role_has_a_description() {
        for (_, roles) in COMPANY_SKILLS {
            for (role, _) in *roles {
                assert!(job_description_for(role).is_some(), "missing {role}");
            }
        }
    }

    #[test]
    fn test_resolve_job_description_prefers_submitted_text() {
        assert_eq!(resolve_job_description("Need Rust", "AI Engineer"), "Need Rust");
    }

    #[test]
    fn test_resolve_job_description_falls_back_to_canned() {
        let jd = resolve_job_description("  ", "Frontend Developer");
        assert!(jd.contains("React"));
    }

    #[test]
    fn test_resolve_job_description_unknown_role() {
        assert_eq!(resolve_job_description("", "Astronaut"), NO_DESCRIPTION);
    }

    #[test]
    fn test_form_lists() {
        assert_eq!(companies(), vec!["Google", "Microsoft", "Amazon"]);
        assert_eq!(job_roles().len(), 5);
    }
}
