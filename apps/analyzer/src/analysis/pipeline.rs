//! End-to-end analysis: extract → skills → match → grammar → gaps → summary → artifacts.
//!
//! Both artifacts are rendered in memory before either is written, and storage
//! keeps the pair together, so a failed request never leaves a chart or report behind.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::analysis::gaps::{analyze_gaps, GapReport};
use crate::analysis::matching::{match_skills, MatchResult};
use crate::analysis::skills::extract_skills;
use crate::analysis::summary::compose_summary;
use crate::errors::AppError;
use crate::extract::DocumentExtractor;
use crate::grammar::GrammarChecker;
use crate::reference::resolve_job_description;
use crate::report::chart::render_chart_svg;
use crate::report::document::{render_report, ReportContent};
use crate::storage::Storage;

/// One submitted form.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub document: Bytes,
    pub company: String,
    pub job_role: String,
    /// Blank means "use the canned description for `job_role`".
    pub job_description: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub job_role: String,
    pub company: String,
    pub match_result: MatchResult,
    pub grammar_errors: usize,
    pub gaps: GapReport,
    pub summary: String,
    pub chart_file: String,
    pub report_file: String,
    pub generated_at: DateTime<Utc>,
}

pub async fn run_analysis(
    input: AnalysisInput,
    extractor: &dyn DocumentExtractor,
    grammar: &dyn GrammarChecker,
    storage: &Storage,
) -> Result<AnalysisReport, AppError> {
    let AnalysisInput {
        document,
        company,
        job_role,
        job_description,
    } = input;

    let upload_id = storage.save_upload(&document).await?;
    let resume_text = extractor.extract_text(document).await?;

    let job_description = resolve_job_description(&job_description, &job_role);
    let resume_skills = extract_skills(&resume_text);
    let jd_skills = extract_skills(&job_description);
    let match_result = match_skills(&resume_skills, &jd_skills);

    let grammar_errors = grammar.count_issues(&resume_text).await?;

    let gaps = analyze_gaps(Some(&company), Some(&job_role), &resume_skills);
    let summary = compose_summary(
        &job_role,
        &company,
        match_result.score,
        &match_result.matched_skills,
        grammar_errors,
    );

    let generated_at = Utc::now();
    let chart = render_chart_svg(match_result.score)?;
    let report = render_report(ReportContent {
        summary: summary.clone(),
        score: match_result.score,
        grammar_errors,
        matched_skills: match_result.matched_skills.to_vec(),
        generated_at,
    })
    .await?;
    let (chart_file, report_file) = storage.store_artifacts(chart.as_bytes(), &report).await?;

    info!(
        %upload_id,
        resume_skills = resume_skills.len(),
        jd_skills = jd_skills.len(),
        score = match_result.score,
        grammar_errors,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        job_role,
        company,
        match_result,
        grammar_errors,
        gaps,
        summary,
        chart_file,
        report_file,
        generated_at,
    })
}
