//! HTML form and analysis result pages.

use askama::Template;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::{run_analysis, AnalysisInput, AnalysisReport};
use crate::errors::AppError;
use crate::reference;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    companies: Vec<&'static str>,
    job_roles: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    score: String,
    errors: usize,
    skills: Vec<String>,
    summary: String,
    chart: String,
    report: String,
    companyname: String,
    missing_company_skills: Vec<String>,
}

impl From<AnalysisReport> for ResultTemplate {
    fn from(report: AnalysisReport) -> Self {
        ResultTemplate {
            score: report.match_result.display_score(),
            errors: report.grammar_errors,
            skills: report.match_result.matched_skills.to_vec(),
            missing_company_skills: report.gaps.lines(),
            summary: report.summary,
            chart: format!("/charts/{}", report.chart_file),
            report: report.report_file,
            companyname: report.company,
        }
    }
}

/// GET /
///
/// Upload form with the known companies and job roles.
pub async fn handle_form() -> Result<Html<String>, AppError> {
    let page = IndexTemplate {
        companies: reference::companies(),
        job_roles: reference::job_roles(),
    };
    render(&page)
}

/// POST /
///
/// Multipart fields: `resume` (file), `companyname`, `jobrole`, `jobdescription`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let input = read_form(multipart).await?;
    let report = run_analysis(
        input,
        state.extractor.as_ref(),
        state.grammar.as_ref(),
        &state.storage,
    )
    .await?;
    render(&ResultTemplate::from(report))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalysisInput, AppError> {
    let mut document: Option<Bytes> = None;
    let mut company = String::new();
    let mut job_role = String::new();
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                // Logged only; stored uploads are always renamed.
                let client_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                if !data.is_empty() {
                    info!(client_name = %client_name, bytes = data.len(), "Received resume upload");
                    document = Some(data);
                }
            }
            "companyname" => company = read_text(field).await?,
            "jobrole" => job_role = read_text(field).await?,
            "jobdescription" => job_description = read_text(field).await?,
            _ => {}
        }
    }

    let document = document.ok_or(AppError::NoFile)?;
    Ok(AnalysisInput {
        document,
        company: company.trim().to_string(),
        job_role: job_role.trim().to_string(),
        job_description,
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

/// Over-limit bodies keep their 413; every other malformed form is a 400.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

fn render(page: &impl Template) -> Result<Html<String>, AppError> {
    page.render()
        .map(Html)
        .map_err(|e| AppError::Render(format!("template render failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_lists_companies_and_roles() {
        let Html(html) = handle_form().await.unwrap();
        assert!(html.contains("Google"));
        assert!(html.contains("Amazon"));
        assert!(html.contains("Frontend Developer"));
        assert!(html.contains(r#"name="jobdescription""#));
    }

    #[test]
    fn test_result_page_escapes_user_input() {
        let page = ResultTemplate {
            score: "50.0".to_string(),
            errors: 2,
            skills: vec!["Docker".to_string(), "Python".to_string()],
            summary: "summary".to_string(),
            chart: "/charts/x.svg".to_string(),
            report: "x.pdf".to_string(),
            companyname: "<script>alert(1)</script>".to_string(),
            missing_company_skills: vec!["System Design".to_string()],
        };
        let html = page.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("/download/x.pdf"));
        assert!(html.contains("System Design"));
        assert!(html.contains("50.0%"));
    }
}
