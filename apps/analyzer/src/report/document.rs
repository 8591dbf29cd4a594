//! PDF analysis report rendered with `printpdf` builtin fonts.
//!
//! Layout: A4 portrait, 20mm margins, Helvetica. Body lines paginate when the
//! matched-skill list runs past the bottom margin.

use anyhow::Context;
use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::analysis::matching::format_score;
use crate::errors::AppError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_MM: f32 = 7.0;
const TITLE_PT: f32 = 16.0;
const BODY_PT: f32 = 11.0;
/// Characters per wrapped body line at `BODY_PT` across the text width.
const WRAP_COLUMNS: usize = 90;
const TITLE: &str = "Resume Analysis Report";

/// Everything the report shows.
#[derive(Debug, Clone)]
pub struct ReportContent {
    pub summary: String,
    pub score: f64,
    pub grammar_errors: usize,
    pub matched_skills: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Renders the report on the blocking pool.
pub async fn render_report(content: ReportContent) -> Result<Vec<u8>, AppError> {
    let bytes = tokio::task::spawn_blocking(move || render_report_pdf(&content))
        .await
        .context("report render task failed")??;
    Ok(bytes)
}

pub fn render_report_pdf(content: &ReportContent) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(
        TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_err)?;

    let first_layer = doc.get_page(page).get_layer(layer);
    let mut cursor = PageCursor::new(&doc, first_layer);

    // Title, roughly centred using Helvetica's ~0.5em average glyph width.
    let title_width_mm = TITLE.len() as f32 * TITLE_PT * 0.5 * 0.3528;
    cursor.layer.use_text(
        TITLE,
        TITLE_PT,
        Mm((PAGE_WIDTH_MM - title_width_mm) / 2.0),
        Mm(cursor.y),
        &bold,
    );
    cursor.advance(LINE_MM * 2.0);

    cursor.line(
        &format!("Generated: {}", content.generated_at.format("%Y-%m-%d %H:%M UTC")),
        &regular,
    );
    cursor.advance(LINE_MM / 2.0);

    cursor.line("Summary:", &bold);
    for line in wrap(&content.summary, WRAP_COLUMNS) {
        cursor.line(&line, &regular);
    }
    cursor.advance(LINE_MM / 2.0);

    cursor.line(
        &format!("Skill Match Score: {}%", format_score(content.score)),
        &regular,
    );
    cursor.line(
        &format!("Grammar Errors: {}", content.grammar_errors),
        &regular,
    );
    cursor.advance(LINE_MM / 2.0);

    cursor.line("Matched Skills:", &bold);
    if content.matched_skills.is_empty() {
        cursor.line("(none)", &regular);
    }
    for skill in &content.matched_skills {
        cursor.line(&format!("- {skill}"), &regular);
    }

    doc.save_to_bytes().map_err(render_err)
}

/// Tracks the write position and opens a new page when the bottom margin is reached.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn line(&mut self, text: &str, font: &IndirectFontRef) {
        if self.y < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.layer
            .use_text(latin1(text), BODY_PT, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= LINE_MM;
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }
}

fn render_err(e: printpdf::Error) -> AppError {
    AppError::Render(format!("PDF generation failed: {e}"))
}

/// Builtin PDF fonts only cover Latin-1; anything else becomes '?'.
fn latin1(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) < 0x100 { c } else { '?' })
        .collect()
}

/// Greedy word wrap. Words longer than `columns` get a line of their own.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(skills: usize) -> ReportContent {
        ReportContent {
            summary: "Based on your resume and the selected Software Engineer position at Google, \
                      you have a skill match score of 50.0%."
                .to_string(),
            score: 50.0,
            grammar_errors: 2,
            matched_skills: (0..skills).map(|i| format!("Skill{i}")).collect(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_wrap_respects_columns() {
        let lines = wrap("alpha beta gamma delta epsilon", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta", "epsilon"]);
        assert!(lines.iter().all(|l| l.len() <= 11));
    }

    #[test]
    fn test_wrap_long_word_and_empty() {
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_latin1_replaces_wide_chars() {
        assert_eq!(latin1("Résumé → PDF"), "Résumé ? PDF");
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_report_pdf(&content(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_skill_list_paginates() {
        let short = render_report_pdf(&content(1)).unwrap();
        let long = render_report_pdf(&content(120)).unwrap();
        assert!(long.len() > short.len());
    }

    #[tokio::test]
    async fn test_render_report_on_blocking_pool() {
        let bytes = render_report(content(2)).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
