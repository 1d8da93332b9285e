//! PDF rendering with `printpdf` builtin fonts. Single US-letter page; the
//! content is short enough that pagination is not needed.

use std::fmt::Write as _;

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};

use cogniscreen_core::scoring::RiskLevel;

use crate::content::{ReportContent, FOOTER_CONFIDENTIAL, FOOTER_PLATFORM};
use crate::error::ReportError;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 20.0;
const BODY_WRAP_CHARS: usize = 95;

fn tier_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Rgb(Rgb::new(0.09, 0.64, 0.29, None)),
        RiskLevel::Moderate => Color::Rgb(Rgb::new(0.98, 0.45, 0.09, None)),
        RiskLevel::High => Color::Rgb(Rgb::new(0.86, 0.15, 0.15, None)),
    }
}

/// Greedy word wrap; `printpdf` draws text runs, it does not reflow.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
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

struct PageWriter {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn line(&mut self, text: &str, size: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= size * 0.55;
    }

    fn paragraph(&mut self, text: &str, size: f32) {
        for line in wrap(text, BODY_WRAP_CHARS) {
            self.line(&line, size, false);
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }
}

pub fn render(report: &ReportContent) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) = PdfDocument::new(
        report.title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let mut page = PageWriter {
        layer: doc.get_page(page).get_layer(layer),
        regular,
        bold,
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    page.line(report.title, 22.0, true);
    page.gap(4.0);
    page.paragraph(report.disclaimer, 8.0);
    page.gap(6.0);

    page.line("Patient Information", 14.0, true);
    page.gap(1.0);
    page.line(&format!("Name: {}", report.patient.name), 11.0, false);
    page.line(&format!("Email: {}", report.patient.email), 11.0, false);
    page.line(&format!("Test Date: {}", report.patient.test_date), 11.0, false);
    page.line(
        &format!("Assessment ID: {}", report.patient.assessment_id),
        11.0,
        false,
    );
    page.gap(6.0);

    page.line("Overall Assessment Results", 14.0, true);
    page.gap(1.0);
    page.line(
        &format!("Overall Cognitive Score: {}/100", report.overall_score),
        13.0,
        true,
    );
    page.layer.set_fill_color(tier_color(report.risk_level));
    page.line(&format!("Risk Level: {}", report.risk_level), 13.0, true);
    page.layer
        .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    page.gap(6.0);

    page.line("Detailed Test Results", 14.0, true);
    page.gap(1.0);
    for row in &report.detail_rows {
        let mut text = String::new();
        let _ = write!(text, "{}: {} ({})", row.domain, row.metric, row.detail);
        page.line(&text, 11.0, false);
    }
    page.gap(6.0);

    page.line("Clinical Recommendations", 14.0, true);
    page.gap(1.0);
    page.paragraph(report.recommendation, 10.0);
    page.gap(8.0);

    page.line(&format!("Report Generated: {}", report.generated_at), 8.0, true);
    page.line(FOOTER_PLATFORM, 8.0, false);
    page.line(FOOTER_CONFIDENTIAL, 8.0, false);

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    tracing::debug!(bytes = bytes.len(), "rendered assessment pdf");
    Ok(bytes)
}
