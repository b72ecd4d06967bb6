//! PDF report assembly.
//!
//! The report is laid out in two steps: [`build_sections`] turns the session
//! values into an ordered list of text sections, and [`assemble`] renders those
//! sections plus the risk-factor chart into a paginated A4 document. Values the
//! user never computed are rendered as placeholders.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use printpdf::image_crate::GenericImageView;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tracing::info;

use crate::patient::{PatientInput, SymptomSet};
use crate::scores::RiskLevel;

pub const REPORT_FILE_NAME: &str = "report.pdf";
pub const REPORT_TITLE: &str = "Heart Disease & Symptom Detection Report";
pub const NOT_ASSESSED: &str = "Not assessed";
pub const NOT_ASSESSED_EXPLANATION: &str = "Not Assessed: No risk assessment was run in this session. Run the risk assessment to receive an explanation of your risk level.";

pub const HEADING_RISK_EXPLANATION: &str = "Heart Disease Risk Level Explanation:";
pub const HEADING_SYMPTOMS: &str = "Selected Symptoms:";
pub const HEADING_CONDITIONS: &str = "Possible Conditions:";
pub const HEADING_VISUALIZATION: &str = "Risk Factor Visualization:";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 10.0;
const MARGIN_TOP_MM: f32 = 10.0;
const MARGIN_BOTTOM_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const GAP_MM: f32 = 10.0;
const FONT_SIZE: f32 = 12.0;
const IMAGE_WIDTH_MM: f32 = 180.0;
const IMAGE_OFFSET_MM: f32 = 10.0;
// Helvetica averages about half an em per glyph.
const GLYPH_WIDTH_EM: f32 = 0.5;
const PT_TO_MM: f32 = 0.352_778;

/// Everything the assembler reads. Optional fields are the values a session
/// may not have computed yet.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub patient: &'a PatientInput,
    pub risk: Option<RiskLevel>,
    pub symptoms: &'a SymptomSet,
    pub conditions: Option<&'a [String]>,
    pub chart_image: &'a Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Title,
    Identity,
    RiskLevel,
    RiskExplanation,
    Symptoms,
    Conditions,
    Visualization,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub path: PathBuf,
    pub pages: usize,
    pub sections: Vec<ReportSection>,
}

impl ReportArtifact {
    pub fn headings(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| s.heading.as_deref())
            .collect()
    }
}

pub fn build_sections(input: &ReportInput<'_>) -> Vec<ReportSection> {
    let patient = input.patient;
    let risk_value = input.risk.map(RiskLevel::as_str).unwrap_or(NOT_ASSESSED);
    let explanation = input
        .risk
        .map(RiskLevel::explanation)
        .unwrap_or(NOT_ASSESSED_EXPLANATION);

    vec![
        ReportSection {
            kind: SectionKind::Title,
            heading: Some(REPORT_TITLE.to_string()),
            lines: Vec::new(),
        },
        ReportSection {
            kind: SectionKind::Identity,
            heading: None,
            lines: vec![
                format!("Name: {}", patient.name),
                format!("Date of Check: {}", patient.date_of_check),
                format!("Age: {}", patient.age),
                format!("Sex: {}", patient.sex),
            ],
        },
        ReportSection {
            kind: SectionKind::RiskLevel,
            heading: None,
            lines: vec![format!("Heart Disease Risk Level: {}", risk_value)],
        },
        ReportSection {
            kind: SectionKind::RiskExplanation,
            heading: Some(HEADING_RISK_EXPLANATION.to_string()),
            lines: vec![explanation.to_string()],
        },
        ReportSection {
            kind: SectionKind::Symptoms,
            heading: Some(HEADING_SYMPTOMS.to_string()),
            lines: input.symptoms.iter().map(|s| format!("- {}", s)).collect(),
        },
        ReportSection {
            kind: SectionKind::Conditions,
            heading: Some(HEADING_CONDITIONS.to_string()),
            lines: input
                .conditions
                .unwrap_or_default()
                .iter()
                .map(|c| format!("- {}", c))
                .collect(),
        },
        ReportSection {
            kind: SectionKind::Visualization,
            heading: Some(HEADING_VISUALIZATION.to_string()),
            lines: Vec::new(),
        },
    ]
}

/// Writes the report to `path`, replacing any earlier file there.
pub fn assemble(path: &Path, input: &ReportInput<'_>) -> Result<ReportArtifact> {
    let sections = build_sections(input);
    let mut page = PageWriter::new(REPORT_TITLE)?;

    for section in &sections {
        match section.kind {
            SectionKind::Title => {
                if let Some(title) = &section.heading {
                    page.centered(title);
                }
                page.gap();
            }
            SectionKind::Identity => {
                for line in &section.lines {
                    page.cell(line);
                }
            }
            SectionKind::RiskLevel => {
                for line in &section.lines {
                    page.cell(line);
                }
                page.gap();
            }
            SectionKind::RiskExplanation | SectionKind::Symptoms | SectionKind::Conditions => {
                page.heading(section.heading.as_deref());
                for line in &section.lines {
                    page.multi_cell(line);
                }
                page.gap();
            }
            SectionKind::Visualization => {
                page.heading(section.heading.as_deref());
                page.image(input.chart_image)?;
            }
        }
    }

    let pages = page.finish(path)?;
    info!(path = %path.display(), pages, "report_written");
    Ok(ReportArtifact {
        path: path.to_path_buf(),
        pages,
        sections,
    })
}

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    // Top of the next line, in mm from the bottom edge.
    y: f32,
    pages: usize,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow::anyhow!("failed to load report font: {}", e))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            y: PAGE_HEIGHT_MM - MARGIN_TOP_MM,
            pages: 1,
        })
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed >= MARGIN_BOTTOM_MM {
            return;
        }
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_TOP_MM;
    }

    fn write_line(&mut self, text: &str, x: f32) {
        self.ensure_space(LINE_HEIGHT_MM);
        let baseline = self.y - LINE_HEIGHT_MM * 0.7;
        self.layer
            .use_text(text, FONT_SIZE, Mm(x), Mm(baseline), &self.font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn cell(&mut self, text: &str) {
        self.write_line(text, MARGIN_LEFT_MM);
    }

    fn heading(&mut self, text: Option<&str>) {
        if let Some(text) = text {
            self.write_line(text, MARGIN_LEFT_MM);
        }
    }

    fn centered(&mut self, text: &str) {
        let width = text_width_mm(text, FONT_SIZE);
        let x = ((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_LEFT_MM);
        self.write_line(text, x);
    }

    fn multi_cell(&mut self, text: &str) {
        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_LEFT_MM;
        let cols = (usable / text_width_mm("x", FONT_SIZE)).floor() as usize;
        for line in wrap_text(text, cols) {
            self.cell(&line);
        }
    }

    fn gap(&mut self) {
        self.y -= GAP_MM;
    }

    fn image(&mut self, path: &Path) -> Result<()> {
        let decoded = printpdf::image_crate::open(path)
            .with_context(|| format!("failed to read chart image {}", path.display()))?;
        let (px_w, px_h) = (decoded.width() as f32, decoded.height() as f32);
        let dpi = px_w / (IMAGE_WIDTH_MM / 25.4);
        let height_mm = px_h / dpi * 25.4;

        self.ensure_space(IMAGE_OFFSET_MM + height_mm);
        let bottom = self.y - IMAGE_OFFSET_MM - height_mm;
        Image::from_dynamic_image(&decoded).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN_LEFT_MM)),
                translate_y: Some(Mm(bottom)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        self.y = bottom;
        Ok(())
    }

    fn finish(self, path: &Path) -> Result<usize> {
        let file = File::create(path)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| anyhow::anyhow!("failed to write report {}: {}", path.display(), e))?;
        Ok(self.pages)
    }
}

fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH_EM * PT_TO_MM
}

/// Greedy word wrap; words longer than `cols` are split.
pub fn wrap_text(text: &str, cols: usize) -> Vec<String> {
    let cols = cols.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > cols {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(cols).collect();
            word = word.chars().skip(cols).collect();
            lines.push(head);
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > cols && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
