use crate::core::{format_inr, BudgetDistribution};
use crate::models::Profile;
use thiserror::Error;

/// MIME type of exported documents
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Warning shown when export is unavailable
pub const EXPORT_UNAVAILABLE_WARNING: &str =
    "Word export is not available. Build with the docx-export feature and set export.enabled to enable this feature.";

/// Errors that can occur while building a document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Word export is not available")]
    Unavailable,

    #[error("Failed to package document: {0}")]
    Packaging(String),
}

/// Whether Word export can be produced, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportCapability {
    Available,
    Unavailable,
}

impl ExportCapability {
    /// Combine the compiled-in writer with the configuration switch
    pub fn detect(enabled: bool) -> Self {
        if enabled && cfg!(feature = "docx-export") {
            ExportCapability::Available
        } else {
            ExportCapability::Unavailable
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ExportCapability::Available)
    }
}

/// Download name for a user's document
pub fn file_name(name: &str) -> String {
    format!("business_ideas_for_{}.docx", name)
}

/// Builds Word documents from generated ideas
#[derive(Debug, Clone, Copy)]
pub struct DocumentExporter {
    capability: ExportCapability,
}

impl DocumentExporter {
    pub fn new(capability: ExportCapability) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> ExportCapability {
        self.capability
    }

    pub fn is_available(&self) -> bool {
        self.capability.is_available()
    }

    /// Build the document, or `None` when export is unavailable or fails
    pub fn build_document(
        &self,
        profile: &Profile,
        ideas: &str,
        distribution: &BudgetDistribution,
    ) -> Option<Vec<u8>> {
        if !self.is_available() {
            tracing::debug!("Export requested while unavailable");
            return None;
        }

        match render(&DocumentContent::new(profile, ideas, distribution)) {
            Ok(bytes) => {
                tracing::debug!("Built document for {} ({} bytes)", profile.name, bytes.len());
                Some(bytes)
            }
            Err(e) => {
                tracing::error!("Document export failed: {}", e);
                None
            }
        }
    }
}

/// Text of the exported document, independent of the writer
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentContent {
    pub title: String,
    pub sections: Vec<(String, Vec<String>)>,
}

impl DocumentContent {
    pub fn new(profile: &Profile, ideas: &str, distribution: &BudgetDistribution) -> Self {
        let user_info = vec![
            format!("Name: {}", profile.name),
            format!("District: {}", profile.district),
            format!("Qualifications: {}", profile.qualifications),
            format!("Budget: {}", format_inr(profile.budget, 0)),
            format!("Interests: {}", profile.interests),
        ];

        let budget = distribution
            .entries()
            .iter()
            .map(|(category, amount)| format!("{}: {}", category, format_inr(*amount, 2)))
            .collect();

        Self {
            title: format!("Business Ideas for {}", profile.name),
            sections: vec![
                ("User Information".to_string(), user_info),
                ("Generated Business Ideas".to_string(), vec![ideas.to_string()]),
                ("Budget Distribution".to_string(), budget),
            ],
        }
    }
}

#[cfg(feature = "docx-export")]
fn render(content: &DocumentContent) -> Result<Vec<u8>, ExportError> {
    use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
    use std::io::Cursor;

    fn text_paragraph(text: &str) -> Paragraph {
        let mut run = Run::new();
        // multi-line text becomes line breaks within one paragraph
        for (i, line) in text.lines().enumerate() {
            if i > 0 {
                run = run.add_break(docx_rs::BreakType::TextWrapping);
            }
            run = run.add_text(line);
        }
        Paragraph::new().add_run(run)
    }

    let mut docx = Docx::new()
        .add_style(Style::new("Title", StyleType::Paragraph).name("Title").size(52).bold())
        .add_style(Style::new("Heading1", StyleType::Paragraph).name("Heading 1").size(32).bold())
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(&content.title))
                .style("Title"),
        );

    for (heading, paragraphs) in &content.sections {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(heading))
                .style("Heading1"),
        );
        for text in paragraphs {
            docx = docx.add_paragraph(text_paragraph(text));
        }
    }

    let mut buf = Vec::new();
    docx.build()
        .pack(Cursor::new(&mut buf))
        .map_err(|e| ExportError::Packaging(e.to_string()))?;
    Ok(buf)
}

#[cfg(not(feature = "docx-export"))]
fn render(_content: &DocumentContent) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{calculate_budget_distribution, District};

    fn profile() -> Profile {
        Profile {
            name: "Meena".to_string(),
            district: District::Tiruppur,
            qualifications: "Fashion design".to_string(),
            budget: 100000.0,
            interests: "garments".to_string(),
        }
    }

    #[test]
    fn test_file_name_uses_literal_name() {
        assert_eq!(file_name("Meena"), "business_ideas_for_Meena.docx");
        assert_eq!(file_name("A B"), "business_ideas_for_A B.docx");
        assert_eq!(file_name(""), "business_ideas_for_.docx");
    }

    #[test]
    fn test_disabled_capability() {
        assert_eq!(ExportCapability::detect(false), ExportCapability::Unavailable);
    }

    #[test]
    fn test_unavailable_exporter_returns_none() {
        let exporter = DocumentExporter::new(ExportCapability::Unavailable);
        let dist = calculate_budget_distribution(100000.0);
        assert!(exporter.build_document(&profile(), "ideas", &dist).is_none());
    }

    #[test]
    fn test_document_content() {
        let dist = calculate_budget_distribution(100000.0);
        let content = DocumentContent::new(&profile(), "1. Knitwear studio", &dist);

        assert_eq!(content.title, "Business Ideas for Meena");
        assert_eq!(content.sections[0].0, "User Information");
        assert!(content.sections[0].1.contains(&"District: Tiruppur".to_string()));
        assert!(content.sections[0].1.contains(&"Budget: ₹100,000".to_string()));
        assert_eq!(content.sections[1].1, vec!["1. Knitwear studio".to_string()]);
        assert_eq!(content.sections[2].1[0], "Rent/Space: ₹30,000.00");
        assert_eq!(content.sections[2].1[4], "Miscellaneous: ₹10,000.00");
    }

    #[cfg(feature = "docx-export")]
    #[test]
    fn test_available_exporter_builds_zip() {
        let exporter = DocumentExporter::new(ExportCapability::detect(true));
        let dist = calculate_budget_distribution(100000.0);
        let bytes = exporter
            .build_document(&profile(), "Idea one\nIdea two", &dist)
            .unwrap();

        // docx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }
}
