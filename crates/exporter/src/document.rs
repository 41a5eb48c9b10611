//! The Stardis descriptor document (`model.txt`).

use crate::classify::Section;

pub const ENVIRONMENT_HEADER: &str = "#environment_radiation";
pub const MEDIA_HEADER: &str = "#media";
pub const BOUNDARY_HEADER: &str = "#boundary conditions";

/// Pre-formatted descriptor lines, bucketed by section in scan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportDocument {
    pub environment: Option<String>,
    pub media: Vec<String>,
    pub boundaries: Vec<String>,
}

impl ExportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a formatted record line to its section.
    pub fn push(&mut self, section: Section, line: String) {
        match section {
            Section::Media => self.media.push(line),
            Section::Boundary => self.boundaries.push(line),
        }
    }

    /// Render the descriptor text.
    ///
    /// Each section is its header, its lines, then one blank line. The
    /// environment section appears only when set; the other two always do,
    /// even when empty.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(line) = &self.environment {
            write_section(&mut out, ENVIRONMENT_HEADER, std::slice::from_ref(line));
        }
        write_section(&mut out, MEDIA_HEADER, &self.media);
        write_section(&mut out, BOUNDARY_HEADER, &self.boundaries);
        out
    }
}

fn write_section(out: &mut String, header: &str, lines: &[String]) {
    out.push_str(header);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = ExportDocument::new();
        assert_eq!(doc.render(), "#media\n\n#boundary conditions\n\n");
    }

    #[test]
    fn test_section_order_and_blank_lines() {
        let mut doc = ExportDocument::new();
        doc.environment = Some("TRAD 300.000 300.000".into());
        doc.push(Section::Boundary, "B1".into());
        doc.push(Section::Media, "M1".into());
        doc.push(Section::Boundary, "B2".into());

        assert_eq!(
            doc.render(),
            "#environment_radiation\nTRAD 300.000 300.000\n\n#media\nM1\n\n#boundary conditions\nB1\nB2\n\n"
        );
    }

    #[test]
    fn test_no_environment_header_when_unset() {
        let mut doc = ExportDocument::new();
        doc.push(Section::Media, "M1".into());
        assert!(!doc.render().contains(ENVIRONMENT_HEADER));
    }
}
