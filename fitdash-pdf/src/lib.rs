pub mod layout;

use std::{fmt, fs, path::Path};

use log::{debug, info};
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::layout::{FontStyle, PAGE_HEIGHT, PAGE_WIDTH};

const LAYER_NAME: &str = "Layer 1";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to render PDF: {0}")]
    Render(String),
    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, ExportError>;

/// Writes a titled list of text lines to a document at `path`.
#[mockall::automock]
pub trait Exporter {
    fn export(&self, title: &str, lines: &[String], path: &Path) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PdfExporter;

impl PdfExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, title: &str, lines: &[String]) -> Result<Vec<u8>> {
        let pages = layout::layout(title, lines);
        debug!("Laid out {} lines on {} pages", lines.len(), pages.len());

        let width = Mm::from(Pt(PAGE_WIDTH));
        let height = Mm::from(Pt(PAGE_HEIGHT));
        let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
                layer = doc.get_page(page_index).get_layer(layer_index);
            }
            for item in &page.items {
                let font = match item.style {
                    FontStyle::Regular => &regular,
                    FontStyle::Bold => &bold,
                };
                layer.use_text(
                    item.text.as_str(),
                    item.size,
                    Mm::from(Pt(item.x)),
                    Mm::from(Pt(item.y)),
                    font,
                );
            }
        }

        doc.save_to_bytes().map_err(render_error)
    }
}

impl Exporter for PdfExporter {
    fn export(&self, title: &str, lines: &[String], path: &Path) -> Result<()> {
        info!("Exporting \"{}\" to {}", title, path.display());
        let bytes = self.render(title, lines)?;
        fs::write(path, bytes)?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

fn render_error(e: impl fmt::Debug) -> ExportError {
    ExportError::Render(format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("  - item {} × 10", i)).collect()
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = PdfExporter::new()
            .render("Workout Plan", &report(5))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_reports_render_more_pages() {
        let short = PdfExporter::new().render("Plan", &report(10)).unwrap();
        let long = PdfExporter::new().render("Plan", &report(200)).unwrap();
        assert!(long.len() > short.len());
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.pdf");

        PdfExporter::new()
            .export("Calorie Plan", &report(3), &path)
            .unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plan.pdf");

        let result = PdfExporter::new().export("Calorie Plan", &report(3), &path);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
