//! Paginated PDF rendering for internal-control reports
//!
//! Text from the content formatter is classified line by line, wrapped to
//! the printable width using Helvetica metrics, laid out into pages with a
//! fixed header and footer, and serialized with lopdf.

pub mod classify;
pub mod error;
pub mod filename;
pub mod fonts;
pub mod gate;
pub mod geometry;
pub mod layout;
pub mod wrap;
pub mod writer;

use chrono::{DateTime, Utc};
use shared_types::{RenderRequest, Translator};
use tracing::info;

pub use classify::{classify_line, LineKind};
pub use error::RenderError;
pub use filename::report_filename;
pub use gate::{GenerationGate, GenerationGuard};
pub use geometry::PageGeometry;
pub use layout::{Page, PageItem, RenderContext, TextRun};
pub use wrap::split_text_to_size;

/// A finished document ready for download
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

pub struct ReportRenderer<'a> {
    geometry: PageGeometry,
    translator: &'a dyn Translator,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(geometry: PageGeometry, translator: &'a dyn Translator) -> Self {
        Self {
            geometry,
            translator,
        }
    }

    /// Lay out pages without producing PDF bytes
    pub fn layout(
        &self,
        request: &RenderRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<Page>, RenderError> {
        layout::layout_report(request, self.geometry, self.translator, now.date_naive())
    }

    pub fn render(&self, request: &RenderRequest) -> Result<RenderedReport, RenderError> {
        self.render_at(request, Utc::now())
    }

    /// Render with an explicit generation instant
    pub fn render_at(
        &self,
        request: &RenderRequest,
        now: DateTime<Utc>,
    ) -> Result<RenderedReport, RenderError> {
        let pages = self.layout(request, now)?;

        let info = writer::DocumentInfo {
            title: &request.title,
            author: &request.institution.name,
            created_at: now,
        };
        let bytes = writer::write_pdf(&pages, &self.geometry, &info)?;

        let filename = report_filename(
            &request.title,
            &request.report_number,
            request.report_date,
            now,
        );

        info!(
            report_number = %request.report_number,
            pages = pages.len(),
            bytes = bytes.len(),
            locale = self.translator.locale().code(),
            "rendered report"
        );

        Ok(RenderedReport {
            filename,
            bytes,
            page_count: pages.len(),
        })
    }
}
