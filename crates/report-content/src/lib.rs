//! Report content formatting
//!
//! Turns a report type and its metrics into sectioned, localized plain text.
//! Formatting is total: absent metrics degrade to zero, "Not Available" or a
//! "no items" sentence, so there is no error path.

pub mod reports;
pub mod sections;

use shared_types::{FormattedReport, ReportMetrics, ReportType, Translator};

use sections::SectionWriter;

/// Formatter entry point, bound to a translator for the active locale
pub struct ReportFormatter<'a> {
    translator: &'a dyn Translator,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self { translator }
    }

    /// Localized display title for a report type
    pub fn title(&self, report_type: ReportType) -> String {
        self.translator.t(&report_type.title_key())
    }

    pub fn format(&self, metrics: &ReportMetrics) -> FormattedReport {
        let mut out = SectionWriter::new(self.translator);

        match metrics {
            ReportMetrics::Compliance(m) => reports::compliance::write_compliance(&mut out, m),
            ReportMetrics::Progress(m) => reports::progress::write_progress(&mut out, m),
            ReportMetrics::Performance(m) => {
                reports::performance::write_performance(&mut out, m)
            }
            ReportMetrics::Risk(m) => reports::risk::write_risk(&mut out, m),
        }

        let body = out.finish();
        tracing::debug!(
            report_type = %metrics.report_type(),
            lines = body.len(),
            "formatted report content"
        );

        FormattedReport {
            title: self.title(metrics.report_type()),
            body,
        }
    }

    /// Newline-delimited report text
    pub fn format_text(&self, metrics: &ReportMetrics) -> String {
        self.format(metrics).to_text()
    }
}
