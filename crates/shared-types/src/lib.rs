//! Data model shared by the report formatter, the renderer and the server

pub mod locale;
pub mod metrics;
pub mod score;
pub mod types;

pub use locale::{format_date, Catalog, Locale, Translator};
pub use metrics::{
    ComplianceMetrics, PerformanceMetrics, ProgressMetrics, ReportMetrics, RiskMetrics,
};
pub use score::ScoreLabel;
pub use types::{CosoComponent, FormattedReport, Institution, RenderRequest, ReportType};
