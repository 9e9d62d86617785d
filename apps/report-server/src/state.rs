//! Application state for the report server

use report_pdf::{GenerationGate, PageGeometry};
use shared_types::Locale;

#[derive(Clone)]
pub struct AppState {
    pub geometry: PageGeometry,
    /// Used when a request names no locale, or one we do not ship
    pub default_locale: Locale,
    pub gate: GenerationGate,
}

impl AppState {
    pub fn new(geometry: PageGeometry, default_locale: Locale) -> Self {
        Self {
            geometry,
            default_locale,
            gate: GenerationGate::new(),
        }
    }

    pub fn locale_for(&self, tag: Option<&str>) -> Locale {
        tag.and_then(|t| t.parse().ok())
            .unwrap_or(self.default_locale)
    }
}
