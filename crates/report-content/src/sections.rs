//! Line-oriented builder for sectioned report text

use shared_types::Translator;

/// Accumulates report lines in reading order
///
/// Section headings are numbered and upper-cased so they stand out in plain
/// text and are picked up as headings by the PDF renderer.
pub struct SectionWriter<'a> {
    translator: &'a dyn Translator,
    lines: Vec<String>,
    section_count: usize,
}

impl<'a> SectionWriter<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self {
            translator,
            lines: Vec::new(),
            section_count: 0,
        }
    }

    pub fn translator(&self) -> &'a dyn Translator {
        self.translator
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    pub fn tr(&self, key: &str, vars: &[(&str, &str)]) -> String {
        self.translator.translate(key, vars)
    }

    /// Start a new numbered section, separated from the previous one by a blank line
    pub fn section(&mut self, label_key: &str) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.section_count += 1;
        let label = self.t(label_key).to_uppercase();
        self.lines.push(format!("{}. {}", self.section_count, label));
        self.lines.push(String::new());
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn line_key(&mut self, key: &str, vars: &[(&str, &str)]) {
        let text = self.tr(key, vars);
        self.lines.push(text);
    }

    /// Numbered enumeration, or a single "no items" sentence when empty
    pub fn list_or_empty(&mut self, items: &[String], empty_key: &str) {
        if items.is_empty() {
            self.line_key(empty_key, &[]);
            return;
        }
        for (i, item) in items.iter().enumerate() {
            self.lines.push(format!("{}. {}", i + 1, item));
        }
    }

    /// Numbered enumeration of translated entries
    pub fn list_keys(&mut self, keys: &[&str]) {
        for (i, key) in keys.iter().enumerate() {
            let text = self.t(key);
            self.lines.push(format!("{}. {}", i + 1, text));
        }
    }

    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

/// Integral values print without decimals, everything else with one
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Percentage for a rate, or the localized "Not Available" token
pub fn format_rate(translator: &dyn Translator, rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{}%", format_number(r)),
        None => translator.t("common.not_available"),
    }
}
