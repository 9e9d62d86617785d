//! Page layout: cursor tracking, page breaks, header/body/footer placement
//!
//! Layout is computed into explicit [`Page`] buffers before any PDF object
//! is created, so pagination can be inspected and tested on its own.

use chrono::NaiveDate;
use serde::Serialize;
use shared_types::{format_date, RenderRequest, Translator};
use tracing::debug;

use crate::classify::{classify_line, LineKind};
use crate::error::RenderError;
use crate::fonts::TextStyle;
use crate::geometry::PageGeometry;
use crate::wrap::split_text_to_size;

pub mod styles {
    use crate::fonts::TextStyle;

    pub const INSTITUTION: TextStyle = TextStyle::bold(18.0);
    pub const INSTITUTION_TYPE: TextStyle = TextStyle::regular(12.0);
    pub const TITLE: TextStyle = TextStyle::bold(15.0);
    pub const META: TextStyle = TextStyle::regular(11.0);
    pub const CONTENT_LABEL: TextStyle = TextStyle::bold(12.0);
    pub const HEADING: TextStyle = TextStyle::bold(14.0);
    pub const SUBHEADING: TextStyle = TextStyle::bold(11.0);
    pub const BODY: TextStyle = TextStyle::regular(11.0);
    pub const FOOTER: TextStyle = TextStyle::regular(9.0);
}

/// One positioned line of text; `y_mm` is the baseline, measured from the page top
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub x_mm: f64,
    pub y_mm: f64,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageItem {
    Text(TextRun),
    Rule { x1_mm: f64, x2_mm: f64, y_mm: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub items: Vec<PageItem>,
}

impl Page {
    fn new(number: usize) -> Self {
        Self {
            number,
            items: Vec::new(),
        }
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.items.iter().filter_map(|item| match item {
            PageItem::Text(run) => Some(run),
            PageItem::Rule { .. } => None,
        })
    }
}

/// Mutable layout state for a single render pass
#[derive(Debug)]
pub struct RenderContext {
    geometry: PageGeometry,
    cursor_y: f64,
    pages: Vec<Page>,
}

impl RenderContext {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            cursor_y: geometry.margin_mm,
            pages: vec![Page::new(1)],
        }
    }

    pub fn cursor_y(&self) -> f64 {
        self.cursor_y
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    fn line_height(&self) -> f64 {
        self.geometry.line_height_mm
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        debug!(page = number, "page break");
        self.pages.push(Page::new(number));
        self.cursor_y = self.geometry.margin_mm;
    }

    /// Break to a new page if the cursor has passed the bottom margin
    fn ensure_room(&mut self) {
        if self.cursor_y > self.geometry.bottom_limit() {
            self.new_page();
        }
    }

    /// Break now unless `rows` more lines fit on the current page
    pub fn reserve_rows(&mut self, rows: usize) {
        let needed = rows.saturating_sub(1) as f64 * self.line_height();
        if self.cursor_y + needed > self.geometry.bottom_limit() {
            self.new_page();
        }
    }

    fn push(&mut self, item: PageItem) {
        // pages is never empty
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    /// Wrap `text` to the printable width and write each resulting line
    ///
    /// Returns the number of lines written.
    pub fn write_text(&mut self, text: &str, style: TextStyle) -> usize {
        let lines = split_text_to_size(text, style, self.geometry.printable_width());
        let count = lines.len();

        for line in lines {
            self.ensure_room();
            let run = TextRun {
                text: line,
                x_mm: self.geometry.margin_mm,
                y_mm: self.cursor_y,
                style,
            };
            self.push(PageItem::Text(run));
            self.cursor_y += self.line_height();
        }

        count
    }

    /// Horizontal rule across the printable width
    pub fn rule(&mut self) {
        self.ensure_room();
        let rule = PageItem::Rule {
            x1_mm: self.geometry.margin_mm,
            x2_mm: self.geometry.width_mm - self.geometry.margin_mm,
            y_mm: self.cursor_y,
        };
        self.push(rule);
        self.cursor_y += self.line_height();
    }

    pub fn advance(&mut self, dy_mm: f64) {
        self.cursor_y += dy_mm;
    }
}

/// Lay out header, body and footer of a report into pages
pub fn layout_report(
    request: &RenderRequest,
    geometry: PageGeometry,
    translator: &dyn Translator,
    generated_on: NaiveDate,
) -> Result<Vec<Page>, RenderError> {
    geometry.validate()?;

    let mut ctx = RenderContext::new(geometry);
    write_header(&mut ctx, request, translator);
    write_body(&mut ctx, &request.content);
    write_footer(&mut ctx, translator, generated_on);

    Ok(ctx.into_pages())
}

fn write_header(ctx: &mut RenderContext, request: &RenderRequest, translator: &dyn Translator) {
    let date = format_date(translator, request.report_date);

    ctx.write_text(&request.institution.name, styles::INSTITUTION);
    ctx.write_text(&request.institution.kind, styles::INSTITUTION_TYPE);
    ctx.write_text(&request.title, styles::TITLE);
    ctx.write_text(
        &translator.translate(
            "render.report_number",
            &[("number", request.report_number.as_str())],
        ),
        styles::META,
    );
    ctx.write_text(
        &translator.translate("render.report_date", &[("date", date.as_str())]),
        styles::META,
    );
    ctx.rule();
    ctx.write_text(&translator.t("render.report_content"), styles::CONTENT_LABEL);
    ctx.advance(ctx.line_height() / 2.0);
}

/// Classify and write every body line
pub fn write_body(ctx: &mut RenderContext, content: &str) {
    let lh = ctx.line_height();

    for line in content.lines() {
        match classify_line(line) {
            None => ctx.advance(lh / 2.0),
            Some(LineKind::Heading) => {
                ctx.advance(lh / 2.0);
                ctx.write_text(line, styles::HEADING);
                ctx.advance(lh / 2.0);
            }
            Some(LineKind::Subheading) => {
                ctx.advance(lh / 4.0);
                ctx.write_text(line, styles::SUBHEADING);
            }
            Some(LineKind::Body) => {
                ctx.write_text(line, styles::BODY);
            }
        }
    }
}

fn write_footer(ctx: &mut RenderContext, translator: &dyn Translator, generated_on: NaiveDate) {
    let date = format_date(translator, generated_on);

    ctx.advance(ctx.line_height() / 2.0);
    ctx.reserve_rows(3);
    ctx.rule();
    ctx.write_text(
        &translator.translate("render.generated_by", &[("date", date.as_str())]),
        styles::FOOTER,
    );
    ctx.write_text(&translator.t("render.confidential"), styles::FOOTER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use shared_types::{Catalog, Institution, Locale};

    fn request(content: String) -> RenderRequest {
        RenderRequest {
            institution: Institution {
                name: "Court of Audit".to_string(),
                kind: "Supreme Audit Institution".to_string(),
            },
            title: "Internal Control Compliance Report".to_string(),
            report_number: "RPT-2026-014".to_string(),
            report_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            content,
        }
    }

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn all_runs(pages: &[Page]) -> Vec<(usize, TextRun)> {
        pages
            .iter()
            .flat_map(|p| p.text_runs().map(move |r| (p.number, r.clone())))
            .collect()
    }

    #[test]
    fn test_header_then_body_then_footer() {
        let catalog = Catalog::new(Locale::En);
        let pages = layout_report(
            &request("Body line".to_string()),
            PageGeometry::default(),
            &catalog,
            generated_on(),
        )
        .unwrap();

        assert_eq!(pages.len(), 1);
        let texts: Vec<_> = pages[0].text_runs().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Court of Audit",
                "Supreme Audit Institution",
                "Internal Control Compliance Report",
                "Report Number: RPT-2026-014",
                "Report Date: October 1, 2026",
                "REPORT CONTENT",
                "Body line",
                "Generated by the Internal Control Management System on October 19, 2026",
                "This report is confidential and intended for internal use only.",
            ]
        );
        let rules = pages[0]
            .items
            .iter()
            .filter(|i| matches!(i, PageItem::Rule { .. }))
            .count();
        assert_eq!(rules, 2);
    }

    #[test]
    fn test_first_line_starts_at_margin_and_lines_advance() {
        let geometry = PageGeometry::default();
        let mut ctx = RenderContext::new(geometry);
        ctx.write_text("one", styles::BODY);
        ctx.write_text("two", styles::BODY);

        let runs: Vec<_> = ctx.pages()[0].text_runs().cloned().collect();
        assert_eq!(runs[0].y_mm, 20.0);
        assert_eq!(runs[1].y_mm, 26.0);
        assert_eq!(ctx.cursor_y(), 32.0);
    }

    #[test]
    fn test_blank_lines_advance_half_a_line_without_text() {
        let mut ctx = RenderContext::new(PageGeometry::default());
        write_body(&mut ctx, "first\n\n   \nsecond");

        let runs: Vec<_> = ctx.pages()[0].text_runs().cloned().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].y_mm - runs[0].y_mm, 6.0 + 3.0 + 3.0);
    }

    #[test]
    fn test_heading_and_subheading_styles() {
        let mut ctx = RenderContext::new(PageGeometry::default());
        write_body(&mut ctx, "intro\n1. EXECUTIVE SUMMARY\n1. Control Environment: 92%\nplain");

        let runs: Vec<_> = ctx.pages()[0].text_runs().cloned().collect();
        assert_eq!(runs[1].style, styles::HEADING);
        assert_eq!(runs[1].y_mm - runs[0].y_mm, 6.0 + 3.0);
        assert_eq!(runs[2].style, styles::SUBHEADING);
        assert_eq!(runs[2].y_mm - runs[1].y_mm, 6.0 + 3.0 + 1.5);
        assert_eq!(runs[3].style, styles::BODY);
        assert_eq!(runs[3].y_mm - runs[2].y_mm, 6.0);
    }

    #[test]
    fn test_overflow_starts_new_page_at_margin() {
        let geometry = PageGeometry::default();
        let mut ctx = RenderContext::new(geometry);
        let rows = geometry.rows_per_page();
        for i in 0..=rows {
            ctx.write_text(&format!("line {}", i), styles::BODY);
        }

        let pages = ctx.into_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text_runs().count(), rows);
        let last_on_first = pages[0].text_runs().last().unwrap();
        assert!(last_on_first.y_mm <= geometry.bottom_limit());
        let first_on_second = pages[1].text_runs().next().unwrap();
        assert_eq!(first_on_second.y_mm, geometry.margin_mm);
        assert_eq!(first_on_second.text, format!("line {}", rows));
    }

    #[test]
    fn test_long_paragraph_wraps_inside_printable_width() {
        let geometry = PageGeometry::default();
        let mut ctx = RenderContext::new(geometry);
        let paragraph = "Management is responsible for designing, implementing and maintaining effective internal control. ".repeat(6);
        let written = ctx.write_text(&paragraph, styles::BODY);

        assert!(written > 1);
        for run in ctx.pages()[0].text_runs() {
            assert!(crate::fonts::text_width_mm(&run.text, run.style) <= geometry.printable_width());
            assert_eq!(run.x_mm, geometry.margin_mm);
        }
    }

    #[test]
    fn test_footer_is_kept_together() {
        let geometry = PageGeometry::default();
        let catalog = Catalog::new(Locale::En);
        // Fill the first page so only one row remains after the body
        let header_rows = 8;
        let body: Vec<String> = (0..geometry.rows_per_page() - header_rows - 1)
            .map(|i| format!("row {}", i))
            .collect();
        let pages = layout_report(&request(body.join("\n")), geometry, &catalog, generated_on())
            .unwrap();

        let last = pages.last().unwrap();
        let footer: Vec<_> = last.text_runs().filter(|r| r.style == styles::FOOTER).collect();
        assert_eq!(footer.len(), 2);
        assert!(last
            .items
            .iter()
            .any(|i| matches!(i, PageItem::Rule { .. })));
    }

    #[test]
    fn test_five_hundred_line_body_with_periodic_headings() {
        let geometry = PageGeometry::default();
        let catalog = Catalog::new(Locale::En);
        let lines: Vec<String> = (0..500)
            .map(|i| {
                if i % 50 == 0 {
                    format!("SECTION PART {:02}", i / 50 + 1)
                } else {
                    format!("Observation {}", i)
                }
            })
            .collect();

        let pages =
            layout_report(&request(lines.join("\n")), geometry, &catalog, generated_on()).unwrap();

        let base = (500.0 * geometry.line_height_mm / geometry.printable_height()).ceil() as usize;
        assert!(
            pages.len() >= base && pages.len() <= base + 2,
            "{} pages, expected about {}",
            pages.len(),
            base
        );

        let runs = all_runs(&pages);
        let headings: Vec<_> = runs
            .iter()
            .enumerate()
            .filter(|(_, (_, r))| r.style == styles::HEADING)
            .collect();
        assert_eq!(headings.len(), 10);
        for (idx, (page, run)) in headings {
            let (prev_page, prev) = &runs[idx - 1];
            if prev_page == page {
                assert!(run.y_mm - prev.y_mm >= geometry.line_height_mm * 1.5);
            } else {
                assert_eq!(run.y_mm, geometry.margin_mm);
            }
        }
    }

    proptest! {
        #[test]
        fn page_count_is_a_function_of_length_and_geometry(
            n in 1usize..400,
            line_height in 4.0f64..10.0,
            margin in 10.0f64..30.0
        ) {
            let geometry = PageGeometry {
                line_height_mm: line_height,
                margin_mm: margin,
                ..PageGeometry::default()
            };
            let body: String = (0..n).map(|i| format!("l{}\n", i)).collect();

            let run = || {
                let mut ctx = RenderContext::new(geometry);
                write_body(&mut ctx, &body);
                ctx.into_pages().len()
            };
            let first = run();

            prop_assert_eq!(first, run());
            let expected = (n as f64 * line_height / geometry.printable_height()).ceil() as usize;
            prop_assert!(first + 1 >= expected && first <= expected + 1,
                "{} pages for {} lines, formula gives {}", first, n, expected);
        }
    }
}
