//! Serialize laid-out pages to PDF bytes with lopdf

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::RenderError;
use crate::fonts::{encode_win_ansi, Font};
use crate::geometry::{PageGeometry, MM_PER_PT};
use crate::layout::{Page, PageItem, TextRun};

const RULE_WIDTH_PT: f32 = 0.5;

/// Values for the PDF document information dictionary
#[derive(Debug, Clone)]
pub struct DocumentInfo<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Build a complete PDF from laid-out pages
///
/// The document is assembled in memory and only returned once fully
/// serialized.
pub fn write_pdf(
    pages: &[Page],
    geometry: &PageGeometry,
    info: &DocumentInfo<'_>,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(Font::Helvetica));
    let bold_id = doc.add_object(font_dictionary(Font::HelveticaBold));

    let mut fonts = Dictionary::new();
    fonts.set(Font::Helvetica.resource_name(), Object::Reference(regular_id));
    fonts.set(Font::HelveticaBold.resource_name(), Object::Reference(bold_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));
    let resources_id = doc.add_object(resources);

    let mut kids = Vec::with_capacity(pages.len());
    for page in pages {
        let page_id = add_page(&mut doc, pages_id, page, geometry)?;
        kids.push(Object::Reference(page_id));
    }

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(geometry.width_pt() as f32),
        Object::Real(geometry.height_pt() as f32),
    ];
    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(pages.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Resources", Object::Reference(resources_id));
    pages_dict.set("MediaBox", Object::Array(media_box));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog_dict = Dictionary::new();
    catalog_dict.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog_dict.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog_dict);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let info_id = doc.add_object(info_dictionary(info));
    doc.trailer.set("Info", Object::Reference(info_id));

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Serialization(e.to_string()))?;

    Ok(buffer)
}

fn font_dictionary(font: Font) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"Font".to_vec()));
    dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    dict.set("BaseFont", Object::Name(font.base_font().as_bytes().to_vec()));
    dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    dict
}

fn info_dictionary(info: &DocumentInfo<'_>) -> Dictionary {
    let created = info.created_at.format("D:%Y%m%d%H%M%SZ").to_string();
    let mut dict = Dictionary::new();
    dict.set("Title", literal(info.title));
    dict.set("Author", literal(info.author));
    dict.set("Producer", literal(concat!("report-pdf ", env!("CARGO_PKG_VERSION"))));
    dict.set("CreationDate", literal(&created));
    dict
}

fn literal(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    page: &Page,
    geometry: &PageGeometry,
) -> Result<ObjectId, RenderError> {
    let content = Content {
        operations: page_operations(page, geometry),
    };
    let encoded = content
        .encode()
        .map_err(|e| RenderError::ContentError(format!("page {}: {}", page.number, e)))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set("Contents", Object::Reference(content_id));
    Ok(doc.add_object(page_dict))
}

/// Content-stream operations for one page
///
/// Layout coordinates are millimetres from the top-left corner; PDF user
/// space is points from the bottom-left.
pub fn page_operations(page: &Page, geometry: &PageGeometry) -> Vec<Operation> {
    let to_pt = |mm: f64| (mm / MM_PER_PT) as f32;
    let flip = |y_mm: f64| to_pt(geometry.height_mm - y_mm);

    let mut ops = Vec::new();
    for item in &page.items {
        match item {
            PageItem::Text(TextRun {
                text,
                x_mm,
                y_mm,
                style,
            }) => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(style.font.resource_name().as_bytes().to_vec()),
                        Object::Real(style.size_pt as f32),
                    ],
                ));
                ops.push(Operation::new(
                    "Td",
                    vec![Object::Real(to_pt(*x_mm)), Object::Real(flip(*y_mm))],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            PageItem::Rule { x1_mm, x2_mm, y_mm } => {
                ops.push(Operation::new("w", vec![Object::Real(RULE_WIDTH_PT)]));
                ops.push(Operation::new(
                    "m",
                    vec![Object::Real(to_pt(*x1_mm)), Object::Real(flip(*y_mm))],
                ));
                ops.push(Operation::new(
                    "l",
                    vec![Object::Real(to_pt(*x2_mm)), Object::Real(flip(*y_mm))],
                ));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }
    ops
}
