//! Minimal PDF writer: one base-14 font, one text line per `Tj`, no compression.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::layout::font_metrics::win_ansi_byte;
use crate::layout::{PageConfig, PageLines};

const FONT_RESOURCE: &str = "F1";

/// Builds a document with one PDF page per entry in `pages`.
pub fn render_document(pages: &[PageLines], config: &PageConfig) -> Result<Document, lopdf::Error> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => config.font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in pages {
        let page_id = add_page(&mut doc, pages_id, lines, config)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            config.page_width_pt.into(),
            config.page_height_pt.into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Interview answer"),
        "Producer" => Object::string_literal(env!("CARGO_PKG_NAME")),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    lines: &[String],
    config: &PageConfig,
) -> Result<ObjectId, lopdf::Error> {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        // Baseline sits near the vertical centre of the line's cell.
        let cell_top = config.margin_top_pt + i as f32 * config.line_height_pt;
        let baseline =
            config.page_height_pt - cell_top - config.line_height_pt / 2.0 - 0.3 * config.font_size_pt;

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), config.font_size_pt.into()],
        ));
        operations.push(Operation::new(
            "Td",
            vec![config.margin_left_pt.into(), baseline.into()],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(line))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    }))
}

/// Encodes text for a `WinAnsiEncoding` font. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}
