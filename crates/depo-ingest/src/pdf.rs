//! PDF text extraction
//!
//! Pages are visited in ascending order starting at 1. Each page's content
//! stream is decoded and every text-showing operator (`Tj`, `TJ`, `'`, `"`)
//! yields one fragment, decoded with the encoding of the font selected by the
//! last `Tf`. Fragments are joined with a single space and every page is
//! followed by a blank line.

use crate::IngestError;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;
use tracing::debug;

/// Separator appended after every page
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Separator between fragments on one page
pub const FRAGMENT_SEPARATOR: &str = " ";

/// `TJ` adjustments below this (thousandths of a text unit) read as a word gap
const TJ_WORD_GAP: f32 = -100.0;

/// Parse PDF bytes and return the normalized text of every page
pub fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let document = Document::load_mem(bytes).map_err(|e| IngestError::InvalidPdf(e.to_string()))?;

    if document.is_encrypted() {
        return Err(IngestError::InvalidPdf(
            "document is encrypted".to_string(),
        ));
    }

    let pages = page_fragments(&document)?;
    Ok(join_pages(&pages))
}

/// Fragments of every page, indexed from page 1
pub fn page_fragments(document: &Document) -> Result<Vec<Vec<String>>, IngestError> {
    let pages = document.get_pages();
    let page_count = pages.len() as u32;
    debug!("PDF has {} pages", page_count);

    let mut all = Vec::with_capacity(pages.len());
    for page in 1..=page_count {
        let page_id = *pages.get(&page).ok_or_else(|| IngestError::Page {
            page,
            reason: "page missing from page tree".to_string(),
        })?;

        let fragments = fragments_on_page(document, page_id)
            .map_err(|reason| IngestError::Page { page, reason })?;
        debug!("Page {}: {} fragments", page, fragments.len());
        all.push(fragments);
    }

    Ok(all)
}

fn fragments_on_page(document: &Document, page_id: ObjectId) -> Result<Vec<String>, String> {
    let encodings: BTreeMap<Vec<u8>, &str> = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect();

    let content = Content::decode(&page_content(document, page_id)?).map_err(|e| e.to_string())?;

    let mut encoding = None;
    let mut fragments = Vec::new();
    for operation in &content.operations {
        if operation.operator == "Tf" {
            let font = operation
                .operands
                .first()
                .and_then(|o| o.as_name().ok())
                .ok_or_else(|| "Tf operator without a font name".to_string())?;
            encoding = encodings.get(font).copied();
            continue;
        }

        if let Some(text) = shown_text(operation, encoding) {
            if !text.is_empty() {
                fragments.push(text);
            }
        }
    }

    Ok(fragments)
}

/// Concatenated content streams of a page
///
/// A stream that cannot be resolved fails the page.
fn page_content(document: &Document, page_id: ObjectId) -> Result<Vec<u8>, String> {
    let mut content = Vec::new();
    for id in document.get_page_contents(page_id) {
        let stream = document
            .get_object(id)
            .and_then(Object::as_stream)
            .map_err(|e| format!("content stream {} {} R: {}", id.0, id.1, e))?;
        match stream.decompressed_content() {
            Ok(data) => content.extend_from_slice(&data),
            Err(_) => content.extend_from_slice(&stream.content),
        }
        content.push(b'\n');
    }
    Ok(content)
}

/// Text shown by one operation, if it is a text-showing operator
fn shown_text(operation: &Operation, encoding: Option<&str>) -> Option<String> {
    let operands = &operation.operands;
    match operation.operator.as_str() {
        "Tj" | "'" => operands.first().map(|o| decode_string(o, encoding)),
        // aw ac string "
        "\"" => operands.get(2).map(|o| decode_string(o, encoding)),
        "TJ" => operands.first().map(|o| decode_array(o, encoding)),
        _ => None,
    }
}

fn decode_string(object: &Object, encoding: Option<&str>) -> String {
    match object {
        Object::String(bytes, _) => Document::decode_text(encoding, bytes),
        _ => String::new(),
    }
}

fn decode_array(object: &Object, encoding: Option<&str>) -> String {
    let mut text = String::new();
    if let Object::Array(items) = object {
        for item in items {
            match item {
                Object::String(bytes, _) => text.push_str(&Document::decode_text(encoding, bytes)),
                other => {
                    if other.as_float().is_ok_and(|n| n < TJ_WORD_GAP) {
                        text.push(' ');
                    }
                }
            }
        }
    }
    text
}

/// Join per-page fragments into one blob
///
/// Page order is preserved as given; nothing is reordered or deduplicated.
pub fn join_pages<S: AsRef<str>>(pages: &[Vec<S>]) -> String {
    let mut text = String::new();
    for fragments in pages {
        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                text.push_str(FRAGMENT_SEPARATOR);
            }
            text.push_str(fragment.as_ref());
        }
        text.push_str(PAGE_SEPARATOR);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_three_pages() {
        let pages = vec![vec!["A", "B"], vec!["C"], vec!["D", "E", "F"]];
        assert_eq!(join_pages(&pages), "A B\n\nC\n\nD E F\n\n");
    }

    #[test]
    fn test_join_keeps_empty_pages() {
        let pages: Vec<Vec<&str>> = vec![vec!["A"], vec![], vec!["B"]];
        assert_eq!(join_pages(&pages), "A\n\n\n\nB\n\n");
    }

    #[test]
    fn test_join_no_pages() {
        let pages: Vec<Vec<String>> = Vec::new();
        assert_eq!(join_pages(&pages), "");
    }

    #[test]
    fn test_join_does_not_deduplicate() {
        let pages = vec![vec!["Exhibit 1", "Exhibit 1"], vec!["Exhibit 1"]];
        assert_eq!(join_pages(&pages), "Exhibit 1 Exhibit 1\n\nExhibit 1\n\n");
    }

    #[test]
    fn test_every_show_operator_yields_text() {
        let tj = Operation::new("Tj", vec![Object::string_literal("Q. Name?")]);
        let quote = Operation::new("'", vec![Object::string_literal("A. Jane Roe.")]);
        let double_quote = Operation::new(
            "\"",
            vec![0.into(), 0.into(), Object::string_literal("Q. Address?")],
        );

        assert_eq!(shown_text(&tj, None).unwrap(), "Q. Name?");
        assert_eq!(shown_text(&quote, None).unwrap(), "A. Jane Roe.");
        assert_eq!(shown_text(&double_quote, None).unwrap(), "Q. Address?");
    }

    #[test]
    fn test_tj_array_spacing() {
        let operation = Operation::new(
            "TJ",
            vec![Object::Array(vec![
                Object::string_literal("Exhi"),
                (-20).into(),
                Object::string_literal("bit"),
                (-250).into(),
                Object::string_literal("12"),
            ])],
        );
        assert_eq!(shown_text(&operation, None).unwrap(), "Exhibit 12");
    }

    #[test]
    fn test_non_text_operators_ignored() {
        let operation = Operation::new("Td", vec![72.into(), 700.into()]);
        assert!(shown_text(&operation, None).is_none());
    }

    #[test]
    fn test_invalid_bytes_fail() {
        let result = extract_text(b"this is not a pdf");
        assert!(matches!(result, Err(IngestError::InvalidPdf(_))));
    }
}
