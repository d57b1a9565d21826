//! Document info dictionary

use crate::{ExportError, Result};
use lopdf::{Dictionary, Document, Object, StringFormat};
use std::path::Path;

/// Info dictionary entries written into an exported PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub creator: String,
}

impl DocumentInfo {
    /// Info for a client's proposal
    pub fn for_client(client_name: &str) -> Self {
        Self {
            title: format!("Offshore Asset Allocation - {client_name}"),
            author: "Private Banking Division".to_string(),
            subject: "Offshore Asset Allocation".to_string(),
            creator: concat!("proposal-kit ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Write `info` into the PDF at `path` in place
///
/// Returns the page count. A document without pages is rejected, since a
/// rasterizer that produced one has failed silently.
pub fn stamp_document_info<P: AsRef<Path>>(path: P, info: &DocumentInfo) -> Result<usize> {
    let path = path.as_ref();
    let mut doc =
        Document::load(path).map_err(|e| ExportError::InvalidOutput(e.to_string()))?;

    let pages = doc.get_pages().len();
    if pages == 0 {
        return Err(ExportError::InvalidOutput(
            "document has no pages".to_string(),
        ));
    }

    let mut dict = Dictionary::new();
    dict.set("Title", text_string(&info.title));
    dict.set("Author", text_string(&info.author));
    dict.set("Subject", text_string(&info.subject));
    dict.set("Creator", text_string(&info.creator));
    let info_id = doc.add_object(Object::Dictionary(dict));
    doc.trailer.set("Info", info_id);

    doc.save(path)
        .map_err(|e| ExportError::InvalidOutput(e.to_string()))?;

    tracing::debug!(path = %path.display(), pages, "stamped document info");
    Ok(pages)
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_text_string() {
        match text_string("Proposal") {
            Object::String(bytes, StringFormat::Literal) => assert_eq!(bytes, b"Proposal".to_vec()),
            other => panic!("unexpected object: {:?}", other),
        }
    }

    #[test]
    fn test_cjk_text_string() {
        match text_string("陈") {
            Object::String(bytes, StringFormat::Hexadecimal) => {
                assert_eq!(bytes, vec![0xFE, 0xFF, 0x96, 0x48])
            }
            other => panic!("unexpected object: {:?}", other),
        }
    }

    #[test]
    fn test_info_for_client() {
        let info = DocumentInfo::for_client("陈总");
        assert_eq!(info.title, "Offshore Asset Allocation - 陈总");
        assert!(info.creator.starts_with("proposal-kit "));
    }
}
