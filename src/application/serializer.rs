use crate::domain::document::Document;
use crate::domain::error::PayloadError;
use bytes::{Buf, Bytes};

/// One-shot reader over a serialized payload.
pub type PayloadReader = bytes::buf::Reader<Bytes>;

/// Encode a document as JSON indented by two spaces.
///
/// The layout is for readable test output only; consumers should decode
/// rather than compare bytes.
pub fn serialize(document: &Document) -> Result<Vec<u8>, PayloadError> {
    Ok(serde_json::to_vec_pretty(document)?)
}

/// Expose `bytes` as a reader that is consumed once.
pub fn wrap_as_readable(bytes: impl Into<Bytes>) -> PayloadReader {
    bytes.into().reader()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::io::Read;

    fn sample() -> Document {
        let mut document = Document::new();
        document.insert("name", "Ada");
        document.insert("age", 36);
        document.insert("score", 9.5);
        document.insert("active", true);
        document.insert("items", json!([{ "x": 1 }, { "x": 2 }]));
        document
    }

    #[test]
    fn test_serialize_uses_two_space_indent() {
        let bytes = serialize(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n  \""));
        assert!(text.contains("\n    {\n      \"x\": 1"));
    }

    #[test]
    fn test_serialized_document_decodes_back() {
        let document = sample();
        let bytes = serialize(&document).unwrap();
        let decoded: Document = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_empty_document() {
        let bytes = serialize(&Document::new()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_reader_is_single_pass() {
        let mut reader = wrap_as_readable(b"{\"a\": 1}".to_vec());
        let mut first = String::new();
        reader.read_to_string(&mut first).unwrap();
        assert_eq!(first, "{\"a\": 1}");

        let mut second = String::new();
        reader.read_to_string(&mut second).unwrap();
        assert!(second.is_empty());
    }
}
