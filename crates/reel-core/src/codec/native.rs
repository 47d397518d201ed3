//! Native JSON format
//!
//! The native format is what the backing file holds: a pretty-printed JSON
//! array of `{"id", "title", "url"}` objects indented with four spaces.
//! It is the only format that can be read back.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::debug;

use super::CodecResult;
use crate::models::Collection;

const INDENT: &[u8] = b"    ";

/// Encode a collection as pretty-printed JSON
///
/// An empty collection encodes as `[]`. No trailing newline is written.
pub fn encode(collection: &Collection) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    collection.serialize(&mut serializer)?;
    Ok(buf)
}

/// Decode a collection, degrading to empty
///
/// Anything that is not a JSON array of entries yields an empty collection.
pub fn decode(bytes: &[u8]) -> Collection {
    try_decode(bytes).unwrap_or_default()
}

/// Decode an import payload
///
/// Returns `None` when the payload is blank, is not valid JSON, or is not an
/// array of entries. The caller keeps its current collection in that case.
pub fn decode_import(payload: &str) -> Option<Collection> {
    let payload = payload.trim();
    if payload.is_empty() {
        return None;
    }
    try_decode(payload.as_bytes())
}

/// Decode a collection, reporting failure as `None`
pub fn try_decode(bytes: &[u8]) -> Option<Collection> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            debug!("Payload is not valid JSON: {}", e);
            return None;
        }
    };

    if !value.is_array() {
        debug!("Payload top-level value is not an array");
        return None;
    }

    match serde_json::from_value::<Collection>(value) {
        Ok(collection) => Some(collection),
        Err(e) => {
            debug!("Payload array does not hold entries: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn sample() -> Collection {
        vec![
            Entry::with_id(1700000000, "Movie", "http://example.com/video"),
            Entry::with_id(1700000001, "Clip", "http://example.com/clip"),
        ]
        .into()
    }

    #[test]
    fn test_encode_empty() {
        let bytes = encode(&Collection::new()).unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_encode_layout() {
        let collection: Collection = vec![Entry::with_id(3, "A", "http://a")].into();
        let text = String::from_utf8(encode(&collection).unwrap()).unwrap();
        let expected = "[\n    {\n        \"id\": 3,\n        \"title\": \"A\",\n        \"url\": \"http://a\"\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let collection = sample();
        let decoded = decode(&encode(&collection).unwrap());
        assert_eq!(decoded, collection);
    }

    #[test]
    fn test_decode_non_array_is_empty() {
        assert!(decode(br#"{"id": 1, "title": "A", "url": "B"}"#).is_empty());
        assert!(decode(b"42").is_empty());
        assert!(decode(b"null").is_empty());
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode(b"not json at all").is_empty());
        assert!(decode(b"").is_empty());
        assert!(decode(&[0xff, 0xfe, 0x00]).is_empty());
    }

    #[test]
    fn test_decode_array_of_non_entries_is_empty() {
        assert!(decode(br#"[1, 2, 3]"#).is_empty());
        assert!(decode(br#"[{"id": "x", "title": "A", "url": "B"}]"#).is_empty());
    }

    #[test]
    fn test_decode_compact_json() {
        let decoded = decode(br#"[{"id":123456789,"title":"Movie","url":"http://example.com/video"}]"#);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.as_slice()[0].id, 123456789);
    }

    #[test]
    fn test_decode_import_trims_payload() {
        let payload = "\n  [{\"id\": 1, \"title\": \"A\", \"url\": \"http://a\"}]  \n";
        let imported = decode_import(payload).unwrap();
        assert_eq!(imported.len(), 1);
    }

    #[test]
    fn test_decode_import_rejects_blank_and_invalid() {
        assert!(decode_import("").is_none());
        assert!(decode_import("   ").is_none());
        assert!(decode_import("[{broken").is_none());
        assert!(decode_import(r#"{"not": "a list"}"#).is_none());
    }

    #[test]
    fn test_decode_import_accepts_empty_array() {
        let imported = decode_import("[]").unwrap();
        assert!(imported.is_empty());
    }

    #[test]
    fn test_unicode_and_quotes_roundtrip() {
        let collection: Collection = vec![Entry::with_id(
            9,
            "Caffè \"speciale\" / O'Brien",
            "http://example.com/a?b=c&d=é",
        )]
        .into();
        assert_eq!(decode(&encode(&collection).unwrap()), collection);
    }
}
