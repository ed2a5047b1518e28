// tapshare-rs/tapshare/src/utils/text.rs
//! Text helpers for record payloads.

/// Decode a record payload as UTF-8 text.
///
/// Invalid sequences are replaced with U+FFFD rather than rejected,
/// matching how platform text decoders handle incoming tag data.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
