// tapshare-rs/tapshare/src/vcard/decode.rs

use crate::constants::{
    TAG_ADR, TAG_EMAIL, TAG_FN, TAG_N, TAG_NOTE, TAG_ORG, TAG_TEL, TAG_TITLE, TAG_URL,
};
use crate::types::Contact;

/// Parse a card string back into a contact.
///
/// Each line is matched against the known tag prefixes, first match wins,
/// case-sensitive. Unrecognized lines (including the `BEGIN:`/`VERSION:`/
/// `END:` framing) are silently ignored, so any input yields a contact
/// without error. Values are taken verbatim after the prefix, with no
/// trimming and no unescaping. Only fields whose tags appear in the input
/// are set.
pub fn decode(card: &str) -> Contact {
    let mut contact = Contact::default();

    for line in card.split('\n') {
        if let Some(rest) = line.strip_prefix(TAG_FN) {
            contact.name = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_N) {
            // Positions 0 and 1 of the structured name; missing positions
            // become empty strings, not absent fields.
            let mut parts = rest.split(';');
            contact.last_name = Some(parts.next().unwrap_or("").to_string());
            contact.first_name = Some(parts.next().unwrap_or("").to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_EMAIL) {
            contact.email = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_TEL) {
            contact.phone = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_ORG) {
            contact.organization = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_TITLE) {
            contact.title = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_URL) {
            contact.url = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_ADR) {
            // Street address sits at positional field 2; the rest of the
            // ADR structure is discarded.
            contact.address = Some(rest.split(';').nth(2).unwrap_or("").to_string());
        } else if let Some(rest) = line.strip_prefix(TAG_NOTE) {
            contact.note = Some(rest.to_string());
        }
    }

    contact
}
