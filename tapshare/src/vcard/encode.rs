// tapshare-rs/tapshare/src/vcard/encode.rs

use crate::constants::{
    TAG_ADR, TAG_EMAIL, TAG_FN, TAG_N, TAG_NOTE, TAG_ORG, TAG_TEL, TAG_TITLE, TAG_URL, VCARD_BEGIN,
    VCARD_END, VCARD_VERSION,
};
use crate::types::Contact;

/// Treat both absent and empty-string fields as "not set".
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Encode a contact as a card string.
///
/// Lines are emitted in a fixed order (FN, N, EMAIL, TEL, ORG, TITLE, URL,
/// ADR, NOTE) and joined with `\n` without a trailing newline. FN and N are
/// always present, defaulting to empty values; every other line appears
/// only when its source field is non-empty. A fully empty contact still
/// produces a minimal valid card.
pub fn encode(contact: &Contact) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(12);

    lines.push(VCARD_BEGIN.to_string());
    lines.push(VCARD_VERSION.to_string());
    lines.push(format!(
        "{}{}",
        TAG_FN,
        contact.name.as_deref().unwrap_or("")
    ));
    lines.push(format!(
        "{}{};{};;;",
        TAG_N,
        contact.last_name.as_deref().unwrap_or(""),
        contact.first_name.as_deref().unwrap_or("")
    ));

    if let Some(value) = non_empty(&contact.email) {
        lines.push(format!("{}{}", TAG_EMAIL, value));
    }
    if let Some(value) = non_empty(&contact.phone) {
        lines.push(format!("{}{}", TAG_TEL, value));
    }
    if let Some(value) = non_empty(&contact.organization) {
        lines.push(format!("{}{}", TAG_ORG, value));
    }
    if let Some(value) = non_empty(&contact.title) {
        lines.push(format!("{}{}", TAG_TITLE, value));
    }
    if let Some(value) = non_empty(&contact.url) {
        lines.push(format!("{}{}", TAG_URL, value));
    }
    if let Some(value) = non_empty(&contact.address) {
        // Street address lives at positional field 2 of the ADR structure.
        lines.push(format!("{};;{};;;", TAG_ADR, value));
    }
    if let Some(value) = non_empty(&contact.note) {
        lines.push(format!("{}{}", TAG_NOTE, value));
    }

    lines.push(VCARD_END.to_string());
    lines.join("\n")
}
