// tapshare-rs/tapshare/src/constants.rs
//! Card format constants used across the crate.

/// First line of every encoded card.
pub const VCARD_BEGIN: &str = "BEGIN:VCARD";

/// Version line emitted right after [`VCARD_BEGIN`].
pub const VCARD_VERSION: &str = "VERSION:3.0";

/// Last line of every encoded card.
pub const VCARD_END: &str = "END:VCARD";

/// Media type marking a text record as a contact card.
pub const VCARD_MEDIA_TYPE: &str = "text/vcard";

/// Formatted-name tag. Always emitted, even for an empty contact.
pub const TAG_FN: &str = "FN:";

/// Structured-name tag packing `last;first;;;`. Always emitted.
pub const TAG_N: &str = "N:";

/// Email tag.
pub const TAG_EMAIL: &str = "EMAIL:";

/// Telephone tag.
pub const TAG_TEL: &str = "TEL:";

/// Organization tag.
pub const TAG_ORG: &str = "ORG:";

/// Job title tag.
pub const TAG_TITLE: &str = "TITLE:";

/// URL tag.
pub const TAG_URL: &str = "URL:";

/// Address tag packing the street address at positional field 2.
pub const TAG_ADR: &str = "ADR:";

/// Free-form note tag.
pub const TAG_NOTE: &str = "NOTE:";
