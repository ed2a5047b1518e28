// tapshare-rs/tapshare/src/types.rs

use derive_more::Display;

use crate::constants::VCARD_MEDIA_TYPE;

/// Contact record exchanged over NFC.
///
/// A flat value object: every field is optional, absent fields are omitted
/// from the encoded card. Created fresh by the caller for each share and
/// discarded after use; it carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    /// Formatted display name (the `FN:` line).
    pub name: Option<String>,
    /// Given name, packed into position 1 of the `N:` line.
    pub first_name: Option<String>,
    /// Family name, packed into position 0 of the `N:` line.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Telephone number.
    pub phone: Option<String>,
    /// Organization or company name.
    pub organization: Option<String>,
    /// Job title.
    pub title: Option<String>,
    /// Web page.
    pub url: Option<String>,
    /// Street address, packed into position 2 of the `ADR:` line.
    pub address: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
}

impl Contact {
    /// Start building a contact field by field.
    pub fn builder() -> ContactBuilder {
        ContactBuilder::new()
    }

    /// Whether no field is set at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.organization.is_none()
            && self.title.is_none()
            && self.url.is_none()
            && self.address.is_none()
            && self.note.is_none()
    }
}

/// Fluent builder for [`Contact`].
///
/// Every field is optional, so `build()` cannot fail.
#[derive(Debug, Clone, Default)]
pub struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatted display name.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.contact.name = Some(value.into());
        self
    }

    /// Set the given name.
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.contact.first_name = Some(value.into());
        self
    }

    /// Set the family name.
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.contact.last_name = Some(value.into());
        self
    }

    /// Set the email address.
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.contact.email = Some(value.into());
        self
    }

    /// Set the telephone number.
    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.contact.phone = Some(value.into());
        self
    }

    /// Set the organization.
    pub fn organization(mut self, value: impl Into<String>) -> Self {
        self.contact.organization = Some(value.into());
        self
    }

    /// Set the job title.
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.contact.title = Some(value.into());
        self
    }

    /// Set the web page.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.contact.url = Some(value.into());
        self
    }

    /// Set the street address.
    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.contact.address = Some(value.into());
        self
    }

    /// Set the free-form note.
    pub fn note(mut self, value: impl Into<String>) -> Self {
        self.contact.note = Some(value.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> Contact {
        self.contact
    }
}

/// Record type tag as reported by the platform reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RecordKind {
    /// Record with no payload.
    #[display(fmt = "empty")]
    Empty,
    /// Plain text payload.
    #[display(fmt = "text")]
    Text,
    /// URL payload.
    #[display(fmt = "url")]
    Url,
    /// MIME-typed binary payload.
    #[display(fmt = "mime")]
    Mime,
    /// Anything the platform reports that this crate does not model.
    #[display(fmt = "unknown")]
    Unknown,
}

impl RecordKind {
    /// Map a platform record-type string to a kind. Unrecognized names map
    /// to [`RecordKind::Unknown`] rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "empty" => Self::Empty,
            "text" => Self::Text,
            "url" => Self::Url,
            "mime" => Self::Mime,
            _ => Self::Unknown,
        }
    }
}

/// Single record inside an NDEF message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    /// Record type tag.
    pub kind: RecordKind,
    /// Media type, when the platform reports one.
    pub media_type: Option<String>,
    /// Raw payload bytes.
    pub data: Vec<u8>,
}

impl NdefRecord {
    /// Build a record from its parts.
    pub fn new(kind: RecordKind, media_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            kind,
            media_type,
            data,
        }
    }

    /// Text record carrying an encoded contact card.
    pub fn contact_card(card: &str) -> Self {
        Self {
            kind: RecordKind::Text,
            media_type: Some(VCARD_MEDIA_TYPE.to_string()),
            data: card.as_bytes().to_vec(),
        }
    }

    /// Whether this record carries a contact card: a text record whose
    /// media type marks it as `text/vcard`. Anything else is skipped by
    /// the read path.
    pub fn is_contact_card(&self) -> bool {
        self.kind == RecordKind::Text && self.media_type.as_deref() == Some(VCARD_MEDIA_TYPE)
    }

    /// Payload decoded as text. Invalid UTF-8 sequences are replaced, not
    /// rejected, matching how platform text decoders behave.
    pub fn text_payload(&self) -> String {
        crate::utils::decode_text(&self.data)
    }
}

/// Message as delivered by a reading event: zero or more records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NdefMessage {
    /// Records in platform delivery order.
    pub records: Vec<NdefRecord>,
}

impl NdefMessage {
    /// Build a message from a record list.
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    /// Message holding exactly one record, the shape every write uses.
    pub fn single(record: NdefRecord) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// Whether the message carries no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
