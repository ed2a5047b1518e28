// fixtures.rs — commonly used contacts, cards and messages
#![allow(dead_code)]

use tapshare::types::{Contact, NdefMessage, NdefRecord, RecordKind};

pub fn full_contact() -> Contact {
    Contact::builder()
        .name("Jane Doe")
        .first_name("Jane")
        .last_name("Doe")
        .email("jane@x.com")
        .phone("555-1234")
        .organization("Acme Corp")
        .title("Engineer")
        .url("https://jane.example")
        .address("123 Main St")
        .note("met at the conference")
        .build()
}

pub fn jane_card() -> String {
    [
        "BEGIN:VCARD",
        "VERSION:3.0",
        "FN:Jane Doe",
        "N:Doe;Jane;;;",
        "TEL:555-1234",
        "END:VCARD",
    ]
    .join("\n")
}

pub fn card_record(card: &str) -> NdefRecord {
    NdefRecord::contact_card(card)
}

pub fn card_message(card: &str) -> NdefMessage {
    NdefMessage::single(card_record(card))
}

pub fn url_record() -> NdefRecord {
    NdefRecord::new(RecordKind::Url, None, b"https://peer.example".to_vec())
}

pub fn plain_text_record() -> NdefRecord {
    NdefRecord::new(
        RecordKind::Text,
        Some("text/plain".to_string()),
        b"hello".to_vec(),
    )
}
