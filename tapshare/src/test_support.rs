//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock-provider setup so tests across the
//! crate and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::reader::{MockProvider, MockReader};
use crate::share::ContactShare;
use crate::types::{Contact, NdefMessage, NdefRecord};

/// A contact with every field populated.
#[doc(hidden)]
pub fn sample_contact() -> Contact {
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

/// Build an initialized wrapper backed by a mock provider, returning the
/// reader inspection handle alongside it.
#[doc(hidden)]
pub fn ready_share() -> (ContactShare, MockReader) {
    let provider = MockProvider::new();
    let handle = provider.reader().clone();
    let mut share = ContactShare::new(Box::new(provider));
    assert!(share.initialize(), "mock initialization cannot fail");
    (share, handle)
}

/// Wrap a card string as the single-record message a reading event carries.
#[doc(hidden)]
pub fn card_message(card: &str) -> NdefMessage {
    NdefMessage::single(NdefRecord::contact_card(card))
}
