#[path = "../common/mod.rs"]
mod common;

use tapshare::types::Contact;
use tapshare::vcard;

#[test]
fn known_card_decodes_to_expected_fields() {
    let contact = vcard::decode(&common::jane_card());

    assert_eq!(contact.name.as_deref(), Some("Jane Doe"));
    assert_eq!(contact.last_name.as_deref(), Some("Doe"));
    assert_eq!(contact.first_name.as_deref(), Some("Jane"));
    assert_eq!(contact.phone.as_deref(), Some("555-1234"));
    assert!(contact.email.is_none());
    assert!(contact.address.is_none());
}

#[test]
fn empty_and_framing_only_inputs_decode_without_error() {
    assert_eq!(vcard::decode(""), Contact::default());
    assert_eq!(
        vcard::decode("BEGIN:VCARD\nVERSION:3.0\nEND:VCARD"),
        Contact::default()
    );
}

#[test]
fn absent_tags_leave_fields_unset() {
    let contact = vcard::decode("FN:Jane Doe");
    assert_eq!(contact.name.as_deref(), Some("Jane Doe"));
    assert!(contact.first_name.is_none());
    assert!(contact.last_name.is_none());
    assert!(contact.email.is_none());
    assert!(contact.phone.is_none());
    assert!(contact.organization.is_none());
    assert!(contact.title.is_none());
    assert!(contact.url.is_none());
    assert!(contact.address.is_none());
    assert!(contact.note.is_none());
}

#[test]
fn tag_matching_is_case_sensitive() {
    let contact = vcard::decode("email:jane@x.com\nTel:555");
    assert!(contact.email.is_none());
    assert!(contact.phone.is_none());
}

#[test]
fn later_duplicate_tag_wins() {
    let contact = vcard::decode("TEL:111\nTEL:222");
    assert_eq!(contact.phone.as_deref(), Some("222"));
}

#[test]
fn address_with_fewer_positions_defaults_to_empty() {
    let contact = vcard::decode("ADR:;home");
    assert_eq!(contact.address.as_deref(), Some(""));
}
