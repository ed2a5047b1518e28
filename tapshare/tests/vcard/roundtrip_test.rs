#[path = "../common/mod.rs"]
mod common;

use tapshare::vcard;

#[test]
fn fully_populated_contact_round_trips_on_every_field() {
    let contact = common::full_contact();
    let decoded = vcard::decode(&vcard::encode(&contact));
    assert_eq!(decoded, contact);
}

#[test]
fn round_trip_of_empty_contact_yields_empty_name_fields_only() {
    let decoded = vcard::decode(&vcard::encode(&tapshare::Contact::default()));

    // FN and N are always emitted, so their targets come back as empty
    // strings rather than staying unset.
    assert_eq!(decoded.name.as_deref(), Some(""));
    assert_eq!(decoded.first_name.as_deref(), Some(""));
    assert_eq!(decoded.last_name.as_deref(), Some(""));

    assert!(decoded.email.is_none());
    assert!(decoded.phone.is_none());
    assert!(decoded.organization.is_none());
    assert!(decoded.title.is_none());
    assert!(decoded.url.is_none());
    assert!(decoded.address.is_none());
    assert!(decoded.note.is_none());
}

#[test]
fn name_packing_rules_match_exactly() {
    let contact = tapshare::Contact::builder()
        .first_name("Jane")
        .last_name("Doe")
        .build();
    let card = vcard::encode(&contact);
    assert!(card.contains("N:Doe;Jane;;;"));

    let decoded = vcard::decode(&card);
    assert_eq!(decoded.last_name.as_deref(), Some("Doe"));
    assert_eq!(decoded.first_name.as_deref(), Some("Jane"));
}
