// Contact sharing walkthrough against the in-crate mock provider.

// The mock stands in for a platform NFC binding; a real integration
// implements NfcProvider/NfcReader over the host radio API and feeds
// reading events into ContactShare::handle_reading.

use tapshare::prelude::*;
use tapshare::reader::MockProvider;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let provider = MockProvider::new();
    let peer = provider.reader().clone();
    let mut share = ContactShare::new(Box::new(provider));

    if share.initialize() {
        println!("Status: NFC Ready. You can share contacts now.");
    } else {
        println!("Status: NFC is not available on this device.");
        return Ok(());
    }

    share.register_receive_callback(|contact| {
        println!("Received contact: {:#?}", contact);
    });

    let contact = Contact::builder()
        .first_name("Jane")
        .last_name("Doe")
        .name("Jane Doe")
        .email("jane@x.com")
        .phone("555-1234")
        .organization("Acme Corp")
        .title("Engineer")
        .build();

    println!("Status: Approach an NFC-enabled device to share the contact...");
    if share.write(&contact) {
        println!("Status: Contact shared successfully!");
    } else {
        println!("Status: Failed to share contact. Try again.");
    }

    // Loop the shared card back as if a peer had beamed it to us.
    let beamed = peer.last_written().expect("the write above succeeded");
    share.handle_reading(&beamed);

    Ok(())
}
