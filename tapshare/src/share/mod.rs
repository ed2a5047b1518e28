// tapshare-rs/tapshare/src/share/mod.rs

//! Contact sharing lifecycle.
//!
//! [`ContactShare`] sequences the platform reader's scan/read/write
//! lifecycle: initialize once, then write cards and surface incoming ones
//! through a single registered callback. All radio I/O is delegated
//! to the injected [`NfcProvider`]/[`NfcReader`] capability; failures are
//! logged and surfaced as `false`, never propagated as panics, and no
//! retry is attempted at this layer.

use log::{debug, error, info};

use crate::reader::{NfcProvider, NfcReader};
use crate::types::{Contact, NdefMessage, NdefRecord};
use crate::{vcard, Error, Result};

/// Callback invoked with each decoded incoming contact.
pub type ReceiveCallback = Box<dyn FnMut(Contact)>;

/// Lifecycle wrapper over a platform NFC reader capability.
///
/// State machine: not available until a successful [`initialize`], then
/// available for any number of writes and reading events. There is no
/// teardown; a failed initialization may simply be retried.
///
/// [`initialize`]: ContactShare::initialize
pub struct ContactShare {
    provider: Box<dyn NfcProvider>,
    reader: Option<Box<dyn NfcReader>>,
    available: bool,
    on_receive: Option<ReceiveCallback>,
}

impl ContactShare {
    /// Create a wrapper around the given capability provider. No platform
    /// interaction happens until [`initialize`](ContactShare::initialize).
    pub fn new(provider: Box<dyn NfcProvider>) -> Self {
        Self {
            provider,
            reader: None,
            available: false,
            on_receive: None,
        }
    }

    /// Check for the platform capability, acquire it and start scanning.
    ///
    /// Returns `false` when the environment has no NFC support or when
    /// acquisition or the scan itself fails; either way the failure is
    /// logged and the wrapper stays unavailable. Calling again after a
    /// success is a no-op returning `true`: the capability is acquired and
    /// scanning at most once.
    pub fn initialize(&mut self) -> bool {
        if self.available {
            debug!("nfc already initialized, skipping re-scan");
            return true;
        }

        if !self.provider.is_supported() {
            error!("nfc is not supported in this environment");
            return false;
        }

        match self.try_initialize() {
            Ok(()) => {
                info!("nfc initialized successfully");
                true
            }
            Err(err) => {
                error!("error initializing nfc: {}", err);
                false
            }
        }
    }

    fn try_initialize(&mut self) -> Result<()> {
        let mut reader = self.provider.acquire()?;
        reader.scan()?;
        self.reader = Some(reader);
        self.available = true;
        Ok(())
    }

    /// Share a contact with a nearby device.
    ///
    /// Requires a prior successful initialization; otherwise logs and
    /// returns `false` without touching the platform. The contact is
    /// encoded as a card and pushed as a single `text`/`text/vcard`
    /// record. A platform failure is logged and surfaced as `false`.
    pub fn write(&mut self, contact: &Contact) -> bool {
        if !self.available {
            error!("nfc is not available or not initialized");
            return false;
        }

        match self.try_write(contact) {
            Ok(()) => {
                info!("contact shared successfully");
                true
            }
            Err(err) => {
                error!("error sharing contact: {}", err);
                false
            }
        }
    }

    fn try_write(&mut self, contact: &Contact) -> Result<()> {
        let card = vcard::encode(contact);
        let message = NdefMessage::single(NdefRecord::contact_card(&card));
        let reader = self.reader.as_mut().ok_or(Error::NotReady)?;
        reader.write(&message)
    }

    /// Register the callback invoked for each received contact.
    ///
    /// There is a single callback slot; registering again replaces the
    /// previous callback.
    pub fn register_receive_callback<F>(&mut self, callback: F)
    where
        F: FnMut(Contact) + 'static,
    {
        self.on_receive = Some(Box::new(callback));
    }

    /// Deliver a platform reading event.
    ///
    /// The host's platform binding calls this once per incoming message.
    /// Records that are not contact cards are skipped silently; each card
    /// record is decoded and handed to the registered callback. Repeated
    /// reads of the same tag fire the callback again; there is no
    /// deduplication. Ignored entirely before a successful initialization.
    pub fn handle_reading(&mut self, message: &NdefMessage) {
        if !self.available {
            return;
        }

        for record in &message.records {
            if !record.is_contact_card() {
                continue;
            }
            let contact = vcard::decode(&record.text_payload());
            if let Some(callback) = self.on_receive.as_mut() {
                callback(contact);
            }
        }
    }

    /// Current availability.
    pub fn is_ready(&self) -> bool {
        self.available
    }
}
