// tapshare-rs/tapshare/src/prelude.rs

pub use crate::constants::VCARD_MEDIA_TYPE;
pub use crate::reader::{NfcProvider, NfcReader};
pub use crate::share::{ContactShare, ReceiveCallback};
pub use crate::vcard::{decode, encode};
pub use crate::{
    Contact, ContactBuilder, Error, NdefMessage, NdefRecord, RecordKind, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::decode_text;
