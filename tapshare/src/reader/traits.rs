// tapshare-rs/tapshare/src/reader/traits.rs

use crate::types::NdefMessage;
use crate::Result;

/// Reader capability: abstracts the platform radio surface away from the
/// sharing lifecycle. One reader is owned per wrapper instance, never
/// shared or duplicated.
pub trait NfcReader {
    /// Begin listening for nearby tags and peers.
    fn scan(&mut self) -> Result<()>;

    /// Push a message to a nearby tag or peer. A single atomic platform
    /// call from the caller's perspective; there is no partial write.
    fn write(&mut self, message: &NdefMessage) -> Result<()>;
}

/// Provider abstracts how a reader capability is discovered and acquired,
/// so environments without NFC and deterministic test fakes go through the
/// same code path as a real platform binding.
pub trait NfcProvider {
    /// Whether this environment exposes an NFC reader at all. `false` is a
    /// normal, expected outcome, not an error.
    fn is_supported(&self) -> bool;

    /// Acquire the reader capability. Returns [`crate::Error::Unsupported`]
    /// when the environment has none, or an acquisition error when the
    /// platform refuses.
    fn acquire(&mut self) -> Result<Box<dyn NfcReader>>;
}
