// tapshare-rs/tapshare/src/error.rs

use thiserror::Error;

/// Common error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The environment exposes no NFC reader capability at all. This is a
    /// normal outcome on most devices, not a fault.
    #[error("nfc is not supported in this environment")]
    Unsupported,

    /// An operation that requires a live reader ran before a successful
    /// initialization.
    #[error("nfc reader is not initialized")]
    NotReady,

    /// The platform refused to hand out the reader capability.
    #[error("failed to acquire nfc reader: {0}")]
    Acquire(String),

    /// The platform failed to start listening for tags.
    #[error("failed to start nfc scan: {0}")]
    Scan(String),

    /// The platform failed to push a message to the peer.
    #[error("failed to write nfc message: {0}")]
    Write(String),

    /// A message handed to the reader was structurally unusable.
    #[error("invalid ndef message: {0}")]
    InvalidMessage(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
