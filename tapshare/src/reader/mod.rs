// tapshare-rs/tapshare/src/reader/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MockProvider, MockReader};
pub use traits::{NfcProvider, NfcReader};
