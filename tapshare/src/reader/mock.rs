// tapshare-rs/tapshare/src/reader/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::reader::traits::{NfcProvider, NfcReader};
use crate::types::NdefMessage;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    scans: usize,
    written: Vec<NdefMessage>,
    scan_failures: usize,
    write_failures: usize,
}

/// Mock reader for unit tests. It records written messages and counts
/// successful scans; failures can be injected ahead of time.
///
/// Clones share one underlying state, so a test can keep an inspection
/// handle while the wrapper owns the reader it was handed.
#[derive(Debug, Clone, Default)]
pub struct MockReader {
    state: Rc<RefCell<MockState>>,
}

impl MockReader {
    /// Create a reader with fresh state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` scan calls fail.
    pub fn fail_next_scans(&self, n: usize) {
        self.state.borrow_mut().scan_failures = n;
    }

    /// Make the next `n` write calls fail.
    pub fn fail_next_writes(&self, n: usize) {
        self.state.borrow_mut().write_failures = n;
    }

    /// Number of scans that started successfully.
    pub fn scan_count(&self) -> usize {
        self.state.borrow().scans
    }

    /// Every message written so far, in order.
    pub fn written(&self) -> Vec<NdefMessage> {
        self.state.borrow().written.clone()
    }

    /// The most recently written message, if any.
    pub fn last_written(&self) -> Option<NdefMessage> {
        self.state.borrow().written.last().cloned()
    }
}

impl NfcReader for MockReader {
    fn scan(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.scan_failures > 0 {
            state.scan_failures -= 1;
            return Err(Error::Scan("mock scan failure".to_string()));
        }
        state.scans += 1;
        Ok(())
    }

    fn write(&mut self, message: &NdefMessage) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.write_failures > 0 {
            state.write_failures -= 1;
            return Err(Error::Write("mock write failure".to_string()));
        }
        if message.is_empty() {
            return Err(Error::InvalidMessage("no records".to_string()));
        }
        state.written.push(message.clone());
        Ok(())
    }
}

/// Mock provider for unit tests. Hands out readers sharing one state so
/// the test keeps visibility after the provider moves into the wrapper.
#[derive(Debug)]
pub struct MockProvider {
    supported: bool,
    acquire_failures: usize,
    reader: MockReader,
}

impl MockProvider {
    /// Provider for an environment with NFC support.
    pub fn new() -> Self {
        Self {
            supported: true,
            acquire_failures: 0,
            reader: MockReader::new(),
        }
    }

    /// Provider for an environment without NFC support.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    /// Make the next `n` acquire calls fail even though support is present.
    pub fn fail_next_acquires(&mut self, n: usize) {
        self.acquire_failures = n;
    }

    /// Inspection handle onto the shared reader state.
    pub fn reader(&self) -> &MockReader {
        &self.reader
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl NfcProvider for MockProvider {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn acquire(&mut self) -> Result<Box<dyn NfcReader>> {
        if !self.supported {
            return Err(Error::Unsupported);
        }
        if self.acquire_failures > 0 {
            self.acquire_failures -= 1;
            return Err(Error::Acquire("mock acquire failure".to_string()));
        }
        Ok(Box::new(self.reader.clone()))
    }
}
