//! Fake store overriding `read` only.
use std::io::Stdout;

use byte_store::{StoreError, core::store::ByteStore, store::file::FileByteStore};

pub const FAKE_LINE: &str = "Child hello!";

/// Delegates inspection and writing to a real file store, answers every read
/// with [`FAKE_LINE`].
pub struct FakeByteStore {
    inner: FileByteStore<Stdout>,
}

impl FakeByteStore {
    pub fn new(inner: FileByteStore<Stdout>) -> Self {
        Self { inner }
    }
}

impl ByteStore for FakeByteStore {
    fn inspect_first_byte(&self, buffer: &[u8]) -> Result<u8, StoreError> {
        self.inner.inspect_first_byte(buffer)
    }

    fn write(&self, content: &str) {
        self.inner.write(content);
    }

    fn read(&self) -> String {
        FAKE_LINE.to_string()
    }
}
