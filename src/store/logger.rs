use log::info;

use crate::{StoreError, core::store::ByteStore};

/// Decorator logging every call before handing it to the wrapped store.
pub struct LoggerByteStore<'a> {
    inner: &'a dyn ByteStore,
}

impl<'a> LoggerByteStore<'a> {
    pub fn new(inner: &'a dyn ByteStore) -> Self {
        Self { inner }
    }
}

impl ByteStore for LoggerByteStore<'_> {
    fn inspect_first_byte(&self, buffer: &[u8]) -> Result<u8, StoreError> {
        let result = self.inner.inspect_first_byte(buffer);
        match &result {
            Ok(byte) => info!("Inspect {} bytes: {:#04x}", buffer.len(), byte),
            Err(error) => info!("Inspect {} bytes failed: {}", buffer.len(), error),
        }
        result
    }

    fn write(&self, content: &str) {
        info!("Write:{:?}", content);
        self.inner.write(content);
    }

    fn read(&self) -> String {
        let line = self.inner.read();
        info!("Read:{:?}", line);
        line
    }
}
