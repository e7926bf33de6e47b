//! Mocks of the store interface and of the echo sink.
use byte_store::{StoreError, core::store::ByteStore};
use mockall::mock;

use std::io::{self, Write};

mock! {
    pub ByteStore {}
    impl ByteStore for ByteStore {
        fn inspect_first_byte(&self, buffer: &[u8]) -> Result<u8, StoreError>;
        fn write(&self, content: &str);
        fn read(&self) -> String;
    }
}

mock! {
    pub File {}
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}
