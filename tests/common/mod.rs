#![allow(dead_code)]

mod fakes;
mod mocks;

pub use fakes::*;
pub use mocks::*;

use std::path::Path;

use byte_store::{
    StoreError,
    store::file::{DEFAULT_LOG_FILE, FileByteStore, FileByteStoreBuilder},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// File store writing `dump.log` under `dir`, with echo disabled.
pub fn file_store_in(dir: &Path) -> Result<FileByteStore, StoreError> {
    FileByteStoreBuilder::new()
        .path(dir.join(DEFAULT_LOG_FILE))
        .echo(false)
        .build()
}
