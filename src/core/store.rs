use crate::error::StoreError;

/// The byte/string read-write interface.
///
/// Implementations are free to replace any of the three operations on their own.
/// The default file-backed behavior lives in [`crate::store::file::FileByteStore`];
/// a type that only wants to change one operation wraps it and delegates the rest.
pub trait ByteStore {
    /// Returns the first byte of `buffer`.
    ///
    /// # Errors
    /// - `StoreError::InvalidArgument` when `buffer` is empty
    fn inspect_first_byte(&self, buffer: &[u8]) -> Result<u8, StoreError>;

    /// Overwrites the store's file with `content`.
    ///
    /// Failures are not reported to the caller.
    fn write(&self, content: &str);

    /// Reads the store's file line by line and returns the last line read.
    ///
    /// Returns an empty string when the file is missing or empty.
    fn read(&self) -> String;
}
