//! # File Byte Store
//!
//! The default [`ByteStore`]: writes go to a single file that is overwritten on
//! every call, reads walk that file line by line. Every line read, and every
//! inspected byte, is echoed to a sink (standard output unless configured).
//!
//! ## Examples
//!
//! ```rust
//! use byte_store::core::store::ByteStore;
//! use byte_store::store::file::FileByteStoreBuilder;
//! use std::env::temp_dir;
//!
//! # fn example() -> Result<(), byte_store::StoreError> {
//! let store = FileByteStoreBuilder::new()
//!     .path(temp_dir().join("file_store_doc.log"))
//!     .build()?;
//!
//! store.write("first\nsecond");
//! assert_eq!(store.read(), "second");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::{
    cell::RefCell,
    fs::File,
    io::{self, BufRead, BufReader, Stdout, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{StoreError, core::store::ByteStore};

/// File used when no path is configured.
pub const DEFAULT_LOG_FILE: &str = "dump.log";

/// A [`ByteStore`] persisting to a single flat text file.
///
/// `W` is the echo sink. Writes to it happen through `&self`, hence the
/// `RefCell`; the store is meant for single-threaded use.
pub struct FileByteStore<W: Write = Stdout> {
    path: PathBuf,
    echo: bool,
    sink: RefCell<W>,
}

impl<W: Write> FileByteStore<W> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_echo_enabled(&self) -> bool {
        self.echo
    }

    /// Writes `bytes` followed by a newline to the sink in a single call.
    fn echo_line(&self, bytes: &[u8]) {
        if !self.echo {
            return;
        }

        let mut line = Vec::with_capacity(bytes.len() + 1);
        line.extend_from_slice(bytes);
        line.push(b'\n');

        let mut sink = self.sink.borrow_mut();
        if let Err(error) = sink.write_all(&line) {
            warn!("Unable to echo line: {}", error);
        }
    }

    fn flush_echo(&self) {
        if !self.echo {
            return;
        }

        if let Err(error) = self.sink.borrow_mut().flush() {
            warn!("Unable to flush echo sink: {}", error);
        }
    }

    /// Reads `reader` line by line, echoing each line, and returns the last one.
    ///
    /// A trailing newline leaves an empty last line behind it.
    fn read_lines<R: BufRead>(&self, mut reader: R) -> io::Result<String> {
        let mut last_line = String::new();
        let mut terminated = true;
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                if terminated {
                    last_line.clear();
                }
                break;
            }

            terminated = buffer.last() == Some(&b'\n');
            if terminated {
                buffer.pop();
            }

            self.echo_line(&buffer);
            last_line = String::from_utf8_lossy(&buffer).into_owned();
        }

        Ok(last_line)
    }
}

impl<W: Write> ByteStore for FileByteStore<W> {
    fn inspect_first_byte(&self, buffer: &[u8]) -> Result<u8, StoreError> {
        let first = *buffer.first().ok_or_else(|| {
            StoreError::InvalidArgument("cannot inspect the first byte of an empty buffer".into())
        })?;

        self.echo_line(&[first]);
        self.flush_echo();

        Ok(first)
    }

    fn write(&self, content: &str) {
        let mut file = match File::create(&self.path) {
            Ok(file) => file,
            Err(error) => {
                warn!("Unable to open {} for writing: {}", self.path.display(), error);
                return;
            }
        };

        match file.write_all(content.as_bytes()) {
            Ok(()) => debug!("Wrote {} bytes to {}", content.len(), self.path.display()),
            Err(error) => warn!("Unable to write to {}: {}", self.path.display(), error),
        }
    }

    fn read(&self) -> String {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) => {
                debug!("Unable to open {} for reading: {}", self.path.display(), error);
                return String::new();
            }
        };

        let last_line = match self.read_lines(BufReader::new(file)) {
            Ok(line) => line,
            Err(error) => {
                warn!("Unable to read {}: {}", self.path.display(), error);
                String::new()
            }
        };

        self.flush_echo();

        last_line
    }
}

/// Builder for [`FileByteStore`].
///
/// # Examples
///
/// ```rust
/// use byte_store::store::file::{FileByteStoreBuilder, DEFAULT_LOG_FILE};
/// use std::path::Path;
///
/// # fn example() -> Result<(), byte_store::StoreError> {
/// let store = FileByteStoreBuilder::new().echo(false).build()?;
///
/// assert_eq!(store.path(), Path::new(DEFAULT_LOG_FILE));
/// assert!(!store.is_echo_enabled());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct FileByteStoreBuilder {
    path: PathBuf,
    echo: bool,
}

impl Default for FileByteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FileByteStoreBuilder {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            echo: true,
        }
    }

    /// Sets the file the store writes to and reads from.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Enables or disables echoing read lines and inspected bytes.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Builds a store echoing to standard output.
    pub fn build(self) -> Result<FileByteStore<Stdout>, StoreError> {
        self.echo_to(io::stdout())
    }

    /// Builds a store echoing to `sink`.
    ///
    /// # Errors
    /// - `StoreError::InvalidArgument` when the configured path is empty
    pub fn echo_to<W: Write>(self, sink: W) -> Result<FileByteStore<W>, StoreError> {
        if self.path.as_os_str().is_empty() {
            return Err(StoreError::InvalidArgument(
                "store path must not be empty".to_string(),
            ));
        }

        Ok(FileByteStore {
            path: self.path,
            echo: self.echo,
            sink: RefCell::new(sink),
        })
    }
}
