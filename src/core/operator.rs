use std::time::{Duration, Instant};

use log::{debug, info};
use uuid::Uuid;

use crate::StoreError;

use super::{build_name, store::ByteStore};

/// Payload used when none is configured on the builder.
pub const DEFAULT_PAYLOAD: &str = "Hello, world!";

/// Type alias for operator run results.
type OperatorResult<T> = Result<T, StoreError>;

/// Represents one run of an operator.
///
/// Besides timing, it records what the store answered, which makes a
/// substituted `read` observable from the outside.
#[derive(Debug)]
pub struct OperatorExecution {
    /// The time when the run started
    pub start: Instant,
    /// The time when the run finished
    pub end: Instant,
    /// The total duration of the run
    pub duration: Duration,
    /// Byte returned by `inspect_first_byte`
    pub first_byte: u8,
    /// Line returned by `read`
    pub last_line: String,
}

/// Drives a fixed sequence of calls against a borrowed [`ByteStore`].
///
/// The operator never owns its store: whatever is passed to
/// [`OperatorBuilder::store`] must outlive it.
///
/// # Example Usage
///
/// ```rust
/// use byte_store::core::operator::OperatorBuilder;
/// use byte_store::store::file::FileByteStoreBuilder;
/// use std::env::temp_dir;
///
/// # fn example() -> Result<(), byte_store::StoreError> {
/// let store = FileByteStoreBuilder::new()
///     .path(temp_dir().join("operator_doc.log"))
///     .echo(false)
///     .build()?;
///
/// let operator = OperatorBuilder::new()
///     .store(&store)
///     .payload("Bonjour")
///     .build()?;
///
/// let execution = operator.run()?;
/// assert_eq!(execution.last_line, "Bonjour");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct Operator<'a> {
    /// Unique identifier for this operator
    id: Uuid,
    /// Human-readable name for the operator
    name: String,
    store: &'a dyn ByteStore,
    payload: String,
}

impl Operator<'_> {
    /// Runs inspect, write and read, in that order, against the held store.
    ///
    /// # Returns
    /// - `Ok(OperatorExecution)` once the three calls are done
    /// - `Err(StoreError)` if the store refuses to inspect the payload; nothing is written then
    pub fn run(&self) -> OperatorResult<OperatorExecution> {
        let start = Instant::now();

        info!("Start of operation: {}, id: {}", self.name, self.id);

        let first_byte = self.store.inspect_first_byte(self.payload.as_bytes())?;
        debug!("Inspected first byte: {:#04x}", first_byte);

        self.store.write(&self.payload);

        let last_line = self.store.read();
        debug!("Read back: {:?}", last_line);

        info!("End of operation: {}, id: {}", self.name, self.id);

        Ok(OperatorExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            first_byte,
            last_line,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }

    pub fn get_payload(&self) -> &str {
        &self.payload
    }
}

/// Builder for [`Operator`].
#[derive(Default)]
pub struct OperatorBuilder<'a> {
    name: Option<String>,
    store: Option<&'a dyn ByteStore>,
    payload: Option<String>,
}

impl<'a> OperatorBuilder<'a> {
    pub fn new() -> OperatorBuilder<'a> {
        Self {
            name: None,
            store: None,
            payload: None,
        }
    }

    /// Sets the name of the operator. A random one is generated otherwise.
    pub fn name(mut self, name: String) -> OperatorBuilder<'a> {
        self.name = Some(name);
        self
    }

    /// Sets the store the operator drives. Required.
    pub fn store(mut self, store: &'a dyn ByteStore) -> OperatorBuilder<'a> {
        self.store = Some(store);
        self
    }

    /// Sets the string that is inspected, written and read back.
    ///
    /// Defaults to [`DEFAULT_PAYLOAD`].
    pub fn payload<S: Into<String>>(mut self, payload: S) -> OperatorBuilder<'a> {
        self.payload = Some(payload.into());
        self
    }

    /// Builds the operator.
    ///
    /// # Errors
    /// - `StoreError::InvalidArgument` when no store was given or the payload is empty
    pub fn build(self) -> Result<Operator<'a>, StoreError> {
        let store = self.store.ok_or_else(|| {
            StoreError::InvalidArgument("a store is required to build an operator".to_string())
        })?;

        let payload = self.payload.unwrap_or_else(|| DEFAULT_PAYLOAD.to_string());
        if payload.is_empty() {
            return Err(StoreError::InvalidArgument(
                "operator payload must not be empty".to_string(),
            ));
        }

        Ok(Operator {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            store,
            payload,
        })
    }
}
