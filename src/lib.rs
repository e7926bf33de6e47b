#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Byte Store

 A tiny toolkit showing how to put a trait seam in front of file I/O and swap
 in fakes and mocks at test time.

 ## Core Concepts

- **ByteStore:** The interface under test. It inspects the first byte of a buffer,
  overwrites a log file with a string and reads that file back, echoing every line.
- **FileByteStore:** The default `ByteStore`, backed by a file (`dump.log` unless configured)
  and an echo sink (standard output unless configured).
- **Operator:** Borrows a `ByteStore` and runs the fixed sequence inspect, write, read.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| logger        | Enables a `ByteStore` decorator that logs every call          |
| full          | Enables all available features                                |

 ## Getting Started

```rust
# use byte_store::{
#     core::operator::OperatorBuilder,
#     store::file::FileByteStoreBuilder,
#     StoreError,
# };
# use std::env::temp_dir;
fn main() -> Result<(), StoreError> {
    let store = FileByteStoreBuilder::new()
        .path(temp_dir().join("byte_store_getting_started.log"))
        .build()?;

    let operator = OperatorBuilder::new()
        .name("greeter".to_string())
        .store(&store)
        .build()?;

    let execution = operator.run()?;

    assert_eq!(execution.first_byte, b'H');
    assert_eq!(execution.last_line, "Hello, world!");

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core traits and the operator driving them
pub mod core;

/// Error types for store operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of `ByteStore` implementations (file backed, logger decorator)
pub mod store;
