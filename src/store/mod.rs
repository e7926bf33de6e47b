/// This module provides the default file-backed store.
pub mod file;

#[cfg(feature = "logger")]
#[cfg_attr(docsrs, doc(cfg(feature = "logger")))]
/// This module provides a store decorator logging every call.
pub mod logger;
