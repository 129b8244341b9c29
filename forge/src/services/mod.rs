//! Service implementations
//!
//! Production implementations of the I/O-facing traits plus the serial
//! generation queue.

pub mod http_client;
pub mod offline_names;
pub mod queue;

#[cfg(test)]
pub mod tests;

pub use http_client::RealRemoteCall;
pub use offline_names::{BundledDataset, FileDataset, NameIndex, OfflineNames};
pub use queue::ForgeQueue;
