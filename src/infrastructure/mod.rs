//! Rate catalog adapters: in-memory, optional RocksDB persistence, and a
//! time-bounded cache decorator that can wrap either.

pub mod cache;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
