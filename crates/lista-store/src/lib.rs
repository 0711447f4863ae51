//! Durable CRUD over the item collection.
//!
//! The whole collection lives under one key as a JSON-encoded array, and every
//! mutation is a full read-modify-write of that blob. The backend behind the
//! key is injectable so the store can be exercised against an in-memory map in
//! tests and against a plain file in the CLI.

pub mod backend;
pub mod error;
mod id;
mod store;

pub use backend::{FileBackend, KvBackend, MemoryBackend, SingleFileBackend};
pub use error::{Error, Result};
pub use store::{ItemStore, STORAGE_KEY};
