// NOTE: lista Architecture Rationale
//
// Why a single serialized blob (not a row store)?
// - The collection is small and every operation is a linear scan anyway
// - One read-modify-write per mutation keeps the persistence model trivial
//   to reason about: no partial updates, no index to keep consistent
// - Trade-off: corruption loses the whole collection; that loss is accepted
//   and logged rather than repaired
//
// Why an injectable KvBackend (not direct file IO in the store)?
// - The store's CRUD semantics are testable against an in-memory map
// - The blob location can be overridden from config without touching the
//   store logic
//
// Why view models (not printing from handlers)?
// - `--format json` must dump the same data the text view renders
// - The list-filter-counter derivation stays testable without a terminal

mod args;
mod commands;
pub mod config;
pub mod controller;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
