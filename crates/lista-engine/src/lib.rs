//! Pure derivation logic: no storage, no terminal, no clocks of its own.
//!
//! Everything here is a function from domain data to view models, so the
//! list-filter-counter pipeline is testable without a UI harness.

pub mod filter;
pub mod form;
pub mod notice;
pub mod presenter;
pub mod view_models;

pub use filter::{apply_filter, matches, SearchQuery};
pub use form::FormState;
pub use notice::{Notice, NoticeKind, NoticeStack, NOTICE_TTL};
pub use presenter::present_list;
pub use view_models::{Counters, FormViewModel, ItemRow, ListViewModel};
