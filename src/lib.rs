//! # Number Screen
//!
//! Country-code resolution and wildcard normalization for call-screening
//! blocklists.
//!
//! A blocklist stores phone-number patterns in a canonical storage form.
//! For editing, a stored pattern is split into a selected country (resolved
//! against an ordered catalog of dial codes) and a local number fragment;
//! on save the split is reassembled and the wildcard notation is converted
//! back to what the store's query language expects.
//!
//! ## Quick Start
//!
//! ```rust
//! use number_screen::{CountryTable, find_by_dial_code, strip_dial_code, combine};
//!
//! let table = CountryTable::builtin();
//!
//! // "+1684..." resolves to American Samoa, not to the generic "+1".
//! let index = find_by_dial_code(table, "+16845551234");
//! assert_eq!(table.get(index).unwrap().name, "American Samoa");
//!
//! let local = strip_dial_code(table, "+16845551234", index).unwrap();
//! assert_eq!(local, "5551234");
//!
//! assert_eq!(combine(table, index, &local).unwrap(), "+16845551234");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! EditService<S>
//!     │  load_for_edit / save
//!     ▼
//! resolver + wildcard      (pure functions over CountryTable)
//!     │
//!     ▼
//! NumberStore              (trait: MemoryStore, your database, ...)
//! ```
//!
//! The resolver disambiguates overlapping dial codes by preferring the
//! longest match: "1" (Canada, United States) and "1684" (American Samoa)
//! deliberately coexist in the catalog.
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation (enabled by default)

pub mod countries;
pub mod resolver;
pub mod service;
pub mod store;
pub mod wildcard;

// Re-export commonly used items at the crate root
pub use countries::{CountryRecord, CountryTable, CountryTableError};
pub use resolver::{combine, find_by_dial_code, strip_dial_code};
pub use service::{EditError, EditForm, EditService};
pub use store::{BlocklistEntry, MemoryStore, NumberStore};
pub use wildcard::{STORAGE_WILDCARD, VIEW_WILDCARD, storage_to_view, view_to_storage};
