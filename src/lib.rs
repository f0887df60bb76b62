//! Common-password blocklist validation
//!
//! This library answers one question for registration and password-change
//! flows: is a candidate password on a known-weak-password list?
//!
//! The list is read once per process from a plain-text file (one entry per
//! line, `#` comments and blank lines ignored) and cached in memory. If the
//! file is missing or unreadable, a small built-in fallback list is used
//! instead, so the check never fails and never blocks registration over an
//! infrastructure fault.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLOCKLIST_PATH`: Custom path to the blocklist file
//!   (default: `./assets/blocklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_blocklist::{init_blocklist, is_blocked};
//!
//! // Optional: eager initialization at startup. Otherwise the list is
//! // loaded lazily on the first query.
//! let report = init_blocklist();
//! println!("Loaded {} entries from {:?}", report.entries, report.source);
//!
//! if is_blocked("Password123") {
//!     println!("Reject: too common");
//! }
//! ```

// Internal modules
mod blocklist;
mod check;
mod fallback;

// Public API
pub use blocklist::{
    blocklist_len, blocklist_path, blocklist_source, init_blocklist, init_blocklist_from_path,
    is_blocked, BlocklistError, ListSource, LoadReport,
};
pub use check::rejection;
pub use fallback::FALLBACK_PASSWORDS;
