//! # Content
//!
//! Read-only access to the JSON content collections.
//!
//! - `store`: loads a collection from the data directory on every call, falling back
//!   to a caller-supplied default when the file is missing or unreadable.
//! - `resolve`: exact, case-sensitive slug lookup inside a loaded collection, plus the
//!   "related records" selection used by the blog detail page.

pub mod resolve;
pub mod store;

pub use resolve::{related, resolve, SlugNotFound};
pub use store::ContentStore;
