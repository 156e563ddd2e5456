// Bookmark import for json-to-bookmark
// This crate validates user-supplied JSON and turns it into bookmark store calls

mod error;
mod importer;
mod schema;
mod store;

pub use error::ImportError;
pub use importer::{import_bookmarks, ImportedFolder};
pub use schema::{parse, validate, BookmarkSpec, ImportSpec};
pub use store::{BookmarkStore, CreateDetails, MemoryStore};
