//! Popup logic for importing a JSON bookmark folder into the browser
//!
//! The popup lets the user paste a document such as
//!
//! ```text
//! { "folder": "Reading", "bookmarks": [ { "title": "A", "url": "http://a" } ] }
//! ```
//!
//! choose a destination folder from a grouped picker, and create the folder
//! with its bookmarks in the bookmark store. Everything that touches the
//! page goes through the [`Surface`] trait, so the controller runs without
//! a browser.

mod config;
mod picker;
mod popup;
mod selection;
mod status;

pub use config::PopupConfig;
pub use picker::{render_picker, OptionGroup, Picker, PickerOption, Placeholder};
pub use popup::{Popup, Surface};
pub use selection::Selection;
pub use status::{StatusBanner, StatusKind};

pub use bookmark_import::{BookmarkStore, ImportError, ImportedFolder, MemoryStore};
pub use bookmark_tree::{parse_tree, FolderGroup, FolderIndex, FolderOption};
