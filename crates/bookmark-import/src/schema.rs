//! Shape of the import document and its validation
//!
//! ```text
//! { "folder": "<string>", "bookmarks": [ { "title": "<string>", "url": "<string>" }, ... ] }
//! ```
//!
//! Any deviation fails with the single [`ImportError::Schema`]; there is no
//! per-field detail. Unknown fields are ignored.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ImportError;

/// A validated import document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSpec {
    /// Title of the folder to create
    pub folder: String,
    /// Bookmarks to create inside the folder, in order
    pub bookmarks: Vec<BookmarkSpec>,
}

/// One bookmark entry of an import document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkSpec {
    pub title: String,
    pub url: String,
}

/// Parse raw text and validate it
pub fn parse(text: &str) -> Result<ImportSpec, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    validate(&value)
}

/// Validate an already-parsed JSON value
pub fn validate(data: &Value) -> Result<ImportSpec, ImportError> {
    let object = data.as_object().ok_or(ImportError::Schema)?;
    let folder = string_field(object, "folder")?;
    let entries = object
        .get("bookmarks")
        .and_then(Value::as_array)
        .ok_or(ImportError::Schema)?;

    let bookmarks = entries
        .iter()
        .map(validate_bookmark)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ImportSpec { folder, bookmarks })
}

fn validate_bookmark(entry: &Value) -> Result<BookmarkSpec, ImportError> {
    let object = entry.as_object().ok_or(ImportError::Schema)?;
    Ok(BookmarkSpec {
        title: string_field(object, "title")?,
        url: string_field(object, "url")?,
    })
}

fn string_field(object: &Map<String, Value>, key: &str) -> Result<String, ImportError> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ImportError::Schema)
}
