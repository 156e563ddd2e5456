//! Bookmark Tree Library
//!
//! A library for representing the browser's bookmark tree and reducing it
//! into the folder lists a destination picker is built from.
//!
//! # Core Concepts
//!
//! - **BookmarkTreeNode**: A node as handed out by the bookmark store (folder or bookmark)
//! - **NodeKind**: Folders have no URL, bookmarks do
//! - **FolderIndex**: Top-level folders plus one group of child folders per named folder
//!
//! # Example
//!
//! ```
//! use bookmark_tree::prelude::*;
//!
//! let tree = BookmarkTreeNode::root(vec![
//!     BookmarkTreeNode::folder("1", "Bookmarks bar", vec![
//!         BookmarkTreeNode::folder("4", "Rust", vec![]),
//!         BookmarkTreeNode::bookmark("5", "Crates", "https://crates.io"),
//!     ]),
//! ]);
//!
//! let index = parse_tree(&[tree]);
//! assert_eq!(index.top_level[0].title, "Bookmarks bar");
//! assert_eq!(index.groups[0].options[0].title, "Rust");
//! ```

mod node;
mod parser;

pub use node::{BookmarkTreeNode, NodeKind, Walk};
pub use parser::{parse_node, parse_tree, FolderGroup, FolderIndex, FolderOption};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        parse_tree, BookmarkTreeNode, FolderGroup, FolderIndex, FolderOption, NodeKind,
    };
}
