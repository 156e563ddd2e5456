//! Core node types for the bookmark tree

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The kind of a node in the bookmark tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    /// A folder - has no URL and may have children
    #[display(fmt = "Folder")]
    Folder,
    /// A bookmark - has a URL and is always a leaf
    #[display(fmt = "Bookmark")]
    Bookmark,
}

impl NodeKind {
    /// Returns true if this is a folder
    pub const fn is_folder(self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Returns true if this is a bookmark
    pub const fn is_bookmark(self) -> bool {
        matches!(self, NodeKind::Bookmark)
    }
}

/// A single node of the bookmark store's tree
///
/// Field names follow the browser's `bookmarks.BookmarkTreeNode` so trees
/// returned by `getTree()` deserialize directly. Extra fields the browser
/// sends (`dateAdded`, `type`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkTreeNode {
    /// Store-assigned identifier
    pub id: String,
    /// Display title; empty for the synthetic root
    #[serde(default)]
    pub title: String,
    /// Target URL. Absence marks the node as a folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Identifier of the containing folder (absent for the root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Position within the parent folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Ordered children, present on folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkTreeNode>>,
}

impl BookmarkTreeNode {
    /// Create the synthetic root node (empty title)
    pub fn root(children: Vec<BookmarkTreeNode>) -> Self {
        Self::folder("0", "", children)
    }

    /// Create a folder node with the given children
    pub fn folder(
        id: impl Into<String>,
        title: impl Into<String>,
        children: Vec<BookmarkTreeNode>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: None,
            parent_id: None,
            index: None,
            children: Some(children),
        }
    }

    /// Create a bookmark node
    pub fn bookmark(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: Some(url.into()),
            parent_id: None,
            index: None,
            children: None,
        }
    }

    /// The node's kind, derived from the presence of a URL
    pub fn kind(&self) -> NodeKind {
        if self.url.is_some() {
            NodeKind::Bookmark
        } else {
            NodeKind::Folder
        }
    }

    /// Returns true if this node is a folder
    pub fn is_folder(&self) -> bool {
        self.kind().is_folder()
    }

    /// Returns true if this node is a bookmark
    pub fn is_bookmark(&self) -> bool {
        self.kind().is_bookmark()
    }

    /// Children of this node; empty for bookmarks and childless folders
    pub fn children(&self) -> &[BookmarkTreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Walk this node and all of its descendants in pre-order
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Find the first node (pre-order) with the given id
    pub fn find(&self, id: &str) -> Option<&BookmarkTreeNode> {
        self.walk().find(|node| node.id == id)
    }
}

/// Pre-order iterator over a bookmark subtree
pub struct Walk<'a> {
    stack: Vec<&'a BookmarkTreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a BookmarkTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse so they're popped in order
        self.stack.extend(current.children().iter().rev());

        Some(current)
    }
}
