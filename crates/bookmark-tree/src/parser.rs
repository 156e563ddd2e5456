//! Reduces the bookmark tree into the folder lists used to build a picker

use log::debug;
use serde::{Deserialize, Serialize};

use crate::BookmarkTreeNode;

/// A selectable folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderOption {
    pub title: String,
    pub id: String,
}

impl FolderOption {
    fn from_node(node: &BookmarkTreeNode) -> Self {
        Self {
            title: node.title.clone(),
            id: node.id.clone(),
        }
    }
}

/// A folder together with its immediate child folders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderGroup {
    pub title: String,
    pub id: String,
    /// Direct child folders only; bookmarks are never listed here
    pub options: Vec<FolderOption>,
}

/// Result of parsing the bookmark tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderIndex {
    /// Folders directly below the synthetic root
    pub top_level: Vec<FolderOption>,
    /// One entry per titled node with children, in pre-order
    pub groups: Vec<FolderGroup>,
}

impl FolderIndex {
    /// Append another index's entries after this one's
    fn merge(&mut self, other: FolderIndex) {
        self.top_level.extend(other.top_level);
        self.groups.extend(other.groups);
    }

    /// Returns true if nothing was found
    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty() && self.groups.is_empty()
    }
}

/// Parse the tree returned by the bookmark store
///
/// The store hands back a one-element list holding the synthetic root; only
/// that first entry is parsed. An empty list yields an empty index.
pub fn parse_tree(roots: &[BookmarkTreeNode]) -> FolderIndex {
    let index = roots
        .first()
        .map(|root| parse_node(root, 0))
        .unwrap_or_default();

    debug!(
        "Parsed bookmark tree: {} top-level folders, {} groups",
        index.top_level.len(),
        index.groups.len()
    );

    index
}

/// Parse a subtree whose root sits at `depth` (the synthetic root is depth 0)
pub fn parse_node(node: &BookmarkTreeNode, depth: usize) -> FolderIndex {
    let mut index = FolderIndex::default();
    let mut child_depth = depth;

    if node.is_folder() {
        if depth == 1 && !node.title.is_empty() {
            index.top_level.push(FolderOption::from_node(node));
        }
        child_depth = depth + 1;
    }

    if let Some(children) = &node.children {
        if !node.title.is_empty() {
            index.groups.push(FolderGroup {
                title: node.title.clone(),
                id: node.id.clone(),
                options: children
                    .iter()
                    .filter(|child| child.is_folder())
                    .map(FolderOption::from_node)
                    .collect(),
            });
        }

        for child in children {
            index.merge(parse_node(child, child_depth));
        }
    }

    index
}
