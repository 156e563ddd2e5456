//! The bookmark store seam and an in-memory implementation

use anyhow::{anyhow, bail, Result};
use bookmark_tree::BookmarkTreeNode;
use futures::future::{ready, Future};
use log::trace;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

/// Arguments of a single create request
///
/// Serializes to the same object the browser's `bookmarks.create` takes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetails {
    /// Containing folder; `None` lets the store pick its default location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub title: String,
    /// Bookmark target; `None` creates a folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Position inside the parent; `None` appends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl CreateDetails {
    /// Describe a folder to create
    pub fn folder(title: impl Into<String>, parent_id: Option<String>) -> Self {
        Self {
            parent_id,
            title: title.into(),
            url: None,
            index: None,
        }
    }

    /// Describe a bookmark to create at a fixed position
    pub fn bookmark(
        title: impl Into<String>,
        url: impl Into<String>,
        parent_id: impl Into<String>,
        index: u32,
    ) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            title: title.into(),
            url: Some(url.into()),
            index: Some(index),
        }
    }
}

/// The host-provided bookmark store
///
/// Both operations are asynchronous and may reject. Implementations are
/// driven from a single event loop, so no `Send` bound is required.
pub trait BookmarkStore {
    /// Read the whole tree; the result holds the synthetic root as its only entry
    fn get_tree(&self) -> impl Future<Output = Result<Vec<BookmarkTreeNode>>>;

    /// Create a folder or bookmark and return the new node
    fn create(&self, details: CreateDetails) -> impl Future<Output = Result<BookmarkTreeNode>>;
}

/// Internal node storage
#[derive(Debug, Clone)]
struct StoredNode {
    title: String,
    url: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Arena storage for nodes; the slot index is the node id
    nodes: Vec<StoredNode>,
    /// Every create request received, in arrival order
    requests: Vec<CreateDetails>,
    /// Titles whose creation is rejected, with the rejection message
    rejections: HashMap<String, String>,
}

/// An in-memory bookmark store
///
/// Starts out with the layout Chromium-based browsers use: a root `"0"`
/// holding `"1"` (Bookmarks bar), `"2"` (Other bookmarks, the default
/// parent) and `"3"` (Mobile bookmarks). New nodes get sequential ids.
///
/// # Example
///
/// ```
/// use bookmark_import::{BookmarkStore, CreateDetails, MemoryStore};
///
/// let store = MemoryStore::new();
/// let node = futures::executor::block_on(store.create(CreateDetails::folder("Reading", None)))?;
/// assert_eq!(node.parent_id.as_deref(), Some(MemoryStore::DEFAULT_PARENT));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    inner: RefCell<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Id of the synthetic root
    pub const ROOT: &'static str = "0";
    /// Id of the folder used when a request has no parent
    pub const DEFAULT_PARENT: &'static str = "2";

    /// Create a store with the default top-level folders
    pub fn new() -> Self {
        let store = Self {
            inner: RefCell::new(Inner::default()),
        };
        {
            let mut inner = store.inner.borrow_mut();
            inner.push(String::new(), None, None, None);
            for title in ["Bookmarks bar", "Other bookmarks", "Mobile bookmarks"] {
                inner.push(title.to_string(), None, Some(0), None);
            }
        }
        store
    }

    /// Reject every future create request for `title` with `message`
    pub fn reject_title(&self, title: impl Into<String>, message: impl Into<String>) {
        self.inner
            .borrow_mut()
            .rejections
            .insert(title.into(), message.into());
    }

    /// All create requests received so far, in arrival order
    pub fn requests(&self) -> Vec<CreateDetails> {
        self.inner.borrow().requests.clone()
    }

    /// Number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    /// Snapshot of the current tree, rooted at the synthetic root
    pub fn tree(&self) -> BookmarkTreeNode {
        let inner = self.inner.borrow();
        inner.build(0, None)
    }

    fn insert(&self, details: CreateDetails) -> Result<BookmarkTreeNode> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(details.clone());

        if let Some(message) = inner.rejections.get(&details.title) {
            bail!("{}", message);
        }

        let parent = match details.parent_id.as_deref() {
            Some(id) => inner.resolve(id)?,
            None => inner.resolve(Self::DEFAULT_PARENT)?,
        };
        if inner.nodes[parent].url.is_some() {
            bail!("Can't create a child of a bookmark: {}", parent);
        }

        let position = details.index.map(|index| index as usize);
        let id = inner.push(details.title, details.url, Some(parent), position);
        trace!("Created node {} under {}", id, parent);

        Ok(inner.build(id, Some(parent)))
    }
}

impl Inner {
    fn push(
        &mut self,
        title: String,
        url: Option<String>,
        parent: Option<usize>,
        position: Option<usize>,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(StoredNode {
            title,
            url,
            parent,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            let siblings = &mut self.nodes[parent].children;
            let position = position.unwrap_or(siblings.len()).min(siblings.len());
            siblings.insert(position, id);
        }

        id
    }

    fn resolve(&self, id: &str) -> Result<usize> {
        id.parse::<usize>()
            .ok()
            .filter(|&slot| slot < self.nodes.len())
            .ok_or_else(|| anyhow!("Can't find parent bookmark for id {}", id))
    }

    fn build(&self, id: usize, parent: Option<usize>) -> BookmarkTreeNode {
        let stored = &self.nodes[id];
        let index = parent.and_then(|parent| {
            self.nodes[parent]
                .children
                .iter()
                .position(|&child| child == id)
                .map(|position| position as u32)
        });

        BookmarkTreeNode {
            id: id.to_string(),
            title: stored.title.clone(),
            url: stored.url.clone(),
            parent_id: stored.parent.map(|parent| parent.to_string()),
            index,
            children: stored.url.is_none().then(|| {
                stored
                    .children
                    .iter()
                    .map(|&child| self.build(child, Some(id)))
                    .collect()
            }),
        }
    }
}

impl BookmarkStore for MemoryStore {
    fn get_tree(&self) -> impl Future<Output = Result<Vec<BookmarkTreeNode>>> {
        ready(Ok(vec![self.tree()]))
    }

    // The request is applied when issued, not when polled
    fn create(&self, details: CreateDetails) -> impl Future<Output = Result<BookmarkTreeNode>> {
        ready(self.insert(details))
    }
}
