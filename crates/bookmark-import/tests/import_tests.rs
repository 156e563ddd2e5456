use bookmark_import::{import_bookmarks, BookmarkStore, CreateDetails, ImportError, MemoryStore};
use bookmark_tree::BookmarkTreeNode;
use futures::executor::block_on;
use pretty_assertions::assert_eq;

const READING: &str = r#"{"folder":"Reading","bookmarks":[{"title":"A","url":"http://a"},{"title":"B","url":"http://b"}]}"#;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_import_into_default_location() {
    init_logger();
    let store = MemoryStore::new();

    let imported = block_on(import_bookmarks(&store, READING, None)).unwrap();

    let requests = store.requests();
    assert_eq!(
        requests,
        vec![
            CreateDetails::folder("Reading", None),
            CreateDetails::bookmark("A", "http://a", imported.folder.id.clone(), 0),
            CreateDetails::bookmark("B", "http://b", imported.folder.id.clone(), 1),
        ]
    );

    assert_eq!(
        imported.folder.parent_id.as_deref(),
        Some(MemoryStore::DEFAULT_PARENT)
    );
    let titles: Vec<_> = imported.bookmarks.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn test_import_into_selected_folder() {
    init_logger();
    let store = MemoryStore::new();

    let imported = block_on(import_bookmarks(&store, READING, Some("1"))).unwrap();
    assert_eq!(imported.folder.parent_id.as_deref(), Some("1"));

    let tree = store.tree();
    let folder = tree.find(&imported.folder.id).unwrap();
    let urls: Vec<_> = folder
        .children()
        .iter()
        .map(|b| b.url.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(urls, vec!["http://a", "http://b"]);
}

#[test]
fn test_one_folder_and_n_bookmark_requests() {
    init_logger();
    let bookmarks: Vec<_> = (0..7)
        .map(|i| serde_json::json!({"title": format!("t{}", i), "url": format!("http://{}", i)}))
        .collect();
    let text = serde_json::json!({"folder": "Many", "bookmarks": bookmarks}).to_string();

    let store = MemoryStore::new();
    block_on(import_bookmarks(&store, &text, None)).unwrap();

    let requests = store.requests();
    assert_eq!(requests.len(), 8);
    assert_eq!(requests.iter().filter(|r| r.url.is_none()).count(), 1);
    for (position, request) in requests[1..].iter().enumerate() {
        assert_eq!(request.index, Some(position as u32));
    }
}

#[test]
fn test_zero_bookmarks_creates_only_the_folder() {
    let store = MemoryStore::new();
    let imported =
        block_on(import_bookmarks(&store, r#"{"folder":"F","bookmarks":[]}"#, None)).unwrap();

    assert!(imported.bookmarks.is_empty());
    assert_eq!(store.requests().len(), 1);
}

#[test]
fn test_rejected_bookmark_is_not_rolled_back() {
    init_logger();
    let store = MemoryStore::new();
    store.reject_title("B", "quota exceeded");

    let err = block_on(import_bookmarks(&store, READING, None)).unwrap_err();
    assert!(matches!(err, ImportError::Create(_)));
    assert!(err.to_string().contains("quota exceeded"));

    // Folder and the first bookmark stay behind
    let tree = store.tree();
    let other = tree.find(MemoryStore::DEFAULT_PARENT).unwrap();
    let reading = &other.children()[0];
    assert_eq!(reading.title, "Reading");
    let titles: Vec<_> = reading.children().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["A"]);
}

#[test]
fn test_all_requests_issued_despite_rejection() {
    let store = MemoryStore::new();
    store.reject_title("A", "first failed");

    let err = block_on(import_bookmarks(&store, READING, None)).unwrap_err();
    assert_eq!(err.to_string(), "first failed");
    assert_eq!(store.requests().len(), 3);
}

/// Store whose requests only run once they are polled
struct DeferredStore {
    inner: MemoryStore,
}

impl BookmarkStore for DeferredStore {
    async fn get_tree(&self) -> anyhow::Result<Vec<BookmarkTreeNode>> {
        self.inner.get_tree().await
    }

    async fn create(&self, details: CreateDetails) -> anyhow::Result<BookmarkTreeNode> {
        self.inner.create(details).await
    }
}

#[test]
fn test_lazy_store_keeps_indices() {
    let store = DeferredStore {
        inner: MemoryStore::new(),
    };

    let imported = block_on(import_bookmarks(&store, READING, Some("3"))).unwrap();
    let indices: Vec<_> = imported.bookmarks.iter().map(|b| b.index).collect();
    assert_eq!(indices, vec![Some(0), Some(1)]);
}
