use bookmark_tree::BookmarkTreeNode;
use futures::future::join_all;
use log::{debug, info, warn};

use crate::schema::{self, ImportSpec};
use crate::store::{BookmarkStore, CreateDetails};
use crate::ImportError;

/// Nodes created by a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFolder {
    /// The folder holding the imported bookmarks
    pub folder: BookmarkTreeNode,
    /// The created bookmarks, in input order
    pub bookmarks: Vec<BookmarkTreeNode>,
}

/// Parse, validate and create a bookmark folder from raw JSON text
///
/// The folder is created first, under `parent_id` or the store's default
/// location when `None`. Every bookmark request is then issued with its
/// input position as `index`, and all of them are awaited together. When a
/// request is rejected the first rejection (in input order) is returned;
/// bookmarks that were created are left in place.
pub async fn import_bookmarks<S: BookmarkStore>(
    store: &S,
    text: &str,
    parent_id: Option<&str>,
) -> Result<ImportedFolder, ImportError> {
    let spec = schema::parse(text)?;
    create_folder(store, spec, parent_id).await
}

async fn create_folder<S: BookmarkStore>(
    store: &S,
    spec: ImportSpec,
    parent_id: Option<&str>,
) -> Result<ImportedFolder, ImportError> {
    let folder = store
        .create(CreateDetails::folder(
            spec.folder,
            parent_id.map(str::to_owned),
        ))
        .await
        .map_err(ImportError::Create)?;
    info!(
        "Created folder {:?} ({}) under {:?}",
        folder.title, folder.id, folder.parent_id
    );

    let requests: Vec<_> = spec
        .bookmarks
        .into_iter()
        .enumerate()
        .map(|(index, bookmark)| {
            let details =
                CreateDetails::bookmark(bookmark.title, bookmark.url, &folder.id, index as u32);
            debug!("Issuing bookmark create {:?}", details);
            store.create(details)
        })
        .collect();
    let count = requests.len();

    let bookmarks = join_all(requests)
        .await
        .into_iter()
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(|err| {
            warn!("Bookmark creation in folder {} failed: {:#}", folder.id, err);
            ImportError::Create(err)
        })?;

    info!("Imported {} bookmarks into folder {}", count, folder.id);
    Ok(ImportedFolder { folder, bookmarks })
}
