//! Popup controller
//!
//! Wires the importer, the tree parser and the picker renderer together and
//! reports outcomes through a [`Surface`].

use bookmark_import::{import_bookmarks, BookmarkStore, ImportError, ImportedFolder};
use bookmark_tree::{parse_tree, FolderIndex};
use log::{debug, info, warn};
use std::time::Instant;

use crate::{render_picker, Picker, PopupConfig, Selection, StatusBanner};

/// The page the popup draws on
pub trait Surface {
    /// Replace the picker's contents
    fn render_picker(&mut self, picker: &Picker);

    /// Show the status banner
    fn show_status(&mut self, banner: &StatusBanner);

    /// Hide the status banner
    fn hide_status(&mut self);
}

/// State and event handlers of the import popup
///
/// `open` and `save` borrow the popup mutably for as long as they run, so
/// a second import cannot start while one is still in flight.
pub struct Popup<S, U> {
    store: S,
    surface: U,
    config: PopupConfig,
    selection: Selection,
    /// Folders from the last successful tree read
    folders: FolderIndex,
    banner: Option<StatusBanner>,
}

impl<S: BookmarkStore, U: Surface> Popup<S, U> {
    /// Create a popup with default configuration
    pub fn new(store: S, surface: U) -> Self {
        Self::with_config(store, surface, PopupConfig::default())
    }

    /// Create a popup with the given configuration
    pub fn with_config(store: S, surface: U, config: PopupConfig) -> Self {
        Self {
            store,
            surface,
            config,
            selection: Selection::new(),
            folders: FolderIndex::default(),
            banner: None,
        }
    }

    /// Populate the picker from the bookmark store
    pub async fn open(&mut self) {
        self.refresh().await;
    }

    /// Handle a change of the picker's value
    pub fn select(&mut self, value: &str) {
        self.selection.select(value);
        debug!("Selected destination {:?}", self.selection.parent_id());
    }

    /// Import the pasted document into the selected folder
    ///
    /// Success shows the success banner and refreshes the picker. Any
    /// failure shows its message in the error banner and leaves the picker
    /// alone. The result is returned as well for callers that need it.
    pub async fn save(&mut self, text: &str) -> Result<ImportedFolder, ImportError> {
        let result = import_bookmarks(&self.store, text, self.selection.parent_id()).await;

        match &result {
            Ok(imported) => {
                info!(
                    "Imported folder {:?} with {} bookmarks",
                    imported.folder.title,
                    imported.bookmarks.len()
                );
                self.report(StatusBanner::success(&self.config, Instant::now()));
                self.refresh().await;
            }
            Err(err) => {
                warn!("Import failed ({}): {}", err.kind(), err);
                self.report(StatusBanner::error(err, &self.config, Instant::now()));
            }
        }

        result
    }

    /// Hide the banner once its interval has passed
    pub fn tick(&mut self, now: Instant) {
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| !banner.is_visible_at(now))
        {
            self.banner = None;
            self.surface.hide_status();
        }
    }

    /// The picker for the current folders and selection
    pub fn picker(&self) -> Picker {
        render_picker(&self.folders, &self.selection, &self.config)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn folders(&self) -> &FolderIndex {
        &self.folders
    }

    /// The banner currently on screen, if any
    pub fn banner(&self) -> Option<&StatusBanner> {
        self.banner.as_ref()
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    async fn refresh(&mut self) {
        match self.store.get_tree().await {
            Ok(roots) => {
                self.folders = parse_tree(&roots);
                let picker = self.picker();
                self.surface.render_picker(&picker);
            }
            Err(err) => {
                warn!("Failed to read bookmark tree: {:#}", err);
                self.report(StatusBanner::error(err, &self.config, Instant::now()));
            }
        }
    }

    fn report(&mut self, banner: StatusBanner) {
        self.surface.show_status(&banner);
        self.banner = Some(banner);
    }
}
