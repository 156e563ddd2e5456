/// The destination folder chosen in the picker
///
/// Empty means "let the bookmark store pick its default location". The
/// value lives only as long as the popup; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    folder_id: Option<String>,
}

impl Selection {
    /// Start with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a picker change; empty values (the placeholder) are ignored
    pub fn select(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.folder_id = Some(value);
        }
    }

    /// Forget the current choice
    pub fn clear(&mut self) {
        self.folder_id = None;
    }

    pub fn is_empty(&self) -> bool {
        self.folder_id.is_none()
    }

    /// The folder to import into, if one was chosen
    pub fn parent_id(&self) -> Option<&str> {
        self.folder_id.as_deref()
    }

    /// Returns true if `id` is the chosen folder
    pub fn is_selected(&self, id: &str) -> bool {
        self.parent_id() == Some(id)
    }
}
