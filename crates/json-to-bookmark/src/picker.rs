//! Grouped destination picker
//!
//! Rendering turns a parsed [`FolderIndex`] and the current [`Selection`]
//! into a toolkit-independent description of the drop-down: an umbrella
//! group holding every top-level folder, followed by one group per folder
//! that has child folders.

use bookmark_tree::{FolderIndex, FolderOption};
use serde::Serialize;

use crate::{PopupConfig, Selection};

/// A single selectable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub label: String,
    /// Folder id submitted when chosen
    pub value: String,
    pub selected: bool,
}

/// A labeled group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<PickerOption>,
}

/// The entry shown while no destination is chosen
///
/// It is hidden from the list and cannot be chosen; its value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub label: String,
    pub selected: bool,
    pub hidden: bool,
}

/// The rendered picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Picker {
    pub placeholder: Placeholder,
    pub groups: Vec<OptionGroup>,
}

impl Picker {
    /// All entries across groups, in display order
    pub fn options(&self) -> impl Iterator<Item = &PickerOption> {
        self.groups.iter().flat_map(|group| group.options.iter())
    }

    /// Value of the selected entry; `None` while the placeholder is selected
    pub fn selected_value(&self) -> Option<&str> {
        self.options()
            .find(|option| option.selected)
            .map(|option| option.value.as_str())
    }

    /// Find a group by label
    pub fn group(&self, label: &str) -> Option<&OptionGroup> {
        self.groups.iter().find(|group| group.label == label)
    }
}

/// Build the picker for the given folders and selection
///
/// Groups without child folders are left out.
pub fn render_picker(index: &FolderIndex, selection: &Selection, config: &PopupConfig) -> Picker {
    let umbrella = OptionGroup {
        label: config.umbrella_label.clone(),
        options: render_options(&index.top_level, selection),
    };

    let nested = index
        .groups
        .iter()
        .filter(|group| !group.options.is_empty())
        .map(|group| OptionGroup {
            label: group.title.clone(),
            options: render_options(&group.options, selection),
        });

    Picker {
        placeholder: Placeholder {
            label: config.placeholder_label.clone(),
            selected: selection.is_empty(),
            hidden: true,
        },
        groups: std::iter::once(umbrella).chain(nested).collect(),
    }
}

fn render_options(folders: &[FolderOption], selection: &Selection) -> Vec<PickerOption> {
    folders
        .iter()
        .map(|folder| PickerOption {
            label: folder.title.clone(),
            value: folder.id.clone(),
            selected: selection.is_selected(&folder.id),
        })
        .collect()
}
