//! File browser: current directory, its listing and the "activate entry"
//! transition.

mod arena;
mod source;

pub use arena::{NameArena, ARENA_CAPACITY, MAX_ENTRIES};
pub use source::{DirectorySource, FsDirectory, PARENT_ENTRY};

/// What activating a browser entry did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Listing was empty; nothing happened.
    Nothing,
    /// A new directory became current and was listed.
    EnteredDirectory,
    /// A file was recorded as the selection.
    FileSelected,
}

pub struct FileBrowser {
    current: String,
    listing: NameArena,
    selected: Option<String>,
    source: Box<dyn DirectorySource>,
}

impl FileBrowser {
    /// Create a browser and list `start_dir`.
    pub fn new(start_dir: impl Into<String>, source: Box<dyn DirectorySource>) -> Self {
        let mut browser = Self {
            current: start_dir.into(),
            listing: NameArena::new(),
            selected: None,
            source,
        };
        browser.enter_directory();
        browser
    }

    /// Re-list the current directory. Callers reset navigation afterwards.
    pub fn enter_directory(&mut self) {
        self.listing.clear();
        self.source.list(&self.current, &mut self.listing);
        tracing::debug!(
            "Entered '{}' ({} entries)",
            self.current,
            self.listing.len()
        );
    }

    pub fn current_directory(&self) -> &str {
        &self.current
    }

    pub fn entries(&self) -> &NameArena {
        &self.listing
    }

    /// Last file picked, if any.
    pub fn selected_file(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Activate the entry at `index`. Index 0 is always the parent directory.
    pub fn activate(&mut self, index: usize) -> BrowseOutcome {
        let Some(entry) = self.listing.get(index) else {
            return BrowseOutcome::Nothing;
        };

        let path = if entry == PARENT_ENTRY {
            parent_of(&self.current).to_string()
        } else {
            format!("{}/{}", self.current, entry)
        };

        if self.source.is_directory(&path) {
            self.current = path;
            self.enter_directory();
            BrowseOutcome::EnteredDirectory
        } else {
            tracing::debug!("Selected file '{}'", path);
            self.selected = Some(path);
            BrowseOutcome::FileSelected
        }
    }
}

/// Everything before the last `/`, or the empty (root) path when there is none.
pub fn parent_of(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}
