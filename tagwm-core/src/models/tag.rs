use serde::{Deserialize, Serialize};

use super::{Handle, TagId, WindowHandle};

/// Wrapper struct holding all the tags.
///
/// Tags are identified by a unique ID which is assigned on creation. IDs start at 1 and
/// increment by 1, so the tags are always ordered by their ID with no gaps.
///
/// Besides its label and `selected` flag, each tag keeps the list of windows tagged with it.
/// That reverse relation is maintained by the tag/untag hooks on
/// [`State`](crate::State), never by the window record itself.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tags<H: Handle> {
    #[serde(bound = "")]
    tags: Vec<Tag<H>>,
}

impl<H: Handle> Tags<H> {
    /// Create a new empty Taglist
    pub fn new() -> Self {
        Tags { tags: vec![] }
    }

    /// Create a new tag with the provided label and append it to the list.
    pub fn add_new(&mut self, label: &str) -> TagId {
        let next_id = self.tags.len() + 1; // tag id starts at 1
        self.tags.push(Tag::new(next_id, label));
        next_id
    }

    pub fn all(&self) -> &[Tag<H>] {
        &self.tags
    }

    /// Get a tag by its ID
    pub fn get(&self, id: TagId) -> Option<&Tag<H>> {
        id.checked_sub(1).and_then(|index| self.tags.get(index))
    }

    pub fn get_mut(&mut self, id: TagId) -> Option<&mut Tag<H>> {
        id.checked_sub(1).and_then(|index| self.tags.get_mut(index))
    }

    /// Get a tag by its label
    pub fn find(&self, label: &str) -> Option<&Tag<H>> {
        self.tags.iter().find(|tag| tag.label == label)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<H: Handle> Default for Tags<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag<H: Handle> {
    pub id: TagId,
    pub label: String,
    pub(crate) selected: bool,
    #[serde(bound = "")]
    pub(crate) windows: Vec<WindowHandle<H>>,
}

impl<H: Handle> Tag<H> {
    #[must_use]
    pub fn new(id: TagId, label: &str) -> Self {
        Self {
            id,
            label: label.to_owned(),
            selected: false,
            windows: vec![],
        }
    }

    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Windows currently tagged with this tag.
    pub fn windows(&self) -> &[WindowHandle<H>] {
        &self.windows
    }

    pub fn contains(&self, handle: &WindowHandle<H>) -> bool {
        self.windows.contains(handle)
    }

    /// Returns `false` if the window was already listed.
    pub(crate) fn insert(&mut self, handle: WindowHandle<H>) -> bool {
        if self.contains(&handle) {
            return false;
        }
        self.windows.push(handle);
        true
    }

    /// Returns `false` if the window was not listed.
    pub(crate) fn remove(&mut self, handle: &WindowHandle<H>) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w != handle);
        before != self.windows.len()
    }
}
