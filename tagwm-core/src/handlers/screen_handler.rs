use crate::models::{BBox, Handle, Screen, ScreenId, TagId};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Registers a new screen showing `tags` and returns its id. Ids are never reused.
    pub fn add_screen(&mut self, bbox: BBox, tags: Vec<TagId>) -> ScreenId {
        let id = self.next_screen_id;
        self.next_screen_id += 1;
        tracing::debug!("Adding screen {} at {:?}", id, bbox);
        self.screens.push(Screen::new(id, bbox, tags));
        id
    }

    /// Forgets a screen. Windows still pointing at it behave as if they had no screen.
    pub fn remove_screen(&mut self, id: ScreenId) -> bool {
        let before = self.screens.len();
        self.screens.retain(|s| s.id != id);
        let removed = before != self.screens.len();
        if removed {
            tracing::debug!("Removed screen {}", id);
        }
        removed
    }
}
