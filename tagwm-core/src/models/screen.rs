use super::{ScreenId, Strut, TagId};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// A physical output hosting windows and a subset of the tags.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Screen {
    pub id: ScreenId,
    pub bbox: BBox,
    /// Tags shown on this screen. Which of them are displayed depends on their `selected` flag.
    pub tags: Vec<TagId>,
    #[serde(skip)]
    workarea: Cell<Option<BBox>>,
}

/// Screen Bounding Box
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Screen {
    #[must_use]
    pub fn new(id: ScreenId, bbox: BBox, tags: Vec<TagId>) -> Self {
        Self {
            id,
            bbox,
            tags,
            workarea: Cell::new(None),
        }
    }

    #[must_use]
    pub fn has_tag(&self, tag: &TagId) -> bool {
        self.tags.contains(tag)
    }

    /// The cached workarea, if it has been computed since the last invalidation.
    pub fn cached_workarea(&self) -> Option<BBox> {
        self.workarea.get()
    }

    pub(crate) fn cache_workarea(&self, workarea: BBox) {
        self.workarea.set(Some(workarea));
    }

    pub(crate) fn invalidate_workarea(&self) {
        self.workarea.set(None);
    }
}

impl BBox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The part of this box left once `strut` is reserved along its edges.
    #[must_use]
    pub fn shrink(self, strut: Strut) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        let (left, right) = (clamp(strut.left), clamp(strut.right));
        let (top, bottom) = (clamp(strut.top), clamp(strut.bottom));
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self
                .width
                .saturating_sub(left.saturating_add(right))
                .max(0),
            height: self
                .height
                .saturating_sub(top.saturating_add(bottom))
                .max(0),
        }
    }
}

impl Default for BBox {
    fn default() -> Self {
        Self::new(0, 0, 800, 600)
    }
}
