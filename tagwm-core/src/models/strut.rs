use serde::{Deserialize, Serialize};

/// Space a window reserves at the edges of its screen.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Strut {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Strut {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Whether any edge is reserved at all.
    pub const fn has_value(&self) -> bool {
        self.left > 0 || self.right > 0 || self.top > 0 || self.bottom > 0
    }

    /// Edge-wise maximum of two struts.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            left: self.left.max(other.left),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strut_has_no_value() {
        assert!(!Strut::default().has_value());
        assert!(Strut::new(0, 0, 0, 3).has_value());
    }

    #[test]
    fn max_is_taken_per_edge() {
        let merged = Strut::new(10, 0, 5, 0).max(Strut::new(2, 7, 0, 0));
        assert_eq!(merged, Strut::new(10, 7, 5, 0));
    }
}
