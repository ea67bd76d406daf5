use serde::{Deserialize, Serialize};

/// Boolean window states, named after their `_NET_WM_STATE` counterparts.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WindowState {
    Modal,
    Sticky,
    MaximizedVert,
    MaximizedHorz,
    Hidden,
    Fullscreen,
    Above,
    Below,
    /// Has no EWMH atom; display servers are free to ignore it.
    OnTop,
}

impl WindowState {
    /// States that must be cleared, in this order, before `self` may be switched on.
    ///
    /// At most one of above/below/ontop/fullscreen can be set, and a fullscreen window is never
    /// maximized.
    pub const fn exclusions(self) -> &'static [WindowState] {
        match self {
            Self::Fullscreen => &[
                Self::MaximizedHorz,
                Self::MaximizedVert,
                Self::Below,
                Self::Above,
                Self::OnTop,
            ],
            Self::Above => &[Self::Below, Self::OnTop, Self::Fullscreen],
            Self::Below => &[Self::Above, Self::OnTop, Self::Fullscreen],
            Self::OnTop => &[Self::Above, Self::Below, Self::Fullscreen],
            Self::MaximizedHorz | Self::MaximizedVert => &[Self::Fullscreen],
            Self::Modal | Self::Sticky | Self::Hidden => &[],
        }
    }

    /// Whether toggling this state can show or hide the window.
    pub const fn affects_visibility(self) -> bool {
        matches!(self, Self::Hidden | Self::Sticky)
    }

    /// Whether listeners get a `request::` notification with the proposed value before the
    /// state is committed.
    pub const fn has_request_phase(self) -> bool {
        matches!(
            self,
            Self::Fullscreen | Self::MaximizedHorz | Self::MaximizedVert
        )
    }
}

/// Maximization axis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const fn state(self) -> WindowState {
        match self {
            Self::Horizontal => WindowState::MaximizedHorz,
            Self::Vertical => WindowState::MaximizedVert,
        }
    }
}

/// ICCCM `WM_STATE` of a window.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WmState {
    Normal,
    Iconic,
}

impl From<bool> for WmState {
    fn from(minimized: bool) -> Self {
        if minimized {
            Self::Iconic
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_states_exclude_each_other() {
        let layers = [
            WindowState::Above,
            WindowState::Below,
            WindowState::OnTop,
            WindowState::Fullscreen,
        ];
        for state in layers {
            for other in layers.iter().filter(|s| **s != state) {
                assert!(
                    state.exclusions().contains(other),
                    "{state:?} should clear {other:?}"
                );
            }
        }
    }

    #[test]
    fn only_fullscreen_and_maximized_have_a_request_phase() {
        assert!(WindowState::Fullscreen.has_request_phase());
        assert!(Axis::Horizontal.state().has_request_phase());
        assert!(Axis::Vertical.state().has_request_phase());
        assert!(!WindowState::Above.has_request_phase());
        assert!(!WindowState::Sticky.has_request_phase());
    }
}
