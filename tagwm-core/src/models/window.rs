//! Extended window information.
use std::fmt::Debug;

use super::{Axis, Color, ScreenId, Strut, TagId, WindowState};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some weird behaviour with the compiler,
/// so as suggested by [this `serde` issue][serde-issue], `#[serde(bound = "")]` is added
/// everywhere the generic is declared.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// State every managed window carries on top of its raw handle.
///
/// Fields are only written by the setters on [`State`](crate::State), which keep the layering
/// flags consistent and notify listeners.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtendedWindow<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub(crate) screen: Option<ScreenId>,
    pub(crate) tags: Vec<TagId>,
    pub(crate) minimized: bool,
    pub(crate) sticky: bool,
    pub(crate) fullscreen: bool,
    pub(crate) maximized_horizontal: bool,
    pub(crate) maximized_vertical: bool,
    pub(crate) above: bool,
    pub(crate) below: bool,
    pub(crate) ontop: bool,
    pub(crate) modal: bool,
    /// Within `0.0..=1.0`, or `None` when unset.
    pub(crate) opacity: Option<f64>,
    pub(crate) border_width: u32,
    pub(crate) border_color: Color,
    pub(crate) strut: Strut,
}

impl<H: Handle> ExtendedWindow<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>, screen: Option<ScreenId>) -> Self {
        Self {
            handle,
            screen,
            tags: vec![],
            minimized: false,
            sticky: false,
            fullscreen: false,
            maximized_horizontal: false,
            maximized_vertical: false,
            above: false,
            below: false,
            ontop: false,
            modal: false,
            opacity: None,
            border_width: 0,
            border_color: Color::default(),
            strut: Strut::default(),
        }
    }

    /// The screen this window was last placed on. It may have been removed since; resolve it
    /// through [`State::screen`](crate::State::screen).
    pub const fn screen(&self) -> Option<ScreenId> {
        self.screen
    }

    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    #[must_use]
    pub fn has_tag(&self, tag: &TagId) -> bool {
        self.tags.contains(tag)
    }

    pub const fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub const fn is_sticky(&self) -> bool {
        self.sticky
    }

    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub const fn is_maximized(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.maximized_horizontal,
            Axis::Vertical => self.maximized_vertical,
        }
    }

    pub const fn is_above(&self) -> bool {
        self.above
    }

    pub const fn is_below(&self) -> bool {
        self.below
    }

    pub const fn is_ontop(&self) -> bool {
        self.ontop
    }

    pub const fn is_modal(&self) -> bool {
        self.modal
    }

    pub const fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    pub const fn border_width(&self) -> u32 {
        self.border_width
    }

    pub const fn border_color(&self) -> Color {
        self.border_color
    }

    pub const fn strut(&self) -> Strut {
        self.strut
    }

    /// Reads one of the boolean states.
    pub const fn has_state(&self, state: WindowState) -> bool {
        match state {
            WindowState::Modal => self.modal,
            WindowState::Sticky => self.sticky,
            WindowState::MaximizedVert => self.maximized_vertical,
            WindowState::MaximizedHorz => self.maximized_horizontal,
            WindowState::Hidden => self.minimized,
            WindowState::Fullscreen => self.fullscreen,
            WindowState::Above => self.above,
            WindowState::Below => self.below,
            WindowState::OnTop => self.ontop,
        }
    }

    pub(crate) fn put_state(&mut self, state: WindowState, value: bool) {
        let flag = match state {
            WindowState::Modal => &mut self.modal,
            WindowState::Sticky => &mut self.sticky,
            WindowState::MaximizedVert => &mut self.maximized_vertical,
            WindowState::MaximizedHorz => &mut self.maximized_horizontal,
            WindowState::Hidden => &mut self.minimized,
            WindowState::Fullscreen => &mut self.fullscreen,
            WindowState::Above => &mut self.above,
            WindowState::Below => &mut self.below,
            WindowState::OnTop => &mut self.ontop,
        };
        *flag = value;
    }

    /// All boolean states currently set, in declaration order.
    pub fn states(&self) -> Vec<WindowState> {
        [
            WindowState::Modal,
            WindowState::Sticky,
            WindowState::MaximizedVert,
            WindowState::MaximizedHorz,
            WindowState::Hidden,
            WindowState::Fullscreen,
            WindowState::Above,
            WindowState::Below,
            WindowState::OnTop,
        ]
        .into_iter()
        .filter(|state| self.has_state(*state))
        .collect()
    }
}
