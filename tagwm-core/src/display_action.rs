use crate::models::Color;
use crate::models::Handle;
use crate::models::WindowHandle;
use crate::models::WindowState;
use crate::models::WmState;
use serde::{Deserialize, Serialize};

/// Confirmed state changes the display server should push to the windowing system.
///
/// These are fire-and-forget: nothing a display server does with them is fed back into the
/// state model.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction<H: Handle> {
    /// Set the width of a window's border in pixels.
    #[serde(bound = "")]
    SetBorderWidth(WindowHandle<H>, u32),

    /// Set the color of a window's border.
    #[serde(bound = "")]
    SetBorderColor(WindowHandle<H>, Color),

    /// Set a window's opacity. `None` removes any opacity so the window is drawn opaque.
    #[serde(bound = "")]
    SetOpacity(WindowHandle<H>, Option<f64>),

    /// Set the ICCCM `WM_STATE` (normal or iconic) of a window.
    #[serde(bound = "")]
    SetWindowState(WindowHandle<H>, WmState),

    /// Add or remove one of the `_NET_WM_STATE` atoms on a window.
    #[serde(bound = "")]
    SetState(WindowHandle<H>, bool, WindowState),
}
