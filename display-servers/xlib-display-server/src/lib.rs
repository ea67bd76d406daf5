//! Pushes confirmed window state changes to an X server through xlib.
// allow casting types
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod xatom;
mod xwrap;

use serde::{Deserialize, Serialize};
pub use xwrap::{XWrap, XlibError};

use tagwm_core::models::{Color, Handle, WindowHandle, WindowState, WmState};
use tagwm_core::{DisplayAction, DisplayServer};

use x11_dl::xlib;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XlibWindowHandle(pub xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
}

impl XlibDisplayServer {
    /// Connects to the X server named by `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// Errors if xlib cannot be loaded or the display cannot be opened.
    pub fn new() -> Result<Self, XlibError> {
        Ok(Self { xw: XWrap::new()? })
    }
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn execute_action(&mut self, act: DisplayAction<XlibWindowHandle>) {
        tracing::trace!("DisplayAction: {:?}", act);
        let xw = &self.xw;
        match act {
            DisplayAction::SetBorderWidth(h, width) => from_set_border_width(xw, h, width),
            DisplayAction::SetBorderColor(h, color) => from_set_border_color(xw, h, color),
            DisplayAction::SetOpacity(h, opacity) => from_set_opacity(xw, h, opacity),
            DisplayAction::SetWindowState(h, state) => from_set_window_state(xw, h, state),
            DisplayAction::SetState(h, t, s) => from_set_state(xw, h, t, s),
        }
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

fn from_set_border_width(xw: &XWrap, handle: WindowHandle<XlibWindowHandle>, width: u32) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.set_window_border_width(window, width);
}

fn from_set_border_color(xw: &XWrap, handle: WindowHandle<XlibWindowHandle>, color: Color) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.set_window_border_color(window, color.argb().into());
}

fn from_set_opacity(xw: &XWrap, handle: WindowHandle<XlibWindowHandle>, opacity: Option<f64>) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    match opacity {
        Some(opacity) => xw.set_window_opacity(window, opacity),
        None => xw.delete_property(window, xw.atoms.NetWMWindowOpacity),
    }
}

fn from_set_window_state(xw: &XWrap, handle: WindowHandle<XlibWindowHandle>, state: WmState) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.set_wm_state(window, state);
}

fn from_set_state(
    xw: &XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    toggle_to: bool,
    window_state: WindowState,
) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    let Some(atom) = xw.atoms.window_state(window_state) else {
        return;
    };
    xw.toggle_net_wm_state(window, atom, toggle_to);
}
