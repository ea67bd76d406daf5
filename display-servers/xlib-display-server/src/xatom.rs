//! Atoms the bridge writes.
// Atom names mirror the X property names.
#![allow(non_snake_case)]
use std::ffi::CString;
use tagwm_core::models::WindowState;
use x11_dl::xlib;

#[derive(Debug, Clone, Copy)]
pub struct XAtom {
    pub WMState: xlib::Atom,
    pub NetWMState: xlib::Atom,
    pub NetWMStateModal: xlib::Atom,
    pub NetWMStateSticky: xlib::Atom,
    pub NetWMStateMaximizedVert: xlib::Atom,
    pub NetWMStateMaximizedHorz: xlib::Atom,
    pub NetWMStateHidden: xlib::Atom,
    pub NetWMStateFullscreen: xlib::Atom,
    pub NetWMStateAbove: xlib::Atom,
    pub NetWMStateBelow: xlib::Atom,
    pub NetWMWindowOpacity: xlib::Atom,
}

impl XAtom {
    // `XInternAtom`: https://tronche.com/gui/x/xlib/window-information/XInternAtom.html
    pub fn new(xlib: &xlib::Xlib, dpy: *mut xlib::Display) -> Self {
        let from = |name: &str| -> xlib::Atom {
            let Ok(cname) = CString::new(name) else {
                return 0;
            };
            unsafe { (xlib.XInternAtom)(dpy, cname.as_ptr(), xlib::False) }
        };
        Self {
            WMState: from("WM_STATE"),
            NetWMState: from("_NET_WM_STATE"),
            NetWMStateModal: from("_NET_WM_STATE_MODAL"),
            NetWMStateSticky: from("_NET_WM_STATE_STICKY"),
            NetWMStateMaximizedVert: from("_NET_WM_STATE_MAXIMIZED_VERT"),
            NetWMStateMaximizedHorz: from("_NET_WM_STATE_MAXIMIZED_HORZ"),
            NetWMStateHidden: from("_NET_WM_STATE_HIDDEN"),
            NetWMStateFullscreen: from("_NET_WM_STATE_FULLSCREEN"),
            NetWMStateAbove: from("_NET_WM_STATE_ABOVE"),
            NetWMStateBelow: from("_NET_WM_STATE_BELOW"),
            NetWMWindowOpacity: from("_NET_WM_WINDOW_OPACITY"),
        }
    }

    /// The `_NET_WM_STATE` atom for a window state. `OnTop` has no EWMH counterpart.
    pub const fn window_state(&self, state: WindowState) -> Option<xlib::Atom> {
        match state {
            WindowState::Modal => Some(self.NetWMStateModal),
            WindowState::Sticky => Some(self.NetWMStateSticky),
            WindowState::MaximizedVert => Some(self.NetWMStateMaximizedVert),
            WindowState::MaximizedHorz => Some(self.NetWMStateMaximizedHorz),
            WindowState::Hidden => Some(self.NetWMStateHidden),
            WindowState::Fullscreen => Some(self.NetWMStateFullscreen),
            WindowState::Above => Some(self.NetWMStateAbove),
            WindowState::Below => Some(self.NetWMStateBelow),
            WindowState::OnTop => None,
        }
    }
}
