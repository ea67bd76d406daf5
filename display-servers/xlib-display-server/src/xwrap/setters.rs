//! `XWrap` setters.
use super::{ICONIC_STATE, NORMAL_STATE};
use crate::XWrap;
use std::os::raw::{c_int, c_long, c_ulong};
use tagwm_core::models::WmState;
use x11_dl::xlib;

/// `_NET_WM_WINDOW_OPACITY` is a cardinal where `0xffffffff` is fully opaque.
pub(crate) fn opacity_to_cardinal(opacity: f64) -> c_ulong {
    (opacity.clamp(0.0, 1.0) * f64::from(u32::MAX)).round() as c_ulong
}

pub(crate) const fn wm_state_value(state: WmState) -> c_long {
    match state {
        WmState::Normal => NORMAL_STATE,
        WmState::Iconic => ICONIC_STATE,
    }
}

/// The atom list with `atom` switched `on` or off, or `None` if it already is.
fn toggled(mut atoms: Vec<xlib::Atom>, atom: xlib::Atom, on: bool) -> Option<Vec<xlib::Atom>> {
    if atoms.contains(&atom) == on {
        return None;
    }
    if on {
        atoms.push(atom);
    } else {
        atoms.retain(|a| *a != atom);
    }
    Some(atoms)
}

impl XWrap {
    /// Overwrites a format 32 property of a window.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    fn change_property32(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        kind: xlib::Atom,
        data: &[c_long],
    ) {
        let Ok(len) = c_int::try_from(data.len()) else {
            tracing::warn!("Refusing to write {} items to property {}", data.len(), property);
            return;
        };
        let bytes = data.as_ptr().cast::<u8>();
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                property,
                kind,
                32,
                xlib::PropModeReplace,
                bytes,
                len,
            );
        }
    }

    // `XDeleteProperty`: https://tronche.com/gui/x/xlib/window-information/XDeleteProperty.html
    pub fn delete_property(&self, window: xlib::Window, property: xlib::Atom) {
        unsafe { (self.xlib.XDeleteProperty)(self.display, window, property) };
    }

    /// Adds `atom` to, or drops it from, the `_NET_WM_STATE` list of a window.
    pub fn toggle_net_wm_state(&self, window: xlib::Window, atom: xlib::Atom, on: bool) {
        let Some(atoms) = toggled(self.net_wm_state(window), atom, on) else {
            return;
        };
        let data: Vec<c_long> = atoms.into_iter().map(|a| a as c_long).collect();
        self.change_property32(window, self.atoms.NetWMState, xlib::XA_ATOM, &data);
    }

    // `XSetWindowBorderWidth`: https://tronche.com/gui/x/xlib/window/XSetWindowBorderWidth.html
    pub fn set_window_border_width(&self, window: xlib::Window, width: u32) {
        unsafe { (self.xlib.XSetWindowBorderWidth)(self.display, window, width) };
    }

    /// Sets a windows border color.
    // `XSetWindowBorder`: https://tronche.com/gui/x/xlib/window/XSetWindowBorder.html
    pub fn set_window_border_color(&self, window: xlib::Window, color: c_ulong) {
        unsafe { (self.xlib.XSetWindowBorder)(self.display, window, color) };
    }

    pub fn set_window_opacity(&self, window: xlib::Window, opacity: f64) {
        let data = [opacity_to_cardinal(opacity) as c_long];
        self.change_property32(
            window,
            self.atoms.NetWMWindowOpacity,
            xlib::XA_CARDINAL,
            &data,
        );
    }

    /// Sets the `WM_STATE` of a window. No icon window is ever set.
    pub fn set_wm_state(&self, window: xlib::Window, state: WmState) {
        let data = [wm_state_value(state), 0];
        self.change_property32(window, self.atoms.WMState, self.atoms.WMState, &data);
    }
}
