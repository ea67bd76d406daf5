//! A wrapper around calls to xlib and X related functions.
use super::xatom::XAtom;
use std::fmt;
use std::os::raw::{c_int, c_long};
use std::ptr;

use x11_dl::xlib;

mod getters;
mod setters;

type WindowStateConst = c_long;
pub const NORMAL_STATE: WindowStateConst = 1;
pub const ICONIC_STATE: WindowStateConst = 3;
const MAX_PROPERTY_VALUE_LEN: c_long = 4096;

const X_CONFIGUREWINDOW: u8 = 12;
const X_CHANGEWINDOWATTRIBUTES: u8 = 2;

// This is allowed for now as const extern fns
// are not yet stable (1.56.0, 16 Sept 2021)
// see issue #64926 <https://github.com/rust-lang/rust/issues/64926> for more information.
#[allow(clippy::missing_const_for_fn)]
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;

    // Windows may be gone by the time their actions are flushed.
    if ec == xlib::BadWindow
        || (rc == X_CONFIGUREWINDOW && ec == xlib::BadMatch)
        || (rc == X_CHANGEWINDOWATTRIBUTES && ec == xlib::BadMatch)
    {
        return 0;
    }
    tracing::warn!("X error {} on request {}", ec, rc);
    1
}

#[derive(Debug, Clone)]
pub enum XlibError {
    LibraryNotFound,
    DisplayNotFound,
}

impl fmt::Display for XlibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibraryNotFound => f.write_str("could not load xlib"),
            Self::DisplayNotFound => f.write_str("could not open the X display"),
        }
    }
}

impl std::error::Error for XlibError {}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    pub atoms: XAtom,
}

impl XWrap {
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    pub fn new() -> Result<Self, XlibError> {
        let xlib = xlib::Xlib::open().map_err(|err| {
            tracing::error!("Couldn't load xlib: {}", err);
            XlibError::LibraryNotFound
        })?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(XlibError::DisplayNotFound);
        }
        unsafe { (xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };
        let atoms = XAtom::new(&xlib, display);
        Ok(Self {
            xlib,
            display,
            atoms,
        })
    }

    /// Flushes the output buffer.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Flushes and waits until every request has been processed.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }
}

impl Drop for XWrap {
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/closing.html
    fn drop(&mut self) {
        self.sync();
        unsafe { (self.xlib.XCloseDisplay)(self.display) };
    }
}
