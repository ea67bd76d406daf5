//! `XWrap` getters.
use super::{XWrap, MAX_PROPERTY_VALUE_LEN};
use std::os::raw::{c_int, c_uchar, c_ulong};
use std::{ptr, slice};
use x11_dl::xlib;

impl XWrap {
    /// The atoms currently in the `_NET_WM_STATE` list of a window.
    #[must_use]
    pub fn net_wm_state(&self, window: xlib::Window) -> Vec<xlib::Atom> {
        self.read_atom_list(window, self.atoms.NetWMState)
    }

    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn read_atom_list(&self, window: xlib::Window, property: xlib::Atom) -> Vec<xlib::Atom> {
        let mut actual_type: xlib::Atom = 0;
        let mut actual_format: c_int = 0;
        let mut count: c_ulong = 0;
        let mut remaining: c_ulong = 0;
        let mut data: *mut c_uchar = ptr::null_mut();
        let status = unsafe {
            (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                xlib::XA_ATOM,
                &mut actual_type,
                &mut actual_format,
                &mut count,
                &mut remaining,
                &mut data,
            )
        };
        if status != c_int::from(xlib::Success) || data.is_null() {
            return vec![];
        }
        // Format 32 items come back as longs.
        #[allow(clippy::cast_ptr_alignment)]
        let atoms = unsafe { slice::from_raw_parts(data.cast::<xlib::Atom>(), count as usize) }
            .to_vec();
        unsafe { (self.xlib.XFree)(data.cast()) };
        atoms
    }
}
