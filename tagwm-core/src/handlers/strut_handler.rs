use crate::models::{Handle, Strut, WindowHandle};
use crate::property::Property;
use crate::signal::Signal;
use crate::state::State;

impl<H: Handle> State<H> {
    pub fn struts(&self, handle: &WindowHandle<H>) -> Option<Strut> {
        self.window(handle).map(|w| w.strut())
    }

    /// Replaces the space a window reserves along the edges of its screen.
    ///
    /// Unlike the other setters this always notifies, even when the strut is unchanged, and
    /// always invalidates the workarea of the owning screen.
    pub fn set_struts(&mut self, handle: &WindowHandle<H>, strut: Strut) {
        let Some(window) = self.window_mut(handle) else {
            tracing::warn!("Cannot set struts on unknown window {:?}", handle);
            return;
        };
        window.strut = strut;
        let screen = window.screen;
        self.emit(Signal::Property {
            window: *handle,
            property: Property::Struts,
        });
        self.invalidate_workarea(screen);
    }
}
