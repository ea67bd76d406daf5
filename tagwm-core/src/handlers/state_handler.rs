use crate::display_action::DisplayAction;
use crate::models::{Axis, Handle, WindowHandle, WindowState, WmState};
use crate::property::Property;
use crate::signal::Signal;
use crate::state::State;

impl<H: Handle> State<H> {
    pub fn set_above(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_window_state(handle, WindowState::Above, value);
    }

    pub fn set_below(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_window_state(handle, WindowState::Below, value);
    }

    pub fn set_ontop(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_window_state(handle, WindowState::OnTop, value);
    }

    pub fn set_fullscreen(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_window_state(handle, WindowState::Fullscreen, value);
    }

    pub fn set_maximized(&mut self, handle: &WindowHandle<H>, axis: Axis, value: bool) {
        self.set_window_state(handle, axis.state(), value);
    }

    pub fn set_maximized_horizontal(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_maximized(handle, Axis::Horizontal, value);
    }

    pub fn set_maximized_vertical(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_maximized(handle, Axis::Vertical, value);
    }

    pub fn set_minimized(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_window_state(handle, WindowState::Hidden, value);
    }

    pub fn set_sticky(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_window_state(handle, WindowState::Sticky, value);
    }

    pub fn set_modal(&mut self, handle: &WindowHandle<H>, value: bool) {
        self.set_window_state(handle, WindowState::Modal, value);
    }

    /// Switches one boolean state of a window.
    ///
    /// Switching a state on first switches off everything it excludes, through this same
    /// function so each of those changes is announced on its own. Switching a state off never
    /// cascades. The exclusions are enforced again after the request phase, so whatever a
    /// request listener does, listeners only ever see allowed combinations.
    pub fn set_window_state(&mut self, handle: &WindowHandle<H>, state: WindowState, value: bool) {
        let Some(window) = self.window(handle) else {
            tracing::warn!("Cannot set {:?} on unknown window {:?}", state, handle);
            return;
        };
        if window.has_state(state) == value {
            return;
        }

        if value {
            self.clear_exclusions(handle, state);
        }

        let property = Property::from(state);
        let pending = (*handle, state);
        if state.has_request_phase() && !self.pending_requests.contains(&pending) {
            self.pending_requests.push(pending);
            self.emit(Signal::Request {
                window: *handle,
                property,
                value,
            });
            self.pending_requests.retain(|p| p != &pending);

            // A request listener may have unmanaged the window or made this very change.
            match self.window(handle) {
                Some(window) if window.has_state(state) != value => {}
                _ => return,
            }
            if value {
                self.clear_exclusions(handle, state);
            }
        }

        let Some(window) = self.window_mut(handle) else {
            return;
        };
        if window.has_state(state) == value {
            return;
        }
        window.put_state(state, value);
        let reserves_space = window.strut.has_value();
        let screen = window.screen;

        if state == WindowState::Hidden {
            self.queue(DisplayAction::SetWindowState(*handle, WmState::from(value)));
        }
        self.queue(DisplayAction::SetState(*handle, value, state));
        if reserves_space && state.affects_visibility() {
            self.invalidate_workarea(screen);
        }
        self.emit(Signal::Property {
            window: *handle,
            property,
        });
    }

    fn clear_exclusions(&mut self, handle: &WindowHandle<H>, state: WindowState) {
        for excluded in state.exclusions() {
            self.set_window_state(handle, *excluded, false);
        }
    }
}
