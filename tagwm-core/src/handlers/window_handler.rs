use crate::display_action::DisplayAction;
use crate::models::{Color, ExtendedWindow, Handle, ScreenId, WindowHandle};
use crate::property::Property;
use crate::signal::Signal;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Adopts a window, giving it the configured border and opacity.
    /// Returns `false` if the window is already managed.
    pub fn manage_window(&mut self, handle: WindowHandle<H>, screen: Option<ScreenId>) -> bool {
        //don't add the window if the manager already knows about it
        if self.window(&handle).is_some() {
            return false;
        }
        tracing::debug!("Managing window {:?} on screen {:?}", handle, screen);

        let defaults = self.defaults;
        let mut window = ExtendedWindow::new(handle, screen);
        window.border_width = defaults.border_width;
        window.border_color = defaults.border_color;
        window.opacity = defaults.opacity;
        self.windows.push(window);

        //let the DS know what the window looks like
        self.queue(DisplayAction::SetBorderWidth(handle, defaults.border_width));
        self.queue(DisplayAction::SetBorderColor(handle, defaults.border_color));
        self.queue(DisplayAction::SetOpacity(handle, defaults.opacity));
        true
    }

    /// Forgets a window: it is untagged from every tag and its strut stops counting towards
    /// the workarea. Returns `false` if the window was not managed.
    pub fn unmanage_window(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(window) = self.window(handle) else {
            return false;
        };
        tracing::debug!("Unmanaging window {:?}", handle);

        for tag in window.tags.clone() {
            self.untag_window(handle, tag);
        }

        let Some(index) = self.windows.iter().position(|w| &w.handle == handle) else {
            return false;
        };
        let window = self.windows.remove(index);
        if window.strut.has_value() {
            self.invalidate_workarea(window.screen);
        }
        true
    }

    /// Moves a window to another screen, or to no screen at all.
    pub fn set_window_screen(&mut self, handle: &WindowHandle<H>, screen: Option<ScreenId>) {
        if let Some(id) = screen {
            if self.screen(id).is_none() {
                tracing::warn!("Cannot move {:?} to unknown screen {}", handle, id);
                return;
            }
        }
        let Some(window) = self.window_mut(handle) else {
            tracing::warn!("Cannot move unknown window {:?}", handle);
            return;
        };
        if window.screen == screen {
            return;
        }
        let previous = std::mem::replace(&mut window.screen, screen);
        if window.strut.has_value() {
            self.invalidate_workarea(previous);
            self.invalidate_workarea(screen);
        }
    }

    /// Sets the opacity of a window. `None` resets it; values outside `0.0..=1.0` are ignored.
    pub fn set_opacity(&mut self, handle: &WindowHandle<H>, opacity: Option<f64>) {
        if let Some(value) = opacity {
            if !(0.0..=1.0).contains(&value) {
                tracing::debug!("Ignoring out of range opacity {} for {:?}", value, handle);
                return;
            }
        }
        let Some(window) = self.window_mut(handle) else {
            tracing::warn!("Cannot set opacity on unknown window {:?}", handle);
            return;
        };
        if window.opacity == opacity {
            return;
        }
        window.opacity = opacity;
        self.queue(DisplayAction::SetOpacity(*handle, opacity));
        self.emit(Signal::Property {
            window: *handle,
            property: Property::Opacity,
        });
    }

    /// Sets the border width of a window. Negative widths are ignored.
    pub fn set_border_width(&mut self, handle: &WindowHandle<H>, width: i32) {
        let Ok(width) = u32::try_from(width) else {
            tracing::debug!("Ignoring negative border width {} for {:?}", width, handle);
            return;
        };
        let Some(window) = self.window(handle) else {
            tracing::warn!("Cannot set border width on unknown window {:?}", handle);
            return;
        };
        if window.border_width == width {
            return;
        }
        self.queue(DisplayAction::SetBorderWidth(*handle, width));
        if let Some(window) = self.window_mut(handle) {
            window.border_width = width;
        }
        self.emit(Signal::Property {
            window: *handle,
            property: Property::BorderWidth,
        });
    }

    /// Sets the border color of a window from a color name or `#rrggbb` string. Strings that
    /// do not parse are ignored.
    pub fn set_border_color(&mut self, handle: &WindowHandle<H>, color: &str) {
        match color.parse::<Color>() {
            Ok(color) => self.set_border_color_value(handle, color),
            Err(err) => tracing::debug!("Ignoring border color for {:?}: {}", handle, err),
        }
    }

    pub fn set_border_color_value(&mut self, handle: &WindowHandle<H>, color: Color) {
        let Some(window) = self.window_mut(handle) else {
            tracing::warn!("Cannot set border color on unknown window {:?}", handle);
            return;
        };
        if window.border_color == color {
            return;
        }
        window.border_color = color;
        self.queue(DisplayAction::SetBorderColor(*handle, color));
        self.emit(Signal::Property {
            window: *handle,
            property: Property::BorderColor,
        });
    }
}
