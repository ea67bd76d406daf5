//! Objects (such as windows, tags and screens) held by the state model.
mod color;
mod screen;
mod strut;
mod tag;
mod window;
mod window_state;

pub use color::Color;
pub use screen::{BBox, Screen};
pub use strut::Strut;
pub use tag::{Tag, Tags};
pub use window::ExtendedWindow;
pub use window::Handle;
pub use window::MockHandle;
pub use window::WindowHandle;
pub use window_state::{Axis, WindowState, WmState};

pub type TagId = usize;
pub type ScreenId = usize;
