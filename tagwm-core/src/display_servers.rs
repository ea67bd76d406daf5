#[cfg(test)]
mod mock_display_server;

use crate::display_action::DisplayAction;
use crate::models::Handle;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The windowing-protocol side of the state model.
///
/// Implementations translate each [`DisplayAction`] into wire requests. Failures stay on the
/// display server's side; they are never reported back.
pub trait DisplayServer<H: Handle> {
    fn execute_action(&mut self, act: DisplayAction<H>);

    /// Push any buffered requests to the server.
    fn flush(&self) {}
}
