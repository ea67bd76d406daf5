//! Window state model for tagwm.
//!
//! Every window the controller adopts gets an [`ExtendedWindow`] record. The record holds the
//! layering flags (above, below, ontop, fullscreen, maximized), minimized/sticky/modal state,
//! opacity, border and strut. All mutation goes through the setters on [`State`], which keep
//! the layering flags mutually exclusive, notify listeners through [`Signal`]s and queue
//! [`DisplayAction`]s for the display server.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod config;
mod display_action;
pub mod display_servers;
pub mod errors;
mod handlers;
mod manager;
pub mod models;
pub mod property;
pub mod signal;
pub mod state;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_servers::DisplayServer;
pub use errors::{Result, TagwmError};
pub use manager::Manager;
pub use models::ExtendedWindow;
pub use property::{Property, Value};
pub use signal::Signal;
pub use state::State;
