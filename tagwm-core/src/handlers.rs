//! Setter operations on [`State`](crate::State).
//!
//! Every setter is a no-op when the value is unchanged (struts excepted), so listeners that
//! call back into the state cannot loop forever.
mod screen_handler;
mod state_handler;
mod strut_handler;
mod tag_handler;
mod window_handler;
