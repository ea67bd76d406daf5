//! User facing side of tagwm: the configuration file, logging setup and the `tagwm-check`
//! tool.
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod config;
pub mod utils;

pub use config::*;
