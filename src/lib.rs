//! RGB Channel Scaler - library crate.
//!
//! Provides the per-channel color transform, the toolkit-independent session
//! state, and the eframe application that drives them.

pub mod app;
pub mod color;
pub mod error;
pub mod image_io;
pub mod sample;
pub mod session;

pub use error::{Error, Result};
