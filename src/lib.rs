//! Library interface for mileage-recorder.
//!
//! Everything that does not touch hardware lives here so it can be tested
//! on the host: the pin-entry widget, the window stack, the menu and the
//! application context.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and drives this library from button and display tasks.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod pin;
pub mod submit;
pub mod ui;

pub use app::{App, FieldEntry, Screen};
pub use error::{Error, Result};
pub use pin::{PinCompletionHandler, PinValue, PinWindow};
pub use submit::{Outbox, Submission};
pub use ui::ButtonEvent;
