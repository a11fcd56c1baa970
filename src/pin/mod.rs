//! Pin entry - a fixed-width number typed in one digit at a time.
//!
//! - [`value`]: the digits and their integer composition
//! - [`selector`]: the row of digit cells and its cursor
//! - [`window`]: the modal window tying both to a completion handler

pub mod selector;
pub mod value;
pub mod window;

pub use selector::{DigitSelector, SelectionHandler, SelectorOutcome, SelectorState};
pub use value::PinValue;
pub use window::{PinCompletionHandler, PinWindow, WindowOutcome};
