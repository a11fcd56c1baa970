//! Application-wide constants and compile-time configuration.
//!
//! Pin-entry limits, per-field dialog parameters, display geometry and
//! input timing live here so they can be tuned in one place.

// Pin entry

/// Largest value a single digit cell can hold before wrapping to 0.
pub const PIN_WINDOW_MAX_VALUE: u8 = 9;

/// Digit capacity of a pin value. Nine digits always fit in a `u32`.
pub const PIN_MAX_DIGITS: usize = 9;

/// Text budget of one digit cell (a single decimal character).
pub const CELL_TEXT_LEN: usize = 1;

/// Maximum title length in bytes; longer titles are truncated.
pub const TITLE_CAPACITY: usize = 24;

// Window stack

/// Maximum number of windows on the navigation stack (menu + one dialog,
/// with headroom).
pub const MAX_STACK_DEPTH: usize = 4;

// Fields
//
//   Odometer  → 5 digits, whole miles
//   Price     → 4 digits, 3 decimals  (e.g. 4.030 $/gal)
//   Quantity  → 5 digits, 3 decimals  (e.g. 12.345 gal)

pub const ODOMETER_DIGITS: usize = 5;
pub const ODOMETER_DECIMALS: usize = 0;
pub const ODOMETER_TITLE: &str = "Odometer Reading";

pub const PRICE_DIGITS: usize = 4;
pub const PRICE_DECIMALS: usize = 3;
pub const PRICE_TITLE: &str = "Fuel Price";

pub const QUANTITY_DIGITS: usize = 5;
pub const QUANTITY_DECIMALS: usize = 3;
pub const QUANTITY_TITLE: &str = "Quantity";

/// Message keys for the phone-side submission.
pub const KEY_ODOMETER: u32 = 0;
pub const KEY_PRICE: u32 = 1;
pub const KEY_QUANTITY: u32 = 2;

// Pin window geometry (128×64 OLED, pixels)

/// Widest the digit row may get.
pub const PIN_WINDOW_MAX_WIDTH: u32 = 120;

/// Height of the digit row.
pub const PIN_WINDOW_HEIGHT: u32 = 20;

/// Gap between neighbouring digit cells.
pub const PIN_WINDOW_CELL_PADDING: u32 = 4;

/// Width reserved for the decimal point marker.
pub const DECIMAL_CELL_WIDTH: u32 = 6;

// Input

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
