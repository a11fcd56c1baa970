//! User interface subsystem - window stack, menu and input handling.
//!
//! The app keeps a small modal stack: the menu at the bottom, at most one
//! pin-entry window above it. Button events go to whatever is on top.
//!
//! ## Components
//!
//! - **Stack**: fixed-depth navigation stack of window ids
//! - **Menu**: the four-row home screen (three fields + Submit)
//! - **Layout**: digit-row geometry for the 128×64 OLED
//! - **Buttons**: 4 tactile switches with debouncing (UP, DOWN, SELECT, BACK)

pub mod input_logic;
pub mod layout;
pub mod menu;
pub mod stack;

/// Physical button events (after debouncing).
///
/// Four buttons, watch style:
///   - UP/DOWN: change the active digit, or move the menu cursor
///   - SELECT: next digit / confirm, or open the highlighted row
///   - BACK: previous digit / cancel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
    Back,
}

/// Fill colors the selector can use for its cells.
///
/// The OLED is monochrome, so the renderer only distinguishes "lit" from
/// black; the named colors are kept for displays that can show them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    DarkGray,
}

impl Color {
    /// Whether a monochrome display should light this color.
    pub fn is_lit(self) -> bool {
        !matches!(self, Color::Black)
    }
}
