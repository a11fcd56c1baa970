//! Row of digit cells with one active cell.
//!
//! The selector never owns the digits. Reads and mutations go through a
//! [`SelectionHandler`], which the owning window binds to its value model.
//! The selector keeps only its cursor, a one-character text buffer per
//! cell, and its colors.
//!
//! ```text
//!   Idle ──first input──▶ Editing(0) ──Select──▶ Editing(1) ... Editing(last)
//!                           ▲   │                                   │
//!                           └Back                                Select
//!                                                                   ▼
//!                                                               Completed
//! ```

use heapless::{String, Vec};

use crate::config::{CELL_TEXT_LEN, PIN_MAX_DIGITS};
use crate::error::{Error, Result};
use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::{ButtonEvent, Color};

/// Default fill of the active cell.
pub const DEFAULT_ACTIVE_COLOR: Color = Color::Red;

/// Default fill of the inactive cells.
pub const DEFAULT_INACTIVE_COLOR: Color = Color::DarkGray;

/// Capability the selector uses to read and mutate the digits it shows.
pub trait SelectionHandler {
    /// Text for the cell at `index`.
    fn cell_text(&self, index: usize) -> Option<String<CELL_TEXT_LEN>>;
    /// Raise the digit at `index`.
    fn increment(&mut self, index: usize);
    /// Lower the digit at `index`.
    fn decrement(&mut self, index: usize);
}

/// Where the selector is in its edit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectorState {
    /// No cell selected yet.
    Idle,
    /// The cell at this index is active.
    Editing(usize),
    /// Entry confirmed. Terminal.
    Completed,
}

/// What a button press did to the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectorOutcome {
    /// First input: the first cell became active.
    Activated,
    /// The digit at this index changed.
    Changed(usize),
    /// The cursor moved to this index.
    Moved(usize),
    /// Confirm on the last cell. Reported once.
    Completed,
    /// Back on the first cell.
    Cancelled,
    /// Nothing happened (already completed).
    Ignored,
}

#[derive(Debug)]
pub struct DigitSelector {
    state: SelectorState,
    num_decimals: usize,
    cells: Vec<String<CELL_TEXT_LEN>, PIN_MAX_DIGITS>,
    active_color: Color,
    inactive_color: Color,
}

impl DigitSelector {
    /// Create a selector with `num_digits` empty cells.
    pub fn create(num_digits: usize, num_decimals: usize) -> Result<Self> {
        if num_digits == 0 || num_decimals > num_digits {
            return Err(Error::InvalidArgument);
        }

        let mut cells = Vec::new();
        cells
            .resize(num_digits, String::new())
            .map_err(|_| Error::Allocation)?;

        Ok(Self {
            state: SelectorState::Idle,
            num_decimals,
            cells,
            active_color: DEFAULT_ACTIVE_COLOR,
            inactive_color: DEFAULT_INACTIVE_COLOR,
        })
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Index of the active cell, if any.
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            SelectorState::Editing(index) => Some(index),
            _ => None,
        }
    }

    /// Number of cells drawn before the decimal point marker, or `None`
    /// for whole numbers.
    pub fn decimal_marker(&self) -> Option<usize> {
        if self.num_decimals > 0 {
            Some(self.cells.len() - self.num_decimals)
        } else {
            None
        }
    }

    /// Buffered text of the cell at `index`.
    pub fn get_cell_text(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|text| text.as_str())
    }

    /// Re-read every cell from the handler.
    pub fn refresh(&mut self, handler: &impl SelectionHandler) {
        for index in 0..self.cells.len() {
            self.refresh_cell(index, handler);
        }
    }

    fn refresh_cell(&mut self, index: usize, handler: &impl SelectionHandler) {
        if let (Some(cell), Some(text)) = (self.cells.get_mut(index), handler.cell_text(index)) {
            *cell = text;
        }
    }

    /// Make the first cell active. No-op unless idle.
    pub fn activate(&mut self) -> bool {
        if self.state == SelectorState::Idle {
            self.state = SelectorState::Editing(0);
            true
        } else {
            false
        }
    }

    pub fn increment(&mut self, index: usize, handler: &mut impl SelectionHandler) {
        if index < self.cells.len() {
            handler.increment(index);
            self.refresh_cell(index, &*handler);
        }
    }

    pub fn decrement(&mut self, index: usize, handler: &mut impl SelectionHandler) {
        if index < self.cells.len() {
            handler.decrement(index);
            self.refresh_cell(index, &*handler);
        }
    }

    /// Move to the next cell. Returns `false` on the last cell.
    pub fn select_next(&mut self) -> bool {
        self.step(|index, count| select_next(index, count))
    }

    /// Move to the previous cell. Returns `false` on the first cell.
    pub fn select_prev(&mut self) -> bool {
        self.step(|index, _| select_prev(index))
    }

    fn step(&mut self, next: impl Fn(usize, usize) -> usize) -> bool {
        match self.state {
            SelectorState::Editing(index) => {
                let moved = next(index, self.cells.len());
                self.state = SelectorState::Editing(moved);
                moved != index
            }
            _ => false,
        }
    }

    /// Confirm the entry. Only valid while editing the last cell; returns
    /// `true` for that one transition into [`SelectorState::Completed`].
    pub fn complete(&mut self) -> bool {
        match self.state {
            SelectorState::Editing(index) if index + 1 == self.cells.len() => {
                self.state = SelectorState::Completed;
                true
            }
            _ => false,
        }
    }

    /// Apply one button press.
    pub fn handle_button(
        &mut self,
        event: ButtonEvent,
        handler: &mut impl SelectionHandler,
    ) -> SelectorOutcome {
        let index = match self.state {
            SelectorState::Completed => return SelectorOutcome::Ignored,
            SelectorState::Idle => {
                self.activate();
                return SelectorOutcome::Activated;
            }
            SelectorState::Editing(index) => index,
        };

        match event {
            ButtonEvent::Up => {
                self.increment(index, handler);
                SelectorOutcome::Changed(index)
            }
            ButtonEvent::Down => {
                self.decrement(index, handler);
                SelectorOutcome::Changed(index)
            }
            ButtonEvent::Select => {
                if self.select_next() {
                    SelectorOutcome::Moved(index + 1)
                } else if self.complete() {
                    SelectorOutcome::Completed
                } else {
                    SelectorOutcome::Ignored
                }
            }
            ButtonEvent::Back => {
                if self.select_prev() {
                    SelectorOutcome::Moved(index - 1)
                } else {
                    self.state = SelectorState::Idle;
                    SelectorOutcome::Cancelled
                }
            }
        }
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn inactive_color(&self) -> Color {
        self.inactive_color
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub fn set_inactive_color(&mut self, color: Color) {
        self.inactive_color = color;
    }
}
