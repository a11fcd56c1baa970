//! Digit-row geometry.
//!
//! Cells share the available width evenly after subtracting the padding
//! between them and, for fractional values, one narrow slot for the
//! decimal point. The row is then shrunk to the width the cells actually
//! use and centred on the screen.

use crate::config::{
    DECIMAL_CELL_WIDTH, PIN_WINDOW_CELL_PADDING, PIN_WINDOW_HEIGHT, PIN_WINDOW_MAX_WIDTH,
};

/// Screen-space placement of the digit row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    /// Left edge of the row.
    pub x: u32,
    /// Top edge of the row.
    pub y: u32,
    /// Width of one digit cell.
    pub cell_width: u32,
    /// Total row width including padding and decimal slot.
    pub width: u32,
    /// Cells before the decimal slot, if there is one.
    pub decimal_after: Option<usize>,
}

impl RowLayout {
    /// Lay out `num_digits` cells on a `screen_w` × `screen_h` screen.
    /// Returns `None` if there are no cells to place.
    pub fn compute(
        num_digits: usize,
        num_decimals: usize,
        screen_w: u32,
        screen_h: u32,
    ) -> Option<Self> {
        if num_digits == 0 || num_decimals > num_digits {
            return None;
        }
        let cells = num_digits as u32;
        let decimal_width = if num_decimals > 0 { DECIMAL_CELL_WIDTH } else { 0 };

        let available = PIN_WINDOW_MAX_WIDTH
            .saturating_sub((cells - 1) * PIN_WINDOW_CELL_PADDING)
            .saturating_sub(decimal_width);
        let cell_width = available / cells;
        let width = (cell_width + PIN_WINDOW_CELL_PADDING) * cells - PIN_WINDOW_CELL_PADDING
            + decimal_width;

        Some(Self {
            x: screen_w.saturating_sub(width) / 2,
            y: screen_h.saturating_sub(PIN_WINDOW_HEIGHT) / 2,
            cell_width,
            width,
            decimal_after: (num_decimals > 0).then(|| num_digits - num_decimals),
        })
    }

    /// Left edge of the cell at `index`, skipping over the decimal slot.
    pub fn cell_x(&self, index: usize) -> u32 {
        let mut x = self.x + index as u32 * (self.cell_width + PIN_WINDOW_CELL_PADDING);
        if let Some(after) = self.decimal_after {
            if index >= after {
                x += DECIMAL_CELL_WIDTH;
            }
        }
        x
    }

    /// Left edge of the decimal slot.
    pub fn decimal_x(&self) -> Option<u32> {
        let after = self.decimal_after?;
        Some(self.x + after as u32 * (self.cell_width + PIN_WINDOW_CELL_PADDING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_number_row_is_centred() {
        let layout = RowLayout::compute(5, 0, 128, 64).unwrap();
        // (120 - 4*4) / 5 = 20
        assert_eq!(layout.cell_width, 20);
        assert_eq!(layout.width, 5 * 24 - 4);
        assert_eq!(layout.x, (128 - 116) / 2);
        assert_eq!(layout.y, (64 - PIN_WINDOW_HEIGHT) / 2);
        assert_eq!(layout.decimal_after, None);
        assert_eq!(layout.decimal_x(), None);
    }

    #[test]
    fn decimal_slot_shifts_fraction_cells() {
        let layout = RowLayout::compute(4, 3, 128, 64).unwrap();
        // (120 - 3*4 - 6) / 4 = 25
        assert_eq!(layout.cell_width, 25);
        assert_eq!(layout.width, 4 * 29 - 4 + 6);
        assert_eq!(layout.decimal_after, Some(1));

        let step = layout.cell_width + PIN_WINDOW_CELL_PADDING;
        assert_eq!(layout.cell_x(0), layout.x);
        assert_eq!(layout.decimal_x(), Some(layout.x + step));
        assert_eq!(layout.cell_x(1), layout.x + step + DECIMAL_CELL_WIDTH);
    }

    #[test]
    fn rejects_empty_row() {
        assert_eq!(RowLayout::compute(0, 0, 128, 64), None);
        assert_eq!(RowLayout::compute(2, 3, 128, 64), None);
    }
}
