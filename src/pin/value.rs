//! Fixed-width decimal value edited one digit at a time.
//!
//! Digits are stored most significant first. The decimal count is only a
//! display convention: [`PinValue::to_integer`] always composes the whole
//! row, and callers divide by `10^num_decimals` when formatting.

use heapless::{String, Vec};

use crate::config::{CELL_TEXT_LEN, PIN_MAX_DIGITS, PIN_WINDOW_MAX_VALUE};
use crate::error::{Error, Result};
use crate::ui::input_logic::{wrap_decrement, wrap_increment};

/// Ordered decimal digits plus the number of trailing fractional digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinValue {
    digits: Vec<u8, PIN_MAX_DIGITS>,
    num_decimals: usize,
}

impl PinValue {
    /// Create an all-zero value with `num_digits` digits.
    ///
    /// Rejects an empty row or more decimals than digits with
    /// [`Error::InvalidArgument`]; a row wider than [`PIN_MAX_DIGITS`]
    /// cannot be stored and fails with [`Error::Allocation`].
    pub fn create(num_digits: usize, num_decimals: usize) -> Result<Self> {
        if num_digits == 0 || num_decimals > num_digits {
            warn!(
                "PinValue: rejected {} digits / {} decimals",
                num_digits,
                num_decimals
            );
            return Err(Error::InvalidArgument);
        }

        let mut digits = Vec::new();
        digits
            .resize(num_digits, 0)
            .map_err(|_| Error::Allocation)?;

        debug!("PinValue: {} digits, {} decimals", num_digits, num_decimals);
        Ok(Self {
            digits,
            num_decimals,
        })
    }

    /// Create a value pre-filled with the low `num_digits` digits of
    /// `value`. Higher digits that do not fit are dropped.
    pub fn from_integer(num_digits: usize, num_decimals: usize, value: u32) -> Result<Self> {
        let mut pin = Self::create(num_digits, num_decimals)?;
        let mut rest = value;
        for digit in pin.digits.iter_mut().rev() {
            *digit = (rest % 10) as u8;
            rest /= 10;
        }
        if rest != 0 {
            warn!("PinValue: {} does not fit in {} digits", value, num_digits);
        }
        Ok(pin)
    }

    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    pub fn num_decimals(&self) -> usize {
        self.num_decimals
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Digit at `index`, or `None` past the end of the row.
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied()
    }

    /// Single-character text of the digit at `index`.
    pub fn cell_text(&self, index: usize) -> Option<String<CELL_TEXT_LEN>> {
        let digit = self.digit(index)?;
        let mut text = String::new();
        text.push(char::from(b'0' + digit)).ok()?;
        Some(text)
    }

    /// Raise the digit at `index` by one, 9 wraps to 0. Out-of-range
    /// indices are ignored.
    pub fn increment(&mut self, index: usize) {
        if let Some(digit) = self.digits.get_mut(index) {
            *digit = wrap_increment(*digit, PIN_WINDOW_MAX_VALUE);
        }
    }

    /// Lower the digit at `index` by one, 0 wraps to 9.
    pub fn decrement(&mut self, index: usize) {
        if let Some(digit) = self.digits.get_mut(index) {
            *digit = wrap_decrement(*digit, PIN_WINDOW_MAX_VALUE);
        }
    }

    /// Compose the row into a base-10 integer, most significant digit first.
    pub fn to_integer(&self) -> u32 {
        let value = self
            .digits
            .iter()
            .fold(0u32, |acc, &digit| acc * 10 + u32::from(digit));
        trace!("PinValue: composed {}", value);
        value
    }

    /// Release the value. Equivalent to dropping it.
    pub fn destroy(self) {
        debug!("PinValue: released {} digits", self.digits.len());
    }
}
