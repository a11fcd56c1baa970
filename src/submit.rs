//! Handing the captured readings to the phone.
//!
//! The link to the phone is out of this crate's hands: the app only builds
//! a keyed [`Submission`] and passes it to an [`Outbox`]. The firmware's
//! outbox logs it; tests record it.

use crate::config::{KEY_ODOMETER, KEY_PRICE, KEY_QUANTITY};
use crate::error::Result;
use crate::ui::menu::Readings;

/// Snapshot of the three readings at the moment Submit was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Submission {
    readings: Readings,
}

impl Submission {
    pub fn new(readings: Readings) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    /// `(key, value)` pairs in message-key order.
    pub fn entries(&self) -> [(u32, u32); 3] {
        [
            (KEY_ODOMETER, self.readings.odometer),
            (KEY_PRICE, self.readings.price),
            (KEY_QUANTITY, self.readings.quantity),
        ]
    }
}

/// Sink for submissions.
pub trait Outbox {
    /// Queue `submission` for delivery. Errors are reported, never retried.
    fn send(&mut self, submission: &Submission) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_keyed_in_order() {
        let submission = Submission::new(Readings {
            odometer: 48213,
            price: 4030,
            quantity: 12345,
        });
        assert_eq!(
            submission.entries(),
            [(0, 48213), (1, 4030), (2, 12345)]
        );
    }
}
