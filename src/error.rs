//! Unified error type for mileage-recorder.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for on-target
//! logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Construction
    /// Bad digit / decimal counts passed to a constructor.
    InvalidArgument,

    /// A fixed-capacity buffer could not hold the requested resource.
    Allocation,

    // Submission
    /// The outbox refused or failed to send the readings.
    Send,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::Allocation => f.write_str("allocation failed"),
            Error::Send => f.write_str("send failed"),
        }
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
