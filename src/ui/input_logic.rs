//! Pure cursor and digit arithmetic shared by the menu and the digit
//! selector.

/// Move selection cursor one item up. Stays put on the first item.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move selection cursor one item down if another item exists.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Step a digit up by one, wrapping from `max` back to 0.
pub fn wrap_increment(digit: u8, max: u8) -> u8 {
    if digit >= max {
        0
    } else {
        digit + 1
    }
}

/// Step a digit down by one, wrapping from 0 up to `max`.
pub fn wrap_decrement(digit: u8, max: u8) -> u8 {
    if digit == 0 || digit > max {
        max
    } else {
        digit - 1
    }
}
