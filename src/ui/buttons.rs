//! GPIO button input with async debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP     - next digit value / menu cursor up
//!   - DOWN   - previous digit value / menu cursor down
//!   - SELECT - next cell, confirm on the last cell, open a menu row
//!   - BACK   - previous cell, cancel on the first cell
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends a `ButtonEvent` to the UI channel.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};
use mileage_recorder::config::BUTTON_DEBOUNCE_MS;
use mileage_recorder::ButtonEvent;

/// Depth of the button → UI channel.
pub const BUTTON_QUEUE: usize = 4;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release before repeating.
pub async fn button_task(
    pin: AnyPin,
    event: ButtonEvent,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: {}", event);
            tx.send(event).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
