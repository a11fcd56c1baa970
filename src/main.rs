//! mileage-recorder firmware - nRF52840 + SSD1306 OLED + four buttons.
//!
//! Button tasks debounce the GPIOs and push events into a channel; the UI
//! task owns the [`App`] context, applies each event and redraws.

#![no_std]
#![no_main]

#[path = "ui/buttons.rs"]
mod buttons;
#[path = "ui/display.rs"]
mod display;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use mileage_recorder::{App, ButtonEvent, Outbox, Submission};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use buttons::BUTTON_QUEUE;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type ButtonChannel = Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE>;

static BUTTONS: StaticCell<ButtonChannel> = StaticCell::new();

/// Outbox that only logs; the phone link is not part of this firmware.
struct LogOutbox;

impl Outbox for LogOutbox {
    fn send(&mut self, submission: &Submission) -> mileage_recorder::Result<()> {
        for (key, value) in submission.entries() {
            info!("Outbox: key {} = {}", key, value);
        }
        Ok(())
    }
}

#[embassy_executor::task(pool_size = 4)]
async fn button(
    pin: AnyPin,
    event: ButtonEvent,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE>,
) -> ! {
    buttons::button_task(pin, event, tx).await
}

#[embassy_executor::task]
async fn ui_task(
    i2c: twim::Twim<'static, peripherals::TWISPI0>,
    rx: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE>,
) -> ! {
    let mut display = display::init(i2c);
    let mut app = App::init(LogOutbox);
    display::draw(&mut display, app.screen());

    loop {
        let event = rx.receive().await;
        app.handle_button(event);
        display::draw(&mut display, app.screen());
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("mileage-recorder starting");

    let channel: &'static ButtonChannel = BUTTONS.init(Channel::new());

    //   Button UP      → P0.11
    //   Button DOWN    → P0.12
    //   Button SELECT  → P0.24
    //   Button BACK    → P0.25
    //   I²C SDA        → P0.26
    //   I²C SCL        → P0.27
    let pins = [
        (p.P0_11.degrade(), ButtonEvent::Up),
        (p.P0_12.degrade(), ButtonEvent::Down),
        (p.P0_24.degrade(), ButtonEvent::Select),
        (p.P0_25.degrade(), ButtonEvent::Back),
    ];
    for (pin, event) in pins {
        if spawner.spawn(button(pin, event, channel.sender())).is_err() {
            warn!("Could not spawn button task for {}", event);
        }
    }

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    if spawner.spawn(ui_task(i2c, channel.receiver())).is_err() {
        warn!("Could not spawn UI task");
    }
}
