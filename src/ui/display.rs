//! SSD1306 OLED display wrapper.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use mileage_recorder::config::{DECIMAL_CELL_WIDTH, PIN_WINDOW_HEIGHT};
use mileage_recorder::ui::layout::RowLayout;
use mileage_recorder::ui::menu::{subtitle, Menu, Readings, MENU_ROWS};
use mileage_recorder::{FieldEntry, PinWindow, Screen};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

const SCREEN_W: u32 = 128;
const SCREEN_H: u32 = 64;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(color)
        .build()
}

/// Render whatever the app says is on top.
pub fn draw<I2C>(display: &mut Display<I2C>, screen: Screen<'_>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    match screen {
        Screen::Menu { menu, readings } => draw_menu(display, menu, readings),
        Screen::Pin(window) => draw_pin_window(display, window),
    }
    let _ = display.flush();
}

/// Menu rows with a cursor marker and each field's stored value.
fn draw_menu<I2C>(display: &mut Display<I2C>, menu: &Menu, readings: &Readings)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new("Fuel log", Point::new(0, 10), text_style(BinaryColor::On)).draw(display);

    for (row, item) in MENU_ROWS.iter().enumerate() {
        let marker = if row == menu.selected() { ">" } else { " " };
        let mut line: heapless::String<32> = heapless::String::new();
        let _ = write!(
            line,
            "{} {:<9}{}",
            marker,
            item.label(),
            subtitle(*item, readings).as_str()
        );
        let y = 22 + (row as i32 * 12);
        let _ = Text::new(line.as_str(), Point::new(0, y), text_style(BinaryColor::On))
            .draw(display);
    }
}

/// Title plus the digit row; the active cell is drawn inverted.
fn draw_pin_window<I2C>(display: &mut Display<I2C>, window: &PinWindow<FieldEntry>)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new(window.title(), Point::new(0, 10), text_style(BinaryColor::On))
        .draw(display);

    let selector = window.selector();
    let pin = window.pin();
    let layout = match RowLayout::compute(pin.num_digits(), pin.num_decimals(), SCREEN_W, SCREEN_H)
    {
        Some(layout) => layout,
        None => return,
    };

    for index in 0..selector.num_cells() {
        let origin = Point::new(layout.cell_x(index) as i32, layout.y as i32);
        let cell = Rectangle::new(origin, Size::new(layout.cell_width, PIN_WINDOW_HEIGHT));
        let active = selector.selected() == Some(index) && selector.active_color().is_lit();

        let (style, text_color) = if active {
            (PrimitiveStyle::with_fill(BinaryColor::On), BinaryColor::Off)
        } else {
            (PrimitiveStyle::with_stroke(BinaryColor::On, 1), BinaryColor::On)
        };
        let _ = cell.into_styled(style).draw(display);

        if let Some(text) = selector.get_cell_text(index) {
            let text_origin = origin + Point::new(layout.cell_width as i32 / 2 - 3, 14);
            let _ = Text::new(text, text_origin, text_style(text_color)).draw(display);
        }
    }

    if let Some(x) = layout.decimal_x() {
        let dot = Point::new(
            (x + DECIMAL_CELL_WIDTH / 2) as i32 - 1,
            (layout.y + PIN_WINDOW_HEIGHT) as i32 - 3,
        );
        let _ = Rectangle::new(dot, Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
    }
}
