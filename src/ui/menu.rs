//! Home menu - three reading fields and a Submit row.

use core::fmt::Write;

use heapless::String;

use crate::config;
use crate::format::write_fixed;
use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::stack::WindowId;
use crate::ui::ButtonEvent;

/// Longest row subtitle, e.g. `"$9.999/gal"`.
pub const SUBTITLE_CAPACITY: usize = 16;

/// A value the user can enter through a pin window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Odometer,
    Price,
    Quantity,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Odometer, Field::Price, Field::Quantity];

    pub fn num_digits(self) -> usize {
        match self {
            Field::Odometer => config::ODOMETER_DIGITS,
            Field::Price => config::PRICE_DIGITS,
            Field::Quantity => config::QUANTITY_DIGITS,
        }
    }

    pub fn num_decimals(self) -> usize {
        match self {
            Field::Odometer => config::ODOMETER_DECIMALS,
            Field::Price => config::PRICE_DECIMALS,
            Field::Quantity => config::QUANTITY_DECIMALS,
        }
    }

    /// Title of the pin window opened for this field.
    pub fn title(self) -> &'static str {
        match self {
            Field::Odometer => config::ODOMETER_TITLE,
            Field::Price => config::PRICE_TITLE,
            Field::Quantity => config::QUANTITY_TITLE,
        }
    }

    /// Menu row label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Odometer => "Odometer",
            Field::Price => "Price",
            Field::Quantity => "Quantity",
        }
    }
}

/// One line of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuRow {
    Field(Field),
    Submit,
}

impl MenuRow {
    pub fn label(self) -> &'static str {
        match self {
            MenuRow::Field(field) => field.label(),
            MenuRow::Submit => "Submit",
        }
    }
}

pub const MENU_ROWS: [MenuRow; 4] = [
    MenuRow::Field(Field::Odometer),
    MenuRow::Field(Field::Price),
    MenuRow::Field(Field::Quantity),
    MenuRow::Submit,
];

/// The three captured values, in fixed-point integer form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Whole miles.
    pub odometer: u32,
    /// Thousandths of a dollar per gallon.
    pub price: u32,
    /// Thousandths of a gallon.
    pub quantity: u32,
}

impl Readings {
    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Odometer => self.odometer,
            Field::Price => self.price,
            Field::Quantity => self.quantity,
        }
    }

    pub fn set(&mut self, field: Field, value: u32) {
        match field {
            Field::Odometer => self.odometer = value,
            Field::Price => self.price = value,
            Field::Quantity => self.quantity = value,
        }
    }
}

/// Subtitle shown under a row: the stored value with its unit, or the
/// bare unit while the value is still zero.
pub fn subtitle(row: MenuRow, readings: &Readings) -> String<SUBTITLE_CAPACITY> {
    let mut out = String::new();
    let field = match row {
        MenuRow::Field(field) => field,
        MenuRow::Submit => return out,
    };
    let value = readings.get(field);
    let decimals = field.num_decimals();

    let written = match (field, value) {
        (Field::Odometer, 0) => out.write_str("mi"),
        (Field::Odometer, v) => write!(out, "{} mi", v),
        (Field::Price, 0) => out.write_str("$/gal"),
        (Field::Price, v) => out
            .write_char('$')
            .and_then(|_| write_fixed(&mut out, v, decimals))
            .and_then(|_| out.write_str("/gal")),
        (Field::Quantity, 0) => out.write_str("gal"),
        (Field::Quantity, v) => {
            write_fixed(&mut out, v, decimals).and_then(|_| out.write_str(" gal"))
        }
    };
    if written.is_err() {
        warn!("Menu: subtitle for {} truncated", value);
    }
    out
}

/// What the menu wants the app to do after a button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    None,
    Open(Field),
    Submit,
}

/// Cursor over [`MENU_ROWS`].
#[derive(Debug)]
pub struct Menu {
    id: WindowId,
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            id: WindowId::MENU,
            selected: 0,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> MenuRow {
        MENU_ROWS[self.selected]
    }

    /// Move the cursor or act on the highlighted row.
    pub fn handle_button(&mut self, event: ButtonEvent) -> MenuAction {
        match event {
            ButtonEvent::Up => {
                self.selected = select_prev(self.selected);
                MenuAction::None
            }
            ButtonEvent::Down => {
                self.selected = select_next(self.selected, MENU_ROWS.len());
                MenuAction::None
            }
            ButtonEvent::Select => match self.selected_row() {
                MenuRow::Field(field) => MenuAction::Open(field),
                MenuRow::Submit => MenuAction::Submit,
            },
            ButtonEvent::Back => MenuAction::None,
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
