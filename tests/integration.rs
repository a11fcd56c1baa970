//! Integration tests for mileage-recorder host-testable logic.
//!
//! These drive the whole application context through button presses, the
//! way the firmware's UI task does.

use mileage_recorder::ui::menu::{subtitle, Field, MenuRow};
use mileage_recorder::ui::stack::NavigationStack;
use mileage_recorder::{App, ButtonEvent, Error, Outbox, Screen, Submission};

use ButtonEvent::{Back, Down, Select, Up};

#[derive(Default)]
struct Recorder {
    sent: Vec<Submission>,
}

impl Outbox for Recorder {
    fn send(&mut self, submission: &Submission) -> Result<(), Error> {
        self.sent.push(*submission);
        Ok(())
    }
}

fn press(app: &mut App<Recorder>, events: &[ButtonEvent]) {
    for &event in events {
        app.handle_button(event);
    }
}

/// Press Up `n` times then Select, entering one digit.
fn digit(app: &mut App<Recorder>, n: usize) {
    for _ in 0..n {
        app.handle_button(Up);
    }
    app.handle_button(Select);
}

#[test]
fn odometer_entry_is_stored_and_dialog_closed() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Select]);
    match app.screen() {
        Screen::Pin(window) => assert_eq!(window.title(), "Odometer Reading"),
        Screen::Menu { .. } => panic!("expected the odometer dialog"),
    }

    for n in [4, 8, 2, 1, 3] {
        digit(&mut app, n);
    }

    assert_eq!(app.readings().odometer, 48213);
    assert!(app.pin_window().is_none());
    assert_eq!(app.stack().top(), Some(app.menu().id()));
    assert_eq!(
        subtitle(MenuRow::Field(Field::Odometer), app.readings()).as_str(),
        "48213 mi"
    );
}

#[test]
fn price_entry_uses_three_decimals() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Down, Select]);

    // 4.030 → digits 4 0 3 0
    for n in [4, 0, 3, 0] {
        digit(&mut app, n);
    }

    assert_eq!(app.readings().price, 4030);
    assert_eq!(
        subtitle(MenuRow::Field(Field::Price), app.readings()).as_str(),
        "$4.030/gal"
    );
}

#[test]
fn down_wraps_digit_to_nine() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Down, Down, Select]);

    // 9 on the first cell via a single Down, then zeros.
    press(&mut app, &[Down, Select, Select, Select, Select, Select]);
    assert_eq!(app.readings().quantity, 90000);
}

#[test]
fn back_out_of_dialog_keeps_previous_value() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Select]);
    for n in [0, 0, 0, 1, 2] {
        digit(&mut app, n);
    }
    assert_eq!(app.readings().odometer, 12);

    // Reopen, edit two cells, then back all the way out.
    press(&mut app, &[Select, Up, Select, Up, Back, Back]);
    assert!(app.pin_window().is_none());
    assert_eq!(app.stack().top(), Some(app.menu().id()));
    assert_eq!(app.readings().odometer, 12);
}

#[test]
fn reopening_starts_from_stored_value() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Down, Select]);
    for n in [3, 9, 9, 9] {
        digit(&mut app, n);
    }
    assert_eq!(app.readings().price, 3999);

    press(&mut app, &[Select]);
    let window = app.pin_window().expect("price dialog open");
    assert_eq!(window.pin().digits(), &[3, 9, 9, 9]);

    // Bump the first digit and confirm the rest unchanged.
    press(&mut app, &[Up, Select, Select, Select, Select]);
    assert_eq!(app.readings().price, 4999);
}

#[test]
fn submit_sends_keyed_readings() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Select]);
    for n in [0, 0, 1, 0, 0] {
        digit(&mut app, n);
    }

    press(&mut app, &[Down, Down, Down, Select]);
    let outbox = app.deinit();
    assert_eq!(outbox.sent.len(), 1);
    assert_eq!(outbox.sent[0].entries(), [(0, 100), (1, 0), (2, 0)]);
}

#[test]
fn menu_ignores_back() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Back, Back]);
    assert!(app.pin_window().is_none());
    assert_eq!(app.menu().selected(), 0);
    assert_eq!(app.stack().len(), 1);
}

#[test]
fn dialog_is_destroyed_after_completion() {
    let mut app = App::init(Recorder::default());
    press(&mut app, &[Down, Down, Select]);
    let id = app.pin_window().expect("quantity dialog open").id();
    assert!(app.stack().contains(id));

    press(&mut app, &[Select, Select, Select, Select, Select]);
    assert!(app.pin_window().is_none());
    assert!(!app.stack().contains(id));
}
