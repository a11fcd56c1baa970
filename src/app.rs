//! Application context - the menu, the window stack, the captured readings
//! and the one pin window that may be open.
//!
//! Everything runs on a single event loop: the firmware feeds debounced
//! button events into [`App::handle_button`] one at a time and redraws from
//! [`App::screen`] afterwards.

use crate::error::{Error, Result};
use crate::pin::value::PinValue;
use crate::pin::window::{PinCompletionHandler, PinWindow, WindowOutcome};
use crate::submit::{Outbox, Submission};
use crate::ui::menu::{Field, Menu, MenuAction, Readings};
use crate::ui::stack::{NavigationStack, WindowId, WindowStack};
use crate::ui::ButtonEvent;

/// Completion handler for a field dialog: stores the value, pops the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    field: Field,
}

impl FieldEntry {
    pub fn new(field: Field) -> Self {
        Self { field }
    }

    pub fn field(&self) -> Field {
        self.field
    }
}

/// What a field dialog's handler gets to touch while it runs.
pub struct EntryContext<'a> {
    readings: &'a mut Readings,
    stack: &'a mut WindowStack,
}

impl NavigationStack for EntryContext<'_> {
    fn push(&mut self, window: WindowId, animated: bool) -> bool {
        self.stack.push(window, animated)
    }

    fn remove(&mut self, window: WindowId, animated: bool) -> bool {
        self.stack.remove(window, animated)
    }

    fn top(&self) -> Option<WindowId> {
        self.stack.top()
    }
}

impl<'a> PinCompletionHandler<EntryContext<'a>> for FieldEntry {
    fn pin_complete(
        &mut self,
        pin: &PinValue,
        window: &PinWindow<Self>,
        cx: &mut EntryContext<'a>,
    ) {
        let value = pin.to_integer();
        cx.readings.set(self.field, value);
        info!("{} entry was {}", self.field, value);
        window.pop(cx, true);
    }
}

/// What should be on the display right now.
pub enum Screen<'a> {
    Menu {
        menu: &'a Menu,
        readings: &'a Readings,
    },
    Pin(&'a PinWindow<FieldEntry>),
}

pub struct App<O> {
    readings: Readings,
    stack: WindowStack,
    menu: Menu,
    pin_window: Option<PinWindow<FieldEntry>>,
    outbox: O,
}

impl<O: Outbox> App<O> {
    /// Build the context and show the menu.
    pub fn init(outbox: O) -> Self {
        let mut app = Self {
            readings: Readings::default(),
            stack: WindowStack::new(),
            menu: Menu::new(),
            pin_window: None,
            outbox,
        };
        app.stack.push(app.menu.id(), true);
        info!("App: initialised, menu window {}", app.menu.id().raw());
        app
    }

    /// Tear down any open dialog and the menu, returning the outbox.
    pub fn deinit(mut self) -> O {
        self.teardown();
        info!("App: shut down");
        self.outbox
    }

    fn teardown(&mut self) {
        if let Some(window) = self.pin_window.take() {
            window.pop(&mut self.stack, false);
            window.destroy();
        }
        self.stack.remove(self.menu.id(), false);
    }

    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    pub fn stack(&self) -> &WindowStack {
        &self.stack
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn outbox(&self) -> &O {
        &self.outbox
    }

    pub fn pin_window(&self) -> Option<&PinWindow<FieldEntry>> {
        self.pin_window.as_ref()
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.pin_window {
            Some(window) if window.is_topmost(&self.stack) => Screen::Pin(window),
            _ => Screen::Menu {
                menu: &self.menu,
                readings: &self.readings,
            },
        }
    }

    /// Route one button press to the topmost window.
    pub fn handle_button(&mut self, event: ButtonEvent) {
        if let Some(window) = self.pin_window.as_mut() {
            if window.is_topmost(&self.stack) {
                let mut cx = EntryContext {
                    readings: &mut self.readings,
                    stack: &mut self.stack,
                };
                let outcome = window.handle_button(event, &mut cx);
                if outcome != WindowOutcome::Handled {
                    debug!("App: dialog {}", outcome);
                }
                self.reap();
                return;
            }
        }

        if self.stack.top() != Some(self.menu.id()) {
            return;
        }

        match self.menu.handle_button(event) {
            MenuAction::None => {}
            MenuAction::Open(field) => {
                if let Err(e) = self.open_field(field) {
                    debug!("App: {} stays at its stored value ({})", field, e);
                }
            }
            MenuAction::Submit => {
                if let Err(e) = self.submit() {
                    debug!("App: readings kept for resubmission ({})", e);
                }
            }
        }
    }

    /// Open the pin window for `field`, seeded with its stored value.
    pub fn open_field(&mut self, field: Field) -> Result<()> {
        self.open_with(field, field.num_digits(), field.num_decimals())
    }

    fn open_with(&mut self, field: Field, num_digits: usize, num_decimals: usize) -> Result<()> {
        if let Some(previous) = self.pin_window.take() {
            previous.pop(&mut self.stack, false);
            previous.destroy();
        }

        let seed = self.readings.get(field);
        let mut window =
            match PinWindow::with_value(num_digits, num_decimals, seed, FieldEntry::new(field)) {
                Ok(window) => window,
                Err(e) => {
                    error!("App: failed to create pin window for {}: {}", field, e);
                    return Err(e);
                }
            };
        window.set_title(field.title());

        if !window.push(&mut self.stack, true) {
            error!("App: could not show pin window for {}", field);
            window.destroy();
            return Err(Error::Allocation);
        }

        self.pin_window = Some(window);
        Ok(())
    }

    /// Send the current readings through the outbox.
    pub fn submit(&mut self) -> Result<()> {
        let submission = Submission::new(self.readings);
        match self.outbox.send(&submission) {
            Ok(()) => {
                info!("App: submission sent");
                Ok(())
            }
            Err(e) => {
                error!("App: submission failed: {}", e);
                Err(e)
            }
        }
    }

    /// Destroy the dialog once it is no longer on the stack.
    fn reap(&mut self) {
        let popped = match &self.pin_window {
            Some(window) => !self.stack.contains(window.id()),
            None => false,
        };
        if popped {
            if let Some(window) = self.pin_window.take() {
                window.destroy();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        sent: heapless::Vec<Submission, 4>,
        fail: bool,
    }

    impl Outbox for Recorder {
        fn send(&mut self, submission: &Submission) -> Result<()> {
            if self.fail {
                return Err(Error::Send);
            }
            self.sent.push(*submission).map_err(|_| Error::Send)
        }
    }

    #[test]
    fn init_shows_menu() {
        let app = App::init(Recorder::default());
        assert_eq!(app.stack().top(), Some(app.menu().id()));
        assert!(app.pin_window().is_none());
        assert!(matches!(app.screen(), Screen::Menu { .. }));
    }

    #[test]
    fn failed_create_keeps_previous_value() {
        let mut app = App::init(Recorder::default());
        app.readings.set(Field::Price, 4030);

        let result = app.open_with(Field::Price, 3, 4);
        assert_eq!(result, Err(Error::InvalidArgument));
        assert!(app.pin_window().is_none());
        assert_eq!(app.stack().top(), Some(app.menu().id()));
        assert_eq!(app.readings().price, 4030);
    }

    #[test]
    fn reopening_replaces_the_dialog() {
        let mut app = App::init(Recorder::default());
        app.open_field(Field::Odometer).unwrap();
        let first = app.pin_window().unwrap().id();
        app.open_field(Field::Quantity).unwrap();
        let second = app.pin_window().unwrap().id();

        assert_ne!(first, second);
        assert!(!app.stack().contains(first));
        assert_eq!(app.stack().len(), 2);
    }

    #[test]
    fn failed_submit_keeps_readings() {
        let mut app = App::init(Recorder {
            fail: true,
            ..Recorder::default()
        });
        app.readings.set(Field::Odometer, 12);
        assert_eq!(app.submit(), Err(Error::Send));
        assert_eq!(app.readings().odometer, 12);
        assert!(app.outbox().sent.is_empty());
    }

    #[test]
    fn teardown_clears_the_stack() {
        let mut app = App::init(Recorder::default());
        app.open_field(Field::Price).unwrap();
        assert_eq!(app.stack().len(), 2);

        app.teardown();
        assert!(app.pin_window().is_none());
        assert!(app.stack().is_empty());
        assert!(app.deinit().sent.is_empty());
    }

    #[test]
    fn dialog_after_id_wrap_keeps_menu_on_stack() {
        let mut app = App::init(Recorder::default());
        while WindowId::next().raw() != u16::MAX {}

        app.handle_button(ButtonEvent::Select);
        let dialog = app.pin_window().unwrap().id();
        assert_ne!(dialog, app.menu().id());

        for _ in 0..Field::Odometer.num_digits() {
            app.handle_button(ButtonEvent::Select);
        }
        assert!(app.pin_window().is_none());
        assert_eq!(app.stack().top(), Some(app.menu().id()));

        // The menu still takes input.
        app.handle_button(ButtonEvent::Select);
        assert!(app.pin_window().is_some());
    }
}
