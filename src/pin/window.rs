//! Modal pin-entry window.
//!
//! A [`PinWindow`] owns one [`PinValue`] and one [`DigitSelector`] and binds
//! the selector's reads and edits to the value. When the user confirms the
//! last digit the window hands the finished value to its
//! [`PinCompletionHandler`]. The handler decides what to do with it and is
//! expected to pop the window; nothing is popped automatically.
//!
//! Backing out of the first cell cancels: the window pops itself and the
//! handler is dropped unused.

use heapless::String;

use crate::config::{CELL_TEXT_LEN, TITLE_CAPACITY};
use crate::error::Result;
use crate::pin::selector::{DigitSelector, SelectionHandler, SelectorOutcome};
use crate::pin::value::PinValue;
use crate::ui::stack::{NavigationStack, WindowId};
use crate::ui::{ButtonEvent, Color};

/// Receives the finished value of a pin window. Invoked at most once.
///
/// `Cx` is whatever the dispatcher passes along with the button event; it
/// must at least give access to the navigation stack so the handler can
/// pop the window.
pub trait PinCompletionHandler<Cx: NavigationStack + ?Sized>: Sized {
    fn pin_complete(&mut self, pin: &PinValue, window: &PinWindow<Self>, cx: &mut Cx);
}

/// Result of routing one button press through a pin window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowOutcome {
    /// The press edited or moved within the window.
    Handled,
    /// Entry confirmed; the completion handler has run.
    Completed,
    /// Entry abandoned; the window removed itself from the stack.
    Cancelled,
    /// The press had no effect.
    Ignored,
}

impl SelectionHandler for PinValue {
    fn cell_text(&self, index: usize) -> Option<String<CELL_TEXT_LEN>> {
        PinValue::cell_text(self, index)
    }

    fn increment(&mut self, index: usize) {
        PinValue::increment(self, index);
    }

    fn decrement(&mut self, index: usize) {
        PinValue::decrement(self, index);
    }
}

#[derive(Debug)]
pub struct PinWindow<H> {
    id: WindowId,
    title: String<TITLE_CAPACITY>,
    pin: PinValue,
    selector: DigitSelector,
    highlight_color: Color,
    handler: Option<H>,
}

impl<H> PinWindow<H> {
    /// Build an all-zero pin window.
    ///
    /// Construction errors from the value model or the selector propagate
    /// unchanged; on error nothing is left behind.
    pub fn create(num_digits: usize, num_decimals: usize, handler: H) -> Result<Self> {
        let pin = PinValue::create(num_digits, num_decimals)?;
        Self::assemble(pin, handler)
    }

    /// Build a pin window whose digits start at `value`.
    pub fn with_value(
        num_digits: usize,
        num_decimals: usize,
        value: u32,
        handler: H,
    ) -> Result<Self> {
        let pin = PinValue::from_integer(num_digits, num_decimals, value)?;
        Self::assemble(pin, handler)
    }

    fn assemble(pin: PinValue, handler: H) -> Result<Self> {
        let mut selector = DigitSelector::create(pin.num_digits(), pin.num_decimals())?;
        selector.refresh(&pin);
        let highlight_color = selector.active_color();

        let id = WindowId::next();
        debug!("PinWindow {}: created with {} digits", id.raw(), pin.num_digits());

        Ok(Self {
            id,
            title: String::new(),
            pin,
            selector,
            highlight_color,
            handler: Some(handler),
        })
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title, truncating to the title capacity.
    pub fn set_title(&mut self, text: &str) {
        self.title.clear();
        for c in text.chars() {
            if self.title.push(c).is_err() {
                break;
            }
        }
    }

    pub fn pin(&self) -> &PinValue {
        &self.pin
    }

    pub fn selector(&self) -> &DigitSelector {
        &self.selector
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    /// Set the active cell color.
    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
        self.selector.set_active_color(color);
    }

    /// Show the window on top of the stack and put the cursor on the first
    /// digit.
    pub fn push<S>(&mut self, stack: &mut S, animated: bool) -> bool
    where
        S: NavigationStack + ?Sized,
    {
        if !stack.push(self.id, animated) {
            warn!("PinWindow {}: push refused", self.id.raw());
            return false;
        }
        self.selector.activate();
        true
    }

    /// Take the window off the stack. Safe to call from inside
    /// [`PinCompletionHandler::pin_complete`].
    pub fn pop<S>(&self, stack: &mut S, animated: bool) -> bool
    where
        S: NavigationStack + ?Sized,
    {
        stack.remove(self.id, animated)
    }

    pub fn is_topmost<S>(&self, stack: &S) -> bool
    where
        S: NavigationStack + ?Sized,
    {
        stack.top() == Some(self.id)
    }

    /// Route one button press. On completion the handler runs (once, with
    /// the finished value); on cancellation the window pops itself.
    pub fn handle_button<Cx>(&mut self, event: ButtonEvent, cx: &mut Cx) -> WindowOutcome
    where
        Cx: NavigationStack + ?Sized,
        H: PinCompletionHandler<Cx>,
    {
        match self.selector.handle_button(event, &mut self.pin) {
            SelectorOutcome::Activated
            | SelectorOutcome::Changed(_)
            | SelectorOutcome::Moved(_) => WindowOutcome::Handled,
            SelectorOutcome::Completed => match self.handler.take() {
                Some(mut handler) => {
                    info!("PinWindow {}: complete", self.id.raw());
                    handler.pin_complete(&self.pin, &*self, cx);
                    WindowOutcome::Completed
                }
                None => WindowOutcome::Ignored,
            },
            SelectorOutcome::Cancelled => {
                info!("PinWindow {}: cancelled", self.id.raw());
                self.handler = None;
                self.pop(cx, true);
                WindowOutcome::Cancelled
            }
            SelectorOutcome::Ignored => WindowOutcome::Ignored,
        }
    }

    /// Release the selector, the value model and the cell buffers.
    pub fn destroy(self) {
        debug!("PinWindow {}: destroyed", self.id.raw());
        self.pin.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pin::selector::SelectorState;
    use crate::ui::stack::WindowStack;

    /// Dispatch context: the stack plus a record of completions.
    #[derive(Default)]
    struct Harness {
        stack: WindowStack,
        completed: Option<u32>,
        calls: usize,
    }

    impl NavigationStack for Harness {
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

    #[derive(Debug)]
    struct Record {
        pop: bool,
    }

    impl PinCompletionHandler<Harness> for Record {
        fn pin_complete(&mut self, pin: &PinValue, window: &PinWindow<Self>, cx: &mut Harness) {
            cx.completed = Some(pin.to_integer());
            cx.calls += 1;
            if self.pop {
                assert!(window.pop(cx, true));
            }
        }
    }

    fn press(window: &mut PinWindow<Record>, cx: &mut Harness, events: &[ButtonEvent]) {
        for &event in events {
            window.handle_button(event, cx);
        }
    }

    fn opened(num_digits: usize, num_decimals: usize, pop: bool) -> (PinWindow<Record>, Harness) {
        let mut cx = Harness::default();
        let mut window = PinWindow::create(num_digits, num_decimals, Record { pop }).unwrap();
        assert!(window.push(&mut cx, true));
        (window, cx)
    }

    #[test]
    fn create_rejects_more_decimals_than_digits() {
        let result = PinWindow::create(3, 4, Record { pop: true });
        assert_eq!(result.unwrap_err(), Error::InvalidArgument);
    }

    #[test]
    fn create_rejects_oversized_row() {
        let result = PinWindow::create(20, 0, Record { pop: true });
        assert_eq!(result.unwrap_err(), Error::Allocation);
    }

    #[test]
    fn push_makes_window_topmost_and_active() {
        let (window, cx) = opened(3, 0, true);
        assert!(window.is_topmost(&cx));
        assert_eq!(window.selector().selected(), Some(0));
        assert_eq!(window.selector().get_cell_text(2), Some("0"));
    }

    #[test]
    fn entering_digits_completes_with_value() {
        use ButtonEvent::*;
        let (mut window, mut cx) = opened(3, 0, true);
        press(
            &mut window,
            &mut cx,
            &[Up, Up, Up, Up, Select, Select, Up, Up, Up],
        );
        assert_eq!(window.pin().digits(), &[4, 0, 3]);

        assert_eq!(window.handle_button(Select, &mut cx), WindowOutcome::Completed);
        assert_eq!(cx.completed, Some(403));
        assert_eq!(cx.calls, 1);
        assert!(!window.is_topmost(&cx));
        assert!(cx.stack.is_empty());
    }

    #[test]
    fn completion_fires_once() {
        use ButtonEvent::*;
        let (mut window, mut cx) = opened(1, 0, false);
        assert_eq!(window.handle_button(Select, &mut cx), WindowOutcome::Completed);
        assert_eq!(window.handle_button(Select, &mut cx), WindowOutcome::Ignored);
        assert_eq!(window.handle_button(Up, &mut cx), WindowOutcome::Ignored);
        assert_eq!(cx.calls, 1);
        assert_eq!(window.selector().state(), SelectorState::Completed);
    }

    #[test]
    fn handler_owns_the_pop() {
        let (mut window, mut cx) = opened(1, 0, false);
        window.handle_button(ButtonEvent::Select, &mut cx);
        assert_eq!(cx.calls, 1);
        assert!(window.is_topmost(&cx));
        assert!(window.pop(&mut cx, false));
        assert!(!window.is_topmost(&cx));
    }

    #[test]
    fn back_on_first_cell_cancels_without_completion() {
        use ButtonEvent::*;
        let (mut window, mut cx) = opened(3, 0, true);
        press(&mut window, &mut cx, &[Up, Select, Up]);
        assert_eq!(window.handle_button(Back, &mut cx), WindowOutcome::Handled);
        assert_eq!(window.handle_button(Back, &mut cx), WindowOutcome::Cancelled);
        assert_eq!(cx.calls, 0);
        assert_eq!(cx.completed, None);
        assert!(cx.stack.is_empty());
        window.destroy();
    }

    #[test]
    fn pop_before_complete_never_invokes_handler() {
        let (window, mut cx) = opened(3, 0, true);
        assert!(window.pop(&mut cx, true));
        window.destroy();
        assert_eq!(cx.calls, 0);
    }

    #[test]
    fn seeded_window_starts_from_value() {
        let window = PinWindow::with_value(4, 3, 4030, Record { pop: true }).unwrap();
        assert_eq!(window.pin().digits(), &[4, 0, 3, 0]);
        assert_eq!(window.selector().get_cell_text(0), Some("4"));
        assert_eq!(window.selector().decimal_marker(), Some(1));
    }

    #[test]
    fn title_is_truncated() {
        let mut window = PinWindow::create(2, 0, Record { pop: true }).unwrap();
        assert_eq!(window.title(), "");
        window.set_title("Fuel Price");
        assert_eq!(window.title(), "Fuel Price");
        window.set_title("A title that is far too long for the bar");
        assert_eq!(window.title().len(), TITLE_CAPACITY);
    }

    #[test]
    fn highlight_color_reaches_selector() {
        let mut window = PinWindow::create(2, 0, Record { pop: true }).unwrap();
        assert_eq!(window.highlight_color(), Color::Red);
        window.set_highlight_color(Color::White);
        assert_eq!(window.highlight_color(), Color::White);
        assert_eq!(window.selector().active_color(), Color::White);
    }
}
