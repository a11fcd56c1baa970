//! Modal navigation stack.
//!
//! Only the topmost window receives input. Windows are identified by a
//! [`WindowId`]; the stack never owns the windows themselves, so dropping
//! a window and removing it from the stack are separate steps done by the
//! owner.

use core::sync::atomic::{AtomicU16, Ordering};

use heapless::Vec;

use crate::config::MAX_STACK_DEPTH;

static NEXT_WINDOW_ID: AtomicU16 = AtomicU16::new(1);

/// Identity of a window on the navigation stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowId(u16);

impl WindowId {
    /// Reserved for the root menu, which lives as long as the app.
    pub const MENU: Self = Self(0);

    /// Allocate an id for a transient window.
    ///
    /// The counter wraps, but it never yields [`WindowId::MENU`], so a
    /// dialog can not be mistaken for the root menu on the stack.
    pub fn next() -> Self {
        loop {
            let raw = NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed);
            if raw != Self::MENU.0 {
                return Self(raw);
            }
        }
    }

    pub fn raw(self) -> u16 {
        self.0
    }
}

/// Operations the window lifecycle needs from the navigation stack.
pub trait NavigationStack {
    /// Put `window` on top. Returns `false` if it could not be pushed.
    fn push(&mut self, window: WindowId, animated: bool) -> bool;
    /// Remove `window` wherever it sits. Returns `false` if absent.
    fn remove(&mut self, window: WindowId, animated: bool) -> bool;
    /// The window currently receiving input.
    fn top(&self) -> Option<WindowId>;
}

/// Fixed-depth stack used by the firmware and the tests.
#[derive(Debug, Default)]
pub struct WindowStack {
    windows: Vec<WindowId, MAX_STACK_DEPTH>,
}

impl WindowStack {
    pub const fn new() -> Self {
        Self {
            windows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn contains(&self, window: WindowId) -> bool {
        self.windows.contains(&window)
    }
}

impl NavigationStack for WindowStack {
    fn push(&mut self, window: WindowId, animated: bool) -> bool {
        // Re-pushing brings an existing window back to the top.
        if let Some(position) = self.windows.iter().position(|&w| w == window) {
            self.windows.remove(position);
        }
        match self.windows.push(window) {
            Ok(()) => {
                debug!(
                    "Stack: push {} (animated={}), depth {}",
                    window.raw(),
                    animated,
                    self.windows.len()
                );
                true
            }
            Err(_) => {
                error!("Stack: full, cannot push {}", window.raw());
                false
            }
        }
    }

    fn remove(&mut self, window: WindowId, animated: bool) -> bool {
        match self.windows.iter().position(|&w| w == window) {
            Some(position) => {
                self.windows.remove(position);
                debug!(
                    "Stack: remove {} (animated={}), depth {}",
                    window.raw(),
                    animated,
                    self.windows.len()
                );
                true
            }
            None => false,
        }
    }

    fn top(&self) -> Option<WindowId> {
        self.windows.last().copied()
    }
}
