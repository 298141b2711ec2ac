//! Loading overlay state and the lease that guarantees it is hidden again.

use tracing::trace;

/// Interval between status message rotations.
pub const MESSAGE_ROTATION_MS: u32 = 1500;

pub const PREDICTION_MESSAGES: [&str; 4] = [
    "Analyzing market trends...",
    "Crunching the numbers...",
    "Generating your forecast...",
    "Processing agricultural data...",
];

pub const SUBMIT_MESSAGES: [&str; 1] = ["Submitting actual data..."];

pub const CONTACT_MESSAGES: [&str; 1] = ["Sending message..."];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    visible: bool,
    messages: Vec<String>,
    index: usize,
}

impl OverlayState {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current status line, empty when no messages were given.
    pub fn text(&self) -> &str {
        self.messages.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// Whether the status line changes over time.
    pub fn rotates(&self) -> bool {
        self.messages.len() > 1
    }

    pub fn show(&mut self, messages: &[&str]) {
        self.visible = true;
        self.messages = messages.iter().map(|m| m.to_string()).collect();
        self.index = 0;
    }

    /// Moves to the next message, wrapping around.
    pub fn advance(&mut self) {
        if self.visible && !self.messages.is_empty() {
            self.index = (self.index + 1) % self.messages.len();
            trace!(text = self.text(), "overlay message rotated");
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.messages.clear();
        self.index = 0;
    }
}

/// Keeps the overlay shown while alive; runs its release action exactly
/// once, on [`OverlayLease::release`] or on drop.
#[must_use = "the overlay is hidden as soon as the lease is dropped"]
pub struct OverlayLease {
    release: Option<Box<dyn FnOnce()>>,
}

impl OverlayLease {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for OverlayLease {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for OverlayLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayLease")
            .field("held", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn lease_on(state: &Rc<RefCell<OverlayState>>, messages: &[&str]) -> OverlayLease {
        state.borrow_mut().show(messages);
        let state = state.clone();
        OverlayLease::new(move || state.borrow_mut().hide())
    }

    fn submit(state: &Rc<RefCell<OverlayState>>, succeed: bool) -> Result<&'static str, String> {
        let _lease = lease_on(state, &SUBMIT_MESSAGES);
        assert!(state.borrow().is_visible());
        let response: Result<&'static str, String> = if succeed {
            Ok("Data submitted")
        } else {
            Err("network down".to_string())
        };
        let message = response?;
        Ok(message)
    }

    #[test]
    fn messages_rotate_and_wrap() {
        let mut overlay = OverlayState::hidden();
        overlay.show(&PREDICTION_MESSAGES);
        assert!(overlay.rotates());
        assert_eq!(overlay.text(), "Analyzing market trends...");
        for _ in 0..PREDICTION_MESSAGES.len() {
            overlay.advance();
        }
        assert_eq!(overlay.text(), "Analyzing market trends...");
        overlay.advance();
        assert_eq!(overlay.text(), "Crunching the numbers...");
    }

    #[test]
    fn hidden_overlay_does_not_rotate() {
        let mut overlay = OverlayState::hidden();
        overlay.advance();
        assert_eq!(overlay.text(), "");
        assert!(!overlay.is_visible());
    }

    #[test]
    fn overlay_hidden_after_success_and_failure() {
        let state = Rc::new(RefCell::new(OverlayState::hidden()));
        assert_eq!(submit(&state, true), Ok("Data submitted"));
        assert!(!state.borrow().is_visible());

        assert!(submit(&state, false).is_err());
        assert!(!state.borrow().is_visible());
    }

    #[test]
    fn release_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let lease = {
            let calls = calls.clone();
            OverlayLease::new(move || calls.set(calls.get() + 1))
        };
        lease.release();
        assert_eq!(calls.get(), 1);

        {
            let calls = calls.clone();
            let _lease = OverlayLease::new(move || calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn hide_is_idempotent() {
        let mut overlay = OverlayState::hidden();
        overlay.show(&CONTACT_MESSAGES);
        overlay.hide();
        overlay.hide();
        assert_eq!(overlay, OverlayState::hidden());
    }
}
