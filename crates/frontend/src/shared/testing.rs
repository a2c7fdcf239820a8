//! Test doubles shared by the controller tests.

use super::notify::Notifier;
use super::store::StateCell;
use std::cell::RefCell;
use std::rc::Rc;

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Records alerts and answers confirmations with a fixed reply.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub alerts: Rc<RefCell<Vec<String>>>,
    pub confirms: Rc<RefCell<Vec<String>>>,
    pub confirm_reply: bool,
}

impl RecordingNotifier {
    pub fn accepting() -> Self {
        Self {
            confirm_reply: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_reply
    }
}
