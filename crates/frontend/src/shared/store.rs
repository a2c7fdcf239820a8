//! Access to panel state for the async controllers.

use leptos::prelude::*;

/// Shared, mutable panel state.
///
/// Both methods return `None` when the state is gone (the owning component
/// was unmounted); callers then skip the step.
pub trait StateCell<T> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}
