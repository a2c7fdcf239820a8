//! Chat Panel UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: ChatPanelVm with the state signal and derived memos
//! - view.rs: Main component ChatPanel
//! - message.rs: one transcript entry
//! - sources.rs: source citations under an answer

mod message;
mod sources;
mod view;
mod view_model;

pub use view::ChatPanel;
