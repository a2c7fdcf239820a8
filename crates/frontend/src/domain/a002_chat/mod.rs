//! Chat panel: one question/answer exchange at a time.
//!
//! Structure:
//! - api.rs: HTTP contract behind `ChatApi`
//! - model.rs: transcript entries and source formatting
//! - state.rs: `ChatState`, the submission state machine
//! - controller.rs: drives one exchange against the api
//! - ui/details: `ChatPanel` and message components

pub mod api;
pub mod controller;
pub mod model;
pub mod state;
pub mod ui;
