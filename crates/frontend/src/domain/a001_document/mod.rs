//! Document panel: list, upload and delete of backend documents.
//!
//! Structure:
//! - api.rs: HTTP contract behind `DocumentsApi`
//! - state.rs: panel state and the list view model
//! - controller.rs: async operations sequencing api, state and alerts
//! - ui/list: `DocumentPanel` component

pub mod api;
pub mod controller;
pub mod state;
pub mod ui;
