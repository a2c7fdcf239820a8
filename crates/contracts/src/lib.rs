//! Wire types shared with the RAG chatbot backend.

pub mod domain;
pub mod shared;
