//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat chrome and interaction surfaces while reading
//! and writing shared state from Leptos context providers.

pub mod header;
pub mod message_list;
pub mod upload_bar;
