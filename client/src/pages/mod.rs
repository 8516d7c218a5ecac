//! Page-level components.

pub mod chat;
