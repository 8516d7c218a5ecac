//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat` for the message log, `session` for the
//! submission gate) so components can depend on small focused models. Both
//! live in Leptos context as `RwSignal`s owned by the root component.

pub mod chat;
pub mod session;
