//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (time, file reading)
//! from page and component logic to improve reuse and testability.

pub mod clock;
pub mod image_intake;
