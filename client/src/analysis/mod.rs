//! The fake analysis pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no image understanding anywhere in this application. "Analysis"
//! is a fixed script of status messages played back on a timer; the modules
//! here own that script and the playback driver.

pub mod script;
pub mod sequencer;
