//! The fixed analysis script and its playback plan.
//!
//! Every message the guide ever sends is a literal defined here. The only
//! variable part of a run is the delay before each of the ten status steps,
//! drawn from an injected unit-interval sampler so tests can pin it down.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

/// Greeting seeded into the log when the page loads.
pub const GREETING: &str = "Hallo! Ich bin Oscar und dein persönlicher KI Boulder Guide. Lade ein Foto deiner Kletterroute hoch und ich helfe dir dabei, die beste Lösung zu finden! 🧗‍♂️";

/// Caption attached to every submitted photo on the user's behalf.
pub const USER_CAPTION: &str = "Hier ist meine Kletterroute!";

/// The ten status steps, always played in this order.
pub const ANALYSIS_STEPS: [&str; 10] = [
    "Analysiere Routengeometrie...",
    "Ich denke nach... 🤔",
    "Wende Algorithmen an um Route zu triangulieren...",
    "Scanne Handgriffe und Tritte...",
    "Berechne optimale Körperposition...",
    "Heize Fluxkompensator auf... ⚡",
    "Kalibriere Gravitationsdetektor...",
    "Synchronisiere mit Klettersatelliten... 🛰️",
    "Aktiviere Quantenrouten-Analyse...",
    "Finale Berechnung wird durchgeführt...",
];

pub const ANALYSIS_COMPLETE: &str = "✨ Analyse abgeschlossen! ✨";
pub const SOLUTION_LEAD_IN: &str = "Die Lösung die du für dieses Problem brauchst lautet...";
pub const PUNCHLINE: &str = "🎯 JUST GO UP! 🎯";

/// Minimum delay before each status step.
pub const STEP_DELAY_BASE_MS: u64 = 1500;
/// Uniform jitter added on top of the base; the delay stays strictly below
/// `STEP_DELAY_BASE_MS + STEP_DELAY_JITTER_MS`.
pub const STEP_DELAY_JITTER_MS: u64 = 1000;
/// Fixed pause before the completion message.
pub const COMPLETION_DELAY_MS: u64 = 2000;
/// Fixed pause before the solution lead-in.
pub const LEAD_IN_DELAY_MS: u64 = 1000;
/// Fixed dramatic pause before the punchline.
pub const PUNCHLINE_DELAY_MS: u64 = 3000;

/// One timed entry of a playback run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannedMessage {
    pub delay_ms: u64,
    pub text: &'static str,
}

/// Build the full ordered playback plan for one analysis run: the ten status
/// steps followed by completion, lead-in, and punchline.
///
/// `sample` supplies one value in `[0, 1)` per status step (the browser
/// passes `Math.random`); values outside that range are clamped so the step
/// delay is always within `[1500, 2500)` milliseconds.
pub fn playback_plan(mut sample: impl FnMut() -> f64) -> Vec<PlannedMessage> {
    let mut plan = Vec::with_capacity(ANALYSIS_STEPS.len() + 3);
    for text in ANALYSIS_STEPS {
        plan.push(PlannedMessage { delay_ms: step_delay_ms(sample()), text });
    }
    plan.push(PlannedMessage { delay_ms: COMPLETION_DELAY_MS, text: ANALYSIS_COMPLETE });
    plan.push(PlannedMessage { delay_ms: LEAD_IN_DELAY_MS, text: SOLUTION_LEAD_IN });
    plan.push(PlannedMessage { delay_ms: PUNCHLINE_DELAY_MS, text: PUNCHLINE });
    plan
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn step_delay_ms(unit: f64) -> u64 {
    let unit = if unit.is_finite() { unit.max(0.0) } else { 0.0 };
    let jitter = (unit * STEP_DELAY_JITTER_MS as f64) as u64;
    STEP_DELAY_BASE_MS + jitter.min(STEP_DELAY_JITTER_MS - 1)
}
