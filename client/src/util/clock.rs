//! Wall-clock timestamps and their display formatting.
//!
//! Timestamps exist purely for the "HH:MM" line under each bubble; nothing
//! orders or compares by them. In the browser they come from `Date.now()`
//! and are rendered in local time; native builds (tests, tooling) fall back
//! to a pure UTC formatter.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch, or `0.0` outside a browser.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Format an epoch-milliseconds timestamp as "HH:MM" for bubble display.
#[must_use]
pub fn format_hm(ts_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts_ms));
        let hours = date.get_hours();
        let minutes = date.get_minutes();
        format!("{hours:02}:{minutes:02}")
    }
    #[cfg(not(feature = "csr"))]
    {
        format_hm_utc(ts_ms)
    }
}

/// Pure UTC fallback for `format_hm`. Non-finite or negative inputs render
/// as midnight.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_hm_utc(ts_ms: f64) -> String {
    let ms = if ts_ms.is_finite() && ts_ms > 0.0 { ts_ms } else { 0.0 };
    let total_minutes = (ms / 60_000.0) as u64;
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;
    format!("{hours:02}:{minutes:02}")
}
