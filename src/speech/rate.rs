//! Display speed to engine rate mapping
//!
//! The UI exposes a 0.5x-2.0x speed multiplier; the speech engine accepts a
//! rate in [0, 1] where 0.5 is normal speech. The mapping is piecewise linear
//! through three fixed anchors, asymmetric so that doubling the display speed
//! does not push the engine into its unintelligible top range.

/// Slowest selectable display speed
pub const MIN_DISPLAY_SPEED: f32 = 0.5;
/// Default display speed (1.0x)
pub const DEFAULT_DISPLAY_SPEED: f32 = 1.0;
/// Fastest selectable display speed
pub const MAX_DISPLAY_SPEED: f32 = 2.0;

/// Engine rate at the 0.5x anchor
const MIN_RATE: f32 = 0.25;
/// Engine rate at the 1.0x anchor (normal speech)
const NORMAL_RATE: f32 = 0.5;
/// Engine rate at the 2.0x anchor
const MAX_RATE: f32 = 0.7;

/// Clamp a display speed into [0.5, 2.0]
///
/// Non-finite input falls back to the 1.0x default.
pub fn clamp_display_speed(display: f32) -> f32 {
    if !display.is_finite() {
        return DEFAULT_DISPLAY_SPEED;
    }
    display.clamp(MIN_DISPLAY_SPEED, MAX_DISPLAY_SPEED)
}

/// Map a user-facing speed multiplier to the engine's rate unit
///
/// Exact at the anchors: 0.5x -> 0.25, 1.0x -> 0.5, 2.0x -> 0.7. Linear in
/// between; out-of-domain input clamps to the nearest anchor first.
pub fn map_speed(display: f32) -> f32 {
    let display = clamp_display_speed(display);
    if display <= DEFAULT_DISPLAY_SPEED {
        MIN_RATE + ((display - MIN_DISPLAY_SPEED) / 0.5) * (NORMAL_RATE - MIN_RATE)
    } else {
        NORMAL_RATE + (display - DEFAULT_DISPLAY_SPEED) * (MAX_RATE - NORMAL_RATE)
    }
}
