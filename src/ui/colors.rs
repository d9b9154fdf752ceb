//! Color palette for the dashboard
//!
//! Muted chrome colors plus the two hero endpoints the banner blends
//! between.

use ratatui::style::Color;

// Hero surface
/// Top of the hero gradient.
pub const HERO_TOP: Color = Color::Rgb(102, 126, 234);
/// Bottom of the hero gradient.
pub const HERO_BOTTOM: Color = Color::Rgb(118, 75, 162);
/// Flat banner fill when the gradient is off.
pub const HERO_FLAT: Color = Color::Rgb(50, 55, 80);

// Text
/// Primary text.
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 240);
/// Dimmed text.
pub const TEXT_DIM: Color = Color::Rgb(180, 185, 205);
/// Muted text (chrome, hints).
pub const TEXT_MUTED: Color = Color::Rgb(130, 135, 150);

// UI chrome
/// Pane borders.
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Status bar background.
pub const SURFACE: Color = Color::Rgb(30, 32, 40);
/// Call-to-action chip background.
pub const CTA_BG: Color = Color::Rgb(240, 240, 250);
/// Call-to-action chip foreground.
pub const CTA_FG: Color = Color::Rgb(60, 55, 110);
/// Positive status message.
pub const STATUS_OK: Color = Color::Rgb(120, 180, 120);

/// Color at `step` of a `steps`-row vertical hero gradient.
///
/// The endpoints are exact: step 0 is [`HERO_TOP`] and the last step is
/// [`HERO_BOTTOM`].
#[must_use]
pub fn hero_gradient(step: u16, steps: u16) -> Color {
    const TOP: (u8, u8, u8) = (102, 126, 234);
    const BOTTOM: (u8, u8, u8) = (118, 75, 162);

    let span = i32::from(steps.saturating_sub(1).max(1));
    let step = i32::from(step).min(span);
    let lerp = |a: u8, b: u8| -> u8 {
        let v = i32::from(a) + (i32::from(b) - i32::from(a)) * step / span;
        u8::try_from(v.clamp(0, 255)).unwrap_or(u8::MAX)
    };

    Color::Rgb(
        lerp(TOP.0, BOTTOM.0),
        lerp(TOP.1, BOTTOM.1),
        lerp(TOP.2, BOTTOM.2),
    )
}
