//! Color palette and dark/light visuals.

use egui::{Color32, Context, RichText, Visuals};

pub const EMERALD: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const BLUE: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const VIOLET: Color32 = Color32::from_rgb(0x8b, 0x5c, 0xf6);
pub const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const AMBER: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const CYAN: Color32 = Color32::from_rgb(0x06, 0xb6, 0xd4);
pub const YELLOW: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);

/// Switches the whole UI between the dark and light visual themes.
pub fn apply(ctx: &Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    });
}

/// Pill-style label: tinted background with a strong accent foreground.
pub fn badge(text: &str, color: Color32) -> RichText {
    RichText::new(text)
        .strong()
        .color(color)
        .background_color(color.gamma_multiply(0.2))
}
