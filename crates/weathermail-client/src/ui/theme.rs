use eframe::egui::Color32;

use crate::state::MessageColor;

pub const GREEN: Color32 = Color32::from_rgb(46, 160, 67); // Success
pub const RED: Color32 = Color32::from_rgb(218, 54, 51); // Errors

pub const TEXT_MUTED: Color32 = Color32::from_rgb(142, 146, 151);

pub fn message_color(color: MessageColor) -> Color32 {
    match color {
        MessageColor::Green => GREEN,
        MessageColor::Red => RED,
    }
}
