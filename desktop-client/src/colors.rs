use eframe::egui;

/// Turns a player's display color into something egui can paint. Accepts
/// a handful of color names or `#rrggbb`.
pub fn parse_color(color: &str) -> Option<egui::Color32> {
    let color = color.trim().to_ascii_lowercase();
    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex);
    }

    let rgb = match color.as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (220, 50, 50),
        "green" => (40, 160, 40),
        "blue" => (50, 50, 220),
        "lightblue" => (173, 216, 230),
        "pink" => (255, 105, 180),
        "purple" => (128, 0, 128),
        "orange" => (255, 140, 0),
        "gray" | "grey" => (128, 128, 128),
        _ => return None,
    };
    Some(egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2))
}

fn parse_hex(hex: &str) -> Option<egui::Color32> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(egui::Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
