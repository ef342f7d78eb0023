//! Slow RGB cycling for the digit display.

/// Color for a given elapsed time: two phase-shifted waves with a ~10s
/// period on the red/green channels and a ~3s period on blue, each scaled
/// to 0-255 and truncated.
pub fn color_at(elapsed: f64) -> (u8, u8, u8) {
    let red = (elapsed / 10.0).sin().abs();
    let green = (elapsed / 10.0).cos().abs();
    let blue = 1.0 - (elapsed / 3.0).sin().abs();

    (
        (red * 255.0) as u8,
        (green * 255.0) as u8,
        (blue * 255.0) as u8,
    )
}

/// 24-bit foreground color escape.
pub fn foreground(red: u8, green: u8, blue: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", red, green, blue)
}
