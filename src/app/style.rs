//! Inline style fragments fed by the parallax calculations.

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

/// Horizontal centring kept alongside the vertical parallax shift.
pub fn translate_centered(px: f64) -> String {
    format!("translate(-50%, {px}px)")
}

pub fn opacity_style(opacity: f64) -> String {
    format!("opacity: {opacity};")
}
