//! Stroked path operators

/// Generate operators to stroke a straight line
///
/// Coordinates are PDF coordinates (from bottom).
pub fn generate_line_operators(x1: f64, y1: f64, x2: f64, y2: f64, line_width: f64) -> Vec<u8> {
    format!("q\n0 0 0 RG\n{line_width} w\n{x1} {y1} m\n{x2} {y2} l\nS\nQ\n").into_bytes()
}

/// Generate operators to stroke a rectangle
///
/// `x`, `y` is the lower-left corner in PDF coordinates.
pub fn generate_rect_operators(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    line_width: f64,
) -> Vec<u8> {
    format!("q\n0 0 0 RG\n{line_width} w\n{x} {y} {width} {height} re\nS\nQ\n").into_bytes()
}
