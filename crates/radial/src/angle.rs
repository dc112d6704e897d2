use crate::input::Point;
use crate::layout::sector_width;

/// Normalizes an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Cursor angle around the anchor in degrees, `None` when the cursor sits on the anchor.
pub fn cursor_angle(offset: Point) -> Option<f64> {
    let length = offset.length();
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    let (x, y) = (offset.x / length, offset.y / length);
    Some(normalize_degrees(y.atan2(x).to_degrees()))
}

/// Sector containing `angle`. Sectors are centered on their layout angle, so boundaries sit half a
/// sector either side of it and belong to the sector that starts there.
pub fn sector_for_angle(angle: f64, sector_count: usize) -> usize {
    let width = sector_width(sector_count);
    let shifted = normalize_degrees(angle + width * 0.5);
    let index = (shifted / width).floor() as usize;
    if index >= sector_count { 0 } else { index }
}

/// Resolves cursor offsets to sectors, remembering the last valid angle for degenerate input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleResolver {
    angle: f64,
}

impl AngleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last resolved angle in degrees, drives the angle indicator.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }

    /// Returns `None` only when there are no sectors to pick from.
    pub fn resolve(&mut self, offset: Point, sector_count: usize) -> Option<usize> {
        if let Some(angle) = cursor_angle(offset) {
            self.angle = angle;
        }
        (sector_count > 0).then(|| sector_for_angle(self.angle, sector_count))
    }
}
