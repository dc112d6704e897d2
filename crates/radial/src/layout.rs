use crate::input::Point;

/// Angular width of one sector in degrees.
pub fn sector_width(sector_count: usize) -> f64 {
    360.0 / sector_count as f64
}

/// Center angle of sector `index`, in degrees. Index 0 points along +x.
pub fn sector_angle(index: usize, sector_count: usize) -> f64 {
    sector_width(sector_count) * index as f64
}

/// Offset of sector `index` from the ring center. Callers must not pass `sector_count == 0`.
pub fn offset(radius: f64, index: usize, sector_count: usize) -> Point {
    let angle = sector_angle(index, sector_count).to_radians();
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// Offsets for a full ring, empty when there is nothing to place.
pub fn ring(radius: f64, sector_count: usize) -> Vec<Point> {
    (0..sector_count)
        .map(|i| offset(radius, i, sector_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_first_sector_points_along_x() {
        let p = offset(100.0, 0, 5);
        assert!((p.x - 100.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn test_quarter_ring_sweeps_towards_positive_y() {
        let p = offset(50.0, 1, 4);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_ring_is_evenly_spaced_on_circle() {
        let points = ring(150.0, 7);
        assert_eq!(points.len(), 7);
        for p in &points {
            assert!((p.length() - 150.0).abs() < 1e-6);
        }
        let chord = |a: Point, b: Point| (a - b).length();
        let first = chord(points[0], points[1]);
        for pair in points.windows(2) {
            assert!((chord(pair[0], pair[1]) - first).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_ring() {
        assert!(ring(100.0, 0).is_empty());
    }
}
