pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Squared length below which an edge is considered collapsed to a point.
///
/// Coordinates are rounded to [`COORD_DECIMALS`] places, so two coincident
/// endpoints differ by well under this bound while the shortest real edge
/// of any non-degenerate parameterization stays well above it.
pub const DEGENERATE_SQ: f64 = 1e-8;

/// Number of fractional digits kept in every traced coordinate.
pub const COORD_DECIMALS: i32 = 6;

/// Rounds a coordinate to [`COORD_DECIMALS`] fractional digits.
///
/// Tiles that share an edge reach the shared vertices along different
/// tracing paths; rounding each recorded coordinate keeps those vertices
/// exactly equal instead of drifting apart in the last bits.
#[must_use]
pub fn round_coord(value: f64) -> f64 {
    let factor = 10f64.powi(COORD_DECIMALS);
    (value * factor).round() / factor
}

/// Rounds both coordinates of a point to [`COORD_DECIMALS`] digits.
#[must_use]
pub fn round_point(point: Point2) -> Point2 {
    Point2::new(round_coord(point.x), round_coord(point.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_coord_six_digits() {
        assert!((round_coord(0.866_025_403_784_438_6) - 0.866_025).abs() < TOLERANCE);
        assert!((round_coord(-0.866_025_403_784_438_6) + 0.866_025).abs() < TOLERANCE);
        assert!((round_coord(1.5) - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn round_point_rounds_both_axes() {
        let pt = round_point(Point2::new(1.000_000_4, -2.000_000_6));
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y + 2.000_001).abs() < TOLERANCE);
    }
}
