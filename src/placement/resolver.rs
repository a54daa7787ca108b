use crate::error::{PlacementError, TilingError};
use crate::math::segment_2d::direction_angle;
use crate::math::Point2;
use crate::shape::{previous_index, Chirality, EdgeVocabulary, EDGE_COUNT};

/// How the resolver decides which way to draw along the matched edge.
///
/// The chirality comparison fully determines the direction for regular
/// adjacency lists, but legacy configurations carry an explicit reverse
/// flag: either validated against the comparison or taken as
/// authoritative. Both meanings are kept as distinct options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDirection {
    /// Derive the direction purely from the chirality comparison.
    Derived,
    /// Legacy flag, validated: it must agree with the chirality
    /// comparison, and a contradiction is a fatal error reported before
    /// any geometry is computed.
    Checked(bool),
    /// The flag is authoritative and the chirality comparison is
    /// ignored. Escape hatch for irregular adjacency data.
    Forced(bool),
}

/// Anchor point and facing angle for a new tile's boundary trace.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Point the trace starts from.
    pub anchor: Point2,
    /// Facing angle of the first drawn edge, in radians.
    pub angle: f64,
}

/// Computes where a new tile's trace must start so that its starting
/// edge coincides with a matched edge of an already-placed tile.
///
/// The matched edge runs from the vertex before its canonical index to
/// the vertex at it. A tile of the same chirality is traced in the same
/// rotational sense as its neighbor, so the shared edge must be drawn in
/// the opposite direction: anchor at the matched edge's end, facing its
/// start. Opposite chiralities trace in opposite senses already, so no
/// reversal is needed.
///
/// # Errors
///
/// Returns an error if the matched edge name is unknown, if an explicit
/// reverse flag contradicts the chirality rule, or if the matched edge
/// has collapsed to a point (degenerate parameterization), which leaves
/// the facing angle undefined.
pub fn resolve_placement(
    matched_points: &[Point2; EDGE_COUNT],
    matched_chirality: Chirality,
    matched_id: &str,
    match_edge: &str,
    new_chirality: Chirality,
    direction: MatchDirection,
) -> Result<Placement, TilingError> {
    let derived_reverse = new_chirality == matched_chirality;
    let reverse = match direction {
        MatchDirection::Derived => derived_reverse,
        MatchDirection::Checked(flag) => {
            if flag != derived_reverse {
                return Err(PlacementError::DirectionConflict {
                    tile_id: matched_id.to_owned(),
                    flag,
                }
                .into());
            }
            flag
        }
        MatchDirection::Forced(flag) => flag,
    };

    let vocab = EdgeVocabulary::for_chirality(matched_chirality);
    let index = vocab.index_of(match_edge)?;
    let end = matched_points[index];
    let start = matched_points[previous_index(index)];

    let (anchor, toward) = if reverse { (end, start) } else { (start, end) };
    let angle =
        direction_angle(anchor, toward).ok_or_else(|| PlacementError::DegenerateEdge {
            tile_id: matched_id.to_owned(),
            edge: match_edge.to_owned(),
        })?;
    Ok(Placement { anchor, angle })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TilingError;
    use crate::shape::{trace_boundary, EdgeLengths, ShapeParams};

    fn hat_points() -> [Point2; EDGE_COUNT] {
        trace_boundary(
            Chirality::Left,
            EdgeLengths::new(ShapeParams::HAT, 1.0),
            Point2::origin(),
            0.0,
            "LP",
        )
        .unwrap()
    }

    #[test]
    fn opposite_chirality_keeps_edge_direction() {
        let points = hat_points();
        let placement = resolve_placement(
            &points,
            Chirality::Left,
            "1",
            "LN",
            Chirality::Right,
            MatchDirection::Derived,
        )
        .unwrap();
        // Edge LN (index 3) runs from vertex 2 to vertex 3.
        assert!((placement.anchor.x - points[2].x).abs() < 1e-9);
        assert!((placement.anchor.y - points[2].y).abs() < 1e-9);
        let expected = direction_angle(points[2], points[3]).unwrap();
        assert!((placement.angle - expected).abs() < 1e-9);
    }

    #[test]
    fn same_chirality_reverses_edge_direction() {
        let points = hat_points();
        let placement = resolve_placement(
            &points,
            Chirality::Left,
            "1",
            "LN",
            Chirality::Left,
            MatchDirection::Derived,
        )
        .unwrap();
        assert!((placement.anchor.x - points[3].x).abs() < 1e-9);
        assert!((placement.anchor.y - points[3].y).abs() < 1e-9);
        let expected = direction_angle(points[3], points[2]).unwrap();
        assert!((placement.angle - expected).abs() < 1e-9);
    }

    #[test]
    fn checked_flag_agreeing_with_chirality_passes() {
        let points = hat_points();
        let placement = resolve_placement(
            &points,
            Chirality::Left,
            "1",
            "LN",
            Chirality::Left,
            MatchDirection::Checked(true),
        )
        .unwrap();
        assert!((placement.anchor.x - points[3].x).abs() < 1e-9);
    }

    #[test]
    fn checked_flag_contradicting_chirality_fails() {
        let points = hat_points();
        let result = resolve_placement(
            &points,
            Chirality::Left,
            "1",
            "LN",
            Chirality::Right,
            MatchDirection::Checked(true),
        );
        assert!(matches!(
            result,
            Err(TilingError::Placement(
                PlacementError::DirectionConflict { .. }
            ))
        ));
    }

    #[test]
    fn forced_flag_overrides_chirality_rule() {
        let points = hat_points();
        // Same chirality would normally reverse; force it not to.
        let placement = resolve_placement(
            &points,
            Chirality::Left,
            "1",
            "LN",
            Chirality::Left,
            MatchDirection::Forced(false),
        )
        .unwrap();
        assert!((placement.anchor.x - points[2].x).abs() < 1e-9);
        assert!((placement.anchor.y - points[2].y).abs() < 1e-9);
    }

    #[test]
    fn collapsed_edge_is_reported_not_defaulted() {
        // Comet parameters collapse every Height edge to a point.
        let points = trace_boundary(
            Chirality::Left,
            EdgeLengths::new(ShapeParams::COMET, 1.0),
            Point2::origin(),
            0.0,
            "LP",
        )
        .unwrap();
        let result = resolve_placement(
            &points,
            Chirality::Left,
            "1",
            "LS",
            Chirality::Right,
            MatchDirection::Derived,
        );
        assert!(matches!(
            result,
            Err(TilingError::Placement(PlacementError::DegenerateEdge { .. }))
        ));
    }

    #[test]
    fn unknown_match_edge_is_an_error() {
        let points = hat_points();
        let result = resolve_placement(
            &points,
            Chirality::Left,
            "1",
            "QQ",
            Chirality::Right,
            MatchDirection::Derived,
        );
        assert!(result.is_err());
    }
}
