use crate::error::{OperationError, Result};
use crate::math::segment_2d::Segment;
use crate::math::Point2;
use crate::store::TilingStore;

/// Remaps the whole figure so a landmark segment lands on its reference
/// location.
///
/// Different shape parameters rotate and stretch a figure built from the
/// same adjacency list. Re-rendering animations want successive
/// parameterizations to stay visually co-registered, so a pair of
/// structural landmark points (present in every parameterization) is
/// pinned: the figure is translated, rotated, and uniformly scaled so
/// that `current` — the landmark segment where this store put it —
/// coincides with `reference`, where the reference parameterization put
/// the same logical segment.
pub struct AlignFrame {
    reference: Segment,
    current: Segment,
}

impl AlignFrame {
    /// Creates a new `AlignFrame` operation.
    #[must_use]
    pub fn new(reference: Segment, current: Segment) -> Self {
        Self { reference, current }
    }

    /// Executes the similarity transform over every vertex of every
    /// tile. Crop bounds are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if either segment has zero length.
    pub fn execute(&self, store: &mut TilingStore) -> Result<()> {
        let target_angle = self
            .reference
            .direction_angle()
            .ok_or(OperationError::DegenerateSegment { which: "reference" })?;
        let current_angle = self
            .current
            .direction_angle()
            .ok_or(OperationError::DegenerateSegment { which: "current" })?;

        let rotation = target_angle - current_angle;
        let scale = self.reference.length() / self.current.length();
        let pivot = self.current.stop;
        let destination = self.reference.stop;
        let (sin, cos) = rotation.sin_cos();

        for tile in store.tiles_mut() {
            tile.map_points(|p| {
                let x = p.x - pivot.x;
                let y = p.y - pivot.y;
                Point2::new(
                    scale * (cos * x - sin * y) + destination.x,
                    scale * (sin * x + cos * y) + destination.y,
                )
            });
        }
        log::info!(
            "aligned figure: rotation {:.6} rad, scale {:.6}",
            rotation,
            scale
        );
        Ok(())
    }
}
