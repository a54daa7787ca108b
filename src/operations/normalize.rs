use crate::error::{OperationError, Result};
use crate::math::Point2;
use crate::store::TilingStore;

/// The resolved bounding box of a figure, in the downward-y screen
/// convention: `bottom` is the numerically larger y bound, `top` the
/// smaller.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

/// Output image dimensions derived from the resolved bounds.
#[derive(Debug, Clone, Copy)]
pub struct ImageExtent {
    pub width: f64,
    pub height: f64,
}

/// Resolves the figure's bounding box: each explicitly cropped bound is
/// taken as-is, the rest fall back to the tight bound over all vertices.
///
/// # Errors
///
/// Returns an error if the store holds no tiles.
pub fn resolved_bounds(store: &TilingStore) -> Result<Bounds> {
    if store.is_empty() {
        return Err(OperationError::EmptyStore.into());
    }
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for tile in store.tiles() {
        for point in tile.points() {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }
    }
    let crop = store.crop();
    Ok(Bounds {
        left: crop.left.unwrap_or(min_x),
        bottom: crop.bottom.unwrap_or(max_y),
        right: crop.right.unwrap_or(max_x),
        top: crop.top.unwrap_or(min_y),
    })
}

/// Translates the figure so the bounding box's top-left corner is the
/// origin, and reports the resulting image extent.
#[derive(Debug, Default)]
pub struct Normalize;

impl Normalize {
    /// Creates a new `Normalize` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the translation.
    ///
    /// # Errors
    ///
    /// Returns an error if the store holds no tiles.
    pub fn execute(&self, store: &mut TilingStore) -> Result<ImageExtent> {
        let bounds = resolved_bounds(store)?;
        for tile in store.tiles_mut() {
            tile.map_points(|p| Point2::new(p.x - bounds.left, p.y - bounds.top));
        }
        let extent = ImageExtent {
            width: bounds.right - bounds.left,
            height: bounds.bottom - bounds.top,
        };
        log::info!(
            "normalized figure to {:.6} x {:.6}",
            extent.width,
            extent.height
        );
        Ok(extent)
    }
}
