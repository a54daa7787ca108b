use crate::math::Point2;
use crate::shape::{Chirality, ShapeParams, EDGE_COUNT};

use super::palette::TileStyle;

slotmap::new_key_type! {
    /// Unique identifier for a placed tile in the tiling store.
    pub struct TileKey;
}

/// Everything the caller supplies to place one tile.
#[derive(Debug, Clone)]
pub struct TileSpec {
    /// Caller-chosen unique id, referenced by later match entries.
    pub id: String,
    /// Orientation the boundary is traced in.
    pub chirality: Chirality,
    /// Canonical name of the edge the trace starts from.
    pub start_edge: String,
    /// Display tag resolved to colors through the store's palette.
    pub display_tag: String,
    /// Free-text annotation carried through untouched.
    pub annotation: String,
    /// Per-tile shape parameters; the store's global parameters apply
    /// when absent.
    pub params: Option<ShapeParams>,
}

impl TileSpec {
    /// Creates a spec with no annotation and the store's global
    /// parameters.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        chirality: Chirality,
        start_edge: impl Into<String>,
        display_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            chirality,
            start_edge: start_edge.into(),
            display_tag: display_tag.into(),
            annotation: String::new(),
            params: None,
        }
    }

    /// Sets a free-text annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }

    /// Overrides the shape parameters for this tile only.
    #[must_use]
    pub fn with_params(mut self, params: ShapeParams) -> Self {
        self.params = Some(params);
        self
    }
}

/// A placed tile: identity, shape, display state, and the 13 vertices of
/// its closed boundary.
///
/// Vertex `k` is the point closing canonical edge `k` of the tile's
/// chirality. Tiles are immutable once placed except for the two
/// whole-store remappings (frame alignment and origin normalization).
#[derive(Debug, Clone)]
pub struct Tile {
    id: String,
    chirality: Chirality,
    params: ShapeParams,
    display_tag: String,
    style: TileStyle,
    annotation: String,
    points: [Point2; EDGE_COUNT],
}

impl Tile {
    pub(crate) fn new(
        spec: TileSpec,
        params: ShapeParams,
        style: TileStyle,
        points: [Point2; EDGE_COUNT],
    ) -> Self {
        Self {
            id: spec.id,
            chirality: spec.chirality,
            params,
            display_tag: spec.display_tag,
            style,
            annotation: spec.annotation,
            points,
        }
    }

    /// The caller-chosen unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Orientation the boundary was traced in.
    #[must_use]
    pub fn chirality(&self) -> Chirality {
        self.chirality
    }

    /// The shape parameters this tile was traced with.
    #[must_use]
    pub fn params(&self) -> ShapeParams {
        self.params
    }

    /// Display tag the style was looked up by.
    #[must_use]
    pub fn display_tag(&self) -> &str {
        &self.display_tag
    }

    /// Display-state colors.
    #[must_use]
    pub fn style(&self) -> TileStyle {
        self.style
    }

    /// Free-text annotation.
    #[must_use]
    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    /// The boundary vertices in canonical edge order.
    #[must_use]
    pub fn points(&self) -> &[Point2; EDGE_COUNT] {
        &self.points
    }

    /// Remaps every vertex through `f`. Reserved for the whole-store
    /// transforms; placement never moves an existing tile.
    pub(crate) fn map_points(&mut self, f: impl Fn(Point2) -> Point2) {
        for point in &mut self.points {
            *point = f(*point);
        }
    }
}
