mod palette;
mod tile;

pub use palette::{Palette, Rgba, TileStyle};
pub use tile::{Tile, TileKey, TileSpec};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::{Result, StoreError};
use crate::math::Point2;
use crate::placement::{resolve_placement, MatchDirection};
use crate::shape::{trace_boundary, EdgeLengths, EdgeVocabulary, ShapeParams};

/// Explicit crop rectangle for the output image.
///
/// Each bound is independently optional; an unset bound falls back to
/// the tight bound over all tile vertices on that axis. The y axis grows
/// downward, so `bottom` is the numerically larger y bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct CropBounds {
    pub left: Option<f64>,
    pub bottom: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
}

/// The growing collection of placed tiles for one figure.
///
/// Tiles are placed once, in adjacency-list order, and never deleted or
/// re-placed; the only later mutations are the two whole-store
/// remappings (frame alignment and origin normalization). The store is
/// owned by its call site and passed by reference to every operation.
#[derive(Debug)]
pub struct TilingStore {
    tiles: SlotMap<TileKey, Tile>,
    index: HashMap<String, TileKey>,
    order: Vec<TileKey>,
    params: ShapeParams,
    scaling: f64,
    first_anchor: Point2,
    first_angle: f64,
    palette: Palette,
    crop: CropBounds,
    footnote: String,
}

impl TilingStore {
    /// Creates an empty store with the given global shape parameters.
    ///
    /// Defaults: unit scaling, first tile anchored at the origin facing
    /// along +x, empty palette, no crop, empty footnote.
    #[must_use]
    pub fn new(params: ShapeParams) -> Self {
        Self {
            tiles: SlotMap::with_key(),
            index: HashMap::new(),
            order: Vec::new(),
            params,
            scaling: 1.0,
            first_anchor: Point2::origin(),
            first_angle: 0.0,
            palette: Palette::new(),
            crop: CropBounds::default(),
            footnote: String::new(),
        }
    }

    /// Sets the uniform scaling applied to every derived edge length.
    pub fn set_scaling(&mut self, scaling: f64) {
        self.scaling = scaling;
    }

    /// Sets the anchor point and facing angle of the first tile.
    pub fn set_first_tile(&mut self, anchor: Point2, angle: f64) {
        self.first_anchor = anchor;
        self.first_angle = angle;
    }

    /// Sets the display-tag palette. Styles are resolved at insertion,
    /// so configure the palette before placing tiles.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Sets the explicit crop rectangle.
    pub fn set_crop(&mut self, crop: CropBounds) {
        self.crop = crop;
    }

    /// Returns the configured crop rectangle.
    #[must_use]
    pub fn crop(&self) -> CropBounds {
        self.crop
    }

    /// Sets the free-text footnote serialized with the output.
    pub fn set_footnote(&mut self, footnote: impl Into<String>) {
        self.footnote = footnote.into();
    }

    /// The free-text footnote.
    #[must_use]
    pub fn footnote(&self) -> &str {
        &self.footnote
    }

    /// The global shape parameters.
    #[must_use]
    pub fn params(&self) -> ShapeParams {
        self.params
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether any tile has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Places the first tile at the configured anchor and angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the store already contains a tile, if the
    /// start edge is unknown, or if no fill color is configured for the
    /// spec's display tag.
    pub fn insert_first(&mut self, spec: TileSpec) -> Result<TileKey> {
        if !self.is_empty() {
            return Err(StoreError::FirstTileAlreadyPlaced {
                tile_id: spec.id,
            }
            .into());
        }
        self.place(spec, self.first_anchor, self.first_angle)
    }

    /// Places a tile so its starting edge coincides with a named edge of
    /// an already-placed tile.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the id is taken (the store is left
    /// untouched), `UnknownReference` if `match_id` names no placed
    /// tile, and the placement errors of [`resolve_placement`].
    pub fn insert_matched(
        &mut self,
        spec: TileSpec,
        match_id: &str,
        match_edge: &str,
        direction: MatchDirection,
    ) -> Result<TileKey> {
        if self.index.contains_key(&spec.id) {
            return Err(StoreError::DuplicateId(spec.id).into());
        }
        let matched = self
            .index
            .get(match_id)
            .and_then(|key| self.tiles.get(*key))
            .ok_or_else(|| StoreError::UnknownReference {
                tile_id: spec.id.clone(),
                match_id: match_id.to_owned(),
            })?;
        let placement = resolve_placement(
            matched.points(),
            matched.chirality(),
            matched.id(),
            match_edge,
            spec.chirality,
            direction,
        )?;
        self.place(spec, placement.anchor, placement.angle)
    }

    fn place(&mut self, spec: TileSpec, anchor: Point2, angle: f64) -> Result<TileKey> {
        if self.index.contains_key(&spec.id) {
            return Err(StoreError::DuplicateId(spec.id).into());
        }
        let fill = self
            .palette
            .fill_for(&spec.display_tag)
            .ok_or_else(|| StoreError::UnknownDisplayTag {
                tile_id: spec.id.clone(),
                tag: spec.display_tag.clone(),
            })?;
        let params = spec.params.unwrap_or(self.params);
        let lengths = EdgeLengths::new(params, self.scaling);
        let points = trace_boundary(spec.chirality, lengths, anchor, angle, &spec.start_edge)?;

        log::debug!(
            "placed tile {} ({}, start edge {}) at ({:.6}, {:.6})",
            spec.id,
            spec.chirality,
            spec.start_edge,
            anchor.x,
            anchor.y
        );

        let id = spec.id.clone();
        let tile = Tile::new(spec, params, TileStyle::from_fill(fill), points);
        let key = self.tiles.insert(tile);
        self.index.insert(id, key);
        self.order.push(key);
        Ok(key)
    }

    /// Looks up a placed tile by id.
    #[must_use]
    pub fn tile_by_id(&self, tile_id: &str) -> Option<&Tile> {
        self.index.get(tile_id).and_then(|key| self.tiles.get(*key))
    }

    /// Returns the vertex closing the named edge of a tile. Used for
    /// landmark lookups, cropping, and alignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile id or the edge name is unknown.
    pub fn point_at(&self, tile_id: &str, edge: &str) -> Result<Point2> {
        let tile = self
            .tile_by_id(tile_id)
            .ok_or_else(|| StoreError::TileNotFound(tile_id.to_owned()))?;
        let vocab = EdgeVocabulary::for_chirality(tile.chirality());
        let index = vocab.index_of(edge)?;
        Ok(tile.points()[index])
    }

    /// Iterates placed tiles in insertion order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.order.iter().filter_map(|key| self.tiles.get(*key))
    }

    /// Iterates placed tiles mutably. Reserved for the whole-store
    /// transforms.
    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.values_mut()
    }
}
