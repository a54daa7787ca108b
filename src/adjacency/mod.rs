//! Adjacency-list input.
//!
//! A tiling is described by a row-oriented, tab-separated table: the
//! first data row places the first tile, and every later row places a
//! tile by matching one of its edges to an edge of an already-placed
//! tile. Row order is the placement order, so a reference to a tile that
//! has not been placed yet fails at the offending row.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

use crate::error::{AdjacencyError, Result};
use crate::placement::MatchDirection;
use crate::shape::{Chirality, EdgeMap, ShapeParams};
use crate::store::{TileSpec, TilingStore};

/// One row of an adjacency list.
///
/// `chirality` and `match_rev` only appear in legacy configurations;
/// newer lists derive the chirality from the color class and the draw
/// direction from the chirality comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjacencyRow {
    pub tile_id: String,
    #[serde(default)]
    pub chirality: Option<String>,
    pub start_edge: String,
    pub color: String,
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub match_edge: String,
    #[serde(default)]
    pub match_rev: String,
    #[serde(default)]
    pub footnote: String,
}

/// Options controlling how adjacency rows are interpreted.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    chirality_for_color: HashMap<String, Chirality>,
    edge_map: EdgeMap,
}

impl LoadOptions {
    /// Creates options with an empty color map and the identity edge
    /// translation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a color class to a chirality, used when rows carry no
    /// explicit chirality column.
    #[must_use]
    pub fn with_chirality(mut self, color: impl Into<String>, chirality: Chirality) -> Self {
        self.chirality_for_color.insert(color.into(), chirality);
        self
    }

    /// Sets the edge-name translation applied to every edge column.
    #[must_use]
    pub fn with_edge_map(mut self, edge_map: EdgeMap) -> Self {
        self.edge_map = edge_map;
        self
    }
}

/// Reads an adjacency list and places every tile it describes.
pub struct LoadAdjacency<'a> {
    options: LoadOptions,
    params_for: Option<&'a dyn Fn(&AdjacencyRow) -> Option<ShapeParams>>,
}

impl<'a> LoadAdjacency<'a> {
    /// Creates a new `LoadAdjacency` operation.
    #[must_use]
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            params_for: None,
        }
    }

    /// Installs a per-tile parameter resolution hook. A hook returning
    /// `Some` overrides the store's global shape parameters for that
    /// row's tile (mixed figures alternate parameter pairs by color
    /// class).
    #[must_use]
    pub fn with_params_hook(
        mut self,
        hook: &'a dyn Fn(&AdjacencyRow) -> Option<ShapeParams>,
    ) -> Self {
        self.params_for = Some(hook);
        self
    }

    /// Reads rows from `reader` and inserts the tiles in row order.
    ///
    /// The first row's non-empty footnote becomes the store footnote.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed rows and on any placement failure;
    /// processing stops at the offending row.
    pub fn execute<R: Read>(&self, store: &mut TilingStore, reader: R) -> Result<()> {
        let mut table = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(reader);
        // Whether the legacy reverse-flag column exists decides how its
        // absence in a row is read: no column means the chirality rule,
        // an empty value in a present column means "reverse", validated.
        let has_reverse_column = table
            .headers()
            .map_err(AdjacencyError::Read)?
            .iter()
            .any(|h| h == "match_rev");

        for (i, record) in table.deserialize::<AdjacencyRow>().enumerate() {
            let row_number = i + 1;
            let row = record.map_err(AdjacencyError::Read)?;
            self.apply_row(store, &row, row_number, has_reverse_column)?;
        }
        log::info!("loaded {} tiles from adjacency list", store.len());
        Ok(())
    }

    fn apply_row(
        &self,
        store: &mut TilingStore,
        row: &AdjacencyRow,
        row_number: usize,
        has_reverse_column: bool,
    ) -> Result<()> {
        if row_number == 1 && !row.footnote.is_empty() {
            store.set_footnote(row.footnote.clone());
        }

        let chirality = match row.chirality.as_deref() {
            Some(letter) => Chirality::from_letter(letter).ok_or_else(|| {
                AdjacencyError::InvalidChirality {
                    row: row_number,
                    value: letter.to_owned(),
                }
            })?,
            None => self
                .options
                .chirality_for_color
                .get(&row.color)
                .copied()
                .ok_or_else(|| AdjacencyError::UnknownColor {
                    row: row_number,
                    color: row.color.clone(),
                })?,
        };

        let start_edge = self.translate(&row.start_edge, row_number)?;
        let mut spec = TileSpec::new(&row.tile_id, chirality, start_edge, &row.color)
            .with_annotation(&row.footnote);
        if let Some(hook) = self.params_for {
            if let Some(params) = hook(row) {
                spec = spec.with_params(params);
            }
        }

        if row.match_id.is_empty() {
            store.insert_first(spec)?;
        } else {
            let match_edge = self.translate(&row.match_edge, row_number)?;
            let direction = if has_reverse_column {
                match row.match_rev.as_str() {
                    "" => MatchDirection::Checked(true),
                    "N" => MatchDirection::Checked(false),
                    other => {
                        return Err(AdjacencyError::InvalidReverseFlag {
                            row: row_number,
                            value: other.to_owned(),
                        }
                        .into())
                    }
                }
            } else {
                MatchDirection::Derived
            };
            store.insert_matched(spec, &row.match_id, &match_edge, direction)?;
        }
        Ok(())
    }

    fn translate(&self, name: &str, row_number: usize) -> Result<String> {
        Ok(self
            .options
            .edge_map
            .translate(name)
            .ok_or_else(|| AdjacencyError::UntranslatedEdge {
                row: row_number,
                name: name.to_owned(),
            })?
            .to_owned())
    }
}
