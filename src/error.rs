use thiserror::Error;

/// Top-level error type for the monotile tiling engine.
#[derive(Debug, Error)]
pub enum TilingError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Adjacency(#[from] AdjacencyError),
}

/// Errors related to shape parameters and boundary tracing.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("shape parameter {parameter} = {value} must be finite and non-negative")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error("unknown edge name {name:?} for chirality {chirality}")]
    UnknownEdge { name: String, chirality: &'static str },
}

/// Errors related to edge-matched tile placement.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("edge {edge} of tile {tile_id} has zero length; facing angle is undefined")]
    DegenerateEdge { tile_id: String, edge: String },

    #[error("tile {tile_id}: reverse flag {flag} contradicts the chirality rule")]
    DirectionConflict { tile_id: String, flag: bool },
}

/// Errors related to the tiling store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("tile id already exists: {0}")]
    DuplicateId(String),

    #[error("tile {tile_id} references unknown tile {match_id}")]
    UnknownReference { tile_id: String, match_id: String },

    #[error("tile not found: {0}")]
    TileNotFound(String),

    #[error("tile {tile_id} has no match reference but the store is not empty")]
    FirstTileAlreadyPlaced { tile_id: String },

    #[error("no fill color configured for display tag {tag:?} (tile {tile_id})")]
    UnknownDisplayTag { tile_id: String, tag: String },
}

/// Errors related to whole-store operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{which} alignment segment has zero length")]
    DegenerateSegment { which: &'static str },

    #[error("store has no tiles")]
    EmptyStore,

    #[error("failed to write output table")]
    Write(#[from] csv::Error),

    #[error("failed to flush output table")]
    Io(#[from] std::io::Error),
}

/// Errors related to reading an adjacency list.
#[derive(Debug, Error)]
pub enum AdjacencyError {
    #[error("failed to read adjacency list")]
    Read(#[from] csv::Error),

    #[error("row {row}: no chirality mapping for color {color:?}")]
    UnknownColor { row: usize, color: String },

    #[error("row {row}: invalid chirality {value:?}")]
    InvalidChirality { row: usize, value: String },

    #[error("row {row}: invalid reverse flag {value:?}")]
    InvalidReverseFlag { row: usize, value: String },

    #[error("row {row}: no translation for edge name {name:?}")]
    UntranslatedEdge { row: usize, name: String },
}

/// Convenience type alias for results using [`TilingError`].
pub type Result<T> = std::result::Result<T, TilingError>;
