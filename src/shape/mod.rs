mod chirality;
mod edge;
mod moves;
mod params;
mod trace;

pub use chirality::Chirality;
pub use edge::{previous_index, EdgeMap, EdgeVocabulary, EDGE_COUNT};
pub use moves::{moves_for, LengthClass, Move, TurnSide};
pub use params::{EdgeLengths, ShapeParams};
pub use trace::trace_boundary;
