mod resolver;

pub use resolver::{resolve_placement, MatchDirection, Placement};
