mod align;
mod normalize;
mod serialize;

pub use align::AlignFrame;
pub use normalize::{resolved_bounds, Bounds, ImageExtent, Normalize};
pub use serialize::WriteTable;
