use crate::error::ShapeError;

use super::moves::LengthClass;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The two independent edge-length scalars selecting a member of the
/// tile-shape continuum.
///
/// `(0, 1)` and `(1, 0)` are the degenerate family extremes; equal
/// parameters give the Tile(1,1) shape usable for spectre figures.
/// Zero-length edges trace fine, but matching a new tile on a collapsed
/// edge fails downstream because the facing angle is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    p1: f64,
    p2: f64,
}

impl ShapeParams {
    /// Degenerate extreme with `p1 = 0`.
    pub const CHEVRON: Self = Self { p1: 0.0, p2: 1.0 };
    /// Degenerate extreme with `p2 = 0`.
    pub const COMET: Self = Self { p1: 1.0, p2: 0.0 };
    /// The original hat tile.
    pub const HAT: Self = Self { p1: 1.0, p2: SQRT_3 };
    /// The turtle tile (the hat's parameters swapped).
    pub const TURTLE: Self = Self { p1: SQRT_3, p2: 1.0 };
    /// Equal-sided Tile(1,1), the shape underlying spectre tilings.
    pub const TILE_1_1: Self = Self { p1: 1.0, p2: 1.0 };

    /// Creates a parameter pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either scalar is negative or not finite.
    pub fn new(p1: f64, p2: f64) -> Result<Self, ShapeError> {
        if !p1.is_finite() || p1 < 0.0 {
            return Err(ShapeError::InvalidParameter {
                parameter: "p1",
                value: p1,
            });
        }
        if !p2.is_finite() || p2 < 0.0 {
            return Err(ShapeError::InvalidParameter {
                parameter: "p2",
                value: p2,
            });
        }
        Ok(Self { p1, p2 })
    }

    /// First length scalar.
    #[must_use]
    pub fn p1(&self) -> f64 {
        self.p1
    }

    /// Second length scalar.
    #[must_use]
    pub fn p2(&self) -> f64 {
        self.p2
    }

    /// Returns the parameters with `p1` and `p2` exchanged.
    ///
    /// Mixed tilings alternate a shape and its swapped counterpart at
    /// the same topological positions (turtles in hats, hats in turtles).
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }
}

/// The three concrete move lengths derived from a parameter pair and the
/// store's uniform scaling factor.
#[derive(Debug, Clone, Copy)]
pub struct EdgeLengths {
    half: f64,
    full: f64,
    height: f64,
}

impl EdgeLengths {
    /// Derives the move lengths for one tile.
    #[must_use]
    pub fn new(params: ShapeParams, scaling: f64) -> Self {
        Self {
            half: scaling * params.p1,
            full: scaling * 2.0 * params.p1,
            height: scaling * params.p2,
        }
    }

    /// Resolves a length class to its concrete length.
    #[must_use]
    pub fn resolve(&self, class: LengthClass) -> f64 {
        match class {
            LengthClass::Half => self.half,
            LengthClass::Full => self.full,
            LengthClass::Height => self.height,
        }
    }
}
