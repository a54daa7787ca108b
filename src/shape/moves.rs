use super::chirality::Chirality;
use super::edge::EDGE_COUNT;

/// Which way the facing direction turns after an edge is drawn.
///
/// The y axis grows downward (screen convention), so a left turn
/// subtracts from the facing angle and a right turn adds to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSide {
    Left,
    Right,
}

impl TurnSide {
    /// Returns the mirror turn.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sign applied to the turn angle when updating the facing.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Which of the two derived edge lengths an instruction moves by.
///
/// `Half` is `scale * p1`, `Full` is twice that, and `Height` is
/// `scale * p2`; the names come from the half-side, full side, and
/// half-height of the hexagonal grid the family is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    Half,
    Full,
    Height,
}

/// One boundary-tracing instruction: move, then turn.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    /// Direction of the turn made after the edge is drawn.
    pub turn: TurnSide,
    /// Magnitude of that turn, in degrees.
    pub degrees: f64,
    /// Length of the edge drawn before turning.
    pub length: LengthClass,
}

impl Move {
    const fn new(turn: TurnSide, degrees: f64, length: LengthClass) -> Self {
        Self {
            turn,
            degrees,
            length,
        }
    }

    /// Returns the mirror instruction: same edge, opposite turn.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self {
            turn: self.turn.mirrored(),
            ..self
        }
    }
}

/// Boundary-tracing instructions for the left-handed orientation, one
/// per canonical edge, in cyclic order.
const LEFT_MOVES: [Move; EDGE_COUNT] = {
    use LengthClass::{Full, Half, Height};
    use TurnSide::{Left, Right};
    [
        Move::new(Left, 60.0, Half),
        Move::new(Left, 90.0, Half),
        Move::new(Left, 60.0, Height),
        Move::new(Right, 90.0, Height),
        Move::new(Left, 60.0, Half),
        Move::new(Left, 60.0, Full),
        Move::new(Left, 90.0, Half),
        Move::new(Right, 60.0, Height),
        Move::new(Left, 90.0, Height),
        Move::new(Right, 60.0, Half),
        Move::new(Left, 90.0, Half),
        Move::new(Left, 60.0, Height),
        Move::new(Right, 90.0, Height),
    ]
};

/// Returns the instruction table for a chirality.
///
/// The right-handed table is the canonical one with every turn mirrored.
#[must_use]
pub fn moves_for(chirality: Chirality) -> [Move; EDGE_COUNT] {
    match chirality {
        Chirality::Left => LEFT_MOVES,
        Chirality::Right => LEFT_MOVES.map(Move::mirrored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_signs() {
        assert!((TurnSide::Left.sign() + 1.0).abs() < f64::EPSILON);
        assert!((TurnSide::Right.sign() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn left_turns_sum_to_full_rotation() {
        // A simple closed 13-gon: the net turn over one full trace is 360
        // degrees counter-clockwise.
        let net: f64 = moves_for(Chirality::Left)
            .iter()
            .map(|m| m.turn.sign() * m.degrees)
            .sum();
        assert!((net + 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mirrored_table_flips_turns_only() {
        let left = moves_for(Chirality::Left);
        let right = moves_for(Chirality::Right);
        for (l, r) in left.iter().zip(right.iter()) {
            assert_eq!(l.turn.mirrored(), r.turn);
            assert!((l.degrees - r.degrees).abs() < f64::EPSILON);
            assert_eq!(l.length, r.length);
        }
    }
}
