use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::ShapeError;

use super::chirality::Chirality;

/// Number of boundary edges of every tile in the family.
pub const EDGE_COUNT: usize = 13;

/// Canonical edge names for the left-handed orientation, in the cyclic
/// order the boundary is traced. The leading letter marks which side of
/// the shape the edge sits on (`L`eft, `R`ight, or `D`own, which lies on
/// the mirror line).
const LEFT_EDGE_NAMES: [&str; EDGE_COUNT] = [
    "LP", "LH", "LS", "LN", "RN", "RS", "RH", "RP", "RT", "RW", "DW", "LW", "LT",
];

/// Mirrors an edge name: the leading side marker flips between `L` and
/// `R`, while `D` (on the mirror line) is unchanged.
fn mirrored_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some('L') => format!("R{}", chars.as_str()),
        Some('R') => format!("L{}", chars.as_str()),
        _ => name.to_owned(),
    }
}

/// The 13-entry name/index table for one chirality.
///
/// Tiles index their vertex arrays through this table, so a named edge
/// resolves to the same slot no matter which edge anchored the trace.
#[derive(Debug)]
pub struct EdgeVocabulary {
    chirality: Chirality,
    names: [String; EDGE_COUNT],
}

impl EdgeVocabulary {
    /// Returns the shared vocabulary for a chirality.
    ///
    /// The right-handed table is derived from the canonical left-handed
    /// one by the mirroring rule, once, on first use.
    #[must_use]
    pub fn for_chirality(chirality: Chirality) -> &'static Self {
        static LEFT: OnceLock<EdgeVocabulary> = OnceLock::new();
        static RIGHT: OnceLock<EdgeVocabulary> = OnceLock::new();
        match chirality {
            Chirality::Left => LEFT.get_or_init(|| Self {
                chirality,
                names: LEFT_EDGE_NAMES.map(str::to_owned),
            }),
            Chirality::Right => RIGHT.get_or_init(|| Self {
                chirality,
                names: LEFT_EDGE_NAMES.map(mirrored_name),
            }),
        }
    }

    /// Returns the cyclic position of a named edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not in this chirality's table.
    pub fn index_of(&self, name: &str) -> Result<usize, ShapeError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| ShapeError::UnknownEdge {
                name: name.to_owned(),
                chirality: self.chirality.letter(),
            })
    }

    /// Returns the edge name at a cyclic position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= EDGE_COUNT`.
    #[must_use]
    pub fn name_at(&self, index: usize) -> &str {
        &self.names[index]
    }
}

/// Returns the cyclically previous position.
#[must_use]
pub fn previous_index(index: usize) -> usize {
    (index + EDGE_COUNT - 1) % EDGE_COUNT
}

/// An injected edge-name translation table.
///
/// Adjacency lists written for a different vocabulary (the published
/// spectre figures name their edges differently) are translated to the
/// canonical names before lookup. The identity map passes every name
/// through untouched; a finite table rejects names it does not contain.
#[derive(Debug, Clone, Default)]
pub struct EdgeMap {
    entries: HashMap<String, String>,
}

impl EdgeMap {
    /// The identity translation: every name maps to itself.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a finite translation table from `(external, canonical)` pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The translation used by the published spectre-vocabulary
    /// adjacency lists for Tile(1,1) figures.
    #[must_use]
    pub fn spectre() -> Self {
        Self::from_pairs([
            ("LN", "LP"),
            ("LH", "LH"),
            ("RH", "LS"),
            ("RN", "LN"),
            ("RS", "RN"),
            ("BK", "RS"),
            ("RT", "RH"),
            ("RW", "RP"),
            ("RD", "RT"),
            ("LD", "RW"),
            ("LW", "DW"),
            ("LT", "LW"),
            ("LS", "LT"),
        ])
    }

    /// Translates an external edge name to its canonical form.
    ///
    /// Returns `None` when a finite table has no entry for the name.
    #[must_use]
    pub fn translate<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.entries.is_empty() {
            Some(name)
        } else {
            self.entries.get(name).map(String::as_str)
        }
    }
}
