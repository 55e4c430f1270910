//! Core trait definitions for the seqdelta ecosystem.
//!
//! These traits define the contracts that domain types implement across crates.

/// A biological sequence (DNA, RNA, protein, etc.).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl Sequence for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Sequence for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

/// A type that carries a numeric score (alignment score, quality, etc.).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
