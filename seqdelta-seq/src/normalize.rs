//! Raw-text sequence normalization.
//!
//! [`NormalizedSeq`] is a newtype over `Vec<u8>` produced by [`normalize`].
//! The inner data is always uppercase with no whitespace, so
//! `Deref<Target=[u8]>` and `as_bytes()` are zero-cost and safe to pass to
//! downstream `&[u8]` APIs.

use std::fmt;
use std::ops::Deref;

use seqdelta_core::{Result, SeqDeltaError, Sequence, Summarizable};

/// Clean raw pasted text into a sequence ready for alignment.
///
/// Accepts plain sequence text or FASTA-formatted text: every line starting
/// with `>` is treated as a header and discarded. All whitespace is stripped
/// and the remaining symbols are uppercased. Symbols outside the common
/// nucleotide/protein alphabets are preserved as-is; the aligner compares
/// symbols byte-for-byte, so an unknown symbol simply never matches anything
/// but itself.
///
/// # Errors
///
/// Returns [`SeqDeltaError::Input`] when nothing remains after stripping.
pub fn normalize(raw: &str) -> Result<NormalizedSeq> {
    let mut data = Vec::with_capacity(raw.len());
    for line in raw.lines() {
        if line.starts_with('>') {
            continue;
        }
        for &b in line.as_bytes() {
            if !b.is_ascii_whitespace() {
                data.push(b.to_ascii_uppercase());
            }
        }
    }

    if data.is_empty() {
        return Err(SeqDeltaError::Input(
            "sequence is empty after normalization".into(),
        ));
    }

    Ok(NormalizedSeq { data })
}

/// A normalized sequence: uppercase, whitespace-free, never empty.
///
/// Only [`normalize`] constructs this type, so holding one is proof the
/// input already passed validation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NormalizedSeq {
    data: Vec<u8>,
}

impl NormalizedSeq {
    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for NormalizedSeq {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for NormalizedSeq {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for NormalizedSeq {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Summarizable for NormalizedSeq {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!("sequence ({} symbols): {}...", self.data.len(), preview)
        } else {
            format!("sequence ({} symbols): {}", self.data.len(), preview)
        }
    }
}

impl fmt::Debug for NormalizedSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "NormalizedSeq(\"{s}\")")
    }
}

impl fmt::Display for NormalizedSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NormalizedSeq {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NormalizedSeq {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        normalize(&s).map_err(serde::de::Error::custom)
    }
}
