//! Ordered-chunk reassembly for large sequence uploads.
//!
//! Sequences above the in-memory comfort threshold arrive as an ordered set
//! of chunks, each tagged with its index and the total chunk count. A
//! [`ChunkBuffer`] accepts them in any arrival order and reassembles them in
//! index order; an [`IngestSession`] pairs one buffer per [`SequenceRole`] so
//! a comparison can start only once both sides are complete.

use std::fmt;
use std::str::FromStr;

use seqdelta_core::{Result, SeqDeltaError};

/// Which side of the comparison a chunk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SequenceRole {
    /// The reference sequence; mutation positions are reported against it.
    Reference,
    /// The query sequence compared against the reference.
    Query,
}

impl fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceRole::Reference => f.write_str("reference"),
            SequenceRole::Query => f.write_str("query"),
        }
    }
}

impl FromStr for SequenceRole {
    type Err = SeqDeltaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(SequenceRole::Reference),
            "query" => Ok(SequenceRole::Query),
            other => Err(SeqDeltaError::Input(format!(
                "unknown sequence role '{other}' (expected 'reference' or 'query')"
            ))),
        }
    }
}

/// Accumulates the chunks of one sequence until all have arrived.
///
/// The total chunk count is fixed at construction; every chunk occupies the
/// slot named by its index. Out-of-range indices, duplicate indices, and
/// disagreeing totals are caller mistakes and rejected as
/// [`SeqDeltaError::Input`].
#[derive(Debug, Clone)]
pub struct ChunkBuffer {
    slots: Vec<Option<String>>,
    received: usize,
}

impl ChunkBuffer {
    /// Create a buffer expecting exactly `total_chunks` chunks.
    ///
    /// # Errors
    ///
    /// Returns [`SeqDeltaError::Input`] if `total_chunks` is zero.
    pub fn new(total_chunks: usize) -> Result<Self> {
        if total_chunks == 0 {
            return Err(SeqDeltaError::Input(
                "total chunk count must be at least 1".into(),
            ));
        }
        Ok(Self {
            slots: vec![None; total_chunks],
            received: 0,
        })
    }

    /// Store the chunk at `index`.
    ///
    /// Arrival order is irrelevant; assembly always follows index order.
    ///
    /// # Errors
    ///
    /// Returns [`SeqDeltaError::Input`] if `index` is out of range or the
    /// slot is already filled.
    pub fn insert(&mut self, index: usize, data: String) -> Result<()> {
        let total = self.slots.len();
        let slot = self.slots.get_mut(index).ok_or_else(|| {
            SeqDeltaError::Input(format!(
                "chunk index {index} out of range for {total} chunks"
            ))
        })?;
        if slot.is_some() {
            return Err(SeqDeltaError::Input(format!(
                "duplicate chunk index {index}"
            )));
        }
        *slot = Some(data);
        self.received += 1;
        Ok(())
    }

    /// Total number of chunks this buffer expects.
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Number of chunks received so far.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Whether every chunk has arrived.
    pub fn is_complete(&self) -> bool {
        self.received == self.slots.len()
    }

    /// Concatenate all chunks in index order.
    ///
    /// # Errors
    ///
    /// Returns [`SeqDeltaError::Input`] if any chunk is still missing.
    pub fn assemble(self) -> Result<String> {
        let total = self.slots.len();
        if !self.is_complete() {
            return Err(SeqDeltaError::Input(format!(
                "incomplete upload: {} of {} chunks received",
                self.received, total
            )));
        }
        Ok(self.slots.into_iter().flatten().collect())
    }
}

/// One in-flight large-sequence comparison: a chunk buffer per role.
///
/// Buffers are created lazily by the first upload for each role, which also
/// fixes that role's total chunk count.
#[derive(Debug, Default)]
pub struct IngestSession {
    reference: Option<ChunkBuffer>,
    query: Option<ChunkBuffer>,
}

impl IngestSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one uploaded chunk for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqDeltaError::Input`] on a zero or disagreeing
    /// `total_chunks`, an out-of-range index, or a duplicate index.
    pub fn upload(
        &mut self,
        role: SequenceRole,
        index: usize,
        total_chunks: usize,
        data: String,
    ) -> Result<()> {
        let buffer = self.buffer_mut(role);
        match buffer {
            Some(existing) => {
                if existing.total() != total_chunks {
                    return Err(SeqDeltaError::Input(format!(
                        "{role} upload announced {total_chunks} chunks but the session expects {}",
                        existing.total()
                    )));
                }
                existing.insert(index, data)
            }
            None => {
                let mut created = ChunkBuffer::new(total_chunks)?;
                created.insert(index, data)?;
                *buffer = Some(created);
                Ok(())
            }
        }
    }

    /// Whether both roles have received every chunk.
    pub fn is_complete(&self) -> bool {
        self.reference.as_ref().is_some_and(ChunkBuffer::is_complete)
            && self.query.as_ref().is_some_and(ChunkBuffer::is_complete)
    }

    /// Chunks received and expected for `role`, if any upload has arrived.
    pub fn progress(&self, role: SequenceRole) -> Option<(usize, usize)> {
        self.buffer_ref(role).map(|b| (b.received(), b.total()))
    }

    /// Reassemble both sequences as `(reference, query)` raw text.
    ///
    /// # Errors
    ///
    /// Returns [`SeqDeltaError::Input`] if either role is missing chunks.
    pub fn assemble(self) -> Result<(String, String)> {
        let reference = self
            .reference
            .ok_or_else(|| SeqDeltaError::Input("no reference chunks uploaded".into()))?
            .assemble()?;
        let query = self
            .query
            .ok_or_else(|| SeqDeltaError::Input("no query chunks uploaded".into()))?
            .assemble()?;
        Ok((reference, query))
    }

    fn buffer_mut(&mut self, role: SequenceRole) -> &mut Option<ChunkBuffer> {
        match role {
            SequenceRole::Reference => &mut self.reference,
            SequenceRole::Query => &mut self.query,
        }
    }

    fn buffer_ref(&self, role: SequenceRole) -> Option<&ChunkBuffer> {
        match role {
            SequenceRole::Reference => self.reference.as_ref(),
            SequenceRole::Query => self.query.as_ref(),
        }
    }
}
