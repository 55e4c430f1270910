//! Session store for chunked large-sequence uploads.
//!
//! Sequences too large for a single request arrive as ordered chunks; a
//! [`SessionStore`] keeps one [`IngestSession`] per upload in flight and
//! runs the regular comparison pipeline once both sides are complete. The
//! chunking only changes how the bytes arrive: the aligner and its size
//! guard are the same ones [`compare_with_options`] applies to direct input.
//!
//! The store is not thread-safe. A caller that shares one across threads
//! wraps it in its own lock.

use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use seqdelta_core::{Result, SeqDeltaError};
use seqdelta_seq::{IngestSession, SequenceRole};

use crate::engine::{compare_with_options, CompareOptions};
use crate::report::ComparisonReport;

/// Opaque handle to one in-flight chunked upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns every in-flight ingestion session.
#[derive(Debug, Default)]
pub struct SessionStore {
    next_id: u64,
    sessions: HashMap<SessionId, IngestSession>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session and return its handle.
    pub fn create(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, IngestSession::new());
        debug!("opened ingest session {id}");
        id
    }

    /// Record one uploaded chunk for `role`.
    ///
    /// Chunks may arrive in any order; the first upload for a role fixes
    /// that role's total chunk count.
    ///
    /// # Errors
    ///
    /// Returns [`SeqDeltaError::Input`] for an unknown session, a zero or
    /// disagreeing total, an out-of-range index, or a duplicate index.
    pub fn upload_chunk(
        &mut self,
        id: SessionId,
        role: SequenceRole,
        chunk_index: usize,
        total_chunks: usize,
        data: String,
    ) -> Result<()> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| unknown_session(id))?;
        session.upload(role, chunk_index, total_chunks, data)
    }

    /// Run the comparison over a fully uploaded session.
    ///
    /// An incomplete session is rejected and kept, so the remaining chunks
    /// can still arrive. A complete session is consumed whether or not the
    /// comparison succeeds: a rejection past this point (for example by the
    /// size guard) is deterministic, so retrying the same chunks cannot
    /// help.
    ///
    /// # Errors
    ///
    /// Returns [`SeqDeltaError::Input`] for an unknown or incomplete
    /// session, plus anything [`compare_with_options`] returns.
    pub fn compare_session(
        &mut self,
        id: SessionId,
        options: &CompareOptions,
    ) -> Result<ComparisonReport> {
        {
            let session = self.sessions.get(&id).ok_or_else(|| unknown_session(id))?;
            if !session.is_complete() {
                return Err(SeqDeltaError::Input(format!(
                    "session {id} is incomplete: reference {}, query {}",
                    progress_text(session, SequenceRole::Reference),
                    progress_text(session, SequenceRole::Query),
                )));
            }
        }
        let Some(session) = self.sessions.remove(&id) else {
            return Err(unknown_session(id));
        };
        let (reference_text, query_text) = session.assemble()?;
        debug!(
            "session {id} assembled: {} reference chars, {} query chars",
            reference_text.len(),
            query_text.len()
        );
        compare_with_options(&reference_text, &query_text, options)
    }

    /// Drop an abandoned session. Returns whether it existed.
    pub fn discard(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of sessions in flight.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are in flight.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn unknown_session(id: SessionId) -> SeqDeltaError {
    SeqDeltaError::Input(format!("unknown session {id}"))
}

fn progress_text(session: &IngestSession, role: SequenceRole) -> String {
    match session.progress(role) {
        Some((received, total)) => format!("{received} of {total} chunks"),
        None => "no chunks".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compare;

    fn upload_whole(store: &mut SessionStore, id: SessionId, role: SequenceRole, data: &str) {
        store.upload_chunk(id, role, 0, 1, data.to_string()).unwrap();
    }

    #[test]
    fn chunked_comparison_matches_direct_comparison() {
        let mut store = SessionStore::new();
        let id = store.create();
        store
            .upload_chunk(id, SequenceRole::Reference, 0, 2, "ACG".into())
            .unwrap();
        store
            .upload_chunk(id, SequenceRole::Reference, 1, 2, "GT".into())
            .unwrap();
        upload_whole(&mut store, id, SequenceRole::Query, "ACGT");

        let chunked = store.compare_session(id, &CompareOptions::default()).unwrap();
        let direct = compare("ACGGT", "ACGT").unwrap();
        assert_eq!(
            serde_json::to_value(&chunked).unwrap(),
            serde_json::to_value(&direct).unwrap()
        );
    }

    #[test]
    fn out_of_order_chunks_reassemble_by_index() {
        let mut store = SessionStore::new();
        let id = store.create();
        store
            .upload_chunk(id, SequenceRole::Reference, 1, 2, "GT".into())
            .unwrap();
        store
            .upload_chunk(id, SequenceRole::Reference, 0, 2, "AC".into())
            .unwrap();
        upload_whole(&mut store, id, SequenceRole::Query, "ACGT");

        let report = store.compare_session(id, &CompareOptions::default()).unwrap();
        assert_eq!(report.reference_length, 4);
        assert!(report.mutations.is_empty());
    }

    #[test]
    fn incomplete_session_is_rejected_and_kept() {
        let mut store = SessionStore::new();
        let id = store.create();
        store
            .upload_chunk(id, SequenceRole::Reference, 0, 2, "AC".into())
            .unwrap();
        upload_whole(&mut store, id, SequenceRole::Query, "ACGT");

        let err = store
            .compare_session(id, &CompareOptions::default())
            .unwrap_err();
        assert!(err.is_input());
        assert!(err.to_string().contains("1 of 2"));

        // The missing chunk can still arrive afterwards
        store
            .upload_chunk(id, SequenceRole::Reference, 1, 2, "GT".into())
            .unwrap();
        assert!(store.compare_session(id, &CompareOptions::default()).is_ok());
    }

    #[test]
    fn missing_role_counts_as_incomplete() {
        let mut store = SessionStore::new();
        let id = store.create();
        upload_whole(&mut store, id, SequenceRole::Reference, "ACGT");

        let err = store
            .compare_session(id, &CompareOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("no chunks"));
    }

    #[test]
    fn session_is_consumed_by_a_successful_comparison() {
        let mut store = SessionStore::new();
        let id = store.create();
        upload_whole(&mut store, id, SequenceRole::Reference, "ACGT");
        upload_whole(&mut store, id, SequenceRole::Query, "ACGA");

        store.compare_session(id, &CompareOptions::default()).unwrap();
        let err = store
            .compare_session(id, &CompareOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("unknown session"));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_session_is_an_input_error() {
        let mut store = SessionStore::new();
        let id = store.create();
        store.discard(id);
        let err = store
            .upload_chunk(id, SequenceRole::Query, 0, 1, "ACGT".into())
            .unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn duplicate_chunk_errors_propagate() {
        let mut store = SessionStore::new();
        let id = store.create();
        upload_whole(&mut store, id, SequenceRole::Reference, "ACGT");
        let err = store
            .upload_chunk(id, SequenceRole::Reference, 0, 1, "ACGT".into())
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn discard_drops_the_session() {
        let mut store = SessionStore::new();
        let id = store.create();
        assert_eq!(store.len(), 1);
        assert!(store.discard(id));
        assert!(!store.discard(id));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = SessionStore::new();
        let first = store.create();
        store.discard(first);
        let second = store.create();
        assert_ne!(first, second);
    }

    #[test]
    fn fasta_headers_survive_chunk_boundaries() {
        // A chunk boundary in the middle of a header line: normalization
        // runs on the assembled text, so the header is still discarded
        let mut store = SessionStore::new();
        let id = store.create();
        store
            .upload_chunk(id, SequenceRole::Reference, 0, 2, ">hea".into())
            .unwrap();
        store
            .upload_chunk(id, SequenceRole::Reference, 1, 2, "der\nACGT".into())
            .unwrap();
        upload_whole(&mut store, id, SequenceRole::Query, "ACGT");

        let report = store.compare_session(id, &CompareOptions::default()).unwrap();
        assert_eq!(report.reference_length, 4);
        assert_eq!(report.alignment.aligned_reference, "ACGT");
    }

    #[test]
    fn size_guard_applies_to_assembled_sessions() {
        let mut store = SessionStore::new();
        let id = store.create();
        upload_whole(&mut store, id, SequenceRole::Reference, "ACGTACGT");
        upload_whole(&mut store, id, SequenceRole::Query, "ACGTACGT");

        let options = CompareOptions {
            max_matrix_cells: 10,
            ..CompareOptions::default()
        };
        let err = store.compare_session(id, &options).unwrap_err();
        assert!(matches!(err, SeqDeltaError::Capacity { .. }));
    }

    #[test]
    fn session_id_serializes_transparently() {
        let mut store = SessionStore::new();
        let id = store.create();
        assert_eq!(serde_json::to_string(&id).unwrap(), "0");
        let parsed: SessionId = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, id);
    }
}
