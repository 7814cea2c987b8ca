//! Error types for the changeset engine.

/// Errors that can occur while building a changeset.
///
/// The engine is total over validated documents, so the only failure class
/// is a breach of its own invariants — a defect in the engine, not a user
/// condition. It is surfaced as an error rather than a panic so callers can
/// fail a comparison without taking the process down.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChangesetError {
    /// An internal invariant was violated (coverage, ordering, or span
    /// accounting).
    #[error("changeset invariant violated: {0}")]
    Logic(String),
}

/// Convenience alias for changeset results.
pub type ChangesetResult<T> = Result<T, ChangesetError>;
