//! Changeset engine for Snapline.
//!
//! Compares two frozen document snapshots and produces a position-accurate
//! description of what was deleted, inserted, and left unchanged, expressed
//! in both documents' own coordinate spaces. The pipeline: both documents'
//! hashed unit sequences are aligned with a Myers shortest-edit-script
//! search, the alignment is materialized as an ordered list of [`Change`]
//! records, and the list is simplified into stable, queryable regions.
//!
//! The computation is a pure synchronous function over immutable inputs: no
//! I/O, no locks, no shared state. Independent comparisons may run on any
//! threads.
//!
//! # Key Types
//!
//! - [`diff`] — The entry point: two documents in, a [`ChangeSet`] out
//! - [`ChangeSet`] / [`Change`] / [`Span`] — The materialized comparison
//! - [`Side`] — Selects a coordinate space for position queries
//! - [`DiffConfig`] — Merge policy knobs
//!
//! # Modules
//!
//! - [`error`] — [`ChangesetError`] for internal invariant breaches
//! - [`span`] — [`Span`] and [`UnitRange`] provenance
//! - [`change`] — The [`Change`] record
//! - [`changeset`] — [`ChangeSet`] construction, validation, simplification
//! - [`mapper`] — Position mapping between coordinate spaces
//! - [`diff`] — The top-level [`diff`] function and [`DiffConfig`]

pub mod change;
pub mod changeset;
pub mod diff;
pub mod error;
pub mod mapper;
mod myers;
pub mod span;

pub use change::Change;
pub use changeset::ChangeSet;
pub use diff::{diff, DiffConfig};
pub use error::{ChangesetError, ChangesetResult};
pub use mapper::Side;
pub use span::{Span, UnitRange};
