//! Snapshot history for Snapline.
//!
//! Keeps an ordered, in-memory list of immutable document captures with a
//! cursor for previous/next navigation, and compares any two captures with
//! the changeset engine. Persistence of snapshots to real storage is the
//! embedding application's concern; this crate only models the history the
//! engine needs: frozen inputs that a comparison can never race with.
//!
//! # Key Types
//!
//! - [`History`] — The ordered snapshot list and navigation cursor
//! - [`Snapshot`] / [`SnapshotId`] — One immutable capture
//!
//! # Modules
//!
//! - [`error`] — [`HistoryError`]
//! - [`history`] — [`History`] and snapshots

pub mod error;
pub mod history;

pub use error::{HistoryError, HistoryResult};
pub use history::{History, Snapshot, SnapshotId};
