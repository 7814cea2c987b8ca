//! Document model for Snapline.
//!
//! This crate provides the immutable document tree that the changeset engine
//! compares, along with well-formedness validation and the content sequencer
//! that flattens a tree into an ordered run of hashed, comparable units.
//!
//! # Key Types
//!
//! - [`Node`] / [`NodeKind`] — Block tree nodes and their kinds
//! - [`Document`] — A validated, immutable document snapshot
//! - [`Token`] — The comparable value of one content unit
//! - [`ContentUnit`] — A token plus its hash, width, and provenance path
//! - [`UnitHash`] — Domain-separated BLAKE3 fingerprint of a token
//!
//! # Modules
//!
//! - [`error`] — [`DocumentError`] for malformed trees
//! - [`node`] — Tree node types and constructors
//! - [`hash`] — Token hashing
//! - [`sequence`] — Tokens, content units, and the sequencer
//! - [`document`] — The validated [`Document`] wrapper

pub mod document;
pub mod error;
pub mod hash;
pub mod node;
pub mod sequence;

pub use document::Document;
pub use error::{DocResult, DocumentError};
pub use hash::UnitHash;
pub use node::{Node, NodeKind};
pub use sequence::{ContentUnit, NodePath, Token};
