//! Core domain types for Distle
//!
//! This module contains the distance engine and the types it works on. Nothing
//! here performs I/O or keeps state between calls.

mod distance;
mod edit;
mod signature;
mod table;
mod word;

pub use distance::{
    char_edits, distance_only, edit_distance, transformation_edits, transformation_sequence,
    word_distance,
};
pub use edit::{Edit, EditOp, apply_edits, ops_of};
pub use signature::{Signature, SignatureError};
pub use table::{EditTable, Move, RECONSTRUCTION_ORDER, Step};
pub use word::{Word, WordError};
