//! Dictionaries for Distle solving
//!
//! Provides the embedded default dictionary compiled into the binary, and
//! loading of custom dictionaries from disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use std::io;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// The dictionary compiled into the binary
    Embedded,
    /// A text file with one word per line
    File(std::path::PathBuf),
}

impl WordlistSource {
    /// Parse a CLI value: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(arg.into())
        }
    }

    /// Load the words
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub fn load(&self) -> io::Result<Vec<Word>> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(DICTIONARY)),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}
