//! Distle Solver
//!
//! A solver for Distle, a word game where every guess is answered with the
//! edit distance to the secret (insert, delete, replace and adjacent
//! transpose all cost one) plus the canonical sequence of operations.
//!
//! # Quick Start
//!
//! ```rust
//! use distle_solver::core::{Signature, Word, edit_distance, transformation_sequence};
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//!
//! let ops = transformation_sequence("cat", "act");
//! assert_eq!(ops.len(), 1); // one transpose
//!
//! // Feedback when "cat" is guessed and "cart" is the secret
//! let guess = Word::new("cat").unwrap();
//! let secret = Word::new("cart").unwrap();
//! println!("{}", Signature::calculate(&guess, &secret)); // "1 I"
//! ```

// Distance engine and domain types
pub mod core;

// Guess selection
pub mod solver;

// Reference game driver
pub mod game;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
