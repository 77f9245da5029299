//! Notes-root resolution and note location planning.
//!
//! # Responsibility
//! - Validate the configured notes root into a usable absolute directory.
//! - Derive day-bucket directories and timestamped note file paths.
//!
//! # Invariants
//! - Resolution is a read-only predicate over the file system at call time.
//! - Planning functions are pure given their inputs and the capture instant.

pub mod plan;
pub mod resolve;
