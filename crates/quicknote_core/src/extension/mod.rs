//! Host extension metadata contracts.
//!
//! Declaration-only view of installed host extensions: just enough manifest
//! shape to aggregate declared language contributions for the capture
//! picker. Runtime extension loading is out of scope.

pub mod languages;
pub mod manifest;
