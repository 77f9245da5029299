//! Capture use-case orchestration.
//!
//! # Responsibility
//! - Drive note capture end to end against injected host collaborators.
//! - Keep host surfaces decoupled from path and catalog decision logic.

pub mod capture_service;
