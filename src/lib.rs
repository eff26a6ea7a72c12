//! Workspace-level integration tests for strassen-rs.
//!
//! The tests live under `tests/`; this crate has no library code.
