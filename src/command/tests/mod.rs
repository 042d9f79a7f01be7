//! Unit tests for the command module.
//!
//! Covers definition validation, registry indexing, reconciliation
//! properties, and per-scope registration against in-memory and mocked
//! transports.

mod support;
