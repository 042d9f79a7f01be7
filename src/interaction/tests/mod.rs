//! Unit tests for the interaction module.
//!
//! Covers the authorization gate's ordering, routing misses, registry
//! publication, and dispatch isolation of failing and panicking handlers.

mod support;
