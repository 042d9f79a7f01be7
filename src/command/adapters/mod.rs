//! Adapter implementations for command registration ports.

pub mod memory;
