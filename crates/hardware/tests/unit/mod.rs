//! # Unit Tests
//!
//! This module organizes the unit tests by crate layer: the common
//! address/constant types, the functional hardware model, and the transfer
//! primitives themselves.


/// Unit tests for the functional model.
///
/// Verifies the operand-cache state machine (allocate-without-read,
/// invalidate, write-back), the store-queue flush address reconstruction,
/// and configuration validation.
pub mod model;

/// Unit tests for the transfer primitives.
///
/// Verifies copy/fill correctness, the store-queue and PVR protocols, and
/// the boundary and idempotence properties of every routine.
pub mod xfer;
