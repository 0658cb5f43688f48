//! Shared test infrastructure.
//!
//! Provides the bus-model harness and the mockall port used across the unit
//! tests.


/// Mock implementations of the hardware port traits.
pub mod mocks;
