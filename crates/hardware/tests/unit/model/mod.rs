//! Functional model tests.
//!
//! Unit tests for the operand cache state machine, the store-queue unit,
//! and configuration validation.

/// Unit tests for the operand cache model (allocate, invalidate, write-back).
pub mod cache;

/// Unit tests for model configuration parsing and validation.
pub mod config;
