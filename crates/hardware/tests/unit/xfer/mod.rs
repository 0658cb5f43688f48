//! Transfer primitive tests.
//!
//! Unit tests for the four entry points, split by routine.



/// Unit tests for the PVR graphics-memory adapter.
pub mod pvr;
