//! Mock implementations of the hardware port traits.
