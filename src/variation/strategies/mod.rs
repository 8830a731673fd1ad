//! Approach rendering routines.
//!
//! Each routine is a pure function of the base prompt and a byte cursor,
//! consuming exactly its `BYTE_BUDGET` bytes.

pub mod blueprint;
pub mod calibrated;
pub mod constraints;
pub mod fusion;
pub mod multi_parameter;
