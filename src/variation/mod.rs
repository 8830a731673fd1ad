//! Byte-driven prompt variation.
//!
//! An entropy block is consumed front to back:
//!
//! ```text
//! [selector | approach parameters ............ | unused tail]
//!     ↓              ↓
//!  ApproachPool   Approach::render (fixed byte budget)
//! ```
//!
//! Rendering is a pure function of the prompt and the bytes, so any
//! byte sequence reproduces the same text and parameter map.

mod approach;
mod cursor;
mod generator;
mod pool;
mod record;
pub mod strategies;
pub mod vocabulary;

pub use approach::{Approach, MAX_BYTE_BUDGET};
pub use cursor::{ByteCursor, CursorError};
pub use generator::{validate_request, GenerateError, VariationGenerator};
pub use pool::ApproachPool;
pub use record::{ParamValue, Parameters, Provenance, Rendered, VariationRecord};
