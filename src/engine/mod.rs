//! Core generation algorithms.
//!
//! The expansion engine and the address resolver are stateless pure functions;
//! they operate on snapshots of the input and own no session state. Running an
//! expansion again rebuilds the record collections from scratch.

pub mod address;
pub mod expand;

pub use address::resolve;
pub use expand::expand;
