//! Domain models for the planet tracker.
//!
//! - [`Planet`]: one body's stored name/diameter/mass plus the physical
//!   quantities derived from them. Derived values are recomputed on every call
//!   and never persisted.

mod planet;

pub use planet::*;
