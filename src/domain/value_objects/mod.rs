//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod color;
mod failure_policy;
mod hash;
mod path;

pub use color::HexColor;
pub use failure_policy::FailurePolicy;
pub use hash::ContentHash;
pub use path::{EntryPath, PathError};
