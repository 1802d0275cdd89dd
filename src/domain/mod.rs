//! Domain Layer
//!
//! Pure definitions without I/O.
//!
//! ## Structure
//!
//! - `catalog/` - The static template catalog and its validation
//! - `entities/` - Template definitions, build phases, archives, icon spec
//! - `value_objects/` - Entry paths, hashes, colours, failure policy
//! - `ports/` - Interface definitions for infrastructure

pub mod catalog;
pub mod entities;
pub mod ports;
pub mod value_objects;
