//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local disk tree writer and atomic writes
//! - `archive/` - Deterministic zip packer
//! - `events/` - Console and NDJSON event sinks
//! - `icons/` - Icon rasterization and PNG/ICO encoding

pub mod archive;
pub mod events;
pub mod fs;
pub mod icons;

// Re-export for convenience
pub use archive::ZipPacker;
pub use events::{ConsoleEventSink, ConsoleStyle, JsonEventSink};
pub use fs::{write_atomic, LocalFs};
