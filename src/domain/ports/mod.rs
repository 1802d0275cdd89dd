//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive_packer;
pub mod build_events;
pub mod file_tree;

pub use archive_packer::ArchivePacker;
#[cfg(test)]
pub(crate) use build_events::RecordingEventSink;
pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use file_tree::FileTreeWriter;
