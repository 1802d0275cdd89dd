//! File System Implementations
//!
//! - `LocalFs` - local disk, implements `FileTreeWriter`
//! - `atomic` - tempfile + rename writes for build outputs

pub mod atomic;
mod local;

pub use atomic::write_atomic;
pub use local::LocalFs;
