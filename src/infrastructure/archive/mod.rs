//! Archive packers
//!
//! - `ZipPacker` - deterministic Deflate zip, implements `ArchivePacker`

mod zip_packer;

pub use zip_packer::{collect_entries, ZipPacker};
