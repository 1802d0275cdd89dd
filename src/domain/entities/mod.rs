//! Domain Entities
//!
//! - `TemplateDefinition` - A named starter project and its files
//! - `BuildPhase` - Per-template build state
//! - `PackedArchive` - A finished archive on disk
//! - `IconSpec` - Application icon parameters

mod archive;
mod build;
mod icon;
mod template;

pub use archive::PackedArchive;
pub use build::BuildPhase;
pub use icon::{IconSpec, ICO_MAX_SIZE, MAX_RENDER_SIZE};
pub use template::{TemplateDefinition, TemplateFile};
