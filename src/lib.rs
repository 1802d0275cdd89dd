//! localx-assets - build-time asset generator for LocalX
//!
//! Produces the starter-template catalog as one zip archive per template,
//! and the application icon set (PNG plus multi-resolution ICO).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CheckResult, CheckUseCase, IconBuildUseCase, IconOutputs, IconReport, TemplateBuildOptions,
    TemplateBuildReport, TemplateBuildUseCase, TemplateOutcome,
};
pub use config::{Config, ConfigWarning};
pub use domain::catalog::{Catalog, BUILTIN_TEMPLATES};
pub use domain::entities::{BuildPhase, IconSpec, PackedArchive, TemplateDefinition, TemplateFile};
pub use domain::value_objects::{EntryPath, FailurePolicy, HexColor};
pub use error::{AssetError, AssetResult};
pub use infrastructure::{LocalFs, ZipPacker};
