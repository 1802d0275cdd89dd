//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (catalog, entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TemplateBuildUseCase` - Builds the catalog into zip archives
//! - `IconBuildUseCase` - Renders and writes the icon set
//! - `CheckUseCase` - Validates catalog and icon parameters

pub mod check;
pub mod icons;
pub mod templates;

pub use check::{CheckResult, CheckUseCase};
pub use icons::{IconBuildUseCase, IconFormat, IconOutputs, IconReport, WrittenIcon};
pub use templates::{
    TemplateBuildOptions, TemplateBuildReport, TemplateBuildUseCase, TemplateOutcome,
    TemplateReport,
};
