//! Template Build Use Case
//!
//! Builds the template catalog into `<output_dir>/<name>.zip` archives.
//!
//! This module handles:
//! - Validating the catalog before any disk access
//! - Running each template through its build phases in its own workspace
//! - Applying the failure policy (abort or continue)
//! - Reporting per-template outcomes in catalog order

mod options;
mod result;
mod use_case;


pub use options::{default_workspace_root, TemplateBuildOptions, DEFAULT_OUTPUT_DIR};
pub use result::{TemplateBuildReport, TemplateOutcome, TemplateReport};
pub use use_case::TemplateBuildUseCase;
