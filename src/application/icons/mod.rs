//! Icon Build Use Case
//!
//! Renders the application icon at every configured size and writes the
//! flat PNG plus the multi-resolution ICO files.

mod options;
mod result;
mod use_case;

pub use options::{IconOutputs, DEFAULT_ICO_PATHS, DEFAULT_PNG_PATH};
pub use result::{IconFormat, IconReport, WrittenIcon};
pub use use_case::IconBuildUseCase;
