//! Terminal presentation for the binary

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
