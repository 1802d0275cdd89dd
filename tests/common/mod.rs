//! Common test utilities for localx-assets CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project, config home and scratch workspace
//! - Archive helpers: read a written zip back into memory
//! - Assertion macros: `assert_output_contains!`

#![allow(dead_code)]

pub mod archive;
pub mod assertions;
pub mod env;

pub use archive::*;
pub use env::*;
