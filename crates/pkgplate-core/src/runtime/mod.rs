//! Toolchain detection
//!
//! This module provides:
//! - Rust toolchain detection (`rustc --version`)
//! - Version parsing for the minimum supported toolchain

pub mod check;

pub use check::{check_rustc, parse_version, system_version, FALLBACK_RUST_VERSION};
