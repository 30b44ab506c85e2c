//! Packrat - cache-first npm package installer
//!
//! Keeps a local artifact cache keyed by `(name, version)` in front of the
//! npm CLI and offers interactive upgrades for cached packages.

pub mod cli;
pub mod config;
pub mod error;
pub mod ops;
pub mod registry;
pub mod store;
pub mod ui;

pub use error::{PackratError, PackratResult};
