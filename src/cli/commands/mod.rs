//! CLI command implementations

pub mod config;
pub mod install;
pub mod list;
pub mod prune;
pub mod update;

pub use config::execute as config;
pub use install::execute as install;
pub use list::execute as list;
pub use prune::execute as prune;
pub use update::execute as update;
