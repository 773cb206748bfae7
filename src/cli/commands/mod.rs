//! Command implementations

mod compare;
mod config;
mod format;

pub use compare::compare;
pub use config::{config, load_config};
pub use format::format;
