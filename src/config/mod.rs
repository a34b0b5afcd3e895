//! Configuration for the page interaction layer.
//!
//! All tunable timings and offsets are centralized here. The host page may
//! provide an inline TOML document; any missing or invalid entries fall back
//! to the defaults so the page stays interactive.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{LogLevel, PageConfig};
