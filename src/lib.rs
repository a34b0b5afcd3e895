//! Interaction layer for a single-page portfolio.
//!
//! Responsibilities are split the same way on every target:
//! - `app` holds page state and turns input [`Message`]s into [`Effect`]s.
//! - `config` loads tunable timings from inline TOML.
//! - `content` owns the blog entries shown in the content modal.
//! - `web` (wasm32 only) wires the DOM to the reducer.

pub mod app;
pub mod config;
pub mod content;
pub mod scheduler;
pub mod throttle;
pub mod validation;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::{App, Effect, Message};
pub use config::PageConfig;
