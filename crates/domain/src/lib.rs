//! Shared domain layer for CampaignKit.
//!
//! Holds the workspace-wide error type, the configuration model, and the
//! plain-text utilities the content pipeline crates build on. Everything
//! here is pure and synchronous: no I/O, no ambient state.

pub mod config;
pub mod error;
pub mod text;

pub use config::Config;
pub use error::{Error, Result};
