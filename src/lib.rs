//! Two small demonstrations of SOLID design in Rust.
//!
//! - [`vehicles`]: Liskov substitution. Engine control is a capability trait
//!   rather than behavior on the shared `Vehicle` base.
//! - [`users`]: single responsibility. Validation, persistence and
//!   orchestration live in separate types composed by the caller.

pub mod config;
pub mod error;
pub mod logging;
pub mod users;
pub mod vehicles;

pub use config::DemoConfig;
pub use error::{ConfigError, UserError};
