//! Shared configuration and error types for the creational pattern demos.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::DemoError;
