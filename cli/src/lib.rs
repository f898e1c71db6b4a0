//! Command-line front ends for the creational pattern demos.
//!
//! Both binaries share their argument definitions ([`commands`]) and their
//! stderr logging setup ([`terminal`]). Demo text goes to stdout untouched.

pub mod commands;
pub mod terminal;
