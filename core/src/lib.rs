//! # Creational Patterns
//!
//! Two small demonstrations of object creation through trait objects.
//!
//! * **[`abstract_factory`]**: a factory trait builds a whole family of products
//!   (all-Samsung or all-Whirlpool appliances, one editor language), and the
//!   owner never names a concrete product type.
//! * **[`factory_method`]**: the owner itself is specialised, and its overridden
//!   creation method decides which product it ends up holding.
//!
//! * **[`demos`]**: the scripted runs the binaries print.

pub mod abstract_factory;
pub mod demos;
pub mod factory_method;
