//! The **Abstract Factory** pattern.
//!
//! A factory trait groups one creation method per product kind. Each concrete
//! factory returns products from a single family, so an owner built from one
//! factory can never end up with a mixed set.

pub mod appliances;
pub mod editor;
pub mod factory;
pub mod house;

pub use appliances::{Fridge, WashingMachine};
pub use editor::{Editor, Language, LanguageFactory, Parser, Scanner};
pub use factory::{ApplianceFactory, Brand, SamsungFactory, WhirlpoolFactory};
pub use house::House;
