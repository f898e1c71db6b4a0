//! The **Factory Method** pattern.
//!
//! The creator is a trait, and each implementor overrides the creation
//! method. Which product comes out is decided by the creator's concrete type,
//! never by an argument ([`trees`] is the deliberate exception: its creators
//! take a request and may still override how it is honoured).

pub mod fertiliser;
pub mod flowers;
pub mod planting;
pub mod roses;
pub mod shrubs;
pub mod trees;

pub use fertiliser::{Fertiliser, FertiliserRequest};
pub use flowers::Flower;
pub use planting::Planting;
pub use roses::{RedRoseGarden, Rose, RoseGarden, YellowRoseGarden};
pub use shrubs::Shrub;
pub use trees::Tree;
