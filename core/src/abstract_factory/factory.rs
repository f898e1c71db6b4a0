//! Appliance factories.
//!
//! Each factory is a stateless unit struct. Callers hold it as
//! `&dyn ApplianceFactory` and never learn which concrete products they got.

use std::fmt;
use std::str::FromStr;

use creational_common::DemoError;
use tracing::debug;

use super::appliances::{
    Fridge, SamsungFridge, SamsungWashingMachine, WashingMachine, WhirlpoolFridge,
    WhirlpoolWashingMachine,
};

/// Builds one appliance of each kind, all from the same brand.
pub trait ApplianceFactory {
    fn fridge(&self) -> Box<dyn Fridge>;

    fn washing_machine(&self) -> Box<dyn WashingMachine>;

    /// The family every product of this factory belongs to.
    fn brand(&self) -> Brand;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SamsungFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct WhirlpoolFactory;

impl ApplianceFactory for SamsungFactory {
    fn fridge(&self) -> Box<dyn Fridge> {
        debug!(brand = %self.brand(), "building fridge");
        Box::new(SamsungFridge)
    }

    fn washing_machine(&self) -> Box<dyn WashingMachine> {
        debug!(brand = %self.brand(), "building washing machine");
        Box::new(SamsungWashingMachine)
    }

    fn brand(&self) -> Brand {
        Brand::Samsung
    }
}

impl ApplianceFactory for WhirlpoolFactory {
    fn fridge(&self) -> Box<dyn Fridge> {
        debug!(brand = %self.brand(), "building fridge");
        Box::new(WhirlpoolFridge)
    }

    fn washing_machine(&self) -> Box<dyn WashingMachine> {
        debug!(brand = %self.brand(), "building washing machine");
        Box::new(WhirlpoolWashingMachine)
    }

    fn brand(&self) -> Brand {
        Brand::Whirlpool
    }
}

/// The closed set of appliance families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Samsung,
    Whirlpool,
}

impl Brand {
    /// Every brand, in the order the default house tour visits them.
    pub const ALL: [Brand; 2] = [Brand::Samsung, Brand::Whirlpool];

    /// Returns the factory that builds this brand's appliances.
    pub fn factory(self) -> Box<dyn ApplianceFactory> {
        match self {
            Brand::Samsung => Box::new(SamsungFactory),
            Brand::Whirlpool => Box::new(WhirlpoolFactory),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Samsung => write!(f, "Samsung"),
            Brand::Whirlpool => write!(f, "Whirlpool"),
        }
    }
}

impl FromStr for Brand {
    type Err = DemoError;

    /// Parses a brand name, ignoring case ("samsung", "Whirlpool", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "samsung" => Ok(Brand::Samsung),
            "whirlpool" => Ok(Brand::Whirlpool),
            _ => Err(DemoError::UnknownBrand(s.to_string())),
        }
    }
}
