//! Concrete creator: shrubs share a default fertiliser unless they override it.

use tracing::debug;

use super::fertiliser::{Fertiliser, GeneralFertiliser, HybiscusFertiliser};
use super::planting::Planting;

pub trait Shrub {
    fn name(&self) -> &'static str;

    fn create_fertiliser(&self) -> Box<dyn Fertiliser> {
        Box::new(GeneralFertiliser)
    }

    fn plant(&self) -> Planting {
        debug!(shrub = self.name(), "creating fertiliser");
        Planting::new(self.name(), self.create_fertiliser())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Hybiscus;

/// Happy with the default fertiliser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Privet;

impl Shrub for Hybiscus {
    fn name(&self) -> &'static str {
        "hybiscus"
    }

    fn create_fertiliser(&self) -> Box<dyn Fertiliser> {
        Box::new(HybiscusFertiliser)
    }
}

impl Shrub for Privet {
    fn name(&self) -> &'static str {
        "privet"
    }
}
