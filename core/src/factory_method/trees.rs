//! Parameterised creator: a tree is asked for a fertiliser by name.
//!
//! The base mapping knows fir and pine. A [`Fir`] extends it with organic
//! fertiliser; a [`Pine`] keeps the base mapping, so asking it for organic
//! falls through to general.

use tracing::debug;

use super::fertiliser::{
    Fertiliser, FertiliserRequest, FirFertiliser, GeneralFertiliser, OrganicFertiliser,
    PineFertiliser,
};
use super::planting::Planting;

pub trait Tree {
    fn name(&self) -> &'static str;

    fn create_fertiliser(&self, request: &FertiliserRequest) -> Box<dyn Fertiliser> {
        any_tree_fertiliser(request)
    }

    fn plant(&self, request: &FertiliserRequest) -> Planting {
        debug!(tree = self.name(), ?request, "creating fertiliser");
        Planting::new(self.name(), self.create_fertiliser(request))
    }
}

/// The mapping every tree starts from.
pub fn any_tree_fertiliser(request: &FertiliserRequest) -> Box<dyn Fertiliser> {
    match request {
        FertiliserRequest::Fir => Box::new(FirFertiliser),
        FertiliserRequest::Pine => Box::new(PineFertiliser),
        FertiliserRequest::Organic | FertiliserRequest::Unspecified(_) => {
            Box::new(GeneralFertiliser)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Fir;

#[derive(Debug, Clone, Copy, Default)]
pub struct Pine;

impl Tree for Fir {
    fn name(&self) -> &'static str {
        "fir"
    }

    fn create_fertiliser(&self, request: &FertiliserRequest) -> Box<dyn Fertiliser> {
        match request {
            FertiliserRequest::Organic => Box::new(OrganicFertiliser),
            other => any_tree_fertiliser(other),
        }
    }
}

impl Tree for Pine {
    fn name(&self) -> &'static str {
        "pine"
    }
}
