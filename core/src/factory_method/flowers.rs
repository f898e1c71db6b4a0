//! Abstract creator: every flower must say which fertiliser it needs.

use tracing::debug;

use super::fertiliser::{Fertiliser, RoseFertiliser, TulipFertiliser};
use super::planting::Planting;

pub trait Flower {
    fn name(&self) -> &'static str;

    /// No default; each flower has its own fertiliser.
    fn create_fertiliser(&self) -> Box<dyn Fertiliser>;

    fn plant(&self) -> Planting {
        debug!(flower = self.name(), "creating fertiliser");
        Planting::new(self.name(), self.create_fertiliser())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoseBush;

#[derive(Debug, Clone, Copy, Default)]
pub struct Tulip;

impl Flower for RoseBush {
    fn name(&self) -> &'static str {
        "rose"
    }

    fn create_fertiliser(&self) -> Box<dyn Fertiliser> {
        Box::new(RoseFertiliser)
    }
}

impl Flower for Tulip {
    fn name(&self) -> &'static str {
        "tulip"
    }

    fn create_fertiliser(&self) -> Box<dyn Fertiliser> {
        Box::new(TulipFertiliser)
    }
}
