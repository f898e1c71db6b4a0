use std::io::Write;

use creational_common::DemoError;
use tracing::debug;

use super::appliances::{Fridge, WashingMachine};
use super::factory::{ApplianceFactory, Brand};

/// A house owns one washing machine and one fridge, both built by the same
/// factory.
pub struct House {
    brand: Brand,
    washing_machine: Box<dyn WashingMachine>,
    fridge: Box<dyn Fridge>,
}

impl House {
    /// Furnishes a house from `factory`. The washing machine is built first.
    pub fn new(factory: &dyn ApplianceFactory) -> Self {
        let brand = factory.brand();
        debug!(%brand, "furnishing house");
        Self {
            brand,
            washing_machine: factory.washing_machine(),
            fridge: factory.fridge(),
        }
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// Writes one line per appliance: washing machine, then fridge.
    ///
    /// Calling this repeatedly writes the same two lines each time.
    pub fn show_appliances(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        writeln!(out, "{}", self.washing_machine.describe())?;
        writeln!(out, "{}", self.fridge.describe())?;
        Ok(())
    }
}
