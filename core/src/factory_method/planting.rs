use std::fmt;
use std::io::Write;

use creational_common::DemoError;

use super::fertiliser::Fertiliser;

/// A plant paired with the fertiliser its factory method produced.
///
/// Owning the fertiliser here means a planting can only be shown once the
/// creation step has run.
pub struct Planting {
    name: &'static str,
    fertiliser: Box<dyn Fertiliser>,
}

impl Planting {
    pub fn new(name: &'static str, fertiliser: Box<dyn Fertiliser>) -> Self {
        Self { name, fertiliser }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fertiliser(&self) -> &dyn Fertiliser {
        self.fertiliser.as_ref()
    }

    pub fn show(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        writeln!(out, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for Planting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I am a {} and I use {}", self.name, self.fertiliser.whoami())
    }
}

impl fmt::Debug for Planting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Planting")
            .field("name", &self.name)
            .field("fertiliser", &self.fertiliser.whoami())
            .finish()
    }
}
