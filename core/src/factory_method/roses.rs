use std::io::Write;

use creational_common::DemoError;
use tracing::debug;

pub trait Rose {
    fn color(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RedRose;

#[derive(Debug, Clone, Copy, Default)]
pub struct YellowRose;

impl Rose for RedRose {
    fn color(&self) -> &'static str {
        "I am a Red rose"
    }
}

impl Rose for YellowRose {
    fn color(&self) -> &'static str {
        "I am a Yellow rose"
    }
}

/// A garden that grows exactly one rose.
///
/// `create_rose` is the factory method: every garden type overrides it, and
/// the rose it plants is decided by which garden it is called on.
pub trait RoseGarden {
    /// Plants this garden's rose, replacing any previous one.
    fn create_rose(&mut self);

    /// The planted rose, or `None` until [`RoseGarden::create_rose`] runs.
    fn rose(&self) -> Option<&dyn Rose>;

    /// Writes the planted rose's colour line.
    fn say_color(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        let rose = self.rose().ok_or(DemoError::NothingPlanted)?;
        writeln!(out, "{}", rose.color())?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RedRoseGarden {
    rose: Option<RedRose>,
}

#[derive(Debug, Default)]
pub struct YellowRoseGarden {
    rose: Option<YellowRose>,
}

impl RedRoseGarden {
    pub fn new() -> Self {
        Self::default()
    }
}

impl YellowRoseGarden {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoseGarden for RedRoseGarden {
    fn create_rose(&mut self) {
        debug!("planting red rose");
        self.rose = Some(RedRose);
    }

    fn rose(&self) -> Option<&dyn Rose> {
        self.rose.as_ref().map(|r| r as &dyn Rose)
    }
}

impl RoseGarden for YellowRoseGarden {
    fn create_rose(&mut self) {
        debug!("planting yellow rose");
        self.rose = Some(YellowRose);
    }

    fn rose(&self) -> Option<&dyn Rose> {
        self.rose.as_ref().map(|r| r as &dyn Rose)
    }
}
