//! # Scripted Demonstrations
//!
//! Each function here is one of the console runs the binaries offer. They
//! write the demo text to `out` and nothing else; progress goes through
//! `tracing`.

use std::io::Write;

use creational_common::{Config, DemoError};
use tracing::info;

use crate::abstract_factory::{Brand, Editor, House, Language};
use crate::factory_method::flowers::{RoseBush, Tulip};
use crate::factory_method::shrubs::{Hybiscus, Privet};
use crate::factory_method::trees::{Fir, Pine};
use crate::factory_method::{
    FertiliserRequest, Flower, RedRoseGarden, RoseGarden, Shrub, Tree, YellowRoseGarden,
};

/// Builds one house per brand, in the given order, and shows its appliances.
///
/// A blank line follows each house unless `cfg.no_separator` is set.
pub fn houses(brands: &[Brand], cfg: &Config, out: &mut dyn Write) -> Result<(), DemoError> {
    info!(count = brands.len(), "touring houses");
    for brand in brands {
        let factory = brand.factory();
        let house = House::new(factory.as_ref());
        house.show_appliances(out)?;
        if !cfg.no_separator {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Opens a PHP, an HTML and a JS editor and lets each scan then parse.
///
/// Editors are separated by a blank line; there is none after the last.
pub fn editors(cfg: &Config, out: &mut dyn Write) -> Result<(), DemoError> {
    info!("opening editors");
    for (idx, language) in Language::DEMO_ORDER.iter().enumerate() {
        if idx > 0 && !cfg.no_separator {
            writeln!(out)?;
        }
        let editor = Editor::new(language.factory().as_ref());
        editor.scan(out)?;
        editor.parse(out)?;
    }
    Ok(())
}

/// Plants a yellow garden, then a red one, and lets each say its colour.
pub fn roses(out: &mut dyn Write) -> Result<(), DemoError> {
    info!("planting rose gardens");
    let gardens: Vec<Box<dyn RoseGarden>> = vec![
        Box::new(YellowRoseGarden::new()),
        Box::new(RedRoseGarden::new()),
    ];
    for mut garden in gardens {
        garden.create_rose();
        garden.say_color(out)?;
    }
    Ok(())
}

pub fn flowers(out: &mut dyn Write) -> Result<(), DemoError> {
    info!("planting flowers");
    writeln!(out, "Variation 1: every flower has a flower specific fertiliser")?;
    let flowers: Vec<Box<dyn Flower>> = vec![
        Box::new(Tulip),
        Box::new(RoseBush),
        Box::new(Tulip),
        Box::new(RoseBush),
    ];
    for flower in &flowers {
        flower.plant().show(out)?;
    }
    Ok(())
}

pub fn shrubs(out: &mut dyn Write) -> Result<(), DemoError> {
    info!("planting shrubs");
    writeln!(out, "Variation 2: Some shrubs can use general fertiliser")?;
    let shrubs: Vec<Box<dyn Shrub>> = vec![Box::new(Hybiscus), Box::new(Privet)];
    for shrub in &shrubs {
        shrub.plant().show(out)?;
    }
    Ok(())
}

pub fn trees(out: &mut dyn Write) -> Result<(), DemoError> {
    info!("planting trees");
    writeln!(
        out,
        "Variation 3: Parameterisation allows fertilisers to be 'mixed and matched'"
    )?;
    let requests = ["fir", "pine", "organic", "any"];
    let trees: [&dyn Tree; 2] = [&Fir, &Pine];
    for tree in trees {
        for request in requests {
            tree.plant(&FertiliserRequest::from(request)).show(out)?;
        }
    }
    Ok(())
}

/// Runs all three fertiliser variations back to back, a blank line before the
/// second and third.
pub fn variations(out: &mut dyn Write) -> Result<(), DemoError> {
    flowers(out)?;
    writeln!(out)?;
    shrubs(out)?;
    writeln!(out)?;
    trees(out)
}
