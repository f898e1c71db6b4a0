use std::io::Write;

use creational_core::demos;

use crate::commands::FactoryMethodDemo;

pub fn run(demo: FactoryMethodDemo, out: &mut dyn Write) -> anyhow::Result<()> {
    match demo {
        FactoryMethodDemo::Roses => demos::roses(out)?,
        FactoryMethodDemo::Flowers => demos::flowers(out)?,
        FactoryMethodDemo::Shrubs => demos::shrubs(out)?,
        FactoryMethodDemo::Trees => demos::trees(out)?,
        FactoryMethodDemo::Variations => demos::variations(out)?,
    }
    out.flush()?;
    Ok(())
}
