use std::io::Write;

use creational_common::config::Config;
use creational_core::abstract_factory::Brand;
use creational_core::demos;

pub fn houses(brands: &[Brand], cfg: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    demos::houses(brands, cfg, out)?;
    out.flush()?;
    Ok(())
}

pub fn editors(cfg: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    demos::editors(cfg, out)?;
    out.flush()?;
    Ok(())
}
